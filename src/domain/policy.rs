//! Edit-visibility policy for listed users.

use super::user::{Principal, Role, User};

/// Decide whether `actor` may edit `target`.
///
/// Pure and deterministic: administrators edit anyone, managers edit
/// plain users, everyone edits themselves, the unauthenticated edit
/// nothing. The match is exhaustive over the closed role enum so a new
/// role cannot silently inherit permissions.
pub fn can_edit(actor: Option<&Principal>, target: &User) -> bool {
    let Some(actor) = actor else {
        return false;
    };

    match actor.role {
        Role::Administrator => true,
        Role::Manager => target.role == Role::User,
        Role::User => actor.id == target.id,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn user_with_role(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            email: "target@example.com".to_string(),
            password_hash: "hashed".to_string(),
            name: "Target".to_string(),
            role,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn principal_with_role(role: Role) -> Principal {
        Principal {
            id: Uuid::new_v4(),
            email: "actor@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn unauthenticated_actor_can_never_edit() {
        for role in [Role::Administrator, Role::Manager, Role::User] {
            assert!(!can_edit(None, &user_with_role(role)));
        }
    }

    #[test]
    fn administrator_edits_any_target() {
        let admin = principal_with_role(Role::Administrator);
        for role in [Role::Administrator, Role::Manager, Role::User] {
            assert!(can_edit(Some(&admin), &user_with_role(role)));
        }
    }

    #[test]
    fn manager_edits_only_plain_users() {
        let manager = principal_with_role(Role::Manager);
        assert!(can_edit(Some(&manager), &user_with_role(Role::User)));
        assert!(!can_edit(Some(&manager), &user_with_role(Role::Manager)));
        assert!(!can_edit(Some(&manager), &user_with_role(Role::Administrator)));
    }

    #[test]
    fn plain_user_edits_only_itself() {
        let actor = principal_with_role(Role::User);

        let mut me = user_with_role(Role::User);
        me.id = actor.id;
        assert!(can_edit(Some(&actor), &me));

        let someone_else = user_with_role(Role::User);
        assert!(!can_edit(Some(&actor), &someone_else));
    }

    #[test]
    fn policy_is_stable_for_identical_inputs() {
        let manager = principal_with_role(Role::Manager);
        let target = user_with_role(Role::User);

        let first = can_edit(Some(&manager), &target);
        for _ in 0..10 {
            assert_eq!(first, can_edit(Some(&manager), &target));
        }
    }
}
