//! Outbound notification emails for user creation.

use super::email_job::EmailJob;
use crate::domain::User;

/// Welcome email sent to a freshly created user
pub fn account_created(user: &User) -> EmailJob {
    EmailJob::new(
        &user.email,
        "Your account has been created",
        format!(
            "Hello {},\n\n\
             Your account has been created with the email address {}.\n\n\
             You can now log in and start using the API.",
            user.name, user.email
        ),
    )
}

/// Alert sent to an administrator when a new user registers
pub fn new_user_registered(admin: &User, user: &User) -> EmailJob {
    EmailJob::new(
        &admin.email,
        "New user registered",
        format!(
            "A new user has been created:\n\n\
             Name: {}\n\
             Email: {}\n\
             Created at: {}",
            user.name,
            user.email,
            user.created_at.format("%Y-%m-%d %H:%M:%S")
        ),
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::Role;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "new@example.com".to_string(),
            password_hash: "hashed".to_string(),
            name: "New User".to_string(),
            role: Role::User,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn account_created_addresses_the_new_user() {
        let user = sample_user();
        let mail = account_created(&user);

        assert_eq!(mail.to, "new@example.com");
        assert!(mail.body.contains("New User"));
    }

    #[test]
    fn admin_alert_addresses_the_admin_and_describes_the_user() {
        let mut admin = sample_user();
        admin.email = "admin@example.com".to_string();
        admin.role = Role::Administrator;
        let user = sample_user();

        let mail = new_user_registered(&admin, &user);

        assert_eq!(mail.to, "admin@example.com");
        assert!(mail.body.contains(&user.email));
        assert!(mail.body.contains(&user.name));
    }
}
