pub mod auth {
    use email_address::EmailAddress;
    use tracing::trace;

    pub const MSG_NAME_REQUIRED: &'static str = "Please enter your name";
    pub const MSG_EMAIL_INVALID: &'static str = "Please enter a valid email";

    pub fn process_name<S: AsRef<str>>(name: S) -> Result<String, String> {
        let name = name.as_ref().trim().to_string();
        if name.is_empty() {
            trace!("name rejected: empty");
            return Err(MSG_NAME_REQUIRED.to_string());
        }
        Ok(name)
    }

    /// An empty email counts as absent and passes, the way an optional
    /// schema field does.
    pub fn process_email<S: AsRef<str>>(email: S) -> Result<String, String> {
        let email = email.as_ref().trim().to_string();
        if email.is_empty() {
            return Ok(email);
        }
        if !EmailAddress::is_valid(&email) {
            trace!("email rejected: {email}");
            return Err(MSG_EMAIL_INVALID.to_string());
        }
        Ok(email)
    }

    /// The whole form schema in one pass. The email rule only applies in
    /// sign-up mode; in login mode the field is not rendered and a stale
    /// value must not block submission.
    pub fn form_errors(name: &str, email: &str, sign_up: bool) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(err) = process_name(name) {
            errors.push(err);
        }
        if sign_up {
            if let Err(err) = process_email(email) {
                errors.push(err);
            }
        }
        errors
    }

    #[cfg(test)]
    mod auth_tests {
        use crate::auth::{
            MSG_EMAIL_INVALID, MSG_NAME_REQUIRED, form_errors, process_email, process_name,
        };
        use pretty_assertions::assert_eq;
        use test_log::test;

        #[test]
        fn test_process_name() {
            assert_eq!(process_name("alice"), Ok("alice".to_string()));
            assert_eq!(process_name(" alice "), Ok("alice".to_string()));
            assert_eq!(process_name(""), Err(MSG_NAME_REQUIRED.to_string()));
            assert_eq!(process_name("   "), Err(MSG_NAME_REQUIRED.to_string()));
        }

        #[test]
        fn test_process_email() {
            assert!(process_email("alice@mail.com").is_ok());
            assert!(process_email("").is_ok());
            assert_eq!(
                process_email("not-an-email"),
                Err(MSG_EMAIL_INVALID.to_string())
            );
            assert_eq!(
                process_email("@mail.com"),
                Err(MSG_EMAIL_INVALID.to_string())
            );
        }

        #[test]
        fn test_empty_name_always_blocks() {
            assert_eq!(
                form_errors("", "", false),
                vec![MSG_NAME_REQUIRED.to_string()]
            );
            assert_eq!(
                form_errors("", "", true),
                vec![MSG_NAME_REQUIRED.to_string()]
            );
        }

        #[test]
        fn test_login_ignores_email() {
            assert!(form_errors("alice", "not-an-email", false).is_empty());
            assert!(form_errors("alice", "", false).is_empty());
        }

        #[test]
        fn test_sign_up_validates_email() {
            assert_eq!(
                form_errors("bob", "not-an-email", true),
                vec![MSG_EMAIL_INVALID.to_string()]
            );
            assert!(form_errors("bob", "bob@mail.com", true).is_empty());
            assert!(form_errors("bob", "", true).is_empty());
            assert_eq!(
                form_errors("", "not-an-email", true),
                vec![
                    MSG_NAME_REQUIRED.to_string(),
                    MSG_EMAIL_INVALID.to_string()
                ]
            );
        }
    }
}

pub mod fe_router {
    pub mod home {
        pub const PATH: &'static str = "/";
    }

    pub mod authentication {
        pub const PATH: &'static str = "/authentication";
    }
}
