use serde::{Deserialize, Serialize};

pub const PATH_LOGIN: &'static str = "/login";
pub const PATH_USERS: &'static str = "/users";
pub const PATH_AUTHORIZED: &'static str = "/authorized";
pub const PATH_LOGOUT: &'static str = "/logout";

/// JSON body of both authentication POSTs. Field names are part of the wire
/// contract with the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub name: String,
    pub email: String,
}

/// The user payload the server returns on a successful login, sign-up or
/// session check. Anything beyond `id` and `name` is the server's business.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

pub fn submit_path(sign_up: bool) -> &'static str {
    if sign_up { PATH_USERS } else { PATH_LOGIN }
}

#[cfg(test)]
mod auth_tests {
    use crate::auth::{Credentials, PATH_LOGIN, PATH_USERS, SessionUser, submit_path};
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_submit_path() {
        assert_eq!(submit_path(false), PATH_LOGIN);
        assert_eq!(submit_path(true), PATH_USERS);
    }

    #[test]
    fn test_credentials_encoding() {
        let creds = Credentials {
            name: "alice".to_string(),
            email: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&creds).unwrap(),
            r#"{"name":"alice","email":""}"#
        );
    }

    #[test]
    fn test_session_user_decoding() {
        let user: SessionUser = serde_json::from_str(r#"{"id":1,"name":"alice"}"#).unwrap();
        assert_eq!(
            user,
            SessionUser {
                id: 1,
                name: "alice".to_string(),
                email: None,
            }
        );

        let user: SessionUser = serde_json::from_str(
            r#"{"id":2,"name":"bob","email":"bob@mail.com","created_at":"2026-08-29"}"#,
        )
        .unwrap();
        assert_eq!(user.email.as_deref(), Some("bob@mail.com"));
    }
}
