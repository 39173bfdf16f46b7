use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::Timestamp;

/// Global role assignments for an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err("unknown role"),
        }
    }
}

/// Successful authentication payload returned by login, register and
/// refresh. The access token lives in memory only; it is never written
/// to durable storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    /// Identifier of the authenticated account.
    pub id: uuid::Uuid,

    /// Short-lived bearer token authorizing API calls.
    pub access_token: String,

    /// Role granted to this session.
    pub role: Role,

    /// Authorization scheme, `Bearer` for this backend.
    pub auth_type: String,
}

/// The signed-in account's own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// Unique identifier for the account.
    pub id: uuid::Uuid,

    /// The account holder's first name.
    pub first_name: String,

    /// The account holder's last name.
    pub last_name: String,

    /// The account's email address.
    pub email: String,
}

/// One row of the admin account listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: uuid::Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub email: String,
    pub last_login: Timestamp,
    pub created_at: Timestamp,
}

/// Form-encoded login body. The backend authenticates with the OAuth2
/// password flow, so the email travels in the `username` field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Request to update the account holder's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameUpdateRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Request to change the account's email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailUpdateRequest {
    pub email: String,
}

/// Request to rotate the account password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordUpdateRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Acknowledgement body for a password rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordUpdateAck {
    pub message: String,
}

/// Logout body. The access token is included so the server can revoke
/// it alongside the refresh cookie; it may be absent when the session
/// already expired locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn role_roundtrip() {
        for (text, role) in [("user", Role::User), ("admin", Role::Admin)] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn role_wire_format_is_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Role::User);
    }

    #[test]
    fn auth_session_deserializes_backend_payload() {
        let json = r#"{
            "id": "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "access_token": "eyJhbGciOi.payload.sig",
            "role": "admin",
            "auth_type": "Bearer"
        }"#;

        let session: AuthSession = serde_json::from_str(json).unwrap();
        assert_eq!(
            session.id,
            Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap()
        );
        assert_eq!(session.access_token, "eyJhbGciOi.payload.sig");
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.auth_type, "Bearer");
    }

    #[test]
    fn logout_request_omits_absent_token() {
        let without = LogoutRequest { access_token: None };
        assert_eq!(serde_json::to_string(&without).unwrap(), "{}");

        let with = LogoutRequest {
            access_token: Some("tok".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&with).unwrap(),
            r#"{"access_token":"tok"}"#
        );
    }

    #[test]
    fn login_form_uses_username_field() {
        let form = LoginForm {
            username: "reader@example.com".to_string(),
            password: "hunter2hunter2!A".to_string(),
        };
        let encoded = serde_json::to_value(&form).unwrap();
        assert!(encoded.get("username").is_some());
        assert!(encoded.get("email").is_none());
    }

    #[test]
    fn current_user_serialization_roundtrip() {
        let user = CurrentUser {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let back: CurrentUser = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
