use serde::{Deserialize, Serialize};

/// Account kind chosen at registration, stored in the user metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "paciente")]
    Patient,
    #[serde(rename = "profesional")]
    Professional,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Patient => write!(f, "paciente"),
            Role::Professional => write!(f, "profesional"),
        }
    }
}

/// Custom user data attached to the account by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(rename = "nombre")]
    pub full_name: String,
    pub role: Role,
    #[serde(rename = "licencia", skip_serializing_if = "Option::is_none", default)]
    pub license_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: UserMetadata,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub confirmation_sent_at: Option<String>,
    pub email_confirmed_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    pub user: User,
}

/// The signup endpoint answers with a session when the project auto-confirms
/// emails, and with the bare user while confirmation is pending.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(Session),
    User(User),
}

impl SignUpResponse {
    pub fn user(&self) -> &User {
        match self {
            Self::Session(session) => &session.user,
            Self::User(user) => user,
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

/// Error payload of the auth service. Its shape changed across versions of
/// the service, all of them are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub msg: Option<String>,
    pub message: Option<String>,
    pub error_description: Option<String>,
    pub error: Option<String>,
    pub error_code: Option<String>,
}

impl ErrorBody {
    /// The human readable message, by order of precedence.
    pub fn into_message(self) -> Option<String> {
        [self.msg, self.message, self.error_description, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_omits_license_when_absent() {
        let data = UserMetadata {
            full_name: "Ana".to_string(),
            role: Role::Patient,
            license_number: None,
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"nombre": "Ana", "role": "paciente"})
        );

        let data = UserMetadata {
            full_name: "Luis".to_string(),
            role: Role::Professional,
            license_number: Some("12345ABC".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"nombre": "Luis", "role": "profesional", "licencia": "12345ABC"})
        );
    }

    #[test]
    fn signup_response_shapes() {
        let res: SignUpResponse = serde_json::from_value(json!({
            "id": "8d5f7c1e",
            "email": "ana@x.com",
            "confirmation_sent_at": "2024-05-01T10:00:00Z",
            "identities": [],
        }))
        .unwrap();
        assert!(res.requires_confirmation());
        assert_eq!(res.user().email.as_deref(), Some("ana@x.com"));

        let res: SignUpResponse = serde_json::from_value(json!({
            "access_token": "at",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1714557600,
            "refresh_token": "rt",
            "user": {"id": "8d5f7c1e", "email": "ana@x.com"},
        }))
        .unwrap();
        assert!(!res.requires_confirmation());
        assert_eq!(res.user().id, "8d5f7c1e");
    }

    #[test]
    fn error_body_message_precedence() {
        let body: ErrorBody = serde_json::from_value(json!({
            "code": 422,
            "error_code": "user_already_exists",
            "msg": "User already registered",
        }))
        .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("User already registered"));

        let body: ErrorBody = serde_json::from_value(json!({
            "error": "invalid_request",
            "error_description": "Password should be at least 6 characters",
        }))
        .unwrap();
        assert_eq!(
            body.into_message().as_deref(),
            Some("Password should be at least 6 characters")
        );

        let body: ErrorBody = serde_json::from_value(json!({"msg": "  "})).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
