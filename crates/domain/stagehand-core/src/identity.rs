use serde::{Deserialize, Serialize};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Email and password are required.";
pub const SIGNUP_REQUIRED_MESSAGE: &str = "All fields are required.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(LOGIN_REQUIRED_MESSAGE);
        }
        Ok(())
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SignupRequest {
    /// Trims every field and rejects the request if any ends up empty.
    pub fn normalized(&self) -> Result<SignupRequest, &'static str> {
        let trimmed = SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        };
        if trimmed.name.is_empty() || trimmed.email.is_empty() || trimmed.password.is_empty() {
            return Err(SIGNUP_REQUIRED_MESSAGE);
        }
        Ok(trimmed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("there")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: UserProfile,
}

/// Identity of the signed-in user, alive from login/signup until logout.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub token: String,
    pub user: UserProfile,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

impl From<AuthResponse> for SessionContext {
    fn from(resp: AuthResponse) -> Self {
        Self {
            token: resp.token,
            user: resp.user,
        }
    }
}

/// Rejection payload of the identity service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentityErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl IdentityErrorBody {
    pub fn login_message(&self) -> String {
        non_blank(&self.error)
            .unwrap_or(LOGIN_FAILED_MESSAGE)
            .to_string()
    }

    pub fn signup_message(&self) -> String {
        non_blank(&self.error)
            .or(non_blank(&self.message))
            .unwrap_or(SIGNUP_FAILED_MESSAGE)
            .to_string()
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_trims_and_requires_every_field() {
        let req = SignupRequest {
            name: "  Ada ".into(),
            email: " ada@example.com ".into(),
            password: " secret ".into(),
        };
        let normalized = req.normalized().unwrap();
        assert_eq!(normalized.name, "Ada");
        assert_eq!(normalized.password, "secret");

        let blank = SignupRequest {
            name: "   ".into(),
            ..normalized
        };
        assert_eq!(blank.normalized(), Err(SIGNUP_REQUIRED_MESSAGE));
    }

    #[test]
    fn login_requires_email_and_password() {
        assert_eq!(
            Credentials::default().validate(),
            Err(LOGIN_REQUIRED_MESSAGE)
        );
        let ok = Credentials {
            email: "a@b.c".into(),
            password: "pw".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn rejection_messages_follow_per_operation_chain() {
        let body = IdentityErrorBody {
            error: None,
            message: Some("User already exists".into()),
        };
        assert_eq!(body.login_message(), LOGIN_FAILED_MESSAGE);
        assert_eq!(body.signup_message(), "User already exists");

        let body = IdentityErrorBody {
            error: Some("Invalid credentials".into()),
            message: Some("ignored".into()),
        };
        assert_eq!(body.login_message(), "Invalid credentials");
        assert_eq!(body.signup_message(), "Invalid credentials");

        assert_eq!(
            IdentityErrorBody::default().signup_message(),
            SIGNUP_FAILED_MESSAGE
        );
    }

    #[test]
    fn auth_response_accepts_mongo_style_ids() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{"token":"t0k","user":{"_id":"42","name":"Ada","email":"ada@example.com"}}"#,
        )
        .unwrap();
        let session = SessionContext::from(resp);
        assert_eq!(session.user.id.as_deref(), Some("42"));
        assert_eq!(session.user.display_name(), "Ada");
        assert!(!format!("{session:?}").contains("t0k"));
    }
}
