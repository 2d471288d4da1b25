use serde::{Deserialize, Serialize};

/// Email suffix accepted by the login form unless configured otherwise.
pub const DEFAULT_ALLOWED_DOMAIN: &str = "@kws.go.ke";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub department: String,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
}

/// 401 body: the user-facing message plus the machine-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFailure {
    pub error: String,
    pub reason: AuthError,
}

impl From<AuthError> for LoginFailure {
    fn from(reason: AuthError) -> Self {
        Self {
            error: reason.to_string(),
            reason,
        }
    }
}

/// Why a login attempt was rejected. Shown as a single dismissible
/// message on the login form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum AuthError {
    #[error("Only {domain} email addresses are allowed.")]
    InvalidDomain { domain: String },

    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// The login request never reached a verdict (network, server error).
    #[error("Login failed: {message}")]
    Unavailable { message: String },
}
