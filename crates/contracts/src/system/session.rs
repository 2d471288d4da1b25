//! In-memory session gate.
//!
//! ```text
//! Anonymous --submit--> Authenticating --resolve(Ok)--> Authenticated
//!     ^                        |                             |
//!     +------resolve(Err)------+                             |
//!     +-------------------------logout-----------------------+
//! ```
//!
//! Nothing here survives a reload and nothing is issued to the client.

use super::auth::{AuthError, UserProfile, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous { error: Option<String> },
    Authenticating { email: String },
    Authenticated { profile: UserProfile },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Anonymous { error: None }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a credential check. Only valid from `Anonymous`; returns
    /// whether the transition happened.
    pub fn submit(&mut self, email: &str) -> bool {
        match self {
            SessionState::Anonymous { .. } => {
                *self = SessionState::Authenticating {
                    email: email.to_string(),
                };
                true
            }
            _ => false,
        }
    }

    /// Finish a credential check started by [`SessionState::submit`].
    pub fn resolve(&mut self, outcome: Result<UserProfile, AuthError>) -> bool {
        if !matches!(self, SessionState::Authenticating { .. }) {
            return false;
        }
        *self = match outcome {
            Ok(profile) => SessionState::Authenticated { profile },
            Err(err) => SessionState::Anonymous {
                error: Some(err.to_string()),
            },
        };
        true
    }

    pub fn logout(&mut self) -> bool {
        match self {
            SessionState::Authenticated { .. } => {
                *self = SessionState::default();
                true
            }
            _ => false,
        }
    }

    /// Hide the last login error.
    pub fn dismiss_error(&mut self) {
        if let SessionState::Anonymous { error } = self {
            *error = None;
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { profile } => Some(profile),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        matches!(self, SessionState::Authenticating { .. })
    }

    pub fn is_admin(&self) -> bool {
        self.user().map(|u| u.is_admin()).unwrap_or(false)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SessionState::Anonymous { error } => error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserProfile {
        UserProfile {
            email: "admin@kws.go.ke".into(),
            display_name: "Admin User".into(),
            role: UserRole::Admin,
            department: "Administration".into(),
        }
    }

    #[test]
    fn test_successful_login() {
        let mut session = SessionState::new();
        assert!(session.submit("admin@kws.go.ke"));
        assert!(session.is_authenticating());
        assert!(session.resolve(Ok(admin())));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(UserRole::Admin));
        assert!(session.is_admin());
    }

    #[test]
    fn test_failed_login_returns_to_anonymous_with_error() {
        let mut session = SessionState::new();
        session.submit("user@kws.go.ke");
        session.resolve(Err(AuthError::InvalidCredentials));
        assert!(!session.is_authenticated());
        assert_eq!(session.error(), Some("Invalid email or password."));

        session.dismiss_error();
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_logout() {
        let mut session = SessionState::Authenticated { profile: admin() };
        assert!(session.logout());
        assert_eq!(session, SessionState::Anonymous { error: None });
        assert!(!session.logout());
    }

    #[test]
    fn test_invalid_transitions_are_ignored() {
        let mut session = SessionState::new();
        assert!(!session.resolve(Ok(admin())));
        assert!(!session.is_authenticated());

        session.submit("a@kws.go.ke");
        assert!(!session.submit("b@kws.go.ke"));
        assert_eq!(
            session,
            SessionState::Authenticating {
                email: "a@kws.go.ke".into()
            }
        );
    }

    #[test]
    fn test_new_submit_clears_previous_error() {
        let mut session = SessionState::Anonymous {
            error: Some("Invalid email or password.".into()),
        };
        assert!(session.submit("admin@kws.go.ke"));
        assert_eq!(session.error(), None);
    }
}
