use async_trait::async_trait;

use contracts::system::auth::{AuthError, UserProfile, UserRole, DEFAULT_ALLOWED_DOMAIN};

/// Credential check behind the login endpoint. Either a profile or the
/// reason the attempt was refused; no token or session is created.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;
}

#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: UserRole,
    pub department: String,
}

impl Account {
    fn profile(&self) -> UserProfile {
        UserProfile {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
            department: self.department.clone(),
        }
    }
}

/// Fixed credential table kept in memory. The domain suffix is checked
/// before the table, so a foreign address never reveals whether it exists.
pub struct InMemoryAuthenticator {
    allowed_domain: String,
    accounts: Vec<Account>,
}

impl InMemoryAuthenticator {
    pub fn new(allowed_domain: impl Into<String>, accounts: Vec<Account>) -> Self {
        Self {
            allowed_domain: allowed_domain.into(),
            accounts,
        }
    }

    /// The two demo accounts, with addresses under `allowed_domain`.
    pub fn with_demo_accounts(allowed_domain: &str) -> Self {
        let address = |local: &str| format!("{local}{allowed_domain}");
        Self::new(
            allowed_domain,
            vec![
                Account {
                    email: address("admin"),
                    password: "admin123".into(),
                    display_name: "Admin User".into(),
                    role: UserRole::Admin,
                    department: "Administration".into(),
                },
                Account {
                    email: address("user"),
                    password: "user123".into(),
                    display_name: "Regular User".into(),
                    role: UserRole::User,
                    department: "Conservation".into(),
                },
            ],
        )
    }

    pub fn allowed_domain(&self) -> &str {
        &self.allowed_domain
    }
}

impl Default for InMemoryAuthenticator {
    fn default() -> Self {
        Self::with_demo_accounts(DEFAULT_ALLOWED_DOMAIN)
    }
}

#[async_trait]
impl Authenticator for InMemoryAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        if !email.ends_with(&self.allowed_domain) {
            tracing::info!("Login refused for {}: outside {}", email, self.allowed_domain);
            return Err(AuthError::InvalidDomain {
                domain: self.allowed_domain.clone(),
            });
        }
        match self
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
        {
            Some(account) => {
                tracing::info!("User {} signed in as {}", email, account.role.as_str());
                Ok(account.profile())
            }
            None => {
                tracing::info!("Login refused for {}: bad credentials", email);
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_login() {
        let auth = InMemoryAuthenticator::default();
        let profile = auth.authenticate("admin@kws.go.ke", "admin123").await.unwrap();
        assert_eq!(profile.display_name, "Admin User");
        assert_eq!(profile.role, UserRole::Admin);
        assert_eq!(profile.department, "Administration");
    }

    #[tokio::test]
    async fn test_user_login() {
        let auth = InMemoryAuthenticator::default();
        let profile = auth.authenticate("user@kws.go.ke", "user123").await.unwrap();
        assert_eq!(profile.role, UserRole::User);
        assert_eq!(profile.department, "Conservation");
    }

    #[tokio::test]
    async fn test_domain_is_checked_first() {
        let auth = InMemoryAuthenticator::default();
        let err = auth.authenticate("admin@gmail.com", "admin123").await.unwrap_err();
        assert_eq!(err.to_string(), "Only @kws.go.ke email addresses are allowed.");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user() {
        let auth = InMemoryAuthenticator::default();
        let err = auth.authenticate("admin@kws.go.ke", "wrong").await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        let err = auth.authenticate("nobody@kws.go.ke", "admin123").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password.");
    }

    #[tokio::test]
    async fn test_configured_domain() {
        let auth = InMemoryAuthenticator::with_demo_accounts("@park.example");
        assert!(auth.authenticate("admin@park.example", "admin123").await.is_ok());
        let err = auth.authenticate("admin@kws.go.ke", "admin123").await.unwrap_err();
        assert_eq!(
            err,
            AuthError::InvalidDomain {
                domain: "@park.example".into()
            }
        );
    }
}
