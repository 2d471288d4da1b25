use contracts::system::auth::{AuthError, LoginFailure, LoginRequest, LoginResponse, UserProfile};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

fn unavailable(message: impl Into<String>) -> AuthError {
    AuthError::Unavailable {
        message: message.into(),
    }
}

/// Reason behind a non-2xx login response. A 401 carries a
/// [`LoginFailure`]; anything else means no verdict was reached.
pub fn failure_reason(status: u16, body: &str) -> AuthError {
    if status == 401 {
        if let Ok(failure) = serde_json::from_str::<LoginFailure>(body) {
            return failure.reason;
        }
    }
    unavailable(format!("server returned {}", status))
}

/// Check credentials against the backend.
pub async fn login(email: String, password: String) -> Result<UserProfile, AuthError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| unavailable(format!("failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| unavailable(format!("failed to send request: {}", e)))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(failure_reason(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map(|r| r.user)
        .map_err(|e| unavailable(format!("failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_body_keeps_reason() {
        let body = serde_json::to_string(&LoginFailure::from(AuthError::InvalidCredentials)).unwrap();
        assert_eq!(failure_reason(401, &body), AuthError::InvalidCredentials);

        let body = serde_json::to_string(&LoginFailure::from(AuthError::InvalidDomain {
            domain: "@kws.go.ke".into(),
        }))
        .unwrap();
        assert_eq!(
            failure_reason(401, &body).to_string(),
            "Only @kws.go.ke email addresses are allowed."
        );
    }

    #[test]
    fn test_other_statuses_are_unavailable() {
        assert_eq!(
            failure_reason(500, "oops").to_string(),
            "Login failed: server returned 500"
        );
        assert!(matches!(
            failure_reason(401, "not json"),
            AuthError::Unavailable { .. }
        ));
    }
}
