use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use contracts::system::auth::{LoginFailure, LoginRequest, LoginResponse};

use crate::state::AppState;

/// POST /api/system/auth/login
///
/// Checks the credentials and returns the profile. No token is issued;
/// the browser keeps the profile in memory until logout or reload.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<LoginFailure>)> {
    match state
        .authenticator
        .authenticate(request.email.trim(), &request.password)
        .await
    {
        Ok(user) => Ok(Json(LoginResponse { user })),
        Err(reason) => Err((StatusCode::UNAUTHORIZED, Json(LoginFailure::from(reason)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use contracts::system::auth::{AuthError, UserRole};

    fn request(email: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            email: email.into(),
            password: password.into(),
        })
    }

    #[tokio::test]
    async fn test_login_returns_profile() {
        let state = AppState::new(Config::default());
        let Json(response) = login(State(state), request("admin@kws.go.ke", "admin123"))
            .await
            .unwrap();
        assert_eq!(response.user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn test_rejections_are_401_with_reason() {
        let state = AppState::new(Config::default());
        let (status, Json(body)) = login(State(state.clone()), request("admin@gmail.com", "admin123"))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Only @kws.go.ke email addresses are allowed.");

        let (_, Json(body)) = login(State(state), request("user@kws.go.ke", "nope"))
            .await
            .unwrap_err();
        assert_eq!(body.reason, AuthError::InvalidCredentials);
    }
}
