//! Login handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use super::models::{LoginRequest, LoginResponse};
use crate::error::{AppError, Result};
use crate::state::{AppState, SharedState};

/// Creates routes for authentication
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/login", post(handle_login))
}

/// Endpoint: POST /api/login
///
/// A missing or unparseable body counts as blank credentials.
async fn handle_login(
    State(state): State<SharedState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    login(&state, &request).map(Json)
}

/// Validates credentials and opens (or reuses) the user's session.
///
/// Blank fields are rejected before any credential comparison.
pub fn login(state: &AppState, request: &LoginRequest) -> Result<LoginResponse> {
    let (username, password) = request
        .credentials()
        .ok_or_else(|| AppError::bad_request("username and password are required"))?;

    let Some(user) = state.users.authenticate(username, password) else {
        tracing::warn!(%username, "Rejected login");
        return Err(AppError::unauthorized("invalid username or password"));
    };

    let access_token = state.sessions.open(user);
    tracing::info!(username = %user.username, "User logged in");

    Ok(LoginResponse {
        username: user.username.clone(),
        access_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            username: username.map(String::from),
            password: password.map(String::from),
        }
    }

    #[test]
    fn test_login_returns_preset_token() {
        let state = AppState::embedded().unwrap();
        let response = login(&state, &request(Some("greenlion235"), Some("waters"))).unwrap();
        assert_eq!(response.access_token, "123456");
        assert_eq!(response.username, "greenlion235");
    }

    #[test]
    fn test_blank_fields_short_circuit_to_bad_request() {
        let state = AppState::embedded().unwrap();
        for (u, p) in [
            (Some(""), Some("waters")),
            (Some("greenlion235"), Some("")),
            (None, Some("waters")),
            (Some("greenlion235"), None),
            (Some("  "), Some("nope")),
        ] {
            let err = login(&state, &request(u, p)).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{u:?}/{p:?}");
        }
    }

    #[test]
    fn test_wrong_credentials_are_unauthorized() {
        let state = AppState::embedded().unwrap();
        let err = login(&state, &request(Some("greenlion23"), Some("waters"))).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_user_without_preset_token_gets_stable_token() {
        let state = AppState::embedded().unwrap();
        let first = login(&state, &request(Some("blueswan548"), Some("ocean"))).unwrap();
        let second = login(&state, &request(Some("blueswan548"), Some("ocean"))).unwrap();

        assert!(!first.access_token.is_empty());
        assert_eq!(first.access_token, second.access_token);
        assert!(state.sessions.cart(Some(first.access_token.as_str())).unwrap().is_empty());
    }
}
