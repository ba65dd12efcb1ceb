//! Authentication routes for login, logout, and the current session.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use tracing::{error, info};

use crate::{AppState, error::ApiError, middleware::AuthUser};
use aerodesk_core::auth::{PasswordError, check_credentials};
use aerodesk_db::UserRepository;
use aerodesk_shared::{AppError, SessionConfig, auth::LoginRequest};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Creates the auth routes that need a session (session middleware applied externally).
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(me))
}

/// Session cookie that lives as long as the token inside it.
fn session_cookie(config: &SessionConfig, token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

fn login_failed() -> ApiError {
    AppError::Internal("An error occurred during login".to_string()).into()
}

/// POST /auth/login - Verify credentials and start a session.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let user_repo = UserRepository::new((*state.db).clone());

    let user = user_repo.find_by_email(&payload.email).await.map_err(|e| {
        error!(error = %e, "Database error during login");
        login_failed()
    })?;

    let verified = check_credentials(
        &payload.password,
        user.as_ref().map(|u| u.password_hash.as_str()),
    );
    let user = match (verified, user) {
        (Ok(()), Some(user)) => user,
        (Err(e @ (PasswordError::InvalidHash | PasswordError::HashError(_))), _) => {
            error!(error = %e, "Password verification error");
            return Err(login_failed());
        }
        _ => {
            info!(email = %payload.email, "Failed login attempt");
            return Err(ApiError::with_code(
                AppError::Unauthorized("Invalid email or password".to_string()),
                "INVALID_CREDENTIALS",
            ));
        }
    };

    let info = user.to_user_info();
    let token = state
        .jwt_service
        .generate_session_token(info.id, &info.user_type)
        .map_err(|e| {
            error!(error = %e, "Failed to generate session token");
            login_failed()
        })?;

    info!(user_id = %info.id, user_type = %info.user_type, "User logged in");

    let jar = jar.add(session_cookie(
        &state.session,
        token,
        state.jwt_service.expires_in(),
    ));
    Ok((StatusCode::OK, jar, Json(info)).into_response())
}

/// POST /auth/logout - End the session by clearing the cookie.
async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let mut removal = Cookie::build((state.session.cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .build();
    removal.make_removal();

    // Added rather than removed so the browser is told even when no cookie came in
    (StatusCode::NO_CONTENT, jar.add(removal))
}

/// GET /auth/me - Return the session's user.
async fn me(State(state): State<AppState>, auth_user: AuthUser) -> Result<Response, ApiError> {
    let user_repo = UserRepository::new((*state.db).clone());

    match user_repo.find_by_id(auth_user.user_id()).await {
        Ok(Some(user)) => Ok((StatusCode::OK, Json(user.to_user_info())).into_response()),
        Ok(None) => Err(ApiError::invalid_session("Session user no longer exists")),
        Err(e) => {
            error!(error = %e, "Failed to load session user");
            Err(AppError::Internal(e.to_string()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&SessionConfig::default(), "token".to_string(), 3600);
        let header = cookie.to_string();

        assert!(header.starts_with("aerodesk_session=token"));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Path=/"));
        assert!(header.contains("Max-Age=3600"));
        assert!(!header.contains("Secure"));
    }
}
