//! Session middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::warn;

use crate::{AppState, error::ApiError};
use aerodesk_core::auth::UserType;
use aerodesk_shared::{AppError, Claims, JwtError, types::UserId};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Finds the session token: the session cookie first, then a Bearer header.
fn session_token(jar: &CookieJar, headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    jar.get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .or_else(|| {
            headers
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(extract_bearer_token)
                .map(str::to_string)
        })
}

/// Session middleware that validates the session token.
///
/// Stores the claims in request extensions for handlers and guards.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = session_token(&jar, request.headers(), &state.session.cookie_name)
        .ok_or_else(ApiError::missing_session)?;

    match state.jwt_service.validate_token(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(JwtError::Expired) => Err(ApiError::with_code(
            AppError::Unauthorized("Session has expired".to_string()),
            "SESSION_EXPIRED",
        )),
        Err(_) => Err(ApiError::invalid_session("Invalid or malformed session")),
    }
}

/// Rejects sessions whose user type may not view reports.
///
/// Must run after [`session_middleware`].
pub async fn admin_guard(request: Request, next: Next) -> Result<Response, ApiError> {
    let claims = request
        .extensions()
        .get::<Claims>()
        .ok_or_else(ApiError::missing_session)?;

    let allowed = claims
        .role
        .parse::<UserType>()
        .is_ok_and(UserType::can_view_reports);

    if !allowed {
        warn!(user_id = %claims.user_id(), role = %claims.role, "Report access denied");
        return Err(AppError::Forbidden("Admin access required".to_string()).into());
    }

    Ok(next.run(request).await)
}

/// Extractor for authenticated session claims.
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     let user_id = user.user_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the user ID from the claims.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.0.user_id()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(ApiError::missing_session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum_extra::extract::cookie::Cookie;

    #[test]
    fn test_cookie_preferred_over_bearer() {
        let jar = CookieJar::new().add(Cookie::new("aerodesk_session", "from-cookie"));
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));

        assert_eq!(
            session_token(&jar, &headers, "aerodesk_session").as_deref(),
            Some("from-cookie")
        );
    }

    #[test]
    fn test_bearer_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer from-header"));

        assert_eq!(
            session_token(&CookieJar::new(), &headers, "aerodesk_session").as_deref(),
            Some("from-header")
        );
        assert_eq!(
            session_token(&CookieJar::new(), &HeaderMap::new(), "aerodesk_session"),
            None
        );
    }
}
