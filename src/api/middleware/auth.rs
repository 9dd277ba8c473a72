//! Session gate middleware.
//!
//! Resolves the `sid` cookie through the session authority and injects a
//! [`CurrentUser`] into the request extensions. The HTML variant redirects
//! anonymous requests to the login form; the JSON variant answers 401.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::{LOGIN_PATH, SESSION_COOKIE_NAME};
use crate::domain::SessionIdentity;
use crate::errors::AppError;

/// Authenticated user resolved from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
}

impl From<SessionIdentity> for CurrentUser {
    fn from(identity: SessionIdentity) -> Self {
        Self {
            id: identity.user_id,
            username: identity.username,
        }
    }
}

/// Session token carried by the request, if any.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Look up the caller. Store failures count as "no session".
async fn resolve(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let token = session_token(jar)?;

    match state.session_authority.validate(&token).await {
        Ok(identity) => identity.map(CurrentUser::from),
        Err(e) => {
            tracing::error!(error = ?e, "Session lookup failed");
            None
        }
    }
}

/// Gate for HTML routes: 303 to the login form without a live session.
pub async fn session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match resolve(&state, &jar).await {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            tracing::debug!(path = %request.uri().path(), "Anonymous request redirected to login");
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// Gate for the JSON API: 401 without a live session.
pub async fn api_session_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve(&state, &jar).await.ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
