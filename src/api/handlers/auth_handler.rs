//! Registration, login and logout pages.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::api::middleware::session_token;
use crate::api::{views, AppState};
use crate::config::{EMPLOYEES_PATH, LOGIN_PATH, SESSION_COOKIE_NAME};
use crate::errors::{AppError, PageError};

/// Username/password form shared by registration and login
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

/// Public routes: registration and login
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
}

/// Routes that need a session
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/logout", get(logout))
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

async fn register_form() -> Html<String> {
    Html(views::register_page())
}

async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, PageError> {
    state
        .credential_service
        .register(form.username, form.password)
        .await
        .map_err(PageError::from_app("Error registering user"))?;

    Ok(Redirect::to(LOGIN_PATH))
}

async fn login_form() -> Html<String> {
    Html(views::login_page())
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<(CookieJar, Redirect), PageError> {
    let session = state
        .session_authority
        .login(form.username, form.password)
        .await
        .map_err(|e| match e {
            AppError::NotFound => PageError::new(StatusCode::UNAUTHORIZED, "User not found"),
            AppError::InvalidCredentials => {
                PageError::new(StatusCode::UNAUTHORIZED, "Incorrect password")
            }
            other => PageError::internal("Error logging in", other),
        })?;

    let jar = jar.add(session_cookie(session.token, state.settings.cookie_secure));

    Ok((jar, Redirect::to(EMPLOYEES_PATH)))
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(token) = session_token(&jar) {
        match state.session_authority.logout(&token).await {
            Ok(()) => tracing::info!("User logged out"),
            Err(e) => tracing::error!(error = ?e, "Failed to destroy session"),
        }
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE_NAME, "")).path("/").build());

    (jar, Redirect::to(LOGIN_PATH))
}
