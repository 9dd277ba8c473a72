//! Shared fixtures for the integration tests.
//!
//! The router runs over in-memory repositories and the in-process session
//! store, so no database or Redis is needed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use tokio::sync::Mutex;
use uuid::Uuid;

use employee_portal::api::{create_router, AppState, HttpSettings};
use employee_portal::domain::{Credential, Employee, EmployeeChanges};
use employee_portal::errors::{AppError, AppResult};
use employee_portal::infra::{
    CredentialRepository, EmployeeRepository, MemorySessionStore, Persistence,
};
use employee_portal::services::Services;

pub const IDLE_SECONDS: u64 = 60;

#[derive(Default)]
pub struct InMemoryCredentials {
    rows: Mutex<Vec<Credential>>,
}

#[async_trait]
impl CredentialRepository for InMemoryCredentials {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Credential>> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|c| c.username == username).cloned())
    }

    async fn create(&self, username: String, password_hash: String) -> AppResult<Credential> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|c| c.username == username) {
            return Err(AppError::conflict("User"));
        }
        let credential = Credential::new(Uuid::new_v4(), username, password_hash);
        rows.push(credential.clone());
        Ok(credential)
    }
}

/// Employee store that counts every call made against it.
#[derive(Default)]
pub struct InMemoryEmployees {
    rows: Mutex<Vec<Employee>>,
    calls: AtomicUsize,
}

impl InMemoryEmployees {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn count(&self) -> usize {
        self.rows.lock().await.len()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployees {
    async fn create(&self, changes: EmployeeChanges) -> AppResult<Employee> {
        self.record_call();
        let employee = Employee::create(Uuid::new_v4(), changes);
        self.rows.lock().await.push(employee.clone());
        Ok(employee)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.record_call();
        Ok(self.rows.lock().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        self.record_call();
        Ok(self.rows.lock().await.iter().find(|e| e.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Option<Employee>> {
        self.record_call();
        let mut rows = self.rows.lock().await;
        Ok(rows.iter_mut().find(|e| e.id == id).map(|employee| {
            employee.apply(changes);
            employee.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.record_call();
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok(rows.len() < before)
    }
}

pub struct TestApp {
    pub router: Router,
    pub credentials: Arc<InMemoryCredentials>,
    pub employees: Arc<InMemoryEmployees>,
    pub sessions: Arc<MemorySessionStore>,
    pub services: Services,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(HttpSettings::default())
    }

    pub fn with_settings(settings: HttpSettings) -> Self {
        let credentials = Arc::new(InMemoryCredentials::default());
        let employees = Arc::new(InMemoryEmployees::default());
        let sessions = Arc::new(MemorySessionStore::new());

        let uow = Arc::new(Persistence::from_parts(credentials.clone(), employees.clone()));
        let services = Services::from_unit_of_work(uow, sessions.clone(), IDLE_SECONDS);
        let router = create_router(AppState::new(&services, sessions.clone(), settings));

        Self {
            router,
            credentials,
            employees,
            sessions,
            services,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        use tower::ServiceExt;

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Register and log in, returning the `sid=<token>` cookie pair.
    pub async fn sign_in(&self, username: &str, password: &str) -> String {
        let body = format!("username={}&password={}", username, password);
        self.send(form_request("/register", &body, None)).await;
        let response = self.send(form_request("/login", &body, None)).await;
        session_cookie(&response).expect("login sets a session cookie")
    }
}

pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

/// `sid=<token>` from a Set-Cookie header, if one was set with a value.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with("sid=") && pair.len() > "sid=".len())
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
