//! Employee pages behind the session gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::Form;
use uuid::Uuid;

use crate::api::middleware::CurrentUser;
use crate::api::{views, AppState};
use crate::config::EMPLOYEES_PATH;
use crate::domain::{Employee, EmployeeFields, EmployeeForm};
use crate::errors::PageError;

/// HTML employee routes
pub fn employee_page_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list).post(create))
        .route("/employees/new", get(new_form))
        .route("/employees/:id", post(update))
        .route("/employees/:id/edit", get(edit))
        .route("/employees/:id/delete", get(delete).post(delete))
}

/// Coerce form text, answering 400 with the route's message on failure.
fn form_fields(form: EmployeeForm, message: &'static str) -> Result<EmployeeFields, PageError> {
    form.into_fields().map_err(|e| {
        tracing::warn!(error = %e, "Rejected employee form");
        PageError::new(StatusCode::BAD_REQUEST, message)
    })
}

async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Html<String>, PageError> {
    let employees = state
        .employee_service
        .list()
        .await
        .map_err(PageError::from_app("Error retrieving employees"))?;

    Ok(Html(views::employee_list_page(&employees, &user.username)))
}

async fn new_form() -> Html<String> {
    Html(views::employee_form_page())
}

async fn create(
    State(state): State<AppState>,
    Form(form): Form<EmployeeForm>,
) -> Result<Redirect, PageError> {
    let fields = form_fields(form, "Error creating employee")?;

    state
        .employee_service
        .create(fields)
        .await
        .map_err(PageError::from_app("Error creating employee"))?;

    Ok(Redirect::to(EMPLOYEES_PATH))
}

/// Raw record as JSON, for client-side edit forms
async fn edit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, PageError> {
    state
        .employee_service
        .get(id)
        .await
        .map_err(PageError::from_app("Error retrieving employee"))?
        .map(Json)
        .ok_or_else(|| PageError::new(StatusCode::NOT_FOUND, "Employee not found"))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<EmployeeForm>,
) -> Result<Redirect, PageError> {
    let fields = form_fields(form, "Error updating employee")?;

    state
        .employee_service
        .update(id, fields)
        .await
        .map_err(PageError::from_app("Error updating employee"))?;

    Ok(Redirect::to(EMPLOYEES_PATH))
}

async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Redirect, PageError> {
    state
        .employee_service
        .delete(id)
        .await
        .map_err(PageError::from_app("Error deleting employee"))?;

    Ok(Redirect::to(EMPLOYEES_PATH))
}
