//! Employee REST API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::{Employee, EmployeeFields};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{EmployeeEnvelope, MessageResponse};

/// Create employee API routes
pub fn employee_api_routes() -> Router<AppState> {
    Router::new()
        .route("/employees/api", get(list_employees).post(create_employee))
        .route(
            "/employees/api/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/employees/api",
    tag = "Employees",
    request_body = EmployeeFields,
    responses(
        (status = 201, description = "Employee created", body = EmployeeEnvelope),
        (status = 400, description = "Malformed body or unknown field"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<EmployeeFields>,
) -> AppResult<(StatusCode, Json<EmployeeEnvelope>)> {
    let employee = state.employee_service.create(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(EmployeeEnvelope::new("Employee created", employee)),
    ))
}

/// List all employees in insertion order
#[utoipa::path(
    get,
    path = "/employees/api",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list().await?;
    Ok(Json(employees))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/employees/api/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Employee>> {
    let employee = state.employee_service.get(id).await?.ok_or_not_found()?;
    Ok(Json(employee))
}

/// Overwrite the supplied fields of an employee
#[utoipa::path(
    put,
    path = "/employees/api/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = EmployeeFields,
    responses(
        (status = 200, description = "Employee updated", body = EmployeeEnvelope),
        (status = 400, description = "Malformed body or unknown field"),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(fields): JsonBody<EmployeeFields>,
) -> AppResult<Json<EmployeeEnvelope>> {
    let employee = state
        .employee_service
        .update(id, fields)
        .await?
        .ok_or_not_found()?;

    Ok(Json(EmployeeEnvelope::new("Employee updated", employee)))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/employees/api/{id}",
    tag = "Employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    if !state.employee_service.delete(id).await? {
        return Err(AppError::NotFound);
    }

    Ok(Json(MessageResponse::new("Employee deleted")))
}
