//! OpenAPI documentation for the employee REST API.

use utoipa::OpenApi;

use crate::api::handlers::employee_api_handler;
use crate::domain::{Employee, EmployeeFields};
use crate::types::{EmployeeEnvelope, MessageResponse};

/// OpenAPI document served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Portal API",
        version = "0.1.0",
        description = "JSON CRUD over employee records. The HTML pages share the same store."
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        employee_api_handler::create_employee,
        employee_api_handler::list_employees,
        employee_api_handler::get_employee,
        employee_api_handler::update_employee,
        employee_api_handler::delete_employee,
    ),
    components(
        schemas(
            Employee,
            EmployeeFields,
            EmployeeEnvelope,
            MessageResponse,
        )
    ),
    tags(
        (name = "Employees", description = "Employee record management")
    )
)]
pub struct ApiDoc;
