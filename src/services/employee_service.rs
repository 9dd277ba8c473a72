//! Employee service - CRUD over employee records.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Employee, EmployeeChanges, EmployeeFields};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee service trait for dependency injection.
///
/// Lookups report absence as `None`/`false`; handlers decide whether that
/// is a 404.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Create a record; a lone skill is stored as a one-element list
    async fn create(&self, fields: EmployeeFields) -> AppResult<Employee>;

    /// All records in insertion order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    async fn get(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// Overwrite the supplied fields of a record
    async fn update(&self, id: Uuid, fields: EmployeeFields) -> AppResult<Option<Employee>>;

    /// Remove a record, returning whether one existed
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn create(&self, fields: EmployeeFields) -> AppResult<Employee> {
        let employee = self.uow.employees().create(EmployeeChanges::from(fields)).await?;
        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Employee>> {
        self.uow.employees().find_by_id(id).await
    }

    async fn update(&self, id: Uuid, fields: EmployeeFields) -> AppResult<Option<Employee>> {
        let updated = self
            .uow
            .employees()
            .update(id, EmployeeChanges::from(fields))
            .await?;

        match &updated {
            Some(_) => tracing::info!(employee_id = %id, "Employee updated"),
            None => tracing::debug!(employee_id = %id, "Update skipped: no such employee"),
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let removed = self.uow.employees().delete(id).await?;
        if removed {
            tracing::info!(employee_id = %id, "Employee deleted");
        }
        Ok(removed)
    }
}
