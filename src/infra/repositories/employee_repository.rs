//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity, SkillList};
use crate::domain::{Employee, EmployeeChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
///
/// Absence is reported through `Option`/`bool`, never as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new record under a fresh id
    async fn create(&self, changes: EmployeeChanges) -> AppResult<Employee>;

    /// All records in insertion order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Find a record by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;

    /// Overwrite the supplied fields of an existing record
    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Option<Employee>>;

    /// Remove a record, returning whether one existed
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Set a column only when the caller supplied a value.
fn set_if_some<T>(column: &mut ActiveValue<T>, value: Option<T>)
where
    T: Into<sea_orm::Value>,
{
    if let Some(value) = value {
        *column = Set(value);
    }
}

/// Same as [`set_if_some`] for nullable columns.
fn set_nullable<T>(column: &mut ActiveValue<Option<T>>, value: Option<T>)
where
    Option<T>: Into<sea_orm::Value>,
{
    if value.is_some() {
        *column = Set(value);
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn create(&self, changes: EmployeeChanges) -> AppResult<Employee> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(changes.name),
            age: Set(changes.age),
            email: Set(changes.email),
            date_of_birth: Set(changes.date_of_birth),
            years_experience: Set(changes.years_experience),
            gender: Set(changes.gender),
            department: Set(changes.department),
            skills: Set(SkillList(changes.skills.unwrap_or_default())),
            address: Set(changes.address),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::CreatedAt)
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn update(&self, id: Uuid, changes: EmployeeChanges) -> AppResult<Option<Employee>> {
        let Some(existing) = EmployeeEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();

        set_nullable(&mut active.name, changes.name);
        set_nullable(&mut active.age, changes.age);
        set_nullable(&mut active.email, changes.email);
        set_nullable(&mut active.date_of_birth, changes.date_of_birth);
        set_nullable(&mut active.years_experience, changes.years_experience);
        set_nullable(&mut active.gender, changes.gender);
        set_nullable(&mut active.department, changes.department);
        set_if_some(&mut active.skills, changes.skills.map(SkillList));
        set_nullable(&mut active.address, changes.address);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Some(Employee::from(model)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}
