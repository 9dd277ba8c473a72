//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod credential;
pub mod employee;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use credential::{
    ActiveModel as CredentialActiveModel, Entity as CredentialEntity, Model as CredentialModel,
};
#[allow(unused_imports)]
pub use employee::{
    ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity, Model as EmployeeModel,
};
