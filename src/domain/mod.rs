//! Domain layer - Core business entities and logic
//!
//! Plain data types with no knowledge of HTTP or storage.

pub mod credential;
pub mod employee;
pub mod password;
pub mod session;

pub use credential::Credential;
pub use employee::{Employee, EmployeeChanges, EmployeeFields, EmployeeForm, SkillsInput};
pub use password::Password;
pub use session::{Session, SessionIdentity};
