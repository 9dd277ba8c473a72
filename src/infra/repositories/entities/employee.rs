//! Employee database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::domain::Employee;

/// Skills list stored as a JSONB array
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SkillList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub date_of_birth: Option<Date>,
    pub years_experience: Option<i32>,
    pub gender: Option<String>,
    pub department: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: SkillList,
    pub address: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Employee {
            id: model.id,
            name: model.name,
            age: model.age,
            email: model.email,
            date_of_birth: model.date_of_birth,
            years_experience: model.years_experience,
            gender: model.gender,
            department: model.department,
            skills: model.skills.0,
            address: model.address,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
