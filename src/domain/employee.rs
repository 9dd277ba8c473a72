//! Employee domain entity and its input types.
//!
//! Callers never write an [`Employee`] directly. JSON bodies deserialize into
//! [`EmployeeFields`] and HTML forms into [`EmployeeForm`]; both are explicit
//! allow-lists that reject unknown keys. They are then normalized into
//! [`EmployeeChanges`], the only shape the stores accept.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 30)]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "ann@example.com")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Eng")]
    pub department: Option<String>,
    /// Always a list, possibly empty
    #[schema(example = json!(["Go"]))]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Build a new record from normalized input.
    pub fn create(id: Uuid, changes: EmployeeChanges) -> Self {
        let now = Utc::now();
        let mut employee = Self {
            id,
            name: None,
            age: None,
            email: None,
            date_of_birth: None,
            years_experience: None,
            gender: None,
            department: None,
            skills: Vec::new(),
            address: None,
            created_at: now,
            updated_at: now,
        };
        employee.apply(changes);
        employee.updated_at = now;
        employee
    }

    /// Overwrite every field present in `changes`; absent fields are kept.
    pub fn apply(&mut self, changes: EmployeeChanges) {
        let EmployeeChanges {
            name,
            age,
            email,
            date_of_birth,
            years_experience,
            gender,
            department,
            skills,
            address,
        } = changes;

        if name.is_some() {
            self.name = name;
        }
        if age.is_some() {
            self.age = age;
        }
        if email.is_some() {
            self.email = email;
        }
        if date_of_birth.is_some() {
            self.date_of_birth = date_of_birth;
        }
        if years_experience.is_some() {
            self.years_experience = years_experience;
        }
        if gender.is_some() {
            self.gender = gender;
        }
        if department.is_some() {
            self.department = department;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if address.is_some() {
            self.address = address;
        }
        self.updated_at = Utc::now();
    }
}

/// A skills value as submitted: one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    One(String),
    Many(Vec<String>),
}

impl SkillsInput {
    /// Normalize to a sequence, wrapping a lone value.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsInput::One(skill) => vec![skill],
            SkillsInput::Many(skills) => skills,
        }
    }
}

/// Allow-listed employee fields accepted by the JSON API.
///
/// Numbers may be sent as JSON numbers or numeric strings; `dob` and
/// `experience` are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeFields {
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::optional_int")]
    #[schema(value_type = Option<i32>, example = 30)]
    pub age: Option<i32>,
    pub email: Option<String>,
    #[serde(default, alias = "dob", deserialize_with = "coerce::optional_date")]
    #[schema(value_type = Option<String>, example = "1994-05-17")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, alias = "experience", deserialize_with = "coerce::optional_int")]
    #[schema(value_type = Option<i32>)]
    pub years_experience: Option<i32>,
    pub gender: Option<String>,
    #[schema(example = "Eng")]
    pub department: Option<String>,
    /// A single skill or a list of skills
    #[schema(value_type = Option<Vec<String>>, example = json!(["Go"]))]
    pub skills: Option<SkillsInput>,
    pub address: Option<String>,
}

/// Normalized field values handed to the employee store.
///
/// `None` means "not supplied"; `skills` is already a sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub years_experience: Option<i32>,
    pub gender: Option<String>,
    pub department: Option<String>,
    pub skills: Option<Vec<String>>,
    pub address: Option<String>,
}

impl From<EmployeeFields> for EmployeeChanges {
    fn from(fields: EmployeeFields) -> Self {
        Self {
            name: fields.name,
            age: fields.age,
            email: fields.email,
            date_of_birth: fields.date_of_birth,
            years_experience: fields.years_experience,
            gender: fields.gender,
            department: fields.department,
            skills: fields.skills.map(SkillsInput::into_vec),
            address: fields.address,
        }
    }
}

/// Employee form as posted by the HTML pages.
///
/// Every input arrives as text; `skills` may repeat.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "dob")]
    pub date_of_birth: String,
    #[serde(default, alias = "experience")]
    pub years_experience: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub address: String,
}

impl EmployeeForm {
    /// Coerce the text inputs into typed fields. Blank inputs count as absent.
    ///
    /// A multi-select with nothing chosen posts no `skills` key at all, so an
    /// empty selection leaves the stored skills alone.
    pub fn into_fields(self) -> AppResult<EmployeeFields> {
        let skills: Vec<String> = self
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(EmployeeFields {
            name: non_blank(self.name),
            age: parse_int(&self.age).map_err(|e| AppError::validation(format!("age: {}", e)))?,
            email: non_blank(self.email),
            date_of_birth: parse_date(&self.date_of_birth)
                .map_err(|e| AppError::validation(format!("dateOfBirth: {}", e)))?,
            years_experience: parse_int(&self.years_experience)
                .map_err(|e| AppError::validation(format!("yearsExperience: {}", e)))?,
            gender: non_blank(self.gender),
            department: non_blank(self.department),
            skills: (!skills.is_empty()).then_some(SkillsInput::Many(skills)),
            address: non_blank(self.address),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse an integer from text. Whole floats ("30.0") are accepted.
fn parse_int(raw: &str) -> Result<Option<i32>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(value) = trimmed.parse::<i32>() {
        return Ok(Some(value));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", trimmed))?;
    whole_number(value).map(Some)
}

fn whole_number(value: f64) -> Result<i32, String> {
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Ok(value as i32)
    } else {
        Err(format!("{} is not a whole number", value))
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
fn parse_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| format!("'{}' is not a date", trimmed))
}

/// Serde helpers that coerce loosely typed JSON scalars.
mod coerce {
    use super::*;
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Int(i64),
        Float(f64),
        Text(String),
    }

    pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Loose>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Loose::Int(value)) => i32::try_from(value)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("{} is out of range", value))),
            Some(Loose::Float(value)) => whole_number(value).map(Some).map_err(D::Error::custom),
            Some(Loose::Text(text)) => parse_int(&text).map_err(D::Error::custom),
        }
    }

    pub fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(text) => parse_date(&text).map_err(D::Error::custom),
        }
    }
}
