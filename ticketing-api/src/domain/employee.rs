use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::access_level::AccessLevel;
use crate::constants::validation::{NAME_MAX_LENGTH, POSTAL_CODE_MAX_LENGTH, STREET_MAX_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(max = STREET_MAX_LENGTH))]
    pub street: Option<String>,
    pub house_number: Option<i32>,
    #[validate(length(max = NAME_MAX_LENGTH))]
    pub city: Option<String>,
    #[validate(length(max = POSTAL_CODE_MAX_LENGTH))]
    pub postal_code: Option<String>,
}

/// Outward view of an employee. The password hash never leaves the store layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub employee_number: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub phone_number: Option<String>,
    pub address: Option<Address>,
    pub company: String,
    pub access_level: AccessLevel,
    pub is_active: bool,
    pub created_date: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
