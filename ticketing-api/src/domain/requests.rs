use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::access_level::AccessLevel;
use crate::constants::validation::{
    DESCRIPTION_MAX_LENGTH, EMAIL_MAX_LENGTH, NAME_MAX_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    PHONE_MAX_LENGTH,
};
use super::employee::Address;

/// Self-service ticket creation; the reporter is always the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[validate(length(max = DESCRIPTION_MAX_LENGTH))]
    pub description: String,
    pub priority_level: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
}

/// Partial ticket update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    #[validate(length(max = DESCRIPTION_MAX_LENGTH))]
    pub description: Option<String>,
    pub priority_level: Option<i32>,
    pub status: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub assigned_to: Option<Uuid>,
    #[validate(length(max = DESCRIPTION_MAX_LENGTH))]
    pub resolution_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTicketRequest {
    pub assignee_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeRequest {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub first_name: String,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub last_name: String,
    #[validate(email, length(max = EMAIL_MAX_LENGTH))]
    pub email: String,
    #[validate(length(min = PASSWORD_MIN_LENGTH, max = PASSWORD_MAX_LENGTH))]
    pub password: String,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub department: String,
    #[validate(length(max = PHONE_MAX_LENGTH))]
    pub phone_number: Option<String>,
    #[validate(nested)]
    pub address: Option<Address>,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub company: String,
    #[validate(range(min = 1))]
    pub employee_number: i32,
    #[serde(default)]
    pub access_level: AccessLevel,
}

/// Partial employee update. Employee number and password are not changed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub last_name: Option<String>,
    #[validate(email, length(max = EMAIL_MAX_LENGTH))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub department: Option<String>,
    #[validate(length(max = PHONE_MAX_LENGTH))]
    pub phone_number: Option<String>,
    #[validate(nested)]
    pub address: Option<Address>,
    #[validate(length(min = 1, max = NAME_MAX_LENGTH))]
    pub company: Option<String>,
    pub access_level: Option<AccessLevel>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub employee_number: i32,
    pub password: String,
}
