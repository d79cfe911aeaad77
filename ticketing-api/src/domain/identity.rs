use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::access_level::AccessLevel;

/// Verified caller identity, resolved once per request by the authentication layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Internal employee id
    pub internal_id: Uuid,
    pub employee_number: i32,
    pub role: AccessLevel,
}

impl Identity {
    pub fn new(internal_id: Uuid, employee_number: i32, role: AccessLevel) -> Self {
        Self {
            internal_id,
            employee_number,
            role,
        }
    }
}
