use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use ticketing_api::domain::{AccessLevel, Address, Employee, RegisterEmployeeRequest};
use uuid::Uuid;

use crate::models::Identifiable;
use crate::utils::{to_heapless, to_optional_heapless};

/// Database model for a postal address, stored inline with the employee
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressModel {
    pub street: Option<HeaplessString<100>>,
    pub house_number: Option<i32>,
    pub city: Option<HeaplessString<50>>,
    pub postal_code: Option<HeaplessString<20>>,
}

impl TryFrom<&Address> for AddressModel {
    type Error = String;

    fn try_from(address: &Address) -> Result<Self, Self::Error> {
        Ok(AddressModel {
            street: to_optional_heapless(address.street.as_deref(), "street")?,
            house_number: address.house_number,
            city: to_optional_heapless(address.city.as_deref(), "city")?,
            postal_code: to_optional_heapless(address.postal_code.as_deref(), "postal_code")?,
        })
    }
}

impl From<&AddressModel> for Address {
    fn from(model: &AddressModel) -> Self {
        Address {
            street: model.street.as_ref().map(|s| s.to_string()),
            house_number: model.house_number,
            city: model.city.as_ref().map(|s| s.to_string()),
            postal_code: model.postal_code.as_ref().map(|s| s.to_string()),
        }
    }
}

/// Database model for Employee
///
/// Email and employee number are unique among active employees only;
/// a deactivated record does not block reuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeModel {
    pub id: Uuid,

    /// Assigned at creation, never changed afterwards
    pub employee_number: i32,

    pub first_name: HeaplessString<50>,
    pub last_name: HeaplessString<50>,
    pub email: HeaplessString<100>,
    pub department: HeaplessString<50>,
    pub phone_number: Option<HeaplessString<20>>,
    pub address: Option<AddressModel>,
    pub company: HeaplessString<50>,
    pub access_level: AccessLevel,

    /// Opaque hash produced by the password hasher
    pub password_hash: String,

    pub is_active: bool,
    pub created_date: DateTime<Utc>,
}

impl EmployeeModel {
    /// Builds a new active employee from a registration request and an already computed hash
    pub fn from_registration(
        request: &RegisterEmployeeRequest,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(EmployeeModel {
            id: Uuid::new_v4(),
            employee_number: request.employee_number,
            first_name: to_heapless(request.first_name.trim(), "first_name")?,
            last_name: to_heapless(request.last_name.trim(), "last_name")?,
            email: to_heapless(request.email.trim(), "email")?,
            department: to_heapless(request.department.trim(), "department")?,
            phone_number: to_optional_heapless(request.phone_number.as_deref(), "phone_number")?,
            address: request.address.as_ref().map(AddressModel::try_from).transpose()?,
            company: to_heapless(request.company.trim(), "company")?,
            access_level: request.access_level,
            password_hash,
            is_active: true,
            created_date: now,
        })
    }
}

impl Identifiable for EmployeeModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<&EmployeeModel> for Employee {
    fn from(model: &EmployeeModel) -> Self {
        Employee {
            id: model.id,
            employee_number: model.employee_number,
            first_name: model.first_name.to_string(),
            last_name: model.last_name.to_string(),
            email: model.email.to_string(),
            department: model.department.to_string(),
            phone_number: model.phone_number.as_ref().map(|s| s.to_string()),
            address: model.address.as_ref().map(Address::from),
            company: model.company.to_string(),
            access_level: model.access_level,
            is_active: model.is_active,
            created_date: model.created_date,
        }
    }
}

impl From<EmployeeModel> for Employee {
    fn from(model: EmployeeModel) -> Self {
        Employee::from(&model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterEmployeeRequest {
        RegisterEmployeeRequest {
            first_name: " Grace ".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            password: "irrelevant".to_string(),
            department: "Service Desk".to_string(),
            phone_number: Some("0612345678".to_string()),
            address: Some(Address {
                street: Some("Dam".to_string()),
                house_number: Some(1),
                city: Some("Amsterdam".to_string()),
                postal_code: Some("1012JS".to_string()),
            }),
            company: "Garden Group".to_string(),
            employee_number: 42,
            access_level: AccessLevel::ServiceDesk,
        }
    }

    #[test]
    fn test_from_registration_is_active_and_trimmed() {
        let model = EmployeeModel::from_registration(&request(), "hash".to_string(), Utc::now()).unwrap();
        assert!(model.is_active);
        assert_eq!(model.first_name.as_str(), "Grace");
        assert_eq!(model.employee_number, 42);
        assert_eq!(model.access_level, AccessLevel::ServiceDesk);
    }

    #[test]
    fn test_outward_employee_has_address() {
        let model = EmployeeModel::from_registration(&request(), "hash".to_string(), Utc::now()).unwrap();
        let employee = Employee::from(&model);
        assert_eq!(employee.address.as_ref().unwrap().city.as_deref(), Some("Amsterdam"));
        assert_eq!(employee.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_from_registration_rejects_overlong_name() {
        let mut req = request();
        req.first_name = "x".repeat(51);
        assert!(EmployeeModel::from_registration(&req, "hash".to_string(), Utc::now()).is_err());
    }
}
