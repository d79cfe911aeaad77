use chrono::Utc;
use heapless::String as HeaplessString;
use ticketing_api::domain::AccessLevel;
use ticketing_db::models::{AddressModel, EmployeeModel};
use uuid::Uuid;

pub fn create_test_employee(employee_number: i32, email: &str) -> EmployeeModel {
    EmployeeModel {
        id: Uuid::new_v4(),
        employee_number,
        first_name: HeaplessString::try_from("Ada").unwrap(),
        last_name: HeaplessString::try_from("Lovelace").unwrap(),
        email: HeaplessString::try_from(email).unwrap(),
        department: HeaplessString::try_from("Finance").unwrap(),
        phone_number: Some(HeaplessString::try_from("+31 20 555 0100").unwrap()),
        address: Some(AddressModel {
            street: Some(HeaplessString::try_from("Main Street").unwrap()),
            house_number: Some(12),
            city: Some(HeaplessString::try_from("Haarlem").unwrap()),
            postal_code: Some(HeaplessString::try_from("2011 AB").unwrap()),
        }),
        company: HeaplessString::try_from("Garden Group").unwrap(),
        access_level: AccessLevel::Regular,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        is_active: true,
        created_date: Utc::now(),
    }
}

/// Employee number and email unlikely to exist in a shared test database
pub fn unique_employee(access_level: AccessLevel) -> EmployeeModel {
    let id = Uuid::new_v4();
    let number = (id.as_u128() % 1_000_000_000) as i32 + 1_000_000;
    let mut employee = create_test_employee(number, &format!("{}@test.example", id.simple()));
    employee.id = id;
    employee.access_level = access_level;
    employee
}
