//! Fixed values shared by every layer of the ticketing system.

pub mod priority_levels {
    pub const LOW: i32 = 1;
    pub const MEDIUM: i32 = 2;
    pub const HIGH: i32 = 3;
    pub const CRITICAL: i32 = 4;

    pub const DEFAULT: i32 = MEDIUM;
    pub const MIN: i32 = LOW;
    pub const MAX: i32 = CRITICAL;
}

pub mod ticket_number {
    pub const PREFIX: &str = "TGG";
    pub const SEQUENCE_LENGTH: usize = 6;

    /// Attempts made before giving up on a colliding ticket number
    pub const MAX_ALLOCATION_ATTEMPTS: usize = 5;
}

pub mod validation {
    pub const PASSWORD_MIN_LENGTH: u64 = 6;
    pub const PASSWORD_MAX_LENGTH: u64 = 100;
    pub const DESCRIPTION_MAX_LENGTH: u64 = 1000;
    pub const NAME_MAX_LENGTH: u64 = 50;
    pub const EMAIL_MAX_LENGTH: u64 = 100;
    pub const PHONE_MAX_LENGTH: u64 = 20;
    pub const STREET_MAX_LENGTH: u64 = 100;
    pub const POSTAL_CODE_MAX_LENGTH: u64 = 20;
}

pub mod error_messages {
    pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found.";
    pub const TICKET_NOT_FOUND: &str = "Ticket not found.";
    pub const ASSIGNEE_NOT_FOUND: &str = "Assignee not found.";
    pub const INVALID_CREDENTIALS: &str = "Invalid Employee Number or Password";
    pub const EMAIL_EXISTS: &str = "Employee with this email already exists.";
    pub const EMPLOYEE_NUMBER_EXISTS: &str = "Employee with this employee number already exists.";
    pub const UNAUTHORIZED_ACCESS: &str = "You don't have permission to perform this action.";
    pub const CANNOT_DELETE_OWN_ACCOUNT: &str = "Cannot delete your own account.";
    pub const DEADLINE_IN_PAST: &str = "Deadline cannot be in the past";
    pub const INVALID_DESCRIPTION: &str = "Description cannot be empty or whitespace only";
    pub const INVALID_PRIORITY: &str = "Priority level must be between 1 (Low) and 4 (Critical)";
    pub const INVALID_ASSIGNEE: &str = "Cannot assign ticket to employee without Service Desk access.";
    pub const EMPTY_PASSWORD: &str = "Password cannot be null or empty!";
}
