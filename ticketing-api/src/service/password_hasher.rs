use crate::error::ApiResult;

/// Opaque password hashing capability
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &str) -> ApiResult<String>;

    /// Returns false for a wrong or empty password and for an unparseable
    /// stored hash
    fn verify_password(&self, password: &str, password_hash: &str) -> ApiResult<bool>;
}
