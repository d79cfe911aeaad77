use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use ticketing_api::constants::error_messages;
use ticketing_api::error::{ApiError, ApiResult};
use ticketing_api::service::PasswordHasher;
use tracing::warn;

/// Argon2id with the crate's default parameters and a random salt per hash.
/// The PHC string carries the salt and parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> ApiResult<String> {
        if password.is_empty() {
            return Err(ApiError::validation(error_messages::EMPTY_PASSWORD));
        }

        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ApiError::InternalError(format!("Failed to hash password: {e}")))
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> ApiResult<bool> {
        if password.is_empty() {
            return Ok(false);
        }

        let parsed = match PasswordHash::new(password_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "stored password hash could not be parsed");
                return Ok(false);
            }
        };
        Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
    }
}
