use async_trait::async_trait;

use crate::models::Identifiable;

/// Generic repository trait for inserting a single entity
///
/// Returns the stored entity with any store-generated fields populated.
/// A unique-key collision is reported as [`StoreError::DuplicateKey`](crate::repository::StoreError)
/// so callers can tell it apart from infrastructure failures.
#[async_trait]
pub trait Create<T: Identifiable>: Send + Sync {
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
