use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Identifiable;

/// Generic repository trait for loading an entity by its ID
///
/// # Returns
/// * `Ok(Some(T))` - The entity exists
/// * `Ok(None)` - No entity with this ID
/// * `Err` - The query could not be executed
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
