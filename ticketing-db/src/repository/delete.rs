use async_trait::async_trait;
use uuid::Uuid;

/// Generic repository trait for physically removing an entity
#[async_trait]
pub trait Delete: Send + Sync {
    /// Returns `true` when a record was removed, `false` when none matched
    async fn delete(&self, id: Uuid) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
