use thiserror::Error;

/// Typed store failures that callers are expected to react to.
/// Everything else travels as an opaque boxed error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate value '{value}' for {key}")]
    DuplicateKey { key: String, value: String },
}

impl StoreError {
    pub fn duplicate(key: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::DuplicateKey {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Finds a `StoreError` inside a boxed repository error
    pub fn find<'a>(error: &'a (dyn std::error::Error + Send + Sync + 'static)) -> Option<&'a StoreError> {
        error.downcast_ref::<StoreError>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_downcasts_boxed_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(StoreError::duplicate("ticket_number", "TGG-2026-000001"));
        assert_eq!(
            StoreError::find(boxed.as_ref()),
            Some(&StoreError::duplicate("ticket_number", "TGG-2026-000001"))
        );

        let other: Box<dyn std::error::Error + Send + Sync> = "timeout".into();
        assert!(StoreError::find(other.as_ref()).is_none());
    }
}
