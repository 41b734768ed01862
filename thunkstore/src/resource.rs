use thiserror::Error;

/// The failure value of an asynchronous operation, stored verbatim as text.
///
/// There is exactly one error kind: the operation failed. Whatever the
/// operation produced on failure (an error type, a rejection message, a plain
/// string) is captured through its `Display` output.
#[derive(Error, Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{0}")]
pub struct ResourceError(String);

impl ResourceError {
    pub fn new(message: impl Into<String>) -> Self {
        ResourceError(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResourceError {
    fn from(message: String) -> Self {
        ResourceError(message)
    }
}

impl From<&str> for ResourceError {
    fn from(message: &str) -> Self {
        ResourceError(message.to_string())
    }
}

/// Tri-state record of an asynchronous operation: loading, data, error.
///
/// Exactly one phase holds at a time. `Loading` may carry the previous
/// successful value so callers can keep showing stale data while a refetch is
/// in flight. There is no terminal phase: any phase may transition back to
/// `Loading`.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource<T: Clone> {
    Idle(Option<T>),
    Loading(Option<T>),
    Succeeded(T),
    Failed(ResourceError),
}

impl<T: Clone> Resource<T> {
    pub fn initial(seed: Option<T>) -> Self {
        Resource::Idle(seed)
    }

    pub fn loading(previous: Option<T>) -> Self {
        Resource::Loading(previous)
    }

    pub fn success(value: T) -> Self {
        Resource::Succeeded(value)
    }

    pub fn error(error: impl Into<ResourceError>) -> Self {
        Resource::Failed(error.into())
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Resource::Idle(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Resource::Failed(_))
    }

    /// Success or failure has been observed.
    pub fn is_settled(&self) -> bool {
        matches!(self, Resource::Succeeded(_) | Resource::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Idle(Some(value)) => Some(value),
            Resource::Loading(Some(value)) => Some(value),
            Resource::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn data_cloned(&self) -> Option<T> {
        self.data().cloned()
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Idle(value) => value,
            Resource::Loading(value) => value,
            Resource::Succeeded(value) => Some(value),
            Resource::Failed(_) => None,
        }
    }

    /// The failure value, if the resource is in the failed phase.
    pub fn failure(&self) -> Option<&ResourceError> {
        match self {
            Resource::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T: Clone> Default for Resource<T> {
    fn default() -> Self {
        Resource::Idle(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let initial: Resource<i32> = Resource::initial(None);
        assert!(initial.is_idle());
        assert!(!initial.is_loading());
        assert!(!initial.is_settled());
        assert!(initial.data().is_none());
        assert!(initial.failure().is_none());
        assert_eq!(initial, Resource::default());

        let seeded = Resource::initial(Some(3));
        assert!(!seeded.is_loading());
        assert_eq!(seeded.data(), Some(&3));
        assert!(seeded.failure().is_none());
    }

    #[test]
    fn test_loading() {
        let loading = Resource::loading(Some(7));
        assert!(loading.is_loading());
        assert!(!loading.is_settled());
        assert_eq!(loading.data(), Some(&7));
        assert_eq!(loading.data_cloned(), Some(7));
        assert!(loading.failure().is_none());

        let loading = Resource::loading(None::<i32>);
        assert!(loading.data().is_none());
        assert_eq!(loading.into_data(), None);
    }

    #[test]
    fn test_success() {
        let success = Resource::success(8);
        assert!(success.is_success());
        assert!(success.is_settled());
        assert!(!success.is_loading());
        assert_eq!(success.data(), Some(&8));
        assert_eq!(success.into_data(), Some(8));

        let success = Resource::success(8);
        assert!(success.failure().is_none());
    }

    #[test]
    fn test_error() {
        let failed: Resource<i32> = Resource::error("connection refused");
        assert!(failed.is_failed());
        assert!(failed.is_settled());
        assert!(!failed.is_loading());
        assert!(failed.data().is_none());
        assert_eq!(failed.into_data(), None);

        let failed: Resource<i32> = Resource::error("connection refused");
        assert_eq!(
            failed.failure(),
            Some(&ResourceError::new("connection refused"))
        );
        assert_eq!(failed.failure().map(|e| e.message()), Some("connection refused"));
    }

    #[test]
    fn test_reenterable() {
        // Any phase may go back to loading; the previous value decides
        // whether stale data stays visible.
        let success = Resource::success(5);
        let refetching = Resource::loading(success.data_cloned());
        assert!(refetching.is_loading());
        assert_eq!(refetching.data(), Some(&5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_resource_serde() {
        let success = Resource::success(11);
        let serialized = serde_json::to_string(&success).unwrap();
        let deserialized: Resource<i32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(success, deserialized);

        let failed: Resource<i32> = Resource::error("boom");
        let serialized = serde_json::to_string(&failed).unwrap();
        let deserialized: Resource<i32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(failed, deserialized);
    }
}
