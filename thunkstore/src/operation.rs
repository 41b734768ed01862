use crate::ResourceError;

/// Normalizes what an operation hands back into payload-or-failure.
///
/// Operations may return a bare value, an `Option`, or a `Result` with any
/// displayable error; the thunk only sees `Result<T, ResourceError>`.
pub trait OperationResult<T> {
    fn into_result(self) -> Result<T, ResourceError>;
}

impl<T> OperationResult<T> for T {
    fn into_result(self) -> Result<T, ResourceError> {
        Ok(self)
    }
}

impl<T, E> OperationResult<T> for Result<T, E>
where
    E: ToString,
{
    fn into_result(self) -> Result<T, ResourceError> {
        self.map_err(|error| ResourceError::new(error.to_string()))
    }
}

impl<T> OperationResult<T> for Option<T> {
    fn into_result(self) -> Result<T, ResourceError> {
        self.ok_or_else(|| ResourceError::new("operation returned no value"))
    }
}
