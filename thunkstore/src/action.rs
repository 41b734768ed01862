use crate::ResourceError;

/// The three event-type strings of one asynchronous resource, derived
/// deterministically from a single base name: `BASE`, `BASE_SUCCESS`,
/// `BASE_ERROR`. Built once per resource so the variants can never drift
/// apart by a typo.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTypes {
    start: String,
    success: String,
    error: String,
}

impl ActionTypes {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        ActionTypes {
            success: format!("{base}_SUCCESS"),
            error: format!("{base}_ERROR"),
            start: base,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}

/// One dispatched event: the concrete type string plus its body.
///
/// `P` is the thunk parameter carried by the start event, `T` the payload of
/// the success event. The `error: true` flag of the untyped action shape is
/// the `Error` variant itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<P, T> {
    name: String,
    body: ActionBody<P, T>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionBody<P, T> {
    Start { param: P },
    Success { payload: T },
    Error { payload: ResourceError },
}

impl<P, T> Action<P, T> {
    pub fn start(types: &ActionTypes, param: P) -> Self {
        Action {
            name: types.start().to_string(),
            body: ActionBody::Start { param },
        }
    }

    pub fn success(types: &ActionTypes, payload: T) -> Self {
        Action {
            name: types.success().to_string(),
            body: ActionBody::Success { payload },
        }
    }

    pub fn error(types: &ActionTypes, payload: ResourceError) -> Self {
        Action {
            name: types.error().to_string(),
            body: ActionBody::Error { payload },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &ActionBody<P, T> {
        &self.body
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, ActionBody::Error { .. })
    }
}
