use crate::{Action, ActionTypes, OperationResult};
use std::future::Future;

/// Wraps a single-argument asynchronous operation into the canonical
/// start / success / error dispatch sequence.
///
/// `run` dispatches the start event before the operation is first polled,
/// then awaits the operation and dispatches exactly one terminal event. The
/// returned future resolves after that terminal dispatch and never fails:
/// operation failures are converted into the error event, not propagated.
///
/// Operations take exactly one parameter. An operation needing several inputs
/// takes one composite record instead. Each invocation runs independently:
/// there is no de-duplication, cancellation, or in-flight tracking across
/// overlapping calls, so two concurrent runs both dispatch their own event
/// sequences in whichever order they settle.
pub struct PromiseThunk<Op> {
    types: ActionTypes,
    operation: Op,
}

impl<Op> PromiseThunk<Op> {
    pub fn new(base: impl Into<String>, operation: Op) -> Self {
        PromiseThunk {
            types: ActionTypes::new(base),
            operation,
        }
    }

    /// The event-type triple this thunk dispatches, for wiring the matching
    /// reducer fragment.
    pub fn types(&self) -> &ActionTypes {
        &self.types
    }

    pub async fn run<P, T, Fut, R, D>(&self, param: P, dispatch: D)
    where
        P: Clone,
        Op: Fn(P) -> Fut,
        Fut: Future<Output = R>,
        R: OperationResult<T>,
        D: Fn(Action<P, T>),
    {
        dispatch(Action::start(&self.types, param.clone()));
        match (self.operation)(param).await.into_result() {
            Ok(payload) => dispatch(Action::success(&self.types, payload)),
            Err(error) => dispatch(Action::error(&self.types, error)),
        }
    }
}
