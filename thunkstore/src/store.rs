use crate::State;
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalExt, SignalStream};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot::error::RecvError;

/// Explicitly constructed state container: one state tree, one root reducer,
/// and `dispatch` as the only mutation entry point.
///
/// Dispatched actions are serialized through a channel and folded into the
/// state by a single worker task, so reducers run one at a time and need no
/// locking. Construction spawns that task, so a `Store` must be created
/// inside a tokio runtime.
pub struct Store<S: State, A: Send + 'static> {
    state: Mutable<S>,
    dispatch_tx: UnboundedSender<A>,
    with_state_tx: UnboundedSender<Box<dyn FnOnce(S) + Send>>,
}

impl<S: State, A: Send + 'static> Store<S, A> {
    pub fn new<R>(initial_state: S, reducer: R) -> Self
    where
        R: Fn(S, &A) -> S + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let (dispatch_tx, dispatch_rx) = tokio::sync::mpsc::unbounded_channel::<A>();
        let (with_state_tx, with_state_rx) =
            tokio::sync::mpsc::unbounded_channel::<Box<dyn FnOnce(S) + Send>>();

        let state_clone = state.clone();

        tokio::spawn(async move {
            Self::process_queue(state_clone, reducer, dispatch_rx, with_state_rx).await;
        });

        Store {
            state,
            dispatch_tx,
            with_state_tx,
        }
    }

    async fn process_queue<R>(
        state: Mutable<S>,
        reducer: R,
        mut dispatch_rx: UnboundedReceiver<A>,
        mut with_state_rx: UnboundedReceiver<Box<dyn FnOnce(S) + Send>>,
    ) where
        R: Fn(S, &A) -> S,
    {
        loop {
            tokio::select! {
                biased;
                Some(action) = dispatch_rx.recv() => {
                    let new_state = reducer(state.get_cloned(), &action);
                    state.set(new_state);
                }
                Some(observer) = with_state_rx.recv() => {
                    observer(state.get_cloned());
                }
                else => break,
            }
        }
    }

    /// Sends an action to the worker task. Actions dispatched after the
    /// store's worker has shut down are dropped.
    pub fn dispatch(&self, action: A) {
        let _ = self.dispatch_tx.send(action);
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<S>> {
        self.state.signal_cloned().to_stream()
    }

    pub fn to_signal(&self) -> MutableSignalCloned<S> {
        self.state.signal_cloned()
    }

    /// Runs a read-only observer on the worker task, after every action
    /// dispatched before it.
    pub fn with_state<F>(&self, observer: F)
    where
        F: FnOnce(S) + Send + 'static,
    {
        let _ = self.with_state_tx.send(Box::new(observer));
    }

    /// Snapshot of the current state. May lag behind actions still queued on
    /// the worker; use `await_state` to observe them applied.
    pub fn get_state(&self) -> S {
        self.state.get_cloned()
    }

    /// Resolves with the state after every previously dispatched action has
    /// been applied.
    pub async fn await_state(&self) -> Result<S, RecvError> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let _ = self.with_state_tx.send(Box::new(|state| {
            let _ = tx.send(state);
        }));
        rx.await
    }
}
