use crate::{Action, ActionBody, ActionTypes, Resource};

/// Builds a pure reducer fragment applying the loading / success / error
/// transitions of one resource, keyed on the action type string.
///
/// The state key of the untyped original becomes `updater`, a lens writing
/// the new `Resource` into its field of the state; all other fields are
/// whatever the updater leaves untouched. Unmatched action types return the
/// state as-is, without going through the updater.
///
/// The loading transition discards the previous value. Use
/// [`handle_async_actions_with_retain`] to keep stale data visible during a
/// refetch.
pub fn handle_async_actions<S, P, T, U>(
    types: ActionTypes,
    updater: U,
) -> impl Fn(S, &Action<P, T>) -> S
where
    T: Clone,
    U: Fn(S, Resource<T>) -> S,
{
    move |state, action| match action.body() {
        ActionBody::Start { .. } if action.name() == types.start() => {
            updater(state, Resource::loading(None))
        }
        ActionBody::Success { payload } if action.name() == types.success() => {
            updater(state, Resource::success(payload.clone()))
        }
        ActionBody::Error { payload } if action.name() == types.error() => {
            updater(state, Resource::error(payload.clone()))
        }
        _ => state,
    }
}

/// Stale-while-revalidate variant: the loading transition carries the
/// previous value read through `getter`, so views keep rendering the last
/// successful data until the refetch settles.
pub fn handle_async_actions_with_retain<S, P, T, G, U>(
    types: ActionTypes,
    getter: G,
    updater: U,
) -> impl Fn(S, &Action<P, T>) -> S
where
    T: Clone,
    G: Fn(&S) -> &Resource<T>,
    U: Fn(S, Resource<T>) -> S,
{
    move |state, action| match action.body() {
        ActionBody::Start { .. } if action.name() == types.start() => {
            let retained = getter(&state).data_cloned();
            updater(state, Resource::loading(retained))
        }
        ActionBody::Success { payload } if action.name() == types.success() => {
            updater(state, Resource::success(payload.clone()))
        }
        ActionBody::Error { payload } if action.name() == types.error() => {
            updater(state, Resource::error(payload.clone()))
        }
        _ => state,
    }
}
