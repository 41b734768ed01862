use thunkstore::{handle_async_actions, Action, ActionTypes, Resource, State};

pub const GET_ITEMS: &str = "GET_ITEMS";
pub const GET_ITEM: &str = "GET_ITEM";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub items: Resource<Vec<u64>>,
    pub item: Resource<u64>,
}

impl State for FeedState {}

impl FeedState {
    pub fn set_items(self, items: Resource<Vec<u64>>) -> Self {
        Self { items, ..self }
    }

    pub fn set_item(self, item: Resource<u64>) -> Self {
        Self { item, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    Items(Action<u64, Vec<u64>>),
    Item(Action<u64, u64>),
}

pub fn feed_reducer() -> impl Fn(FeedState, &FeedAction) -> FeedState {
    let items = handle_async_actions(ActionTypes::new(GET_ITEMS), FeedState::set_items);
    let item = handle_async_actions(ActionTypes::new(GET_ITEM), FeedState::set_item);
    move |state, action| match action {
        FeedAction::Items(action) => items(state, action),
        FeedAction::Item(action) => item(state, action),
    }
}
