use crate::api;
use crate::posts::posts_state::{Post, PostsState};
use std::sync::Arc;
use thunkstore::{handle_async_actions, Action, ActionTypes, PromiseThunk, Store};

const GET_POSTS: &str = "GET_POSTS";
const GET_POST: &str = "GET_POST";

#[derive(Debug, Clone, PartialEq)]
pub enum BlogAction {
    Posts(Action<(), Vec<Post>>),
    Post(Action<u64, Post>),
}

fn blog_reducer() -> impl Fn(PostsState, &BlogAction) -> PostsState {
    let posts = handle_async_actions(ActionTypes::new(GET_POSTS), PostsState::set_posts);
    let post = handle_async_actions(ActionTypes::new(GET_POST), PostsState::set_post);
    move |state, action| match action {
        BlogAction::Posts(action) => posts(state, action),
        BlogAction::Post(action) => post(state, action),
    }
}

/// The posts feature store: one thunk and one reducer fragment per resource,
/// composed over a single store.
pub struct PostsModel {
    store: Arc<Store<PostsState, BlogAction>>,
}

impl PostsModel {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::new(PostsState::default(), blog_reducer())),
        }
    }

    pub fn store(&self) -> Arc<Store<PostsState, BlogAction>> {
        self.store.clone()
    }

    /// Fetches the whole post list into the `posts` slice.
    pub async fn get_posts(&self) {
        let thunk = PromiseThunk::new(GET_POSTS, api::fetch_posts);
        let store = self.store.clone();
        thunk
            .run((), move |action| store.dispatch(BlogAction::Posts(action)))
            .await;
    }

    /// Fetches one post by identifier into the `post` slice.
    pub async fn get_post(&self, id: u64) {
        let thunk = PromiseThunk::new(GET_POST, api::fetch_post_by_id);
        let store = self.store.clone();
        thunk
            .run(id, move |action| store.dispatch(BlogAction::Post(action)))
            .await;
    }
}

impl Default for PostsModel {
    fn default() -> Self {
        Self::new()
    }
}
