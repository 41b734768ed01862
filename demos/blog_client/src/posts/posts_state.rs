use serde::Deserialize;
use thunkstore::{Resource, State};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Two independent slices: the post list and the currently opened post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostsState {
    pub posts: Resource<Vec<Post>>,
    pub post: Resource<Post>,
}

impl State for PostsState {}

impl PostsState {
    pub fn set_posts(self, posts: Resource<Vec<Post>>) -> Self {
        Self { posts, ..self }
    }

    pub fn set_post(self, post: Resource<Post>) -> Self {
        Self { post, ..self }
    }
}
