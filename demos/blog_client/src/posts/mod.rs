mod posts_model;
mod posts_state;

pub use posts_model::PostsModel;
pub use posts_state::{Post, PostsState};
