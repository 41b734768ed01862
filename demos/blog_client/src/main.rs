use crate::posts::{PostsModel, PostsState};
use crate::tracing_setup::tracing_init;
use futures::stream::StreamExt;
use thunkstore::StoreStreamExt;
use tracing::{info, warn};

mod api;
mod posts;
mod tracing_setup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init();

    let model = PostsModel::new();
    let store = model.store();

    tokio::spawn(async move {
        // "/" — the list view mounts and fetches all posts.
        model.get_posts().await;
        // "/2" — the detail view fetches one post by id.
        model.get_post(2).await;
        // "/42" — a missing post; the detail view shows the failure.
        model.get_post(42).await;
    });

    store
        .to_stream()
        .stop_when(|state| state.post.is_failed())
        .for_each(|state| {
            render_list(&state);
            render_detail(&state);
            async {}
        })
        .await;

    info!("stream settled, shutting down");
    Ok(())
}

fn render_list(state: &PostsState) {
    if state.posts.is_loading() {
        info!("  list | loading...");
    } else if let Some(error) = state.posts.failure() {
        warn!("  list | error: {error}");
    } else if let Some(posts) = state.posts.data() {
        for post in posts {
            info!("  list | #{} {}", post.id, post.title);
        }
    } else {
        info!("  list | (not fetched yet)");
    }
}

fn render_detail(state: &PostsState) {
    if state.post.is_loading() {
        info!("detail | loading...");
    } else if let Some(error) = state.post.failure() {
        warn!("detail | error: {error}");
    } else if let Some(post) = state.post.data() {
        info!("detail | #{} {}: {}", post.id, post.title, post.body);
    } else {
        info!("detail | (no post opened)");
    }
}
