//! Simulated remote blog API. Stands in for HTTP calls: one parameter in,
//! an asynchronous result or failure out, nothing else assumed.

use crate::posts::Post;
use std::time::Duration;
use tokio::time::sleep;

const POSTS_JSON: &str = r#"[
    { "id": 1, "title": "Learning the thunk pattern", "body": "Wrap any async call into start, success and error events." },
    { "id": 2, "title": "Reducers without boilerplate", "body": "One fragment per resource, derived from a single base type." },
    { "id": 3, "title": "Stale data while revalidating", "body": "Keep the old list on screen until the refetch settles." }
]"#;

const NETWORK_DELAY: Duration = Duration::from_millis(300);

pub async fn fetch_posts(_: ()) -> Result<Vec<Post>, String> {
    sleep(NETWORK_DELAY).await;
    serde_json::from_str(POSTS_JSON).map_err(|error| error.to_string())
}

pub async fn fetch_post_by_id(id: u64) -> Result<Post, String> {
    sleep(NETWORK_DELAY).await;
    let posts: Vec<Post> = serde_json::from_str(POSTS_JSON).map_err(|error| error.to_string())?;
    posts
        .into_iter()
        .find(|post| post.id == id)
        .ok_or_else(|| format!("no post with id {id}"))
}
