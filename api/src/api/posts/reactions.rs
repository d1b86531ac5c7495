//! Like / dislike toggles on a post.

use common::post::{BackendPost, Post};
use serde_json::{Value, json};

use crate::{ApiClient, ApiError};

pub async fn like_post(client: &ApiClient, post_id: u64) -> Result<Post, ApiError> {
    react(client, post_id, "like").await
}

pub async fn dislike_post(client: &ApiClient, post_id: u64) -> Result<Post, ApiError> {
    react(client, post_id, "dislike").await
}

pub async fn remove_reaction(client: &ApiClient, post_id: u64) -> Result<Post, ApiError> {
    react(client, post_id, "remove_reaction").await
}

async fn react(client: &ApiClient, post_id: u64, action: &str) -> Result<Post, ApiError> {
    let body: Value = client.post(&format!("/posts/{post_id}/{action}/"), &json!({})).await?;
    post_from_body(body)
}

// the updated post comes either wrapped in `post` or as the whole body
pub(super) fn post_from_body(mut body: Value) -> Result<Post, ApiError> {
    let post = match body.get_mut("post").map(Value::take) {
        Some(post) => post,
        None => body,
    };
    let post: BackendPost = serde_json::from_value(post)?;
    Ok(post.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_from_body_wrapped_or_bare() {
        let inner = json!({"id": 5, "likes_count": 3, "user_reaction": "like"});
        let wrapped = post_from_body(json!({"success": true, "post": inner.clone()})).unwrap();
        let bare = post_from_body(inner).unwrap();
        assert_eq!(wrapped, bare);
        assert!(bare.is_liked);
        assert_eq!(bare.likes, 3);
    }
}
