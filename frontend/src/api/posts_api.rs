//! Client API calls for the list pages.

use std::sync::Arc;

use api::{
    ApiClient, ApiConfig, ApiError,
    api::{
        food::{FOOD_SEARCH_KEYS, get_food_items},
        posts::{GetPostsParams, GetPostsResponse, dislike_post, get_posts, like_post, remove_reaction},
    },
    config::DEFAULT_BASE_URL,
};
use common::post::{FoodItem, Post};
use dioxus::{logger::tracing::info, prelude::*};

use crate::data_definitions::local_storage_tokens::LocalStorageTokens;

pub const DISCUSSION_PAGE_SIZE: u64 = 10;

pub fn new_api_client() -> ApiClient {
    let base_url = option_env!("ELMOSYAR_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL);
    info!("Using backend at {base_url}");
    ApiClient::new(ApiConfig::new(base_url), Arc::new(LocalStorageTokens))
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>()
}

/// Puts the backend's own message, when it sent one, in front of the error.
fn with_backend_message(err: ApiError) -> anyhow::Error {
    match err.backend_message() {
        Some(message) => anyhow::Error::new(err).context(message),
        None => err.into(),
    }
}

pub async fn fetch_food_items(client: ApiClient, search: Option<String>) -> anyhow::Result<Vec<FoodItem>> {
    get_food_items(&client, search).await.map_err(with_backend_message)
}

/// Only the filter keys the food list understands go into its search.
pub fn food_search_keys() -> &'static [&'static str] {
    &FOOD_SEARCH_KEYS
}

pub async fn fetch_discussion_posts(client: ApiClient, page: u64, search: Option<String>) -> anyhow::Result<GetPostsResponse> {
    let params = GetPostsParams {
        page: Some(page),
        per_page: Some(DISCUSSION_PAGE_SIZE),
        search,
        ..Default::default()
    };
    get_posts(&client, &params).await.map_err(with_backend_message)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactionAction {
    Like,
    Dislike,
}

/// Applies a reaction click the way the feed shows it: clicking the active
/// reaction again removes it.
pub async fn react_to_post(client: ApiClient, post: Post, action: ReactionAction) -> anyhow::Result<Post> {
    let updated = match action {
        ReactionAction::Like if post.is_liked => remove_reaction(&client, post.id).await,
        ReactionAction::Dislike if post.is_disliked => remove_reaction(&client, post.id).await,
        ReactionAction::Like => like_post(&client, post.id).await,
        ReactionAction::Dislike => dislike_post(&client, post.id).await,
    };
    updated.map_err(with_backend_message)
}
