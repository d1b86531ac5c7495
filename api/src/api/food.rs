//! Food exchange listings: posts of the `food` category.

use common::post::FoodItem;

use crate::{
    ApiClient, ApiError,
    api::posts::{GetPostsParams, get_posts},
};

pub const FOOD_CATEGORY: &str = "food";

/// Filter keys the food list sends to the backend.
pub const FOOD_SEARCH_KEYS: [&str; 4] = ["mealType", "location", "day", "name"];

pub async fn get_food_items(client: &ApiClient, search: Option<String>) -> Result<Vec<FoodItem>, ApiError> {
    let params = GetPostsParams {
        category: Some(FOOD_CATEGORY.to_string()),
        search,
        ..Default::default()
    };
    let response = get_posts(client, &params).await?;
    Ok(response
        .posts
        .iter()
        .map(|post| {
            let mut item = FoodItem::from_post_attributes(&post.attributes);
            if item.id.is_empty() {
                item.id = post.id.to_string();
            }
            item
        })
        .collect())
}
