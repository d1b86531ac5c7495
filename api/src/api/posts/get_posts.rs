//! Paginated post lists, optionally narrowed by a serialized search query.

use common::post::{BackendPost, PaginationInfo, Post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetPostsParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub category: Option<String>,
    pub username: Option<String>,
    /// JSON produced by `FilterStateStore::serialize_search`.
    pub search: Option<String>,
}

impl GetPostsParams {
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    /// Query pairs in a fixed order; absent fields are left out.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        for (key, value) in [
            ("category", &self.category),
            ("username", &self.username),
            ("search", &self.search),
        ] {
            if let Some(value) = value {
                pairs.push((key.to_string(), value.clone()));
            }
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetPostsResponse {
    pub posts: Vec<Post>,
    pub pagination: PaginationInfo,
}

pub async fn get_posts(client: &ApiClient, params: &GetPostsParams) -> Result<GetPostsResponse, ApiError> {
    debug!(?params, "fetching posts");
    let body: Value = client.get("/posts/", &params.to_query_pairs()).await?;
    let default_per_page = client.config().per_page;
    parse_posts_response(body, params, default_per_page)
}

pub async fn get_post(client: &ApiClient, post_id: u64) -> Result<Post, ApiError> {
    let post: BackendPost = client.get(&format!("/posts/{post_id}/"), &[]).await?;
    Ok(post.into())
}

/// The list endpoint has answered with `{posts}`, `{results}` and bare arrays.
pub fn parse_posts_response(
    mut body: Value,
    params: &GetPostsParams,
    default_per_page: u64,
) -> Result<GetPostsResponse, ApiError> {
    let pagination = body
        .get_mut("pagination")
        .map(Value::take)
        .filter(|value| !value.is_null());
    let raw_posts = extract_posts(body);

    let posts = raw_posts
        .into_iter()
        .map(|raw| serde_json::from_value::<BackendPost>(raw).map(Post::from))
        .collect::<Result<Vec<_>, _>>()?;

    let pagination = match pagination {
        Some(value) => serde_json::from_value(value)?,
        None => PaginationInfo::single_page(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(default_per_page),
            posts.len() as u64,
        ),
    };
    Ok(GetPostsResponse { posts, pagination })
}

fn extract_posts(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("posts").or_else(|| map.remove("results")) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::{ApiConfig, MemoryTokenStore};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(server.base_url()), Arc::new(MemoryTokenStore::new()))
    }

    fn raw_post(id: u64) -> Value {
        json!({
            "id": id,
            "author_info": {"id": 1, "username": "u", "first_name": "", "last_name": ""},
            "created_at": "2024-01-01T00:00:00Z",
            "category": "food",
            "attributes": {"name": "Kebab"}
        })
    }

    #[test]
    fn query_pairs_skip_absent_fields() {
        let params = GetPostsParams {
            page: Some(2),
            category: Some("food".to_string()),
            search: Some(r#"{"*":".*kebab.*"}"#.to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("category".to_string(), "food".to_string()),
                ("search".to_string(), r#"{"*":".*kebab.*"}"#.to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_empty_params() {
        assert!(GetPostsParams::default().to_query_pairs().is_empty());
    }

    #[test]
    fn parse_posts_key_with_pagination() {
        let body = json!({
            "posts": [raw_post(1), raw_post(2)],
            "pagination": {"page": 1, "per_page": 10, "total_pages": 2, "total_count": 12, "has_next": true, "has_previous": false}
        });
        let response = parse_posts_response(body, &GetPostsParams::page(1), 10).unwrap();
        assert_eq!(response.posts.len(), 2);
        assert!(response.pagination.has_more());
    }

    #[test]
    fn parse_results_key_and_bare_array() {
        let response =
            parse_posts_response(json!({"results": [raw_post(3)]}), &GetPostsParams::default(), 10).unwrap();
        assert_eq!(response.posts[0].id, 3);
        assert_eq!(response.pagination, PaginationInfo::single_page(1, 10, 1));

        let response = parse_posts_response(json!([raw_post(4)]), &GetPostsParams::page(2), 5).unwrap();
        assert_eq!(response.posts[0].id, 4);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.per_page, 5);
    }

    #[test]
    fn parse_unknown_shape_is_empty() {
        let response = parse_posts_response(json!({"detail": "nothing"}), &GetPostsParams::default(), 10).unwrap();
        assert!(response.posts.is_empty());
        assert_eq!(response.pagination.total_count, 0);
    }

    #[tokio::test]
    async fn get_posts_sends_search_parameter() {
        let server = MockServer::start();
        let search = r#"{"mealType":".*lunch.*","*":".*kebab.*"}"#;
        let posts_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/posts/")
                .query_param("page", "1")
                .query_param("category", "food")
                .query_param("search", search);
            then.status(200).json_body(json!({"posts": [raw_post(9)]}));
        });

        let params = GetPostsParams {
            page: Some(1),
            category: Some("food".to_string()),
            search: Some(search.to_string()),
            ..Default::default()
        };
        let response = get_posts(&client_for(&server), &params).await.unwrap();

        posts_mock.assert();
        assert_eq!(response.posts[0].id, 9);
    }

    #[tokio::test]
    async fn get_posts_without_search_leaves_parameter_out() {
        let server = MockServer::start();
        let posts_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/posts/")
                .query_param("page", "2")
                .query_param_missing("search");
            then.status(200).json_body(json!([]));
        });

        let response = get_posts(&client_for(&server), &GetPostsParams::page(2)).await.unwrap();

        posts_mock.assert();
        assert!(response.posts.is_empty());
        assert_eq!(response.pagination.page, 2);
    }
}
