//! Comments of a post.

use common::post::{Comment, PaginationInfo};
use serde_json::{Value, json};

use crate::{ApiClient, ApiError, api::posts::GetPostsParams};

#[derive(Debug, Clone, PartialEq)]
pub struct CommentsPage {
    pub comments: Vec<Comment>,
    pub pagination: PaginationInfo,
}

pub async fn get_comments(client: &ApiClient, post_id: u64, params: &GetPostsParams) -> Result<CommentsPage, ApiError> {
    let body: Value = client
        .get(&format!("/posts/{post_id}/comments/"), &params.to_query_pairs())
        .await?;
    parse_comments_page(body, params, client.config().per_page)
}

pub async fn create_comment(client: &ApiClient, post_id: u64, content: &str) -> Result<Comment, ApiError> {
    let body: Value = client
        .post(&format!("/posts/{post_id}/comment/"), &json!({ "content": content }))
        .await?;
    let comment = body.get("comment").unwrap_or(&body);
    Ok(Comment::from_backend(comment))
}

fn parse_comments_page(body: Value, params: &GetPostsParams, default_per_page: u64) -> Result<CommentsPage, ApiError> {
    let items = match &body {
        Value::Array(items) => items.as_slice(),
        _ => ["comments", "results"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or_default(),
    };
    let comments: Vec<Comment> = items.iter().map(Comment::from_backend).collect();
    let pagination = match body.get("pagination").filter(|value| !value.is_null()) {
        Some(value) => serde_json::from_value(value.clone())?,
        None => PaginationInfo::single_page(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(default_per_page),
            comments.len() as u64,
        ),
    };
    Ok(CommentsPage { comments, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_from_array_body() {
        let page = parse_comments_page(
            json!([{"id": 1, "content": "first"}, {"id": 2, "text": "second"}]),
            &GetPostsParams::default(),
            10,
        )
        .unwrap();
        assert_eq!(page.comments.len(), 2);
        assert_eq!(page.comments[1].content, "second");
        assert_eq!(page.pagination.total_count, 2);
    }

    #[test]
    fn comments_from_results_key() {
        let page = parse_comments_page(
            json!({"results": [{"id": 9, "content": "x"}]}),
            &GetPostsParams::page(3),
            10,
        )
        .unwrap();
        assert_eq!(page.comments[0].id, 9);
        assert_eq!(page.pagination.page, 3);
    }
}
