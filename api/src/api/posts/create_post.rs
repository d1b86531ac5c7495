//! Publishing a post as a multipart form.

use common::post::Post;
use reqwest::{
    Method,
    multipart::{Form, Part},
};
use serde_json::Value;
use tracing::debug;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq)]
pub struct MediaUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewPost {
    pub content: String,
    pub category: Option<String>,
    /// Comma separated, as the backend stores them.
    pub tags: Option<String>,
    pub media: Vec<MediaUpload>,
    /// Category specific fields, e.g. the food listing of a `food` post.
    pub attributes: Option<Value>,
}

impl NewPost {
    /// Form fields: `content`, optional `category` / `tags`, one
    /// `media_<index>` file part per upload and `attributes` as JSON text.
    pub fn to_form(&self) -> Form {
        let mut form = Form::new().text("content", self.content.clone());
        if let Some(category) = self.category.as_ref().filter(|c| !c.is_empty()) {
            form = form.text("category", category.clone());
        }
        if let Some(tags) = self.tags.as_ref().filter(|t| !t.is_empty()) {
            form = form.text("tags", tags.clone());
        }
        for (index, media) in self.media.iter().enumerate() {
            let part = Part::bytes(media.bytes.clone()).file_name(media.file_name.clone());
            form = form.part(format!("media_{index}"), part);
        }
        if let Some(attributes) = &self.attributes {
            form = form.text("attributes", attributes.to_string());
        }
        form
    }
}

pub async fn create_post(client: &ApiClient, post: &NewPost) -> Result<Post, ApiError> {
    debug!(category = ?post.category, media = post.media.len(), "creating post");
    let body: Value = client
        .send(Method::POST, "/posts/", &[], |request| request.multipart(post.to_form()))
        .await?;
    super::reactions::post_from_body(body)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::{ApiConfig, MemoryTokenStore};

    #[tokio::test]
    async fn create_post_sends_multipart_fields() {
        let server = MockServer::start();
        let create_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/posts/")
                .body_includes(r#"name="content""#)
                .body_includes("two portions of kebab")
                .body_includes(r#"name="category""#)
                .body_includes(r#"name="media_0"; filename="kebab.jpg""#)
                .body_includes(r#"{"mealType":"lunch","price":45000}"#);
            then.status(201).json_body(json!({
                "success": true,
                "post": {"id": 12, "content": "two portions of kebab", "category": "food"}
            }));
        });

        let client = ApiClient::new(ApiConfig::new(server.base_url()), Arc::new(MemoryTokenStore::new()));
        let post = NewPost {
            content: "two portions of kebab".to_string(),
            category: Some("food".to_string()),
            tags: None,
            media: vec![MediaUpload {
                file_name: "kebab.jpg".to_string(),
                bytes: b"jpeg bytes".to_vec(),
            }],
            attributes: Some(json!({"mealType": "lunch", "price": 45000})),
        };
        let created = create_post(&client, &post).await.unwrap();

        create_mock.assert();
        assert_eq!(created.id, 12);
    }
}
