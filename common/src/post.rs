//! Post, comment and pagination models shared by the client and the pages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_AVATAR: &str = "/default-avatar.png";
pub const ANONYMOUS_NAME: &str = "کاربر ناشناس";


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BackendUser {
    pub id: u64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Media {
    pub id: u64,
    pub url: String,
    pub media_type: String,
    pub caption: String,
    pub order: u32,
    pub file_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

/// Post as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BackendPost {
    pub id: u64,
    pub author_info: BackendUser,
    pub content: String,
    pub created_at: String,
    pub tags: Option<String>,
    pub media: Vec<Media>,
    pub category: String,
    pub likes_count: u64,
    pub dislikes_count: u64,
    pub comments_count: u64,
    pub user_reaction: Option<Reaction>,
    pub attributes: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub avatar: String,
    pub username: String,
}

/// Post as shown in the feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub user: User,
    pub content: String,
    pub timestamp: String,
    pub likes: u64,
    pub dislikes: u64,
    pub comments: u64,
    pub is_liked: bool,
    pub is_disliked: bool,
    pub category: String,
    pub media: Vec<Media>,
    pub tags: Vec<String>,
    pub attributes: Value,
}

impl From<BackendPost> for Post {
    fn from(post: BackendPost) -> Self {
        let author = post.author_info;
        let full_name = format!("{} {}", author.first_name, author.last_name)
            .trim()
            .to_string();
        let name = if full_name.is_empty() { author.username.clone() } else { full_name };
        let avatar = author
            .profile_picture
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
        // the body of a post lives in its attributes, content is a fallback
        let content = post
            .attributes
            .get("body")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or(post.content);

        Post {
            id: post.id,
            user: User {
                id: author.id,
                name,
                avatar,
                username: author.username,
            },
            content,
            timestamp: post.created_at,
            likes: post.likes_count,
            dislikes: post.dislikes_count,
            comments: post.comments_count,
            is_liked: post.user_reaction == Some(Reaction::Like),
            is_disliked: post.user_reaction == Some(Reaction::Dislike),
            category: post.category,
            media: post.media,
            tags: split_tags(post.tags.as_deref().unwrap_or_default()),
            attributes: post.attributes,
        }
    }
}

pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaginationInfo {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_count: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationInfo {
    /// Used when the backend answers without pagination.
    pub fn single_page(page: u64, per_page: u64, total_count: u64) -> Self {
        Self {
            page,
            per_page,
            total_pages: 1,
            total_count,
            has_next: false,
            has_previous: page > 1,
        }
    }

    pub fn has_more(&self) -> bool {
        self.has_next || self.total_pages > self.page
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub user: User,
    pub content: String,
    pub timestamp: String,
    pub likes: u64,
    pub is_liked: bool,
}

impl Comment {
    /// Maps the loosely shaped comment JSON of the backend. Older endpoints
    /// use `user`/`text`/`timestamp`, newer ones `author`/`content`/`created_at`.
    pub fn from_backend(value: &Value) -> Self {
        let author = value.get("author").or_else(|| value.get("user"));
        let author_str = |keys: &[&str]| -> Option<String> {
            let author = author?;
            keys.iter()
                .find_map(|key| author.get(*key).and_then(Value::as_str))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let str_field = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str))
                .map(str::to_string)
        };

        Comment {
            id: value.get("id").and_then(Value::as_u64).unwrap_or_default(),
            user: User {
                id: author
                    .and_then(|a| a.get("id"))
                    .and_then(Value::as_u64)
                    .unwrap_or(1),
                name: author_str(&["first_name", "name"]).unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
                avatar: author_str(&["profile_picture", "avatar"]).unwrap_or_default(),
                username: author_str(&["username"]).unwrap_or_else(|| "user".to_string()),
            },
            content: str_field(&["content", "text"]).unwrap_or_default(),
            timestamp: str_field(&["created_at", "timestamp"]).unwrap_or_default(),
            likes: ["likes_count", "likes"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_u64))
                .unwrap_or_default(),
            is_liked: ["is_liked", "liked"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_bool))
                .unwrap_or_default(),
        }
    }
}


/// Food exchange listing, carried in the attributes of a `food` post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub meal_type: String,
    pub location: String,
    pub date: String,
    pub price: f64,
    pub is_sold_out: bool,
}

impl FoodItem {
    pub fn from_post_attributes(attributes: &Value) -> Self {
        let text = |key: &str| -> String {
            match attributes.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => String::new(),
            }
        };
        let price = match attributes.get("price") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0.0,
        };
        FoodItem {
            id: text("id"),
            name: text("name"),
            meal_type: text("mealType"),
            location: text("location"),
            date: text("date"),
            price,
            // the backend stores this flag as a string
            is_sold_out: attributes.get("isSoldOut").and_then(Value::as_str) == Some("true"),
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn backend_post() -> BackendPost {
        serde_json::from_value(json!({
            "id": 7,
            "author_info": {
                "id": 3,
                "username": "sara",
                "first_name": "Sara",
                "last_name": "",
                "profile_picture": null
            },
            "content": "raw",
            "created_at": "2024-05-01T10:00:00Z",
            "tags": "exam, math ,,",
            "media": [],
            "category": "discussion",
            "likes_count": 4,
            "dislikes_count": 1,
            "comments_count": 2,
            "user_reaction": "dislike",
            "attributes": {"body": "When is the exam?"}
        }))
        .unwrap()
    }

    #[test]
    fn post_from_backend() {
        let post = Post::from(backend_post());
        assert_eq!(post.user.name, "Sara");
        assert_eq!(post.user.avatar, DEFAULT_AVATAR);
        assert_eq!(post.content, "When is the exam?");
        assert_eq!(post.tags, vec!["exam".to_string(), "math".to_string()]);
        assert!(post.is_disliked);
        assert!(!post.is_liked);
    }

    #[test]
    fn post_name_falls_back_to_username() {
        let mut raw = backend_post();
        raw.author_info.first_name = String::new();
        raw.attributes = Value::Null;
        let post = Post::from(raw);
        assert_eq!(post.user.name, "sara");
        assert_eq!(post.content, "raw");
    }

    #[test]
    fn comment_from_either_shape() {
        let newer = Comment::from_backend(&json!({
            "id": 1,
            "author": {"id": 9, "first_name": "Ali", "username": "ali"},
            "content": "hi",
            "created_at": "2024-01-01",
            "likes_count": 2,
            "is_liked": true
        }));
        assert_eq!(newer.user.name, "Ali");
        assert_eq!(newer.likes, 2);
        assert!(newer.is_liked);

        let older = Comment::from_backend(&json!({"id": 2, "text": "yo"}));
        assert_eq!(older.user.id, 1);
        assert_eq!(older.user.name, ANONYMOUS_NAME);
        assert_eq!(older.user.username, "user");
        assert_eq!(older.content, "yo");
    }

    #[test]
    fn food_item_from_attributes() {
        let item = FoodItem::from_post_attributes(&json!({
            "id": "f1",
            "name": "Kebab",
            "mealType": "lunch",
            "location": "yas",
            "date": "2024-05-04",
            "price": "45000",
            "isSoldOut": "true"
        }));
        assert_eq!(item.price, 45000.0);
        assert!(item.is_sold_out);
        assert_eq!(item.meal_type, "lunch");
    }

    #[test]
    fn pagination_has_more() {
        assert!(PaginationInfo { page: 1, total_pages: 3, ..Default::default() }.has_more());
        assert!(!PaginationInfo::single_page(1, 10, 4).has_more());
    }
}
