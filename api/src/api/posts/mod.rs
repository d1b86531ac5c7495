//! Post endpoints and module exports.

mod get_posts;
pub use get_posts::{GetPostsParams, GetPostsResponse, get_post, get_posts, parse_posts_response};

mod reactions;
pub use reactions::{dislike_post, like_post, remove_reaction};

mod comments;
pub use comments::{CommentsPage, create_comment, get_comments};

mod create_post;
pub use create_post::{MediaUpload, NewPost, create_post};
