pub mod posts_api;
