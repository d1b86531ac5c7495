//! Common library shared between the API client and the frontend:
//! URL-backed filter state and the search query encoding.

pub mod location;
pub mod filter_state;
pub mod search_query;
pub mod search_value;
pub mod post;
