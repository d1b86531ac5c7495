//! Backend endpoints, one module per resource.

pub mod auth;
pub mod food;
pub mod posts;
