pub mod browser_history;
pub mod filter_context;
pub mod local_storage_tokens;
