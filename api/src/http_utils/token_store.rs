//! Storage for the access and refresh tokens, and the logged-in user's profile.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tokens {
    pub access: String,
    pub refresh: String,
}

pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_access_token(&self, token: &str);
    fn set_refresh_token(&self, token: &str);
    /// Profile JSON returned by login.
    fn user_data(&self) -> Option<String>;
    fn set_user_data(&self, user_data: &str);
    /// Forgets tokens and user data.
    fn clear(&self);

    fn set_tokens(&self, tokens: &Tokens) {
        self.set_access_token(&tokens.access);
        self.set_refresh_token(&tokens.refresh);
    }
}

#[derive(Debug, Default)]
struct Session {
    access: Option<String>,
    refresh: Option<String>,
    user_data: Option<String>,
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: RwLock<Session>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        f(&self.session.read().unwrap_or_else(|e| e.into_inner()))
    }

    fn write(&self, f: impl FnOnce(&mut Session)) {
        f(&mut self.session.write().unwrap_or_else(|e| e.into_inner()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.read(|session| session.access.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.read(|session| session.refresh.clone())
    }

    fn set_access_token(&self, token: &str) {
        self.write(|session| session.access = Some(token.to_string()));
    }

    fn set_refresh_token(&self, token: &str) {
        self.write(|session| session.refresh = Some(token.to_string()));
    }

    fn user_data(&self) -> Option<String> {
        self.read(|session| session.user_data.clone())
    }

    fn set_user_data(&self, user_data: &str) {
        self.write(|session| session.user_data = Some(user_data.to_string()));
    }

    fn clear(&self) {
        self.write(|session| *session = Session::default());
    }
}
