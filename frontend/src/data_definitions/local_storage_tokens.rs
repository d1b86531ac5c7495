//! Token store backed by `window.localStorage`.

use api::TokenStore;
use dioxus::logger::tracing::warn;

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_DATA_KEY: &str = "userData";

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

fn write(key: &str, value: &str) {
    let Some(storage) = storage() else {
        warn!("localStorage unavailable, {key} not saved");
        return;
    };
    if let Err(err) = storage.set_item(key, value) {
        warn!("Failed to save {key}: {err:?}");
    }
}

impl TokenStore for LocalStorageTokens {
    fn access_token(&self) -> Option<String> {
        read(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        read(REFRESH_TOKEN_KEY)
    }

    fn set_access_token(&self, token: &str) {
        write(ACCESS_TOKEN_KEY, token);
    }

    fn set_refresh_token(&self, token: &str) {
        write(REFRESH_TOKEN_KEY, token);
    }

    fn user_data(&self) -> Option<String> {
        read(USER_DATA_KEY)
    }

    fn set_user_data(&self, user_data: &str) {
        write(USER_DATA_KEY, user_data);
    }

    fn clear(&self) {
        let Some(storage) = storage() else {
            warn!("localStorage unavailable, session not cleared");
            return;
        };
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_DATA_KEY] {
            if let Err(err) = storage.remove_item(key) {
                warn!("Failed to remove {key}: {err:?}");
            }
        }
    }
}
