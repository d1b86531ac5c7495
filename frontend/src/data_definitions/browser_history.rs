//! `History` over the browser's `window.location` and `history.replaceState`.

use common::{filter_state::History, location::Location};
use dioxus::logger::tracing::warn;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn location(&self) -> Location {
        let Some(window) = web_sys::window() else {
            return Location::default();
        };
        let location = window.location();
        Location::new(
            location.pathname().unwrap_or_default(),
            location.search().unwrap_or_default(),
        )
    }

    fn replace(&mut self, location: Location) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let url = location.to_string();
        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = result {
            warn!("Failed to replace url with {url}: {err:?}");
        }
    }
}
