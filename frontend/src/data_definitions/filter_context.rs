//! Filter state shared by every page through a Dioxus context.

use common::{
    filter_state::FilterStateStore,
    location::FilterMap,
    search_value::FieldKind,
};
use dioxus::prelude::*;

use crate::data_definitions::browser_history::BrowserHistory;

/// Handle to the URL-backed filter store. Reading through it subscribes the
/// component; writing replaces the URL and re-renders subscribers.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterContext {
    store: Signal<FilterStateStore<BrowserHistory>>,
}

impl FilterContext {
    pub fn filters(&self) -> FilterMap {
        self.store.read().filters()
    }

    pub fn get_filter(&self, key: &str, default_value: &str) -> String {
        self.store.read().get_filter(key, default_value)
    }

    pub fn update_filter(&mut self, key: &str, value: &str) {
        self.store.write().update_filter(key, value);
    }

    pub fn set_filters(&mut self, filters: FilterMap) {
        self.store.write().set_filters(filters);
    }

    pub fn reset_filters(&mut self) {
        self.store.write().reset_filters();
    }

    pub fn serialize_search(&self, allowed_keys: Option<&[&str]>) -> Option<String> {
        self.store.read().serialize_search(allowed_keys)
    }

    /// Re-renders readers after the router moved the URL without going
    /// through the store.
    pub fn sync_location(&mut self) {
        if self.store.peek().is_stale() {
            self.store.write().sync_location();
        }
    }
}

/// Typed URL keys of the food exchange page.
pub const FOOD_FILTER_SCHEMA: [(&str, FieldKind); 3] = [
    ("price", FieldKind::NumberRange),
    ("isSoldOut", FieldKind::Boolean),
    ("day", FieldKind::Day),
];

#[component]
pub fn FilterProvider(#[props(default)] default_filters: FilterMap, children: Element) -> Element {
    let store = use_signal(move || {
        FilterStateStore::new(BrowserHistory)
            .with_defaults(default_filters)
            .with_schema(FOOD_FILTER_SCHEMA)
    });
    use_context_provider(|| FilterContext { store });

    rsx! {
        {children}
    }
}

pub fn use_filters() -> FilterContext {
    use_context::<FilterContext>()
}
