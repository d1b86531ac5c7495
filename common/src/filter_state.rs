//! URL-backed filter state.
//!
//! The URL query string is the only persisted copy of the active filters.
//! Every read re-derives a [`FilterMap`] from the current location, and every
//! write builds a new map and replaces the location with it. Replace (not
//! push) keeps filter tweaks out of the back-button history.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    location::{FilterMap, Location},
    search_query::{FREE_TEXT_KEY, SearchQueryBuilder, WILDCARD_KEY},
    search_value::{FieldKind, SearchFieldValue},
};


/// Navigation seam between the store and whatever owns the URL.
pub trait History {
    fn location(&self) -> Location;

    /// Replaces the current entry, without adding a history entry.
    fn replace(&mut self, location: Location);
}

/// In-process history. Keeps every replaced location for inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryHistory {
    current: Location,
    replaced: Vec<Location>,
}

impl MemoryHistory {
    pub fn new(location: Location) -> Self {
        Self {
            current: location,
            replaced: Vec::new(),
        }
    }

    pub fn replaced(&self) -> &[Location] {
        &self.replaced
    }
}

impl History for MemoryHistory {
    fn location(&self) -> Location {
        self.current.clone()
    }

    fn replace(&mut self, location: Location) {
        self.current = location.clone();
        self.replaced.push(location);
    }
}


/// Active filters of a page, backed by its URL.
#[derive(Debug, Clone)]
pub struct FilterStateStore<H: History> {
    history: H,
    defaults: FilterMap,
    schema: BTreeMap<String, FieldKind>,
    wildcard_key: String,
    // location as of the last write or sync
    observed: Location,
}

impl<H: History> FilterStateStore<H> {
    pub fn new(history: H) -> Self {
        Self {
            observed: history.location(),
            history,
            defaults: FilterMap::new(),
            schema: BTreeMap::new(),
            wildcard_key: WILDCARD_KEY.to_string(),
        }
    }

    pub fn with_defaults(mut self, defaults: FilterMap) -> Self {
        self.defaults = defaults;
        self
    }

    /// Types URL values of the listed keys; other keys stay text.
    pub fn with_schema<K: Into<String>>(mut self, schema: impl IntoIterator<Item = (K, FieldKind)>) -> Self {
        self.schema = schema.into_iter().map(|(k, kind)| (k.into(), kind)).collect();
        self
    }

    pub fn with_wildcard_key(mut self, key: impl Into<String>) -> Self {
        self.wildcard_key = key.into();
        self
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn defaults(&self) -> &FilterMap {
        &self.defaults
    }

    /// Whether the URL was changed by someone else (link, back button)
    /// since the store last wrote or synced it.
    pub fn is_stale(&self) -> bool {
        self.history.location() != self.observed
    }

    /// Accepts the current URL as seen. Returns whether it had moved.
    pub fn sync_location(&mut self) -> bool {
        let current = self.history.location();
        if current == self.observed {
            return false;
        }
        debug!(from = %self.observed, to = %current, "url changed outside the store");
        self.observed = current;
        true
    }

    /// URL parameters, with defaults filled in for keys the URL lacks.
    pub fn filters(&self) -> FilterMap {
        let mut filters = self.history.location().query();
        for (key, default_value) in &self.defaults {
            filters
                .entry(key.clone())
                .or_insert_with(|| default_value.clone());
        }
        filters
    }

    pub fn get_filter(&self, key: &str, default_value: &str) -> String {
        self.filters()
            .get(key)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| default_value.to_string())
    }

    pub fn update_filter(&mut self, key: &str, value: &str) {
        let mut filters = self.filters();
        filters.insert(key.to_string(), value.to_string());
        debug!(key, value, "update filter");
        self.update_url(&filters);
    }

    pub fn set_filters(&mut self, filters: FilterMap) {
        debug!(count = filters.len(), "set filters");
        self.update_url(&filters);
    }

    pub fn reset_filters(&mut self) {
        debug!("reset filters");
        let defaults = self.defaults.clone();
        self.update_url(&defaults);
    }

    /// JSON for the backend `search` parameter, `None` if nothing is active.
    ///
    /// The free-text key is never typed; it is merged under the wildcard key.
    /// With `allowed_keys`, every other key outside that list is ignored.
    pub fn serialize_search(&self, allowed_keys: Option<&[&str]>) -> Option<String> {
        let filters = self.filters();
        let fields = filters
            .iter()
            .filter(|(key, _)| key.as_str() != FREE_TEXT_KEY)
            .filter(|(key, _)| allowed_keys.is_none_or(|allowed| allowed.contains(&key.as_str())))
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(key, value)| Some((key.clone(), self.typed_value(key, value)?)));

        let mut builder = SearchQueryBuilder::new()
            .fields(fields)
            .wildcard_key(self.wildcard_key.clone());
        if let Some(term) = filters.get(FREE_TEXT_KEY) {
            builder = builder.free_text(term.clone());
        }
        builder.build().to_search_param()
    }

    fn typed_value(&self, key: &str, raw: &str) -> Option<SearchFieldValue> {
        let kind = self.schema.get(key).copied().unwrap_or_default();
        let value = kind.parse(raw);
        if value.is_none() {
            debug!(key, raw, ?kind, "filter value does not parse, dropped");
        }
        value
    }

    // Empty values and values equal to their default never reach the URL.
    fn update_url(&mut self, filters: &FilterMap) {
        let params: FilterMap = filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .filter(|(key, value)| self.defaults.get(key.as_str()) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let location = self.history.location().with_query(&params);
        debug!(url = %location, "replace url");
        self.history.replace(location.clone());
        self.observed = location;
    }
}
