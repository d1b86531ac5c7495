//! Search query encoding shared by every list page.
//!
//! Filter values are turned into the JSON object the backend expects in the
//! `search` query parameter:
//!
//! - text is sent as a "contains" regex source: `.*<escaped>.*`
//! - numbers and booleans are sent as-is for exact matching
//! - dates are sent as ISO-8601 strings
//! - ranges become `{"$range": [min, max]}`
//! - text lists become `{"$or": [pattern, ...]}`
//!
//! The free-text search bar term goes under [`WILDCARD_KEY`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};

use crate::search_value::SearchFieldValue;

/// Output key holding the search bar term.
pub const WILDCARD_KEY: &str = "*";

/// URL parameter holding the search bar term.
pub const FREE_TEXT_KEY: &str = "q";

const REGEX_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];


/// Backslash-escapes every regex metacharacter in `value`.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if REGEX_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Regex source matching any string that contains `value` verbatim.
pub fn contains_pattern(value: &str) -> String {
    format!(".*{}.*", escape_regex(value))
}


/// The encoded query, ready to be sent as the `search` parameter.
///
/// Keys keep insertion order, so per-field keys come first and the
/// wildcard key last.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedQuery(Map<String, Value>);

impl SerializedQuery {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// JSON text for the `search` parameter, or `None` for an empty query
    /// so the parameter is left out entirely.
    pub fn to_search_param(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        Some(Value::Object(self.0.clone()).to_string())
    }
}


/// Collects typed fields and the search bar term into a [`SerializedQuery`].
#[derive(Debug, Clone, Default)]
pub struct SearchQueryBuilder {
    fields: Vec<(String, SearchFieldValue)>,
    free_text: Option<String>,
    wildcard_key: Option<String>,
}

impl SearchQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<SearchFieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SearchFieldValue>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn free_text(mut self, term: impl Into<String>) -> Self {
        self.free_text = Some(term.into());
        self
    }

    /// Overrides the output key of the search bar term.
    pub fn wildcard_key(mut self, key: impl Into<String>) -> Self {
        self.wildcard_key = Some(key.into());
        self
    }

    pub fn build(self) -> SerializedQuery {
        let mut query = make_search_query(self.fields);
        if let Some(term) = self.free_text.filter(|term| !term.is_empty()) {
            let key = self.wildcard_key.unwrap_or_else(|| WILDCARD_KEY.to_string());
            query.0.insert(key, Value::String(contains_pattern(&term)));
        }
        query
    }
}


/// Encodes every field; fields whose value has no encoding are omitted.
pub fn make_search_query<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> SerializedQuery
where
    K: Into<String>,
    V: Into<SearchFieldValue>,
{
    let mut query = Map::new();
    for (key, value) in fields {
        let key = key.into();
        match encode_value(value.into()) {
            Some(encoded) => {
                query.insert(key, encoded);
            }
            None => tracing::trace!(key = %key, "search field has no encoding, dropped"),
        }
    }
    SerializedQuery(query)
}

/// Encoding for a single value, `None` if it must be left out.
pub fn encode_value(value: SearchFieldValue) -> Option<Value> {
    match value {
        SearchFieldValue::Null => None,
        SearchFieldValue::Text(text) if text.is_empty() => None,
        SearchFieldValue::Text(text) => Some(Value::String(contains_pattern(&text))),
        SearchFieldValue::Day(day) => Some(Value::String(contains_pattern(day.as_str()))),
        SearchFieldValue::Number(n) => json_number(n),
        SearchFieldValue::Boolean(b) => Some(Value::Bool(b)),
        SearchFieldValue::Date(date) => Some(Value::String(iso_string(&date))),
        SearchFieldValue::NumberRange(min, max) => {
            let range = [json_number(min)?, json_number(max)?];
            Some(json!({ "$range": range }))
        }
        SearchFieldValue::DateRange(min, max) => {
            Some(json!({ "$range": [iso_string(&min), iso_string(&max)] }))
        }
        SearchFieldValue::TextList(items) if items.is_empty() => None,
        SearchFieldValue::TextList(items) => {
            let patterns: Vec<Value> = items
                .iter()
                .map(|item| Value::String(contains_pattern(item)))
                .collect();
            Some(json!({ "$or": patterns }))
        }
    }
}

// Integral values print without a fraction, the way browsers encode numbers.
// Integral values are written without a fraction or exponent up to the u64
// range; past 2^64 serde_json falls back to exponent notation (`1e20`).
fn json_number(n: f64) -> Option<Value> {
    if !n.is_finite() {
        return None;
    }
    if n.fract() == 0.0 {
        if n.abs() < i64::MAX as f64 {
            return Some(Value::Number(Number::from(n as i64)));
        }
        if n > 0.0 && n < u64::MAX as f64 {
            return Some(Value::Number(Number::from(n as u64)));
        }
    }
    Number::from_f64(n).map(Value::Number)
}

fn iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
