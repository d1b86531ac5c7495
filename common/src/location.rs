//! Browser location value and query-string helpers.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Filter key -> raw filter value, as read from the URL.
pub type FilterMap = BTreeMap<String, String>;


/// Path and query string of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Query string without the leading `?`.
    pub search: String,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        let search = search.into();
        Self {
            pathname: pathname.into(),
            search: search.strip_prefix('?').unwrap_or(&search).to_string(),
        }
    }

    pub fn query(&self) -> FilterMap {
        parse_query(&self.search)
    }

    pub fn with_query(&self, params: &FilterMap) -> Self {
        Self {
            pathname: self.pathname.clone(),
            search: encode_query(params),
        }
    }
}

// Display gives the string handed to the router: path alone when there are no params.
impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.search.is_empty() {
            write!(f, "{}", self.pathname)
        } else {
            write!(f, "{}?{}", self.pathname, self.search)
        }
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let without_fragment = s.split_once('#').map(|(head, _)| head).unwrap_or(s);
        Ok(match without_fragment.split_once('?') {
            Some((pathname, search)) => Location::new(pathname, search),
            None => Location::new(without_fragment, ""),
        })
    }
}


/// Decodes a form-urlencoded query string. A repeated key keeps its last value.
pub fn parse_query(search: &str) -> FilterMap {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut params = FilterMap::new();
    for (key, value) in url::form_urlencoded::parse(search.as_bytes()) {
        params.insert(key.into_owned(), value.into_owned());
    }
    params
}

/// Encodes params as a form-urlencoded query string.
pub fn encode_query(params: &FilterMap) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}
