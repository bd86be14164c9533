//! Sort selection persisted in the page's query string.
//!
//! The browsing context is abstracted as a key-value view over query
//! parameters so the listing logic stays testable without a real location.
//! Production code hands in a `url::Url`; tests use a plain map.

use std::collections::HashMap;

use url::Url;

use crate::catalog::types::SortDirection;

/// Query parameter holding the sort attribute code.
pub const PRODUCT_LIST_ORDER: &str = "product_list_order";
/// Query parameter holding the sort direction.
pub const PRODUCT_LIST_DIRECTION: &str = "product_list_direction";

/// Key-value view over a page's query parameters.
pub trait QueryParams {
    /// Current value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;
    /// Set `key` to `value`, replacing any existing value in place.
    fn set(&mut self, key: &str, value: &str);
    /// Drop `key` entirely.
    fn remove(&mut self, key: &str);
}

impl QueryParams for Url {
    fn get(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }

        write_pairs(self, &pairs);
    }

    fn remove(&mut self, key: &str) {
        let pairs: Vec<(String, String)> = self
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .filter(|(k, _)| k != key)
            .collect();

        write_pairs(self, &pairs);
    }
}

fn write_pairs(url: &mut Url, pairs: &[(String, String)]) {
    if pairs.is_empty() {
        url.set_query(None);
        return;
    }

    let mut serializer = url.query_pairs_mut();
    serializer.clear();
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
}

impl QueryParams for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        Self::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        Self::remove(self, key);
    }
}

/// Sort selection restored from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSelection {
    /// Attribute code, passed through without validation; a stale value
    /// flows into the next search request as-is.
    pub order: Option<String>,
    /// Direction; only the exact wire tokens are accepted.
    pub direction: SortDirection,
}

/// Read the persisted sort selection.
#[must_use]
pub fn read_sort(params: &impl QueryParams) -> SortSelection {
    let order = params.get(PRODUCT_LIST_ORDER);
    let direction = match params.get(PRODUCT_LIST_DIRECTION).as_deref() {
        Some("ASC") => SortDirection::Asc,
        Some("DESC") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };

    SortSelection { order, direction }
}

/// Persist a sort selection into the query string.
pub fn write_sort(params: &mut impl QueryParams, attribute: &str, direction: SortDirection) {
    params.set(PRODUCT_LIST_ORDER, attribute);
    params.set(PRODUCT_LIST_DIRECTION, direction.as_str());
}
