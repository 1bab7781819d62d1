//! Permissive query-string reader.
//!
//! Mirrors what browsers tolerate: a pair without `=` yields an empty value,
//! repeated keys keep every value in order, and bad percent escapes decode
//! lossily instead of failing the request.

use url::form_urlencoded;

use crate::filter::FilterSelection;
use crate::models::Navigation;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or("");
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self {
            pairs: form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First non-empty value for `key`.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn navigation(&self) -> Navigation {
        Navigation {
            q: self.get("q").map(str::to_string),
            conf: self.get_non_empty("conf").map(str::to_string),
            year: self.get_non_empty("year").map(str::to_string),
            paper_type: self.get_non_empty("type").map(str::to_string),
            confs: self.get("confs").map(FilterSelection::parse),
        }
    }
}
