//! Data models for the paper browser.
//!
//! This module contains the core data structures shared by the render engine,
//! the filter panel and the web layer: paper records, the conference map and
//! the page context that replaces the template globals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::filter::FilterSelection;

// ============================================================================
// Paper Records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    pub pid: String,
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub pdf_link: String,
    /// HTML-bearing abstract; sanitized before rendering.
    #[serde(default, rename = "abstract")]
    pub abstract_html: Option<String>,
    pub conf_name: String,
    pub composed_conf_id: String,
    /// Extended conference id ("NeurIPS2019", "CVPR2019W").
    #[serde(default)]
    pub conf_id: String,
    /// Recency in [0, 1]; breaks ties between equally relevant search hits.
    #[serde(default)]
    pub tscore: f64,
}

impl Paper {
    /// Extended conference id, falling back to the prefix of `composed_conf_id`
    /// when the record was produced without one.
    pub fn conf_id(&self) -> &str {
        if !self.conf_id.is_empty() {
            return &self.conf_id;
        }
        match self.composed_conf_id.split_once('_') {
            Some((prefix, _)) => prefix,
            None => &self.composed_conf_id,
        }
    }

    /// Titles are only linked when the record carries a real URL.
    pub fn has_link(&self) -> bool {
        self.link.len() > 1
    }
}

// ============================================================================
// Conference Map
// ============================================================================

pub const MAIN_TYPE: &str = "Main";
pub const WORKSHOP_TYPE: &str = "Workshop";

/// Venue name -> year -> paper type tags ("Main" first).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConferenceMap(pub BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl ConferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, venue: &str, year: &str, type_tag: &str) {
        let types = self
            .0
            .entry(venue.to_string())
            .or_default()
            .entry(year.to_string())
            .or_default();
        if !types.iter().any(|t| t == type_tag) {
            types.push(type_tag.to_string());
            types.sort_by(|a, b| type_sort_key(a).cmp(&type_sort_key(b)));
        }
    }

    pub fn venues(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn years(&self, venue: &str) -> Vec<&str> {
        self.0
            .get(venue)
            .map(|years| years.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn latest_year(&self, venue: &str) -> Option<&str> {
        self.0
            .get(venue)
            .and_then(|years| years.keys().next_back())
            .map(String::as_str)
    }

    pub fn types(&self, venue: &str, year: &str) -> &[String] {
        self.0
            .get(venue)
            .and_then(|years| years.get(year))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, venue: &str) -> bool {
        self.0.contains_key(venue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The venue listed first, used as the landing conference.
    pub fn first_venue(&self) -> Option<&str> {
        self.venues().next()
    }
}

/// "Main" sorts before every other tag.
fn type_sort_key(tag: &str) -> (bool, &str) {
    (!tag.eq_ignore_ascii_case(MAIN_TYPE), tag)
}

// ============================================================================
// Page Context
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Single-paper detail view: first paper is the query, the rest are similar.
    Paper,
    Recent,
    Search,
}

/// The navigation state read from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    pub q: Option<String>,
    pub conf: Option<String>,
    pub year: Option<String>,
    pub paper_type: Option<String>,
    pub confs: Option<FilterSelection>,
}

/// Everything a page render needs, passed explicitly instead of as globals.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub papers: &'a [Paper],
    pub conferences: &'a ConferenceMap,
    pub numresults: usize,
    pub render_format: RenderFormat,
    pub msg: String,
    pub include_workshop_papers: bool,
    pub max_years: usize,
    pub navigation: Navigation,
}

// ============================================================================
// API Types
// ============================================================================

/// Response of the incremental "load more" endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoreResponse {
    pub html: String,
    pub next_offset: usize,
    pub exhausted: bool,
}
