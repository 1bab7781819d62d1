//! Outgoing navigation URLs.
//!
//! All links the page emits are built here so that encoding rules live in one
//! place: search terms use form encoding (spaces become `+`), path segments and
//! query values use percent encoding.

use url::form_urlencoded;

use crate::filter::FilterSelection;

fn form_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `/search?q=<term>`, used for author and venue links.
pub fn search_url(term: &str) -> String {
    format!("/search?q={}", form_encode(term))
}

/// `/<pid>`; the server completes it with the remembered filter.
pub fn paper_url(pid: &str) -> String {
    format!("/{}", urlencoding::encode(pid))
}

/// `/<pid>?confs=<filter>`, the similarity view.
pub fn similar_url(pid: &str, selection: &FilterSelection) -> String {
    let confs = selection
        .to_query_value()
        .split(',')
        .map(form_encode)
        .collect::<Vec<_>>()
        .join(",");
    format!("/{}?confs={}", urlencoding::encode(pid), confs)
}

/// `/<pid>/filter`, target of the filter panel form.
pub fn filter_action_url(pid: &str) -> String {
    format!("/{}/filter", urlencoding::encode(pid))
}

/// `/?conf=<name>&year=<year>[&type=<type>]`, venue navigation.
pub fn venue_url(conf: &str, year: &str, paper_type: Option<&str>) -> String {
    let mut url = format!("/?conf={}&year={}", form_encode(conf), form_encode(year));
    if let Some(t) = paper_type {
        url.push_str("&type=");
        url.push_str(&form_encode(t));
    }
    url
}
