//! HTTP route handlers for the web application.
//!
//! Each list view (conference listing, search, similar papers) renders its
//! first batch into the page; `/api/more` serves the following batches of the
//! same view. The filter panel submits to `/<pid>/filter`, which remembers the
//! selection in the `confs` cookie before navigating.

use crate::dataset::View;
use crate::error::AppError;
use crate::filter::{FilterPanel, FilterSelection};
use crate::links::{similar_url, venue_url};
use crate::models::{MoreResponse, Navigation, PageContext, RenderFormat, MAIN_TYPE};
use crate::pagination::{RenderEngine, SCROLL_BATCH};
use crate::query::QueryParams;
use crate::templates::{render_batch, render_page};
use crate::{AppState, FILTER_COOKIE, FILTER_COOKIE_DAYS};
use axum::{
    extract::{Path, RawQuery, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use std::sync::Arc;
use url::form_urlencoded;

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

// ============================================================================
// Helpers
// ============================================================================

fn more_url(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k, v);
    }
    format!("/api/more?{}", serializer.finish())
}

fn page_context<'a>(
    state: &'a AppState,
    view: &'a View,
    render_format: RenderFormat,
    msg: String,
    navigation: Navigation,
) -> PageContext<'a> {
    PageContext {
        papers: &view.papers,
        conferences: state.dataset.conferences(),
        numresults: view.numresults,
        render_format,
        msg,
        include_workshop_papers: state.config.include_workshop_papers,
        max_years: state.config.max_years,
        navigation,
    }
}

fn workshop_suffix(paper_type: &str) -> &'static str {
    if paper_type.eq_ignore_ascii_case(MAIN_TYPE) {
        ""
    } else {
        "W"
    }
}

/// Remembered filter from the `confs` cookie; missing or empty means all.
fn cookie_selection(jar: &CookieJar) -> FilterSelection {
    match jar.get(FILTER_COOKIE) {
        Some(cookie) => {
            let value = urlencoding::decode(cookie.value())
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| cookie.value().to_string());
            FilterSelection::parse(&value)
        }
        None => FilterSelection::All,
    }
}

fn filter_cookie(selection: &FilterSelection) -> Result<HeaderValue, AppError> {
    let expires = Utc::now() + Duration::days(FILTER_COOKIE_DAYS);
    let cookie = format!(
        "{}={}; Path=/; SameSite=Lax; Max-Age={}; Expires={}",
        FILTER_COOKIE,
        urlencoding::encode(&selection.to_query_value()),
        FILTER_COOKIE_DAYS * 24 * 3600,
        expires.format("%a, %d %b %Y %H:%M:%S GMT"),
    );
    Ok(HeaderValue::from_str(&cookie)?)
}

// ============================================================================
// Conference Listing
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Response {
    let params = QueryParams::parse(raw.as_deref());
    let navigation = params.navigation();
    let conferences = state.dataset.conferences();

    let (conf, year) = match (navigation.conf.clone(), navigation.year.clone()) {
        (Some(conf), Some(year)) => (conf, year),
        (conf, year) => {
            let conf = conf
                .filter(|c| conferences.contains(c))
                .or_else(|| conferences.first_venue().map(str::to_string));
            let Some(conf) = conf else {
                let view = View::default();
                let ctx = page_context(
                    &state,
                    &view,
                    RenderFormat::Recent,
                    "No papers loaded".to_string(),
                    navigation,
                );
                return Html(render_page(&ctx, "Papers", "/api/more?view=recent")).into_response();
            };
            let year = year.or_else(|| conferences.latest_year(&conf).map(str::to_string));
            let Some(year) = year else {
                return Redirect::to("/").into_response();
            };
            let paper_type = navigation.paper_type.as_deref().unwrap_or(MAIN_TYPE);
            tracing::debug!(%conf, %year, "redirecting to default conference");
            return Redirect::to(&venue_url(&conf, &year, Some(paper_type))).into_response();
        }
    };

    let paper_type = navigation
        .paper_type
        .clone()
        .unwrap_or_else(|| MAIN_TYPE.to_string());
    let view = state
        .dataset
        .conference_papers(&conf, &year, &paper_type, state.config.num_results);
    let msg = format!(
        "Showing papers from {}{} {}",
        conf,
        workshop_suffix(&paper_type),
        year
    );
    let more = more_url(&[
        ("view", "recent"),
        ("conf", &conf),
        ("year", &year),
        ("type", &paper_type),
    ]);
    let title = format!("{} {}", conf, year);
    let ctx = page_context(&state, &view, RenderFormat::Recent, msg, navigation);

    Html(render_page(&ctx, &title, &more)).into_response()
}

// ============================================================================
// Search
// ============================================================================

pub async fn search(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Html<String> {
    let params = QueryParams::parse(raw.as_deref());
    let navigation = params.navigation();
    let q = navigation.q.clone().unwrap_or_default();

    let view = state.dataset.search(&q, state.config.num_results);
    tracing::debug!(query = %q, results = view.numresults, "search");

    let more = more_url(&[("view", "search"), ("q", &q)]);
    let title = format!("Search: {}", q);
    let ctx = page_context(
        &state,
        &view,
        RenderFormat::Search,
        "Showing search results".to_string(),
        navigation,
    );

    Html(render_page(&ctx, &title, &more))
}

// ============================================================================
// Similar Papers
// ============================================================================

pub async fn rank(
    Path(pid): Path<String>,
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
    jar: CookieJar,
) -> Response {
    // browsers probe for icons at the root
    if pid.contains("favicon") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let params = QueryParams::parse(raw.as_deref());
    let navigation = params.navigation();

    let Some(selection) = navigation.confs.clone() else {
        let selection = cookie_selection(&jar);
        return Redirect::to(&similar_url(&pid, &selection)).into_response();
    };

    let view = state.dataset.similar(
        &pid,
        &selection,
        state.config.include_workshop_papers,
        state.config.num_results,
    );
    let (title, msg) = match state.dataset.get(&pid) {
        Some(paper) => (paper.title.clone(), String::new()),
        None => {
            tracing::debug!(%pid, "unknown paper id");
            ("Papers".to_string(), format!("Unknown paper: {}", pid))
        }
    };
    let confs = selection.to_query_value();
    let more = more_url(&[("view", "paper"), ("pid", &pid), ("confs", &confs)]);
    let ctx = page_context(&state, &view, RenderFormat::Paper, msg, navigation);

    Html(render_page(&ctx, &title, &more)).into_response()
}

/// Filter panel submission: checked leaves arrive as repeated `conf` values.
pub async fn apply_filter(
    Path(pid): Path<String>,
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<Response, AppError> {
    let params = QueryParams::parse(raw.as_deref());
    let submitted = FilterSelection::from_tokens(params.get_all("conf"));
    let panel = FilterPanel::build(state.dataset.conferences(), &submitted, state.config.max_years);
    let selection = panel.apply_filter();
    tracing::debug!(%pid, filter = %selection, "applying venue filter");

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, filter_cookie(&selection)?);

    Ok((headers, Redirect::to(&similar_url(&pid, &selection))).into_response())
}

// ============================================================================
// Incremental Loading
// ============================================================================

pub async fn more(State(state): State<Arc<AppState>>, RawQuery(raw): RawQuery) -> Json<MoreResponse> {
    let params = QueryParams::parse(raw.as_deref());
    let offset = params
        .get("offset")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let limit = state.config.num_results;

    let (view, format) = match params.get("view").unwrap_or("") {
        "recent" => match (params.get_non_empty("conf"), params.get_non_empty("year")) {
            (Some(conf), Some(year)) => {
                let paper_type = params.get_non_empty("type").unwrap_or(MAIN_TYPE);
                (
                    state.dataset.conference_papers(conf, year, paper_type, limit),
                    RenderFormat::Recent,
                )
            }
            _ => (View::default(), RenderFormat::Recent),
        },
        "search" => (
            state.dataset.search(params.get("q").unwrap_or(""), limit),
            RenderFormat::Search,
        ),
        "paper" => {
            let selection = FilterSelection::parse(params.get("confs").unwrap_or("all"));
            let pid = params.get("pid").unwrap_or("");
            (
                state.dataset.similar(
                    pid,
                    &selection,
                    state.config.include_workshop_papers,
                    limit,
                ),
                RenderFormat::Paper,
            )
        }
        other => {
            tracing::warn!(view = %other, "unknown view in load-more request");
            (View::default(), RenderFormat::Search)
        }
    };

    let mut engine = RenderEngine::resume(&view.papers, view.numresults, format, offset);
    let batch = engine.render_next(SCROLL_BATCH, true);

    Json(MoreResponse {
        html: render_batch(&batch, None),
        next_offset: engine.cursor().next_index,
        exhausted: batch.exhausted,
    })
}
