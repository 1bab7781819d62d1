//! Shared HTML components for the paper browser.
//!
//! Contains the navigation bar, the venue/year/type link rows and the base
//! HTML template.

use crate::html::html_escape;
use crate::links::venue_url;
use crate::models::{ConferenceMap, Navigation};

use super::scripts::MATHJAX;
use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(search_query: Option<&str>) -> String {
    let query_val = search_query.unwrap_or("").replace('+', " ");

    format!(
        r#"<nav class="nav-bar">
            <a class="brand" href="/">Papers</a>
            <span class="spacer"></span>
            <form class="search-box" action="/search" method="get">
                <input type="text" id="qfield" name="q" placeholder="Search titles, authors, venues..." value="{}">
                <button class="btn" type="submit">Search</button>
            </form>
        </nav>"#,
        html_escape(&query_val)
    )
}

// ============================================================================
// Conference Links
// ============================================================================

fn nav_link(href: &str, label: &str, active: bool) -> String {
    format!(
        r#"<li><a href="{}"{}>{}</a></li>"#,
        html_escape(href),
        if active { r#" class="active""# } else { "" },
        html_escape(label)
    )
}

/// Rows of venue, year and type links. Years and types only appear once a
/// venue is chosen; types only when workshop papers are browsable.
pub fn conference_nav(
    conferences: &ConferenceMap,
    navigation: &Navigation,
    include_workshop_papers: bool,
) -> String {
    let chosen_conf = navigation.conf.as_deref();
    let chosen_year = navigation.year.as_deref();
    let chosen_type = navigation.paper_type.as_deref();

    let mut html = String::from(r#"<ul class="conf-nav" id="conference-name">"#);
    for name in conferences.venues() {
        let Some(year) = conferences.latest_year(name) else {
            continue;
        };
        let first_type = if include_workshop_papers {
            conferences.types(name, year).first().map(String::as_str)
        } else {
            None
        };
        html.push_str(&nav_link(
            &venue_url(name, year, first_type),
            name,
            chosen_conf == Some(name),
        ));
    }
    html.push_str("</ul>");

    let Some(conf) = chosen_conf.filter(|c| conferences.contains(c)) else {
        return html;
    };

    html.push_str(r#"<ul class="conf-nav" id="conference-year">"#);
    for year in conferences.years(conf).into_iter().rev() {
        let first_type = if include_workshop_papers {
            conferences.types(conf, year).first().map(String::as_str)
        } else {
            None
        };
        html.push_str(&nav_link(
            &venue_url(conf, year, first_type),
            year,
            chosen_year == Some(year),
        ));
    }
    html.push_str("</ul>");

    if include_workshop_papers {
        if let Some(year) = chosen_year {
            html.push_str(r#"<ul class="conf-nav" id="conference-type">"#);
            for ctype in conferences.types(conf, year) {
                html.push_str(&nav_link(
                    &venue_url(conf, year, Some(ctype.as_str())),
                    ctype,
                    chosen_type == Some(ctype.as_str()),
                ));
            }
            html.push_str("</ul>");
        }
    }

    html
}

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, nav: &str, content: &str, scripts: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
    {mathjax}
</head>
<body>
    {nav}
    <div class="container">
        {content}
    </div>
    {scripts}
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        mathjax = MATHJAX,
        nav = nav,
        content = content,
        scripts = scripts,
    )
}
