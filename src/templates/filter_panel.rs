//! Markup for the venue/year filter panel.

use crate::filter::{CheckboxKey, FilterPanel};
use crate::html::html_escape;
use crate::links::filter_action_url;

fn checkbox(panel: &FilterPanel, key: &CheckboxKey) -> String {
    let (kind, venue, year) = match key {
        CheckboxKey::SelectAll => ("all", None, None),
        CheckboxKey::SelectNone => ("none", None, None),
        CheckboxKey::Year(y) => ("year", None, Some(y.as_str())),
        CheckboxKey::Venue(v) => ("venue", Some(v.as_str()), None),
        CheckboxKey::VenueYear { venue, year } => ("leaf", Some(venue.as_str()), Some(year.as_str())),
    };

    let mut attrs = format!(
        r#"type="checkbox" id="{}" data-kind="{}""#,
        html_escape(&key.dom_id()),
        kind
    );
    if let Some(v) = venue {
        attrs.push_str(&format!(r#" data-venue="{}""#, html_escape(v)));
    }
    if let Some(y) = year {
        attrs.push_str(&format!(r#" data-year="{}""#, html_escape(y)));
    }
    if let Some(token) = key.token() {
        attrs.push_str(&format!(r#" name="conf" value="{}""#, html_escape(&token)));
    }
    if panel.is_checked(key) {
        attrs.push_str(" checked");
    }
    format!("<input {}>", attrs)
}

fn labelled(panel: &FilterPanel, key: &CheckboxKey, label: &str) -> String {
    format!(
        r#"{}<label for="{}"> {}</label>"#,
        checkbox(panel, key),
        html_escape(&key.dom_id()),
        html_escape(label)
    )
}

/// The checkbox matrix as a GET form submitting to `/<pid>/filter`.
pub fn render_filter_panel(panel: &FilterPanel, pid: &str) -> String {
    let mut html = format!(
        r#"<form class="filter-panel" method="get" action="{}" style="--year-columns: {}">"#,
        html_escape(&filter_action_url(pid)),
        panel.years().len()
    );

    html.push_str(&format!(
        r#"<div class="filter-section filter-global"><span>{}</span><span>{}</span></div>"#,
        labelled(panel, &CheckboxKey::SelectAll, "Select all"),
        labelled(panel, &CheckboxKey::SelectNone, "Select none"),
    ));

    html.push_str(r#"<div class="filter-section"><div class="filter-row"><span></span>"#);
    for year in panel.years() {
        html.push_str(&format!(
            r#"<span class="cell">{}</span>"#,
            labelled(panel, &CheckboxKey::Year(year.clone()), year)
        ));
    }
    html.push_str("</div></div>");

    html.push_str(r#"<div class="filter-section">"#);
    for row in panel.venues() {
        html.push_str(&format!(
            r#"<div class="filter-row"><span class="venue-cell">{}</span>"#,
            labelled(panel, &CheckboxKey::Venue(row.name.clone()), &row.name)
        ));
        for cell in &row.cells {
            match cell {
                Some(year) => html.push_str(&format!(
                    r#"<span class="cell">{}</span>"#,
                    labelled(panel, &CheckboxKey::venue_year(&row.name, year), year)
                )),
                None => html.push_str(r#"<span class="cell"></span>"#),
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");

    html.push_str(
        r#"<div class="filter-submit"><input class="btn" type="submit" value="Filter results"></div></form>"#,
    );
    html
}
