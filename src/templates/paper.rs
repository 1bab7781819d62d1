//! Markup for render batches produced by `RenderEngine`.

use crate::html::{html_escape, sanitize_abstract};
use crate::pagination::{Link, PaperBlock, RenderBatch, TerminalMessage};

fn authors_html(authors: &[Link]) -> String {
    authors
        .iter()
        .map(|a| {
            format!(
                r#"<a href="{}">{}</a>"#,
                html_escape(&a.href),
                html_escape(&a.label)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn alert_html(message: &str) -> String {
    format!(r#"<div class="alert" role="alert">{}</div>"#, message)
}

pub fn terminal_html(message: TerminalMessage) -> String {
    alert_html(message.text())
}

/// One paper. `filter_panel` is inserted under the query paper of the detail view.
pub fn paper_html(block: &PaperBlock, filter_panel: Option<&str>) -> String {
    let title = match &block.title_href {
        Some(href) => format!(
            r#"<h4 class="paper-title"><a href="{}" target="_blank">{}</a></h4>"#,
            html_escape(href),
            html_escape(&block.title)
        ),
        None => format!(
            r#"<h4 class="paper-title">{}</h4>"#,
            html_escape(&block.title)
        ),
    };

    let actions = match &block.similar_href {
        Some(href) => format!(
            r#"<div class="paper-actions"><a class="btn" id="sim{}" href="{}">Show similar papers</a></div>"#,
            html_escape(&block.pid),
            html_escape(href)
        ),
        None => String::new(),
    };

    let abstract_html = match &block.abstract_html {
        Some(raw) => format!(
            r#"<div class="paper-abstract"{}>{}</div>"#,
            if block.typeset { r#" data-typeset="1""# } else { "" },
            sanitize_abstract(raw)
        ),
        None => String::new(),
    };

    let detail = if block.detail_header {
        format!(
            r#"{}<div class="alert"><h4>Most similar papers:</h4></div>"#,
            filter_panel.map(alert_html).unwrap_or_default()
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="paper" id="{pid}">
            <div class="paper-header">
                <div class="paper-info">
                    {title}
                    <div class="paper-authors">{authors}</div>
                    <div class="paper-venue"><a class="venue-link" href="{venue_href}">{venue}</a></div>
                    {actions}
                </div>
                <div class="paper-pdf"><a href="{pdf}" target="_blank">PDF</a></div>
            </div>
            {abstract_html}
            {detail}
        </div>"#,
        pid = html_escape(&block.pid),
        title = title,
        authors = authors_html(&block.authors),
        venue_href = html_escape(&block.venue.href),
        venue = html_escape(&block.venue.label),
        actions = actions,
        pdf = html_escape(&block.pdf_href),
        abstract_html = abstract_html,
        detail = detail,
    )
}

/// Every block of the batch followed by the terminal message, if any.
pub fn render_batch(batch: &RenderBatch, filter_panel: Option<&str>) -> String {
    let mut html = String::new();
    for block in &batch.blocks {
        html.push_str(&paper_html(block, filter_panel));
    }
    if let Some(message) = batch.terminal {
        html.push_str(&terminal_html(message));
    }
    html
}
