//! Full result pages: message, first batch, "load more" affordance.

use crate::filter::{FilterPanel, FilterSelection};
use crate::html::html_escape;
use crate::models::{PageContext, RenderFormat};
use crate::pagination::{RenderEngine, INITIAL_BATCH};

use super::components::{base_html, conference_nav, nav_bar};
use super::filter_panel::render_filter_panel;
use super::paper::{alert_html, render_batch};
use super::scripts::{FILTER_SCRIPT, LOAD_MORE_SCRIPT};

/// Filter panel for the query paper of a detail view.
fn detail_panel(ctx: &PageContext<'_>) -> Option<String> {
    if ctx.render_format != RenderFormat::Paper {
        return None;
    }
    let query = ctx.papers.first()?;
    let selection = ctx
        .navigation
        .confs
        .clone()
        .unwrap_or(FilterSelection::Tokens(Vec::new()));
    let panel = FilterPanel::build(ctx.conferences, &selection, ctx.max_years);
    Some(render_filter_panel(&panel, &query.pid))
}

/// Render a result page. `more_url` is the fragment endpoint for this view;
/// the script appends `&offset=N`.
pub fn render_page(ctx: &PageContext<'_>, title: &str, more_url: &str) -> String {
    let mut engine = RenderEngine::new(ctx.papers, ctx.numresults, ctx.render_format);
    let batch = engine.render_next(INITIAL_BATCH, false);
    let panel = detail_panel(ctx);

    let mut content = String::new();
    if !ctx.msg.is_empty() {
        content.push_str(&alert_html(&html_escape(&ctx.msg)));
    }
    content.push_str(&format!(
        r#"<div id="rtable" data-more-url="{}" data-offset="{}" data-exhausted="{}">{}</div>"#,
        html_escape(more_url),
        engine.cursor().next_index,
        batch.exhausted,
        render_batch(&batch, panel.as_deref()),
    ));
    content.push_str(&format!(
        r#"<div class="load-more"><button class="btn{}" id="loadmorebtn" type="button">Load more</button></div>"#,
        if batch.exhausted { " hidden" } else { "" }
    ));

    let mut scripts = String::from(LOAD_MORE_SCRIPT);
    if panel.is_some() {
        scripts.push_str(FILTER_SCRIPT);
    }

    let nav = format!(
        "{}{}",
        nav_bar(ctx.navigation.q.as_deref()),
        conference_nav(ctx.conferences, &ctx.navigation, ctx.include_workshop_papers)
    );

    base_html(title, &nav, &content, &scripts)
}
