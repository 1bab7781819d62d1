//! Incremental pagination over a preloaded paper list.
//!
//! The engine owns its cursor and yields plain render descriptors; turning
//! them into markup is the job of `templates::paper`. Nothing here touches
//! HTML, so the whole state machine is testable without a page.

use crate::links::{paper_url, search_url};
use crate::models::{Paper, RenderFormat};

/// Papers rendered with the initial page.
pub const INITIAL_BATCH: usize = 10;
/// Papers appended per scroll or "load more" click.
pub const SCROLL_BATCH: usize = 5;

// ============================================================================
// Cursor and Descriptors
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    pub next_index: usize,
    pub exhausted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Everything needed to draw one paper.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperBlock {
    pub index: usize,
    pub pid: String,
    pub title: String,
    /// `None` when the record has no usable URL; the title is then plain text.
    pub title_href: Option<String>,
    pub authors: Vec<Link>,
    pub venue: Link,
    pub pdf_href: String,
    pub abstract_html: Option<String>,
    /// Set for abstracts appended after the initial load.
    pub typeset: bool,
    pub similar_href: Option<String>,
    /// First paper of the detail view: carries the filter panel and the
    /// "most similar" header.
    pub detail_header: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMessage {
    ResultsComplete,
    LimitReached,
}

impl TerminalMessage {
    pub fn text(&self) -> &'static str {
        match self {
            TerminalMessage::ResultsComplete => "Results complete.",
            TerminalMessage::LimitReached => {
                "You hit the limit of number of papers to show in one result."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderBatch {
    pub blocks: Vec<PaperBlock>,
    pub terminal: Option<TerminalMessage>,
    pub exhausted: bool,
}

// ============================================================================
// Render Engine
// ============================================================================

pub struct RenderEngine<'a> {
    papers: &'a [Paper],
    numresults: usize,
    format: RenderFormat,
    cursor: PaginationCursor,
}

impl<'a> RenderEngine<'a> {
    /// `numresults` is the upstream total; when it exceeds `papers.len()` the
    /// list was truncated and the terminal message says so.
    pub fn new(papers: &'a [Paper], numresults: usize, format: RenderFormat) -> Self {
        Self::resume(papers, numresults, format, 0)
    }

    /// Engine whose cursor already sits at `offset`. An offset at or past the
    /// end yields an exhausted engine that reports nothing further.
    pub fn resume(
        papers: &'a [Paper],
        numresults: usize,
        format: RenderFormat,
        offset: usize,
    ) -> Self {
        let next_index = offset.min(papers.len());
        Self {
            papers,
            numresults,
            format,
            cursor: PaginationCursor {
                next_index,
                exhausted: offset > 0 && next_index >= papers.len(),
            },
        }
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.exhausted
    }

    /// Render up to `count` more papers. Reports the terminal message on the
    /// call that reaches the end of the list, and nothing ever after.
    pub fn render_next(&mut self, count: usize, is_dynamic: bool) -> RenderBatch {
        if self.cursor.exhausted {
            return RenderBatch {
                exhausted: true,
                ..RenderBatch::default()
            };
        }

        if self.papers.is_empty() {
            self.cursor.exhausted = true;
            return RenderBatch {
                exhausted: true,
                ..RenderBatch::default()
            };
        }

        let start = self.cursor.next_index;
        let end = start.saturating_add(count).min(self.papers.len());
        let blocks: Vec<PaperBlock> = (start..end)
            .map(|ix| self.describe(ix, is_dynamic))
            .collect();
        self.cursor.next_index = end;

        let mut terminal = None;
        if self.cursor.next_index >= self.papers.len() {
            self.cursor.exhausted = true;
            terminal = Some(if self.cursor.next_index >= self.numresults {
                TerminalMessage::ResultsComplete
            } else {
                TerminalMessage::LimitReached
            });
        }

        RenderBatch {
            blocks,
            terminal,
            exhausted: self.cursor.exhausted,
        }
    }

    fn describe(&self, ix: usize, is_dynamic: bool) -> PaperBlock {
        let p = &self.papers[ix];
        let is_query_paper = self.format == RenderFormat::Paper && ix == 0;

        PaperBlock {
            index: ix,
            pid: p.pid.clone(),
            title: p.title.clone(),
            title_href: p.has_link().then(|| p.link.clone()),
            authors: p
                .authors
                .iter()
                .map(|a| Link {
                    label: a.clone(),
                    href: search_url(a),
                })
                .collect(),
            venue: Link {
                label: p.conf_name.clone(),
                href: search_url(&p.composed_conf_id),
            },
            pdf_href: p.pdf_link.clone(),
            abstract_html: p.abstract_html.clone(),
            typeset: is_dynamic && p.abstract_html.is_some(),
            similar_href: (!is_query_paper).then(|| paper_url(&p.pid)),
            detail_header: is_query_paper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_papers(n: usize) -> Vec<Paper> {
        (0..n)
            .map(|i| Paper {
                pid: format!("p{}", i + 1),
                title: format!("Paper {}", i + 1),
                link: format!("https://example.org/{}", i + 1),
                authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
                pdf_link: format!("https://example.org/{}.pdf", i + 1),
                abstract_html: Some("We show $x^2$.".to_string()),
                conf_name: "ICML 2019".to_string(),
                composed_conf_id: "ICML2019".to_string(),
                conf_id: "ICML2019".to_string(),
                tscore: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_two_papers_single_call_completes() {
        let papers = make_papers(2);
        let mut engine = RenderEngine::new(&papers, 2, RenderFormat::Recent);
        let batch = engine.render_next(10, false);

        assert_eq!(batch.blocks.len(), 2);
        assert_eq!(batch.blocks[0].pid, "p1");
        assert_eq!(batch.blocks[1].pid, "p2");
        assert!(batch.exhausted);
        assert_eq!(batch.terminal, Some(TerminalMessage::ResultsComplete));
        assert_eq!(engine.cursor().next_index, 2);
    }

    #[test]
    fn test_batches_render_in_order_and_count() {
        let papers = make_papers(12);
        for total in [0usize, 3, 10, 12, 20] {
            let mut engine = RenderEngine::new(&papers, 12, RenderFormat::Search);
            let mut rendered = Vec::new();
            let mut remaining = total;
            while remaining > 0 {
                let step = remaining.min(5);
                rendered.extend(engine.render_next(step, true).blocks);
                remaining -= step;
            }
            let expected = total.min(papers.len());
            assert_eq!(rendered.len(), expected);
            assert_eq!(engine.cursor().next_index, expected);
            for (i, block) in rendered.iter().enumerate() {
                assert_eq!(block.index, i);
                assert_eq!(block.pid, papers[i].pid);
            }
        }
    }

    #[test]
    fn test_exhausted_engine_is_idempotent() {
        let papers = make_papers(3);
        let mut engine = RenderEngine::new(&papers, 3, RenderFormat::Recent);
        let first = engine.render_next(5, false);
        assert!(first.terminal.is_some());

        for _ in 0..3 {
            let again = engine.render_next(5, true);
            assert!(again.exhausted);
            assert!(again.blocks.is_empty());
            assert_eq!(again.terminal, None);
        }
        assert_eq!(engine.cursor().next_index, 3);
    }

    #[test]
    fn test_terminal_message_shown_once_across_calls() {
        let papers = make_papers(7);
        let mut engine = RenderEngine::new(&papers, 7, RenderFormat::Recent);
        let mut terminals = 0;
        for _ in 0..5 {
            if engine.render_next(3, true).terminal.is_some() {
                terminals += 1;
            }
        }
        assert_eq!(terminals, 1);
    }

    #[test]
    fn test_limit_reached_when_upstream_has_more() {
        let papers = make_papers(4);
        let mut engine = RenderEngine::new(&papers, 250, RenderFormat::Search);
        let batch = engine.render_next(10, false);
        assert_eq!(batch.terminal, Some(TerminalMessage::LimitReached));
        assert_eq!(
            batch.terminal.unwrap().text(),
            "You hit the limit of number of papers to show in one result."
        );
    }

    #[test]
    fn test_exact_fit_still_reports_terminal() {
        let papers = make_papers(10);
        let mut engine = RenderEngine::new(&papers, 10, RenderFormat::Recent);
        let batch = engine.render_next(10, false);
        assert_eq!(batch.blocks.len(), 10);
        assert_eq!(batch.terminal, Some(TerminalMessage::ResultsComplete));
    }

    #[test]
    fn test_partial_batch_not_exhausted() {
        let papers = make_papers(12);
        let mut engine = RenderEngine::new(&papers, 12, RenderFormat::Recent);
        let batch = engine.render_next(10, false);
        assert!(!batch.exhausted);
        assert_eq!(batch.terminal, None);
        assert!(!engine.is_exhausted());
    }

    #[test]
    fn test_empty_list_short_circuits_without_message() {
        let papers: Vec<Paper> = Vec::new();
        let mut engine = RenderEngine::new(&papers, 0, RenderFormat::Search);
        let batch = engine.render_next(10, false);
        assert!(batch.exhausted);
        assert!(batch.blocks.is_empty());
        assert_eq!(batch.terminal, None);
    }

    #[test]
    fn test_empty_authors_render_empty_segment() {
        let mut papers = make_papers(1);
        papers[0].authors.clear();
        let mut engine = RenderEngine::new(&papers, 1, RenderFormat::Recent);
        let batch = engine.render_next(1, false);
        assert!(batch.blocks[0].authors.is_empty());
    }

    #[test]
    fn test_detail_mode_first_paper() {
        let papers = make_papers(3);
        let mut engine = RenderEngine::new(&papers, 3, RenderFormat::Paper);
        let batch = engine.render_next(3, false);

        assert!(batch.blocks[0].detail_header);
        assert_eq!(batch.blocks[0].similar_href, None);
        assert!(!batch.blocks[1].detail_header);
        assert_eq!(batch.blocks[1].similar_href.as_deref(), Some("/p2"));
    }

    #[test]
    fn test_list_mode_every_paper_gets_similar() {
        let papers = make_papers(2);
        let mut engine = RenderEngine::new(&papers, 2, RenderFormat::Recent);
        let batch = engine.render_next(2, false);
        assert!(batch.blocks.iter().all(|b| b.similar_href.is_some()));
        assert!(batch.blocks.iter().all(|b| !b.detail_header));
    }

    #[test]
    fn test_typeset_only_for_dynamic_abstracts() {
        let mut papers = make_papers(3);
        papers[2].abstract_html = None;
        let mut engine = RenderEngine::new(&papers, 3, RenderFormat::Recent);

        let first = engine.render_next(1, false);
        assert!(!first.blocks[0].typeset);

        let rest = engine.render_next(2, true);
        assert!(rest.blocks[0].typeset);
        assert!(!rest.blocks[1].typeset);
        assert_eq!(rest.blocks[1].abstract_html, None);
    }

    #[test]
    fn test_links_are_derived_from_record() {
        let mut papers = make_papers(1);
        papers[0].link = String::new();
        let mut engine = RenderEngine::new(&papers, 1, RenderFormat::Recent);
        let block = engine.render_next(1, false).blocks.remove(0);

        assert_eq!(block.title_href, None);
        assert_eq!(block.authors[0].href, "/search?q=Ada+Lovelace");
        assert_eq!(block.venue.href, "/search?q=ICML2019");
        assert_eq!(block.venue.label, "ICML 2019");
    }

    #[test]
    fn test_resume_continues_from_offset() {
        let papers = make_papers(12);
        let mut engine = RenderEngine::resume(&papers, 12, RenderFormat::Recent, 10);
        let batch = engine.render_next(SCROLL_BATCH, true);
        assert_eq!(batch.blocks.len(), 2);
        assert_eq!(batch.blocks[0].pid, "p11");
        assert_eq!(batch.terminal, Some(TerminalMessage::ResultsComplete));
    }

    #[test]
    fn test_resume_past_end_is_silent() {
        let papers = make_papers(3);
        let mut engine = RenderEngine::resume(&papers, 3, RenderFormat::Recent, 50);
        assert_eq!(engine.cursor().next_index, 3);
        let batch = engine.render_next(SCROLL_BATCH, true);
        assert!(batch.exhausted);
        assert_eq!(batch.terminal, None);
    }
}
