//! The preloaded paper collection and the list views served from it.
//!
//! Paper records and similarity lists are produced by an external pipeline and
//! handed over as a single JSON file:
//!
//! ```json
//! { "papers": [ { "pid": "...", "title": "...", "tscore": 0.7, ... } ],
//!   "similar": { "<pid>": ["<pid>", ...] },
//!   "search": { "<pid>": { "<term>": 5.0, ... } } }
//! ```
//!
//! `search` is optional. Papers without shipped weights are indexed from their
//! title, authors and venue at load time.
//!
//! This module only selects and orders what is already there.

use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::filter::FilterSelection;
use crate::models::{ConferenceMap, Paper, MAIN_TYPE, WORKSHOP_TYPE};

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    papers: Vec<Paper>,
    #[serde(default)]
    similar: HashMap<String, Vec<String>>,
    #[serde(default)]
    search: HashMap<String, TermWeights>,
}

/// Search term -> weight for one paper.
pub type TermWeights = HashMap<String, f64>;

#[derive(Debug, Default)]
pub struct Dataset {
    papers: Vec<Paper>,
    by_pid: HashMap<String, usize>,
    similar: HashMap<String, Vec<String>>,
    search_index: HashMap<String, TermWeights>,
    conferences: ConferenceMap,
}

/// A list view: the papers to show and how many matched before truncation.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub papers: Vec<Paper>,
    pub numresults: usize,
}

impl View {
    fn truncated(mut papers: Vec<Paper>, limit: usize) -> Self {
        let numresults = papers.len();
        papers.truncate(limit);
        Self { papers, numresults }
    }
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let file: DatasetFile = serde_json::from_str(raw)?;
        Ok(Self::new(file.papers, file.similar).with_search_index(file.search))
    }

    pub fn new(papers: Vec<Paper>, similar: HashMap<String, Vec<String>>) -> Self {
        let by_pid = papers
            .iter()
            .enumerate()
            .map(|(i, p)| (p.pid.clone(), i))
            .collect();

        let mut conferences = ConferenceMap::new();
        for p in &papers {
            match split_conf_id(p.conf_id()) {
                Some(parts) => conferences.insert(&parts.venue, &parts.year, parts.type_tag),
                None => tracing::warn!(
                    pid = %p.pid,
                    conf_id = %p.conf_id(),
                    "cannot find year in conference id"
                ),
            }
        }

        let search_index = papers
            .iter()
            .map(|p| (p.pid.clone(), index_terms(p)))
            .collect();

        Self {
            papers,
            by_pid,
            similar,
            search_index,
            conferences,
        }
    }

    /// Replace the derived term weights with upstream ones where available.
    pub fn with_search_index(mut self, index: HashMap<String, TermWeights>) -> Self {
        for (pid, weights) in index {
            if self.by_pid.contains_key(&pid) {
                self.search_index.insert(pid, weights);
            }
        }
        self
    }

    /// Drop workshop editions, for deployments that only browse main tracks.
    pub fn without_workshop_papers(self) -> Self {
        let Self {
            papers,
            similar,
            search_index,
            ..
        } = self;
        let papers = papers
            .into_iter()
            .filter(|p| {
                !matches!(split_conf_id(p.conf_id()), Some(parts) if parts.type_tag == WORKSHOP_TYPE)
            })
            .collect();
        Self::new(papers, similar).with_search_index(search_index)
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn conferences(&self) -> &ConferenceMap {
        &self.conferences
    }

    pub fn get(&self, pid: &str) -> Option<&Paper> {
        self.by_pid.get(pid).map(|&i| &self.papers[i])
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Papers of one conference edition, main track or workshops.
    pub fn conference_papers(&self, conf: &str, year: &str, paper_type: &str, limit: usize) -> View {
        let suffix = if paper_type.eq_ignore_ascii_case(MAIN_TYPE) { "" } else { "W" };
        let wanted = format!("{}{}{}", conf, year, suffix);
        let papers = self
            .papers
            .iter()
            .filter(|p| p.conf_id() == wanted)
            .cloned()
            .collect();
        View::truncated(papers, limit)
    }

    /// Papers matching any query term, best first. A paper scores the summed
    /// weight of the terms it was indexed under, plus a small recency boost.
    pub fn search(&self, q: &str, limit: usize) -> View {
        let terms: Vec<String> = q.to_lowercase().split_whitespace().map(str::to_string).collect();
        if terms.is_empty() {
            return View::default();
        }
        let mut scored: Vec<(f64, &Paper)> = self
            .papers
            .iter()
            .filter_map(|p| {
                let weights = self.search_index.get(&p.pid)?;
                let score: f64 = terms.iter().filter_map(|t| weights.get(t)).sum();
                (score > 0.0).then(|| (score + RECENCY_WEIGHT * p.tscore, p))
            })
            .collect();
        // stable, so equal scores keep dataset order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        View::truncated(scored.into_iter().map(|(_, p)| p.clone()).collect(), limit)
    }

    /// The query paper followed by its precomputed neighbours, restricted to
    /// the venues of `selection`. Workshop editions follow their main venue
    /// when `include_workshop_papers` is set.
    pub fn similar(
        &self,
        pid: &str,
        selection: &FilterSelection,
        include_workshop_papers: bool,
        limit: usize,
    ) -> View {
        let Some(query) = self.get(pid) else {
            return View::default();
        };

        let mut papers = vec![query.clone()];
        if let Some(neighbours) = self.similar.get(pid) {
            let allowed = |conf_id: &str| {
                selection.is_unrestricted()
                    || selection.contains(conf_id)
                    || (include_workshop_papers
                        && conf_id
                            .strip_suffix('W')
                            .is_some_and(|main| selection.contains(main)))
            };
            papers.extend(
                neighbours
                    .iter()
                    .filter_map(|k| self.get(k))
                    .filter(|p| allowed(p.conf_id()))
                    .cloned(),
            );
        }
        View::truncated(papers, limit)
    }
}

// ============================================================================
// Search Index
// ============================================================================

/// Weight of a word in the title, author list, venue name or venue id.
const FIELD_WEIGHT: f64 = 5.0;
const RECENCY_WEIGHT: f64 = 0.0001;
/// Stripped before splitting into words; hyphens are kept.
const PUNCTUATION: &str = "'!\"#$%&()*+,./:;<=>?@[\\]^_`{|}~";

fn words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Term weights derived from the searchable fields of `paper`. Each field
/// contributes once per distinct word; a word in several fields adds up.
fn index_terms(paper: &Paper) -> TermWeights {
    let mut authors = words(&paper.authors.join(" "));
    authors.remove("and");

    let fields = [
        words(&paper.title),
        authors,
        HashSet::from([paper.composed_conf_id.to_lowercase()]),
        words(&paper.conf_name),
    ];

    let mut weights = TermWeights::new();
    for term in fields.into_iter().flatten() {
        *weights.entry(term).or_insert(0.0) += FIELD_WEIGHT;
    }
    weights
}

// ============================================================================
// Conference Ids
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfIdParts {
    pub venue: String,
    pub year: String,
    pub type_tag: &'static str,
}

/// Split an extended conference id such as `CVPR2019W` into venue, year and
/// type. A trailing `w`/`W` marks workshop papers; the year is the trailing
/// four digits, or two when fewer are present.
pub fn split_conf_id(conf_id: &str) -> Option<ConfIdParts> {
    let (base, type_tag) = match conf_id.strip_suffix(['w', 'W']) {
        Some(base) => (base, WORKSHOP_TYPE),
        None => (conf_id, MAIN_TYPE),
    };
    let re = Regex::new(r"^(.*?)(\d{4}|\d{2})$").ok()?;
    let caps = re.captures(base)?;
    let venue = caps.get(1)?.as_str();
    if venue.is_empty() {
        return None;
    }
    Some(ConfIdParts {
        venue: venue.to_string(),
        year: caps.get(2)?.as_str().to_string(),
        type_tag,
    })
}
