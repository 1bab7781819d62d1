//! Venue/year filter for the similarity view.
//!
//! A `FilterSelection` is what travels through the query string and the
//! `confs` cookie. A `FilterPanel` is the checkbox matrix built from it: a
//! select-all/select-none pair, one box per year column, one group box per
//! venue and one leaf per (venue, year) the venue actually has. Checkboxes are
//! addressed by structured keys, so a year cascade only ever reaches leaves of
//! that year.

use std::collections::HashSet;

use crate::models::ConferenceMap;

/// Default number of year columns.
pub const DEFAULT_MAX_YEARS: usize = 5;

// ============================================================================
// Filter Selection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Nothing,
    /// `venueYear` tokens in the order they were chosen.
    Tokens(Vec<String>),
}

impl FilterSelection {
    /// Parse a `confs` value. Empty input, or input with no tokens in it,
    /// means no restriction.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "" | "all" => FilterSelection::All,
            "none" => FilterSelection::Nothing,
            _ => match FilterSelection::from_tokens(raw.split(',')) {
                FilterSelection::Tokens(tokens) if tokens.is_empty() => FilterSelection::All,
                selection => selection,
            },
        }
    }

    /// True when the selection lets every venue through.
    pub fn is_unrestricted(&self) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Nothing => false,
            FilterSelection::Tokens(tokens) => tokens.is_empty(),
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if !token.is_empty() && !out.iter().any(|t| t == token) {
                out.push(token.to_string());
            }
        }
        FilterSelection::Tokens(out)
    }

    /// Serialized form; an empty token list degrades to `"all"`.
    pub fn to_query_value(&self) -> String {
        match self {
            FilterSelection::All => "all".to_string(),
            FilterSelection::Nothing => "none".to_string(),
            FilterSelection::Tokens(tokens) if tokens.is_empty() => "all".to_string(),
            FilterSelection::Tokens(tokens) => tokens.join(","),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Nothing => false,
            FilterSelection::Tokens(tokens) => tokens.iter().any(|t| t == token),
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

// ============================================================================
// Checkbox Keys
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckboxKey {
    SelectAll,
    SelectNone,
    Year(String),
    Venue(String),
    VenueYear { venue: String, year: String },
}

impl CheckboxKey {
    pub fn venue_year(venue: &str, year: &str) -> Self {
        CheckboxKey::VenueYear {
            venue: venue.to_string(),
            year: year.to_string(),
        }
    }

    /// Filter token of a leaf; `None` for every other kind.
    pub fn token(&self) -> Option<String> {
        match self {
            CheckboxKey::VenueYear { venue, year } => Some(format!("{}{}", venue, year)),
            _ => None,
        }
    }

    /// Element id used in the rendered panel.
    pub fn dom_id(&self) -> String {
        match self {
            CheckboxKey::SelectAll => "allconf_all".to_string(),
            CheckboxKey::SelectNone => "allconf_none".to_string(),
            CheckboxKey::Year(year) => format!("yearconf_{}", year),
            CheckboxKey::Venue(venue) => format!("nameconf_{}", venue.to_lowercase()),
            CheckboxKey::VenueYear { venue, year } => {
                format!("conf_{}_{}", venue.to_lowercase(), year)
            }
        }
    }
}

// ============================================================================
// Filter Panel
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct VenueRow {
    pub name: String,
    /// One entry per year column: the year when the venue has it.
    pub cells: Vec<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct FilterPanel {
    years: Vec<String>,
    venues: Vec<VenueRow>,
    checked: HashSet<CheckboxKey>,
}

impl FilterPanel {
    /// Build the matrix for `conferences` with the boxes of `selection` checked.
    pub fn build(conferences: &ConferenceMap, selection: &FilterSelection, max_years: usize) -> Self {
        let mut years: Vec<String> = conferences
            .0
            .values()
            .flat_map(|by_year| by_year.keys().cloned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_by(|a, b| b.cmp(a));
        years.truncate(max_years);

        let venues = conferences
            .venues()
            .map(|name| VenueRow {
                name: name.to_string(),
                cells: years
                    .iter()
                    .map(|y| conferences.0[name].contains_key(y).then(|| y.clone()))
                    .collect(),
            })
            .collect();

        let mut panel = Self {
            years,
            venues,
            checked: HashSet::new(),
        };

        match selection {
            FilterSelection::All => {
                panel.checked = panel.keys().into_iter().collect();
                panel.checked.remove(&CheckboxKey::SelectNone);
            }
            FilterSelection::Nothing => {
                panel.checked.insert(CheckboxKey::SelectNone);
            }
            FilterSelection::Tokens(_) => {
                let chosen: Vec<CheckboxKey> = panel
                    .leaves()
                    .into_iter()
                    .filter(|leaf| leaf.token().is_some_and(|t| selection.contains(&t)))
                    .collect();
                panel.checked.extend(chosen);
            }
        }

        panel
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    pub fn venues(&self) -> &[VenueRow] {
        &self.venues
    }

    /// Every checkbox in display order.
    pub fn keys(&self) -> Vec<CheckboxKey> {
        let mut keys = vec![CheckboxKey::SelectAll, CheckboxKey::SelectNone];
        keys.extend(self.years.iter().map(|y| CheckboxKey::Year(y.clone())));
        for row in &self.venues {
            keys.push(CheckboxKey::Venue(row.name.clone()));
            keys.extend(
                row.cells
                    .iter()
                    .flatten()
                    .map(|y| CheckboxKey::venue_year(&row.name, y)),
            );
        }
        keys
    }

    /// The (venue, year) boxes in display order.
    pub fn leaves(&self) -> Vec<CheckboxKey> {
        self.venues
            .iter()
            .flat_map(|row| {
                row.cells
                    .iter()
                    .flatten()
                    .map(move |y| CheckboxKey::venue_year(&row.name, y))
            })
            .collect()
    }

    fn exists(&self, key: &CheckboxKey) -> bool {
        match key {
            CheckboxKey::SelectAll | CheckboxKey::SelectNone => true,
            CheckboxKey::Year(y) => self.years.contains(y),
            CheckboxKey::Venue(v) => self.venues.iter().any(|row| &row.name == v),
            CheckboxKey::VenueYear { venue, year } => self
                .venues
                .iter()
                .any(|row| &row.name == venue && row.cells.iter().flatten().any(|y| y == year)),
        }
    }

    pub fn is_checked(&self, key: &CheckboxKey) -> bool {
        self.checked.contains(key)
    }

    pub fn set_checked(&mut self, key: CheckboxKey, checked: bool) {
        if !self.exists(&key) {
            return;
        }
        if checked {
            self.checked.insert(key);
        } else {
            self.checked.remove(&key);
        }
    }

    /// React to a click on `key`: the clicked box flips, then the matrix is
    /// reconciled. The global pair forces its own state regardless of the flip.
    pub fn toggle_selection(&mut self, key: &CheckboxKey) {
        if !self.exists(key) {
            return;
        }
        match key {
            CheckboxKey::SelectAll => {
                self.checked = self.keys().into_iter().collect();
                self.checked.remove(&CheckboxKey::SelectNone);
            }
            CheckboxKey::SelectNone => {
                self.checked.clear();
                self.checked.insert(CheckboxKey::SelectNone);
            }
            CheckboxKey::Venue(venue) => {
                let on = !self.is_checked(key);
                self.set_checked(key.clone(), on);
                for leaf in self.leaves() {
                    if matches!(&leaf, CheckboxKey::VenueYear { venue: v, .. } if v == venue) {
                        self.set_checked(leaf, on);
                    }
                }
            }
            CheckboxKey::Year(year) => {
                let on = !self.is_checked(key);
                self.set_checked(key.clone(), on);
                for leaf in self.leaves() {
                    if matches!(&leaf, CheckboxKey::VenueYear { year: y, .. } if y == year) {
                        self.set_checked(leaf, on);
                    }
                }
            }
            CheckboxKey::VenueYear { .. } => {
                let on = !self.is_checked(key);
                self.set_checked(key.clone(), on);
            }
        }
    }

    /// Selection described by the checked leaves; nothing checked means all.
    pub fn apply_filter(&self) -> FilterSelection {
        let tokens: Vec<String> = self
            .leaves()
            .into_iter()
            .filter(|leaf| self.is_checked(leaf))
            .filter_map(|leaf| leaf.token())
            .collect();
        if tokens.is_empty() {
            FilterSelection::All
        } else {
            FilterSelection::Tokens(tokens)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAIN_TYPE;

    fn conferences() -> ConferenceMap {
        let mut map = ConferenceMap::new();
        for (venue, years) in [
            ("ICML", &["2017", "2018", "2019"][..]),
            ("NeurIPS", &["2018", "2019"][..]),
            ("CVPR", &["2015", "2016", "2019"][..]),
        ] {
            for y in years {
                map.insert(venue, y, MAIN_TYPE);
            }
        }
        map
    }

    fn leaf(venue: &str, year: &str) -> CheckboxKey {
        CheckboxKey::venue_year(venue, year)
    }

    #[test]
    fn test_parse_sentinels_and_tokens() {
        assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
        assert_eq!(FilterSelection::parse(""), FilterSelection::All);
        assert_eq!(FilterSelection::parse("none"), FilterSelection::Nothing);
        assert_eq!(
            FilterSelection::parse("NeurIPS2019,,ICML2019,NeurIPS2019"),
            FilterSelection::Tokens(vec!["NeurIPS2019".into(), "ICML2019".into()])
        );
    }

    #[test]
    fn test_empty_tokens_serialize_as_all() {
        assert_eq!(FilterSelection::Tokens(Vec::new()).to_query_value(), "all");
        assert_eq!(FilterSelection::Nothing.to_string(), "none");
    }

    #[test]
    fn test_separators_only_means_all() {
        assert_eq!(FilterSelection::parse(","), FilterSelection::All);
        assert_eq!(FilterSelection::parse(" , ,"), FilterSelection::All);
        assert!(FilterSelection::Tokens(Vec::new()).is_unrestricted());
        assert!(!FilterSelection::Nothing.is_unrestricted());
        assert!(!FilterSelection::parse("ICML2019").is_unrestricted());
    }

    #[test]
    fn test_year_columns_are_most_recent_first() {
        let panel = FilterPanel::build(&conferences(), &FilterSelection::All, DEFAULT_MAX_YEARS);
        assert_eq!(panel.years(), &["2019", "2018", "2017", "2016", "2015"]);

        let narrow = FilterPanel::build(&conferences(), &FilterSelection::All, 2);
        assert_eq!(narrow.years(), &["2019", "2018"]);
        assert!(narrow.leaves().iter().all(|l| !matches!(l,
            CheckboxKey::VenueYear { year, .. } if year == "2017")));
    }

    #[test]
    fn test_leaves_only_for_existing_years() {
        let panel = FilterPanel::build(&conferences(), &FilterSelection::All, DEFAULT_MAX_YEARS);
        let neurips = panel.venues().iter().find(|r| r.name == "NeurIPS").unwrap();
        assert_eq!(
            neurips.cells,
            vec![Some("2019".to_string()), Some("2018".to_string()), None, None, None]
        );
        assert_eq!(panel.leaves().len(), 8);
    }

    #[test]
    fn test_build_from_tokens_checks_exactly_those() {
        let selection = FilterSelection::parse("NeurIPS2019,ICML2019");
        let panel = FilterPanel::build(&conferences(), &selection, DEFAULT_MAX_YEARS);

        for key in panel.keys() {
            let expected = key == leaf("NeurIPS", "2019") || key == leaf("ICML", "2019");
            assert_eq!(panel.is_checked(&key), expected, "{:?}", key);
        }
    }

    #[test]
    fn test_build_all_and_none() {
        let all = FilterPanel::build(&conferences(), &FilterSelection::All, DEFAULT_MAX_YEARS);
        assert!(all.is_checked(&CheckboxKey::SelectAll));
        assert!(!all.is_checked(&CheckboxKey::SelectNone));
        assert!(all.leaves().iter().all(|l| all.is_checked(l)));

        let none = FilterPanel::build(&conferences(), &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        assert!(none.is_checked(&CheckboxKey::SelectNone));
        assert!(none.keys().iter().filter(|k| none.is_checked(k)).count() == 1);
    }

    #[test]
    fn test_select_all_checks_everything() {
        let mut panel = FilterPanel::build(&conferences(), &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&CheckboxKey::SelectAll);

        assert!(panel.is_checked(&CheckboxKey::SelectAll));
        assert!(!panel.is_checked(&CheckboxKey::SelectNone));
        for key in panel.keys() {
            if key != CheckboxKey::SelectNone {
                assert!(panel.is_checked(&key), "{:?}", key);
            }
        }
    }

    #[test]
    fn test_select_none_clears_everything() {
        let mut panel = FilterPanel::build(&conferences(), &FilterSelection::All, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&CheckboxKey::SelectNone);

        assert!(panel.is_checked(&CheckboxKey::SelectNone));
        for key in panel.keys() {
            if key != CheckboxKey::SelectNone {
                assert!(!panel.is_checked(&key), "{:?}", key);
            }
        }
    }

    #[test]
    fn test_venue_toggle_cascades_within_venue_only() {
        let mut panel = FilterPanel::build(&conferences(), &FilterSelection::All, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&CheckboxKey::Venue("ICML".into()));

        assert!(!panel.is_checked(&CheckboxKey::Venue("ICML".into())));
        for y in ["2017", "2018", "2019"] {
            assert!(!panel.is_checked(&leaf("ICML", y)));
        }
        assert!(panel.is_checked(&leaf("NeurIPS", "2019")));
        assert!(panel.is_checked(&CheckboxKey::SelectAll));

        panel.toggle_selection(&CheckboxKey::Venue("ICML".into()));
        for y in ["2017", "2018", "2019"] {
            assert!(panel.is_checked(&leaf("ICML", y)));
        }
    }

    #[test]
    fn test_year_toggle_cascades_across_venues() {
        let mut panel = FilterPanel::build(&conferences(), &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&CheckboxKey::Year("2019".into()));

        assert!(panel.is_checked(&leaf("ICML", "2019")));
        assert!(panel.is_checked(&leaf("NeurIPS", "2019")));
        assert!(panel.is_checked(&leaf("CVPR", "2019")));
        assert!(!panel.is_checked(&leaf("ICML", "2018")));
        assert!(!panel.is_checked(&CheckboxKey::Venue("ICML".into())));
    }

    #[test]
    fn test_year_toggle_ignores_venue_names_ending_in_year() {
        let mut map = conferences();
        map.insert("Workshop2019", "2018", MAIN_TYPE);
        let mut panel = FilterPanel::build(&map, &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&CheckboxKey::Year("2019".into()));

        assert!(!panel.is_checked(&CheckboxKey::Venue("Workshop2019".into())));
        assert!(!panel.is_checked(&leaf("Workshop2019", "2018")));
    }

    #[test]
    fn test_apply_filter_collects_checked_leaves() {
        let mut panel = FilterPanel::build(&conferences(), &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&leaf("NeurIPS", "2019"));
        panel.toggle_selection(&leaf("CVPR", "2016"));

        assert_eq!(panel.apply_filter().to_query_value(), "CVPR2016,NeurIPS2019");
    }

    #[test]
    fn test_apply_filter_with_nothing_checked_is_all() {
        let panel = FilterPanel::build(&conferences(), &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        assert_eq!(panel.apply_filter(), FilterSelection::All);
        assert_eq!(panel.apply_filter().to_query_value(), "all");
    }

    #[test]
    fn test_unknown_tokens_are_dropped_on_apply() {
        let selection = FilterSelection::parse("ICML2019,AAAI2020");
        let panel = FilterPanel::build(&conferences(), &selection, DEFAULT_MAX_YEARS);
        assert_eq!(panel.apply_filter().to_query_value(), "ICML2019");
    }

    #[test]
    fn test_toggle_unknown_key_is_noop() {
        let mut panel = FilterPanel::build(&conferences(), &FilterSelection::Nothing, DEFAULT_MAX_YEARS);
        panel.toggle_selection(&CheckboxKey::Venue("AAAI".into()));
        panel.toggle_selection(&CheckboxKey::Year("1999".into()));
        assert!(!panel.is_checked(&CheckboxKey::Venue("AAAI".into())));
        assert_eq!(panel.apply_filter(), FilterSelection::All);
    }
}
