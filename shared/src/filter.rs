//! Pure derivation of the visible loan list from the category chip and the
//! search box. Safe to call on every keystroke.

use std::collections::HashSet;

use crate::loan::LoanRecord;

/// Label of the "no category restriction" chip.
pub const ALL_CATEGORIES: &str = "All";

/// Category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Exact(String),
}

impl CategoryFilter {
    /// Map a chip label back to a selector; `"All"` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Exact(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Exact(category) => category,
        }
    }

    fn matches(&self, record: &LoanRecord) -> bool {
        match self {
            Self::All => true,
            Self::Exact(category) => record.category() == category,
        }
    }
}

/// Category and free-text criteria, applied conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LoanFilter {
    pub category: CategoryFilter,
    pub query: String,
}

impl LoanFilter {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.category == CategoryFilter::All && self.query.is_empty()
    }
}

/// Records matching `filter`, in their original relative order.
///
/// The query is matched as a case-insensitive substring of the title or the
/// category. An empty query matches everything.
pub fn filter_loans<'a>(records: &'a [LoanRecord], filter: &LoanFilter) -> Vec<&'a LoanRecord> {
    let needle = filter.query.to_lowercase();
    records
        .iter()
        .filter(|record| filter.category.matches(record))
        .filter(|record| {
            needle.is_empty()
                || record.title().to_lowercase().contains(&needle)
                || record.category().to_lowercase().contains(&needle)
        })
        .collect()
}

/// `"All"` followed by the distinct categories present, first-seen order.
pub fn category_options(records: &[LoanRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for record in records {
        if seen.insert(record.category()) {
            options.push(record.category().to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{LoanFields, LoanId};

    fn record(id: &str, title: &str, category: &str) -> LoanRecord {
        LoanRecord::new(LoanId::new(id), LoanFields {
            title: title.to_string(),
            category: category.to_string(),
            ..LoanFields::default()
        })
    }

    fn sample() -> Vec<LoanRecord> {
        vec![
            record("1", "Startup Capital", "Business"),
            record("2", "Tuition Help", "Education"),
            record("3", "Shop Expansion", "Business"),
            record("4", "Clinic Bills", "Medical"),
            record("5", "Harvest Advance", "business"),
        ]
    }

    fn ids(records: &[&LoanRecord]) -> Vec<String> {
        records.iter().map(|record| record.id.to_string()).collect()
    }

    #[test]
    fn all_with_empty_query_is_identity() {
        let records = sample();
        let filtered = filter_loans(&records, &LoanFilter::default());
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
        assert!(LoanFilter::default().is_identity());
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let records = sample();
        let filter = LoanFilter::new(CategoryFilter::Exact("Business".into()), "");
        let filtered = filter_loans(&records, &filter);
        assert_eq!(ids(&filtered), vec!["1", "3"]);
        assert!(filtered.iter().all(|record| record.category() == "Business"));
    }

    #[test]
    fn query_matches_title_or_category_ignoring_case() {
        let records = sample();
        let by_title = filter_loans(&records, &LoanFilter::new(CategoryFilter::All, "CLINIC"));
        assert_eq!(ids(&by_title), vec!["4"]);

        let by_category = filter_loans(&records, &LoanFilter::new(CategoryFilter::All, "educ"));
        assert_eq!(ids(&by_category), vec!["2"]);

        let by_either = filter_loans(&records, &LoanFilter::new(CategoryFilter::All, "bus"));
        assert_eq!(ids(&by_either), vec!["1", "3", "5"]);
    }

    #[test]
    fn category_and_query_are_conjunctive() {
        let records = sample();
        let filter = LoanFilter::new(CategoryFilter::Exact("Business".into()), "shop");
        assert_eq!(ids(&filter_loans(&records, &filter)), vec!["3"]);

        let none = LoanFilter::new(CategoryFilter::Exact("Medical".into()), "tuition");
        assert!(filter_loans(&records, &none).is_empty());
    }

    #[test]
    fn labels_map_to_selectors() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("Personal"),
            CategoryFilter::Exact("Personal".to_string())
        );
        assert_eq!(CategoryFilter::Exact("Medical".into()).label(), "Medical");
    }

    #[test]
    fn options_start_with_all_then_first_seen() {
        let records = vec![record("1", "x", "A"), record("2", "y", "B"), record("3", "z", "A")];
        assert_eq!(category_options(&records), vec!["All", "A", "B"]);
        assert_eq!(category_options(&[]), vec!["All"]);
    }
}
