//! Filtering and ordering of the enriched collection.

use std::cmp::Ordering;
use std::rc::Rc;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::record::EnrichedRecord;

/// Active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category == *category,
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    DiedDesc,
    DiedAsc,
    LifespanAsc,
    LifespanDesc,
    Name,
    /// Any unrecognized selector value; keeps the filtered order.
    AsLoaded,
}

impl SortKey {
    /// The five selectable keys, in the order the sort control lists them.
    pub const SELECTABLE: [SortKey; 5] = [
        SortKey::DiedDesc,
        SortKey::DiedAsc,
        SortKey::LifespanAsc,
        SortKey::LifespanDesc,
        SortKey::Name,
    ];

    pub fn from_value(value: &str) -> Self {
        match value {
            "died-desc" => Self::DiedDesc,
            "died-asc" => Self::DiedAsc,
            "lifespan-asc" => Self::LifespanAsc,
            "lifespan-desc" => Self::LifespanDesc,
            "name" => Self::Name,
            other => {
                tracing::debug!(value = other, "unrecognized sort key, keeping input order");
                Self::AsLoaded
            }
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            Self::DiedDesc => "died-desc",
            Self::DiedAsc => "died-asc",
            Self::LifespanAsc => "lifespan-asc",
            Self::LifespanDesc => "lifespan-desc",
            Self::Name => "name",
            Self::AsLoaded => "as-loaded",
        }
    }
}

/// Filter `records` by `filter`, then stable-sort by `sort`.
///
/// Returned entries are clones of the same `Rc`s, so callers can hand the
/// exact record object back to the modal.
pub fn select(
    records: &[Rc<EnrichedRecord>],
    filter: &Filter,
    sort: SortKey,
) -> Vec<Rc<EnrichedRecord>> {
    let mut selected: Vec<Rc<EnrichedRecord>> = records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect();

    match sort {
        SortKey::DiedDesc => selected.sort_by(|a, b| b.died_date.cmp(&a.died_date)),
        SortKey::DiedAsc => selected.sort_by(|a, b| a.died_date.cmp(&b.died_date)),
        SortKey::LifespanAsc => selected.sort_by_key(|r| r.lifespan_days),
        SortKey::LifespanDesc => selected.sort_by(|a, b| b.lifespan_days.cmp(&a.lifespan_days)),
        SortKey::Name => selected.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::AsLoaded => {}
    }

    selected
}

/// Collation-style name comparison: accents and case only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
