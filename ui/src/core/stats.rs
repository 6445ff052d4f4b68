//! One-shot summary statistics over the enriched collection.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::error::EmptyInputError;
use super::record::EnrichedRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub total: usize,
    pub count_by_type: BTreeMap<String, usize>,
    /// Minimum `lifespan_days`; the first such record on ties.
    pub shortest_lived: Rc<EnrichedRecord>,
    /// Maximum `lifespan_days`; the first such record on ties.
    pub longest_lived: Rc<EnrichedRecord>,
}

impl AggregateStats {
    pub fn compute(records: &[Rc<EnrichedRecord>]) -> Result<Self, EmptyInputError> {
        let first = records.first().ok_or(EmptyInputError)?;

        let mut count_by_type = BTreeMap::new();
        let mut shortest = first;
        let mut longest = first;

        for record in records {
            *count_by_type.entry(record.category.clone()).or_insert(0) += 1;
            if record.lifespan_days < shortest.lifespan_days {
                shortest = record;
            }
            if record.lifespan_days > longest.lifespan_days {
                longest = record;
            }
        }

        Ok(Self {
            total: records.len(),
            count_by_type,
            shortest_lived: Rc::clone(shortest),
            longest_lived: Rc::clone(longest),
        })
    }

    /// Number of records in `category`; 0 when none were loaded.
    pub fn count_of(&self, category: &str) -> usize {
        self.count_by_type.get(category).copied().unwrap_or(0)
    }

    pub fn max_lifespan_days(&self) -> u32 {
        self.longest_lived.lifespan_days
    }
}
