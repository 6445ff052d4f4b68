//! Year grouping for the timeline view.

use std::rc::Rc;

use super::record::EnrichedRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub records: Vec<Rc<EnrichedRecord>>,
}

/// Re-sort newest death first (whatever order `records` arrive in) and group
/// consecutive entries by death year.
pub fn group_by_year(records: &[Rc<EnrichedRecord>]) -> Vec<YearGroup> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.died_date.cmp(&a.died_date));

    let mut groups: Vec<YearGroup> = Vec::new();
    for record in sorted {
        let year = record.died_date.year();
        match groups.last_mut() {
            Some(group) if group.year == year => group.records.push(record),
            _ => groups.push(YearGroup {
                year,
                records: vec![record],
            }),
        }
    }
    groups
}
