//! View state machine and render dispatch.
//!
//! The wall keeps one [`Session`] value. Every UI interaction is expressed as a
//! [`WallEvent`] and folded into a new session by [`Session::apply`]; the
//! renderer then asks [`dispatch`] which surface to draw.

use std::rc::Rc;

use super::error::EmptyInputError;
use super::modal::ModalState;
use super::record::EnrichedRecord;
use super::select::{select, Filter, SortKey};
use super::stats::AggregateStats;
use super::timeline::{group_by_year, YearGroup};

/// Categories that always get a filter button, in display order.
pub const PINNED_CATEGORIES: [&str; 2] = ["model", "product"];

/// The loaded collection plus everything derived from it once.
#[derive(Debug, Clone, PartialEq)]
pub struct Memorial {
    pub records: Rc<[Rc<EnrichedRecord>]>,
    pub stats: Result<AggregateStats, EmptyInputError>,
    pub max_lifespan_days: u32,
}

impl Memorial {
    pub fn new(records: Vec<EnrichedRecord>) -> Self {
        let records: Rc<[Rc<EnrichedRecord>]> = records.into_iter().map(Rc::new).collect();
        let stats = AggregateStats::compute(&records);
        let max_lifespan_days = stats
            .as_ref()
            .map(AggregateStats::max_lifespan_days)
            .unwrap_or(0);

        match &stats {
            Ok(stats) => tracing::info!(
                total = stats.total,
                max_lifespan_days,
                "memorial assembled"
            ),
            Err(err) => tracing::warn!("memorial has no stats: {err}"),
        }

        Self {
            records,
            stats,
            max_lifespan_days,
        }
    }

    /// Filterable categories: the pinned ones first, then any others present
    /// in the data in alphabetical order.
    pub fn categories(&self) -> Vec<String> {
        let mut extra: Vec<String> = self
            .records
            .iter()
            .map(|r| r.category.clone())
            .filter(|c| !PINNED_CATEGORIES.contains(&c.as_str()))
            .collect();
        extra.sort();
        extra.dedup();

        PINNED_CATEGORIES
            .iter()
            .map(|c| c.to_string())
            .chain(extra)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Timeline,
}

impl ViewMode {
    pub fn as_value(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Timeline => "timeline",
        }
    }
}

/// Filter, sort and view selection. Initial value: all / died-desc / grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: Filter,
    pub sort: SortKey,
    pub view: ViewMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WallEvent {
    FilterChanged(Filter),
    SortChanged(SortKey),
    ViewChanged(ViewMode),
    RecordSelected(Rc<EnrichedRecord>),
    /// One frame after opening: start the lifespan bar animation.
    RevealFrame(Rc<EnrichedRecord>),
    ModalDismissed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub view: ViewState,
    pub modal: ModalState,
}

impl Session {
    /// Fold one event into the next session. Every event is accepted.
    pub fn apply(self, event: WallEvent, memorial: &Memorial) -> Self {
        let Session { view, modal } = self;
        match event {
            WallEvent::FilterChanged(filter) => {
                tracing::debug!(filter = filter.as_value(), "filter changed");
                Self {
                    view: ViewState { filter, ..view },
                    modal,
                }
            }
            WallEvent::SortChanged(sort) => {
                tracing::debug!(sort = sort.as_value(), "sort changed");
                Self {
                    view: ViewState { sort, ..view },
                    modal,
                }
            }
            WallEvent::ViewChanged(mode) => {
                tracing::debug!(view = mode.as_value(), "view changed");
                Self {
                    view: ViewState { view: mode, ..view },
                    modal,
                }
            }
            WallEvent::RecordSelected(record) => {
                tracing::debug!(record = %record.name, "opening detail");
                Self {
                    view,
                    modal: ModalState::open(record, memorial.max_lifespan_days),
                }
            }
            WallEvent::RevealFrame(record) => Self {
                view,
                modal: modal.reveal(&record),
            },
            WallEvent::ModalDismissed => Self {
                view,
                modal: modal.close(),
            },
        }
    }
}

/// What the wall should draw for the current view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Grid(Vec<Rc<EnrichedRecord>>),
    Timeline(Vec<YearGroup>),
}

pub fn dispatch(view: &ViewState, memorial: &Memorial) -> Surface {
    let selected = select(&memorial.records, &view.filter, view.sort);
    match view.view {
        ViewMode::Grid => Surface::Grid(selected),
        ViewMode::Timeline => Surface::Timeline(group_by_year(&selected)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{enrich, tests::raw};

    fn memorial() -> Memorial {
        Memorial::new(
            [
                raw("A", "model", "2022-01-01", "2023-01-01"),
                raw("B", "product", "2024-01-01", "2024-06-01"),
                raw("C", "feature", "2023-01-01", "2023-03-01"),
            ]
            .into_iter()
            .map(|r| enrich(r).unwrap())
            .collect(),
        )
    }

    fn grid_names(surface: &Surface) -> Vec<String> {
        match surface {
            Surface::Grid(list) => list.iter().map(|r| r.name.clone()).collect(),
            Surface::Timeline(_) => panic!("expected grid surface"),
        }
    }

    #[test]
    fn initial_state_is_all_died_desc_grid() {
        let session = Session::default();
        assert_eq!(session.view.filter, Filter::All);
        assert_eq!(session.view.sort, SortKey::DiedDesc);
        assert_eq!(session.view.view, ViewMode::Grid);
        assert!(!session.modal.is_open());
    }

    #[test]
    fn each_event_replaces_one_field() {
        let m = memorial();
        let session = Session::default()
            .apply(WallEvent::FilterChanged(Filter::from_value("model")), &m);
        assert_eq!(session.view.filter, Filter::Category("model".into()));
        assert_eq!(session.view.sort, SortKey::DiedDesc);

        let session = session.apply(WallEvent::SortChanged(SortKey::Name), &m);
        assert_eq!(session.view.filter, Filter::Category("model".into()));
        assert_eq!(session.view.sort, SortKey::Name);

        let session = session.apply(WallEvent::ViewChanged(ViewMode::Timeline), &m);
        assert_eq!(session.view.sort, SortKey::Name);
        assert_eq!(session.view.view, ViewMode::Timeline);
    }

    #[test]
    fn dispatch_follows_view_mode() {
        let m = memorial();
        let mut view = ViewState::default();
        assert_eq!(grid_names(&dispatch(&view, &m)), ["B", "C", "A"]);

        view.view = ViewMode::Timeline;
        match dispatch(&view, &m) {
            Surface::Timeline(groups) => {
                let years: Vec<i32> = groups.iter().map(|g| g.year).collect();
                assert_eq!(years, [2024, 2023]);
            }
            Surface::Grid(_) => panic!("expected timeline surface"),
        }
    }

    #[test]
    fn unknown_filter_renders_empty_grid() {
        let m = memorial();
        let view = ViewState {
            filter: Filter::from_value("gadget"),
            ..ViewState::default()
        };
        assert!(grid_names(&dispatch(&view, &m)).is_empty());
    }

    #[test]
    fn modal_events_leave_view_untouched() {
        let m = memorial();
        let record = Rc::clone(&m.records[1]);
        let start = Session::default().apply(WallEvent::SortChanged(SortKey::LifespanAsc), &m);

        let opened = start
            .clone()
            .apply(WallEvent::RecordSelected(Rc::clone(&record)), &m);
        assert_eq!(opened.view, start.view);
        assert!(Rc::ptr_eq(opened.modal.record().unwrap(), &record));

        let revealed = opened.apply(WallEvent::RevealFrame(Rc::clone(&record)), &m);
        assert!(revealed.modal.fill_pct() > 0.0);

        let closed = revealed.apply(WallEvent::ModalDismissed, &m);
        let closed_again = closed.clone().apply(WallEvent::ModalDismissed, &m);
        assert_eq!(closed, closed_again);
        assert_eq!(closed.view, start.view);
    }

    #[test]
    fn max_lifespan_is_fixed_across_opens() {
        let m = memorial();
        let before = m.max_lifespan_days;
        let mut session = Session::default();
        for record in m.records.iter() {
            session = session.apply(WallEvent::RecordSelected(Rc::clone(record)), &m);
            session = session.apply(WallEvent::RevealFrame(Rc::clone(record)), &m);
            assert!((0.0..=100.0).contains(&session.modal.fill_pct()));
        }
        assert_eq!(m.max_lifespan_days, before);
        assert_eq!(before, 365);
    }

    #[test]
    fn categories_pin_model_and_product() {
        assert_eq!(memorial().categories(), ["model", "product", "feature"]);
    }

    #[test]
    fn empty_memorial_has_no_stats() {
        let m = Memorial::new(Vec::new());
        assert_eq!(m.stats, Err(EmptyInputError));
        assert_eq!(m.max_lifespan_days, 0);
        assert!(grid_names(&dispatch(&ViewState::default(), &m)).is_empty());
    }
}
