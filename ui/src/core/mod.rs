//! Platform-agnostic core of the memorial wall: record enrichment, stats,
//! selection, dispatch and modal sequencing. Nothing in here touches the DOM.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod modal;
pub mod record;
pub mod select;
pub mod source;
pub mod stats;
pub mod timeline;
pub mod timing;

pub use config::WallConfig;
pub use dispatch::{dispatch, Memorial, Session, Surface, ViewMode, ViewState, WallEvent};
pub use error::{EmptyInputError, LoadError, ParseError};
pub use modal::{ModalState, RevealPhase};
pub use record::{EnrichedRecord, RawRecord};
pub use select::{select, Filter, SortKey};
pub use stats::AggregateStats;
pub use timeline::{group_by_year, YearGroup};
