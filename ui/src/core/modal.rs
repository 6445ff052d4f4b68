//! Detail overlay state for a single record.
//!
//! Opening happens in two phases so the lifespan bar visibly animates: the
//! overlay mounts with an empty bar (`Mounted`), and a reveal tick one frame
//! later moves it to the target width (`Revealed`).

use std::rc::Rc;

use super::record::EnrichedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Mounted,
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        record: Rc<EnrichedRecord>,
        lifespan_pct: f64,
        phase: RevealPhase,
    },
}

impl ModalState {
    pub fn open(record: Rc<EnrichedRecord>, max_lifespan_days: u32) -> Self {
        let lifespan_pct = lifespan_pct(record.lifespan_days, max_lifespan_days);
        Self::Open {
            record,
            lifespan_pct,
            phase: RevealPhase::Mounted,
        }
    }

    /// Advance to `Revealed` if `record` is still the one on display.
    pub fn reveal(self, record: &Rc<EnrichedRecord>) -> Self {
        match self {
            Self::Open {
                record: current,
                lifespan_pct,
                phase: RevealPhase::Mounted,
            } if Rc::ptr_eq(&current, record) => Self::Open {
                record: current,
                lifespan_pct,
                phase: RevealPhase::Revealed,
            },
            other => other,
        }
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn record(&self) -> Option<&Rc<EnrichedRecord>> {
        match self {
            Self::Open { record, .. } => Some(record),
            Self::Closed => None,
        }
    }

    /// Current width of the lifespan bar in percent.
    pub fn fill_pct(&self) -> f64 {
        match self {
            Self::Open {
                lifespan_pct,
                phase: RevealPhase::Revealed,
                ..
            } => *lifespan_pct,
            _ => 0.0,
        }
    }
}

/// `days` relative to the longest lifespan, clamped to `[0, 100]`.
pub fn lifespan_pct(days: u32, max_lifespan_days: u32) -> f64 {
    if max_lifespan_days == 0 {
        return 0.0;
    }
    (100.0 * f64::from(days) / f64::from(max_lifespan_days)).clamp(0.0, 100.0)
}
