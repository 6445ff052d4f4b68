//! Wall configuration supplied by the platform shell.
//!
//! Shells provide a `WallConfig` through Dioxus context; components fall back to
//! `WallConfig::default()` when none is present.

use super::source::RecordSource;

#[derive(Debug, Clone, PartialEq)]
pub struct WallConfig {
    /// Where the raw record collection comes from.
    pub source: RecordSource,
    /// Number of decorative particles floating behind the wall.
    pub particle_count: usize,
    /// Entrance animation delay added per card, in milliseconds.
    pub card_stagger_ms: u32,
    /// Delay between mounting the modal and revealing its lifespan bar.
    pub reveal_delay_ms: u64,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            source: RecordSource::Embedded,
            particle_count: 25,
            card_stagger_ms: 50,
            reveal_delay_ms: 16,
        }
    }
}

impl WallConfig {
    pub fn with_source(mut self, source: RecordSource) -> Self {
        self.source = source;
        self
    }

    /// CSS `animation-delay` for the card at `index`.
    pub fn card_delay(&self, index: usize) -> String {
        let ms = u64::from(self.card_stagger_ms).saturating_mul(index as u64);
        format!("{}s", ms as f64 / 1000.0)
    }
}
