//! Shared UI crate for the graveyard. The data pipeline lives in [`core`];
//! [`wall`] holds the Dioxus renderers and [`views`] the routed pages.

pub mod core;
pub mod i18n;
pub mod views;
pub mod wall;

pub mod components {
    // Brand header with locale switcher (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;
}

pub use wall::RECORDS_ASSET;
