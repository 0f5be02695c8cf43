//! Interactive window that renders the pattern from a [`ConfigCell`].
//!
//! [`ConfigCell`]: crate::shared::ConfigCell

mod app;
mod keys;

pub use app::PatternViewer;
