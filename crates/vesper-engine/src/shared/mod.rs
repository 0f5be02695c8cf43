//! State shared between configuration writers and the render loop.

mod config_cell;
mod snapshot;

pub use config_cell::ConfigCell;
pub use snapshot::SnapshotRequest;
