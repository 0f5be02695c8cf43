mod commands;

use anyhow::Result;
use vesper_engine::device::GpuInit;
use vesper_engine::logging::{init_logging, LoggingConfig};
use vesper_engine::shared::{ConfigCell, SnapshotRequest};
use vesper_engine::viewer::PatternViewer;
use vesper_engine::window::{Runtime, RuntimeConfig};
use vesper_pattern::PatternConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let initial = match prompt.trim() {
        "" => PatternConfig::default(),
        text => commands::apply_prompt(text, &PatternConfig::default()),
    };

    let config = ConfigCell::new(initial);
    let snapshots = SnapshotRequest::default();
    commands::spawn_reader(config.clone(), snapshots.clone())?;

    let viewer = PatternViewer::new(config, snapshots)
        .with_snapshot_handler(|snapshot| log::debug!("snapshot holds {} bytes", snapshot.rgba.len()));

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        },
        viewer,
    )
}
