use std::borrow::Cow;
use std::sync::Once;

/// Used when neither the config nor `RUST_LOG` names a filter. wgpu and naga
/// log per-resource at info, which drowns out the scene rebuild lines.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger settings for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. `"vesper_engine=debug"`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Explicit filter first, then the environment, then [`DEFAULT_FILTER`].
fn resolve_filter(explicit: Option<&str>, env: Option<String>) -> Cow<'_, str> {
    match (explicit, env) {
        (Some(filter), _) => Cow::Borrowed(filter),
        (None, Some(filter)) if !filter.trim().is_empty() => Cow::Owned(filter),
        _ => Cow::Borrowed(DEFAULT_FILTER),
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call has an
/// effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter.as_deref(), std::env::var("RUST_LOG").ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();

        log::debug!("logging initialized with {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let filter = resolve_filter(Some("debug"), Some("warn".into()));
        assert_eq!(filter, "debug");
    }

    #[test]
    fn environment_is_second() {
        assert_eq!(resolve_filter(None, Some("warn".into())), "warn");
        assert_eq!(resolve_filter(None, Some("  ".into())), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
    }
}
