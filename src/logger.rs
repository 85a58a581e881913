use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config file says otherwise.
pub const DEFAULT_FILTER: &str = "library_catalog=warn";
const VERBOSE_FILTER: &str = "library_catalog=debug";

/// Resolve the filter directive: `--verbose` wins, then the configured filter.
pub fn filter_directive(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        VERBOSE_FILTER
    } else {
        configured.unwrap_or(DEFAULT_FILTER)
    }
}

/// Install the global subscriber. Logs go to stderr; stdout carries the menu.
pub fn init_logger(verbose: bool, configured: Option<&str>) {
    let directive = filter_directive(verbose, configured);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_configured_filter() {
        assert_eq!(filter_directive(true, Some("off")), "library_catalog=debug");
        assert_eq!(filter_directive(false, Some("off")), "off");
        assert_eq!(filter_directive(false, None), DEFAULT_FILTER);
    }
}
