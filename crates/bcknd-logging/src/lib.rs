use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_LEVEL: &str = "info";

/// Initialize structured logging with JSON format
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Initialize logging with a fallback level, `RUST_LOG` still takes precedence
pub fn init_with_level(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .json()
        .init();
}

/// Initialize logging for tests (plain format)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        debug!("Test debug message");
        info!("Test info message");
        warn!("Test warning message");
    }

    #[test]
    fn test_fallback_filter() {
        std::env::remove_var("RUST_LOG");
        assert!(filter("warn").to_string().contains("warn"));
    }
}
