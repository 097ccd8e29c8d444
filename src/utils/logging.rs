//! File logging

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Used when neither `RUST_LOG` nor the app-specific variable is set.
/// HTTP internals stay at `warn`.
fn default_directives() -> String {
    format!(
        "{}=info,reqwest=warn,hyper=warn,hyper_util=warn",
        env!("CARGO_CRATE_NAME")
    )
}

/// `RUST_LOG` wins over `MARQUEE_LOGLEVEL`; blank values count as unset.
fn log_directives(rust_log: Option<String>, app_log: Option<String>) -> String {
    [rust_log, app_log]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(default_directives)
}

/// Send everything to `{data_dir}/marquee.log`; nothing goes to stdout or
/// stderr. Call sites use the `log` macros, which reach this subscriber
/// through its `tracing-log` bridge.
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let directives = log_directives(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(&directives)?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    tracing::info!(
        path = %log_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "logging started"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rust_log_takes_precedence() {
        assert_eq!(
            log_directives(Some("debug".to_string()), Some("trace".to_string())),
            "debug"
        );
    }

    #[test]
    fn test_app_variable_used_when_rust_log_blank() {
        assert_eq!(
            log_directives(Some("  ".to_string()), Some("marquee=trace".to_string())),
            "marquee=trace"
        );
    }

    #[test]
    fn test_defaults_quiet_http_crates() {
        let directives = log_directives(None, None);
        assert!(directives.starts_with("marquee=info"));
        assert!(directives.contains("reqwest=warn"));
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
