//! Logging setup for the conversion pipeline
//!
//! Pipeline code emits `tracing` events: `info!` per phase, `debug!` per
//! file, `trace!` per parsed construct, and `warn!` for every diagnostic.
//! The subscriber installed here writes them to stderr, leaving stdout to
//! progress lines and JSON output.
//!
//! ```rust
//! use modelsmith::core::logging::init_logging;
//!
//! let _ = init_logging(Some("modelsmith::plugins::class=trace"), Some("pretty"));
//! ```
//!
//! Unset arguments fall back to `MODELSMITH_LOG_LEVEL` (then `RUST_LOG`)
//! and `MODELSMITH_LOG_FORMAT`.

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

const LEVEL_VAR: &str = "MODELSMITH_LOG_LEVEL";
const FORMAT_VAR: &str = "MODELSMITH_LOG_FORMAT";
const DEFAULT_LEVEL: &str = "warn";

/// Output format of log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event, no targets
    #[default]
    Compact,
    /// Multi-line with source locations and span activity
    Pretty,
    /// One JSON object per event, span close timings included
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::layer().with_writer(std::io::stderr);
        match self {
            LogFormat::Compact => base.compact().with_target(false).boxed(),
            LogFormat::Pretty => base
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .boxed(),
            LogFormat::Json => base.json().with_span_events(FmtSpan::CLOSE).boxed(),
        }
    }
}

/// Filter directives and format after applying environment fallbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve explicit arguments against the environment
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self, String> {
        let directives = level
            .map(str::to_string)
            .or_else(|| std::env::var(LEVEL_VAR).ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let format = match format
            .map(str::to_string)
            .or_else(|| std::env::var(FORMAT_VAR).ok())
        {
            Some(name) => name
                .parse::<LogFormat>()
                .map_err(|e| format!("Invalid log format: {}", e))?,
            None => LogFormat::default(),
        };

        Ok(Self { directives, format })
    }

    /// Unparseable directives fall back to the default level
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Install the global subscriber
///
/// Fails for an unknown format, or when a subscriber is already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = LogSettings::resolve(level, format)?;

    Registry::default()
        .with(settings.format.layer())
        .with(settings.filter())
        .try_init()?;

    Ok(())
}

pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
