//! Structured logging.
//!
//! # Design Decisions
//! - `RUST_LOG` wins when set; the config level is the fallback
//! - Log level also applies to tower_http so request traces follow it

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "usuarios_web={default_level},tower_http={default_level}"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
