use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. JSON lines are written when
/// `logging.json` is set or `ENVIRONMENT=production`, pretty console output
/// otherwise.
pub fn init_observability(service_name: &str, logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if logging.json || is_production {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = env!("CARGO_PKG_VERSION"),
        log.json = logging.json || is_production,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        let logging = LoggingConfig {
            level: "debug".to_owned(),
            json: false,
        };

        let _ = init_observability("test-service", &logging);
        assert!(init_observability("test-service", &logging).is_err());
    }
}
