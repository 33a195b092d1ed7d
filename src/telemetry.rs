use crate::{
    config::{LogConfig, LogFormat},
    error::ServiceError,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `log.filter`. Calling this a second time returns
/// [`ServiceError::Telemetry`] rather than panicking.
pub fn init(config: &LogConfig) -> Result<(), ServiceError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| ServiceError::Telemetry(e.to_string()))?;

    let json = config.format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .try_init()
        .map_err(|e| ServiceError::Telemetry(e.to_string()))
}
