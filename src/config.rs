use crate::models::ServiceKind;
use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, with IPv6 literals bracketed
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// EnvFilter directives, overridden by `RUST_LOG` when set
    pub filter: String,
    pub format: LogFormat,
    pub log_bodies: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load the configuration for one service.
    ///
    /// Layers, lowest priority first: built-in defaults, the optional shared
    /// `config` file, the optional `config/<service-name>` file, then
    /// `<PREFIX>__SECTION__KEY` environment variables.
    pub fn load(kind: ServiceKind) -> Result<Self, ConfigError> {
        // Load .env file if it exists (for environment variable overrides)
        dotenvy::dotenv().ok();

        let builder = Self::defaults(kind)?
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config/{}", kind.name())).required(false))
            .add_source(Self::environment(kind));

        Self::from_builder(builder)
    }

    /// Builder seeded with the defaults for `kind`
    pub fn defaults(kind: ServiceKind) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            // Unspecified IPv6 address, dual-stack on Linux
            .set_default("server.host", "::")?
            .set_default("server.port", i64::from(kind.default_port()))?
            .set_default("log.filter", "info,storyquiz=debug")?
            .set_default("log.format", "pretty")?
            .set_default("log.log_bodies", true)
    }

    pub fn environment(kind: ServiceKind) -> Environment {
        Environment::with_prefix(&kind.env_prefix())
            .separator("__")
            .try_parsing(true)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
