use crate::bmkg::DEFAULT_BASE_URL;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    bmkg: Bmkg,
}

impl AppConfig {
    /// Layers `config.toml`, an optional `config_local.toml` and `GEMPA__*` environment variables on top of the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config").required(false))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("GEMPA").separator("__")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("core.log_level", "info")?
            .set_default("bmkg.base_url", DEFAULT_BASE_URL)?
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn bmkg(&self) -> &Bmkg {
        &self.bmkg
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
}

impl Core {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[derive(Debug, Deserialize)]
pub struct Bmkg {
    base_url: String,
}

impl Bmkg {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "debug".to_string(),
                },
                bmkg: Bmkg {
                    base_url: DEFAULT_BASE_URL.to_string(),
                },
            },
        }
    }

    pub fn bmkg_url(mut self, url: String) -> Self {
        self.config.bmkg.base_url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
