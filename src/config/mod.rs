use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tellus_mason::config::{DEFAULT_BASE_URL, DEFAULT_ENTRYPOINT, MASON_JSON, PLAIN_JSON};
use tellus_mason::ApiConfig;

pub mod validator;

use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    /// Logs every request and response body
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            debug: false,
            timeout_seconds: default_timeout(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_file(Path::new("tellus.toml"))
    }

    /// Create settings from CLI arguments (config file, then CLI/env overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let settings = Self::load(path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.entrypoint", DEFAULT_ENTRYPOINT)?
            .set_default("api.mason_mime", MASON_JSON)?
            .set_default("api.json_mime", PLAIN_JSON)?
            .set_default("debug", false)?
            .set_default("timeout_seconds", default_timeout() as i64)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(base_url) = &cli.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(entrypoint) = &cli.entrypoint {
            self.api.entrypoint = entrypoint.clone();
        }
        if let Some(debug) = cli.debug {
            self.debug = debug;
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_seconds = timeout;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
