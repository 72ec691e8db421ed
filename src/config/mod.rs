use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;
use crate::wizards::Variant;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub form: FormSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Cross-origin policy for the form endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    /// Allowed origins; `"*"` allows any origin
    #[serde(default = "default_origins")]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origins: default_origins(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

impl CorsSettings {
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|o| o == "*")
    }
}

/// What a completed form submission answers with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RespondWith {
    /// The literal string `"OK!"`
    #[default]
    Ok,
    /// The merged form state
    State,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormSettings {
    /// Wizard served on `POST /form`
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub respond_with: RespondWith,
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Self::builder(File::from(cli.config.clone()).required(false))?;
        let mut settings: Settings = s.try_deserialize()?;

        // Apply CLI overrides (CLI > env vars > config file)
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `formwizard.{toml,yaml,json}` from `root`, falling back to defaults
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("formwizard");
        let s = Self::builder(File::from(config_path).required(false))?;
        let settings: Settings = s.try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn builder<S>(source: S) -> Result<Config, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .add_source(source)
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .build()
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(variant) = cli.variant {
            self.form.variant = variant;
        }
        if let Some(respond_with) = cli.respond_with {
            self.form.respond_with = respond_with;
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
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            cors: CorsSettings::default(),
            form: FormSettings::default(),
        }
    }
}
