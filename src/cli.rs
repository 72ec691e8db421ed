use clap::Parser;
use std::path::PathBuf;

use crate::config::RespondWith;
use crate::wizards::Variant;

/// Form wizard backend - serves multi-step forms driven by JSON Schema
#[derive(Parser, Debug, Clone)]
#[command(name = "formwizard", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMWIZARD_CONFIG", default_value = "formwizard.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMWIZARD_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMWIZARD_PORT")]
    pub port: Option<u16>,

    /// Wizard served on POST /form
    #[arg(long, env = "FORMWIZARD_VARIANT", value_enum)]
    pub variant: Option<Variant>,

    /// Response body for a completed form
    #[arg(long, env = "FORMWIZARD_RESPOND_WITH", value_enum)]
    pub respond_with: Option<RespondWith>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formwizard"]);
        assert_eq!(cli.config, PathBuf::from("formwizard.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.variant.is_none());
        assert!(cli.respond_with.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formwizard",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--variant",
            "showcase",
            "--respond-with",
            "ok",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.variant, Some(Variant::Showcase));
        assert_eq!(cli.respond_with, Some(RespondWith::Ok));
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["formwizard", "--variant", "nope"]).is_err());
    }
}
