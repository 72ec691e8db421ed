//! Environment overrides live in their own test binary so setting
//! `FORMWIZARD_*` cannot leak into the CLI default tests.

use clap::Parser;
use formwizard::cli::Cli;
use formwizard::config::Settings;
use formwizard::wizards::Variant;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_env_sits_between_cli_and_config_file() -> anyhow::Result<()> {
    std::env::set_var("FORMWIZARD_PORT", "9300");
    std::env::set_var("FORMWIZARD_VARIANT", "basic");

    let cli = Cli::try_parse_from(["formwizard"])?;
    assert_eq!(cli.port, Some(9300));
    assert_eq!(cli.variant, Some(Variant::Basic));

    // An explicit flag beats the environment
    let cli = Cli::try_parse_from(["formwizard", "--port", "9400"])?;
    assert_eq!(cli.port, Some(9400));
    assert_eq!(cli.variant, Some(Variant::Basic));

    // The environment beats the config file, which still fills the rest
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("formwizard.toml");
    fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8100
"#,
    )?;
    let path_arg = path.to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["formwizard", "--config", path_arg.as_str()])?;
    let settings = Settings::new_with_cli(&cli)?;
    assert_eq!(settings.server.port, 9300);
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.form.variant, Variant::Basic);

    std::env::remove_var("FORMWIZARD_PORT");
    std::env::remove_var("FORMWIZARD_VARIANT");

    let cli = Cli::try_parse_from(["formwizard", "--config", path_arg.as_str()])?;
    let settings = Settings::new_with_cli(&cli)?;
    assert_eq!(settings.server.port, 8100);
    assert_eq!(settings.form.variant, Variant::Showcase);

    Ok(())
}
