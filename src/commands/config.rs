//! Config subcommands handler

use anyhow::{bail, Result};

use readalong::theme::current_theme;
use readalong::Config;

use super::load_config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = load_config()?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Write the default configuration file.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let path = Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}

/// Print the config file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
