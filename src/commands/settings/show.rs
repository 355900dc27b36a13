use anyhow::Result;
use colored::*;
use compat_finder::config::{Config, SETTING_NAMES};

/// Show all settings with their current values
pub async fn show_command() -> Result<()> {
    let config = Config::load()?;
    let settings = config.get_settings();

    println!();
    println!("  {}", "⚙️  Settings".bright_blue().bold());
    println!("  {}", "═══════════".bright_blue());
    println!("  {} {}", "Config file:".dimmed(), Config::get_config_path()?.display().to_string().cyan());
    println!();

    for name in SETTING_NAMES {
        let value = match settings.get(name)? {
            Some(value) => value.white(),
            None => "(auto)".dimmed(),
        };
        println!("  {:<15} {}", name.bright_white().bold(), value);
    }

    Ok(())
}
