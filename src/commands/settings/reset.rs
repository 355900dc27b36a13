use anyhow::Result;
use compat_finder::config::Config;
use log::info;

use crate::ui::prompts::prompt_confirmation;

/// Reset a setting to its default value
///
/// # Arguments
/// * `name` - Setting name
///
/// # Returns
/// * `Ok(())` - Setting reset successfully
/// * `Err(anyhow::Error)` - Configuration error or unknown setting
pub async fn reset_command(name: String) -> Result<()> {
    info!("Resetting setting: {}", name);

    let mut config = Config::load()?;
    config.reset_setting(&name)?;

    match config.get_settings().get(&name)? {
        Some(value) => println!("Reset {} to {}", name, value),
        None => println!("Reset {} to auto-detect", name),
    }

    Ok(())
}

/// Reset all settings to default values
///
/// # Arguments
/// * `force` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(())` - Settings reset successfully
/// * `Err(anyhow::Error)` - Configuration error or user cancelled
pub async fn reset_all_command(force: bool) -> Result<()> {
    info!("Resetting all settings to defaults");

    if !force && !prompt_confirmation("Reset all settings to their default values?", false)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let mut config = Config::load()?;
    config.reset_all_settings()?;

    println!("All settings have been reset to default values.");
    Ok(())
}
