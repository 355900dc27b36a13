use anyhow::Result;
use compat_finder::config::Config;
use log::info;

/// Set the value of a specific setting
///
/// # Arguments
/// * `name` - Setting name
/// * `value` - Setting value
///
/// # Returns
/// * `Ok(())` - Setting updated successfully
/// * `Err(anyhow::Error)` - Configuration error or invalid setting/value
pub async fn set_command(name: String, value: String) -> Result<()> {
    info!("Setting {} to {}", name, value);

    let mut config = Config::load()?;
    config.update_setting(&name, &value)?;

    match config.get_settings().get(&name)? {
        Some(value) => println!("Set {} to {}", name, value),
        None => println!("Cleared {}", name),
    }

    Ok(())
}
