pub mod get;
pub mod reset;
pub mod set;
pub mod show;

pub use get::get_command;
pub use reset::{reset_all_command, reset_command};
pub use set::set_command;
pub use show::show_command;

use anyhow::Result;

use crate::cli::commands::{SettingsCommands, SettingsSubcommands};

pub async fn settings_command(args: SettingsCommands) -> Result<()> {
    match args.command {
        SettingsSubcommands::Show => show_command().await,
        SettingsSubcommands::Get { name } => get_command(name).await,
        SettingsSubcommands::Set { name, value } => set_command(name, value).await,
        SettingsSubcommands::Reset { name } => reset_command(name).await,
        SettingsSubcommands::ResetAll { force } => reset_all_command(force).await,
    }
}
