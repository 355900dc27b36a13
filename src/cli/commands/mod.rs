pub mod data;
pub mod search;
pub mod settings;

pub use data::{ColumnsCommands, DataArgs, InteractiveCommands, SheetsCommands};
pub use search::SearchCommands;
pub use settings::{SettingsCommands, SettingsSubcommands};
