pub mod columns;
pub mod interactive;
pub mod search;
pub mod session;
pub mod settings;

pub use columns::{columns_command, sheets_command};
pub use interactive::interactive_command;
pub use search::search_command;
pub use settings::settings_command;
