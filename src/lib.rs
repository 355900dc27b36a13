pub mod config;
pub mod export;
pub mod matcher;
pub mod table;

pub use matcher::{MatchRow, search};
pub use table::{ColumnRef, Table};
