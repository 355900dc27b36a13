//! Loading the data file and settling which columns to search

use anyhow::{Context, Result};
use compat_finder::config::Settings;
use compat_finder::export::Headers;
use compat_finder::table::{ColumnRef, Table, detect_columns, load_table};
use log::{info, warn};
use std::path::PathBuf;

use crate::cli::commands::DataArgs;
use crate::cli::ui::with_spinner;
use crate::ui::prompts::prompt_column_selection;

/// A loaded table with both columns resolved
pub struct Session {
    pub path: PathBuf,
    pub table: Table,
    pub model: ColumnRef,
    pub compat: ColumnRef,
}

impl Session {
    pub fn headers(&self) -> Headers<'_> {
        Headers {
            model: self.model.name(),
            compat: self.compat.name(),
        }
    }
}

/// Load the table named by `args` (falling back to `settings`) and resolve
/// the model and compatibility columns.
///
/// With `interactive` set, a column that is neither configured nor detected
/// is picked by the user; otherwise it is an error.
pub async fn open_session(args: &DataArgs, settings: &Settings, interactive: bool) -> Result<Session> {
    let path = args.file.clone().unwrap_or_else(|| settings.data_path.clone());
    let sheet = args.sheet.clone().or_else(|| settings.sheet.clone());

    let load_path = path.clone();
    let table = with_spinner(
        format!("Loading {}", path.display()),
        tokio::task::spawn_blocking(move || load_table(&load_path, sheet.as_deref())),
    )
    .await
    .context("Data loading task failed")??;

    if table.is_empty() {
        warn!("{} has a header row but no data rows", path.display());
    }

    let detected = detect_columns(&table);

    let compat_name = args.compat_column.as_deref().or(settings.compat_column.as_deref());
    let compat = match resolve_column(&table, compat_name, detected.compat)? {
        Some(column) => column,
        None if interactive => pick_column(&table, "compatible")?,
        None => anyhow::bail!(
            "Could not detect the compatible column. Use --compat-column or 'compat-finder settings set compat-column <name>'"
        ),
    };

    let model_name = args.model_column.as_deref().or(settings.model_column.as_deref());
    let model = match resolve_column(&table, model_name, detected.model)? {
        Some(column) => column,
        None if interactive => pick_column(&table, "model")?,
        None => anyhow::bail!(
            "Could not detect the model column. Use --model-column or 'compat-finder settings set model-column <name>'"
        ),
    };

    info!("Using model column '{}' and compatible column '{}'", model.name(), compat.name());

    Ok(Session {
        path,
        table,
        model,
        compat,
    })
}

/// An explicitly named column wins over a detected one; a named column that
/// does not exist is an error rather than a silent fallback.
fn resolve_column(table: &Table, name: Option<&str>, detected: Option<ColumnRef>) -> Result<Option<ColumnRef>> {
    match name {
        Some(name) => table.column(name).map(Some),
        None => Ok(detected),
    }
}

fn pick_column(table: &Table, role: &str) -> Result<ColumnRef> {
    if table.headers().is_empty() {
        anyhow::bail!("Data file has no columns to choose from");
    }

    let index = prompt_column_selection(role, table.headers())?;
    table
        .column_at(index)
        .ok_or_else(|| anyhow::anyhow!("Invalid column selection"))
}
