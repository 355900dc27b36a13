//! Rendering and saving search results

use anyhow::{Context, Result};
use log::info;
use rust_xlsxwriter::{Color, Format, Workbook};
use std::path::Path;

use crate::matcher::MatchRow;

/// Stdout rendering of a result set
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Header labels for the two projected columns
#[derive(Debug, Clone, Copy)]
pub struct Headers<'a> {
    pub model: &'a str,
    pub compat: &'a str,
}

/// Render `rows` as text in the given format.
pub fn format_results(rows: &[MatchRow], format: OutputFormat, headers: Headers<'_>) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(to_table(rows, headers)),
        OutputFormat::Json => to_json(rows, headers),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            write_csv(&mut writer, rows, headers)?;
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
            String::from_utf8(bytes).context("CSV output is not valid UTF-8")
        }
    }
}

/// Save `rows` to `path`; the extension picks xlsx, csv or json.
pub fn export_results<P: AsRef<Path>>(path: P, rows: &[MatchRow], headers: Headers<'_>) -> Result<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" => write_xlsx(path, rows, headers)?,
        "csv" => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
            write_csv(&mut writer, rows, headers)?;
            writer.flush()?;
        }
        "json" => {
            std::fs::write(path, to_json(rows, headers)?)
                .with_context(|| format!("Failed to write JSON file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported export file '{}': use .xlsx, .csv or .json",
            path.display()
        ),
    }

    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn to_table(rows: &[MatchRow], headers: Headers<'_>) -> String {
    let model_width = rows
        .iter()
        .map(|r| cell(&r.model).chars().count())
        .chain(std::iter::once(headers.model.chars().count()))
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {}\n", headers.model, headers.compat, width = model_width));
    output.push_str(&format!(
        "{}  {}\n",
        "-".repeat(model_width),
        "-".repeat(headers.compat.chars().count().max(8))
    ));

    for row in rows {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            cell(&row.model),
            cell(&row.compat),
            width = model_width
        ));
    }

    output
}

fn to_json(rows: &[MatchRow], headers: Headers<'_>) -> Result<String> {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            let mut record = serde_json::Map::new();
            record.insert(headers.model.to_string(), serde_json::json!(row.model));
            record.insert(headers.compat.to_string(), serde_json::json!(row.compat));
            serde_json::Value::Object(record)
        })
        .collect();

    serde_json::to_string_pretty(&records).context("Failed to format JSON output")
}

fn write_csv<W: std::io::Write>(writer: &mut csv::Writer<W>, rows: &[MatchRow], headers: Headers<'_>) -> Result<()> {
    writer.write_record([headers.model, headers.compat])?;
    for row in rows {
        writer.write_record([cell(&row.model), cell(&row.compat)])?;
    }
    Ok(())
}

fn write_xlsx(path: &Path, rows: &[MatchRow], headers: Headers<'_>) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Matches")?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White);

    sheet.write_string_with_format(0, 0, headers.model, &header_format)?;
    sheet.write_string_with_format(0, 1, headers.compat, &header_format)?;

    for (index, row) in rows.iter().enumerate() {
        let excel_row = (index + 1) as u32;
        sheet.write_string(excel_row, 0, cell(&row.model))?;
        sheet.write_string(excel_row, 1, cell(&row.compat))?;
    }

    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(1, 60)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;
    Ok(())
}
