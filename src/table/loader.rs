use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use log::{debug, info};
use std::io::Read;
use std::path::Path;

use super::Table;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Workbook,
    Csv,
}

fn source_kind(path: &Path) -> Result<SourceKind> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        Ok(SourceKind::Workbook)
    } else if extension == "csv" {
        Ok(SourceKind::Csv)
    } else {
        Err(anyhow!(
            "Unsupported data file '{}': expected one of {}, csv",
            path.display(),
            WORKBOOK_EXTENSIONS.join(", ")
        ))
    }
}

/// Load the data file at `path`. Workbooks use `sheet` when given and the
/// first sheet otherwise; `sheet` is ignored for CSV files.
pub fn load_table<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Table> {
    let path = path.as_ref();
    info!("Loading data file: {}", path.display());

    let table = match source_kind(path)? {
        SourceKind::Workbook => read_workbook(path, sheet),
        SourceKind::Csv => std::fs::File::open(path)
            .map_err(anyhow::Error::from)
            .and_then(read_csv),
    }
    .with_context(|| {
        format!(
            "Failed to read data file at '{}'. Place your spreadsheet there or point to it with --file",
            path.display()
        )
    })?;

    info!(
        "Loaded {} rows x {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

/// Sheet names of a workbook, in workbook order.
pub fn list_sheets<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if source_kind(path)? == SourceKind::Csv {
        anyhow::bail!("'{}' is a CSV file and has no sheets", path.display());
    }

    let workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;
    Ok(workbook.sheet_names().to_owned())
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheets = workbook.sheet_names().to_owned();

    let sheet_name = match sheet {
        Some(name) => {
            if !sheets.iter().any(|s| s == name) {
                anyhow::bail!(
                    "Sheet '{}' not found. Available sheets: {}",
                    name,
                    sheets.join(", ")
                );
            }
            name.to_string()
        }
        None => sheets
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("Excel file contains no sheets"))?,
    };
    debug!("Reading sheet '{}'", sheet_name);

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| anyhow!("Error reading sheet '{}': {}", sheet_name, e))?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());

    let headers = rows
        .next()
        .ok_or_else(|| anyhow!("Data file contains no header row"))?
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();

    Ok(Table::new(headers, rows.collect()))
}

/// Read a CSV table. The first record is the header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records();

    let headers = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => anyhow::bail!("Data file contains no header row"),
    };

    let mut rows = Vec::new();
    for (line, record) in records.enumerate() {
        // +2 for header + 0-index
        let record = record.with_context(|| format!("Malformed CSV record on line {}", line + 2))?;
        rows.push(record.iter().map(|cell| Some(cell.to_string())).collect());
    }

    Ok(Table::new(headers, rows))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) => Some(value.clone()),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
            Some(format!("{}", *value as i64))
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_by_extension() {
        assert_eq!(source_kind(Path::new("data/final.xlsx")).unwrap(), SourceKind::Workbook);
        assert_eq!(source_kind(Path::new("DATA.XLS")).unwrap(), SourceKind::Workbook);
        assert_eq!(source_kind(Path::new("models.csv")).unwrap(), SourceKind::Csv);
        assert!(source_kind(Path::new("models.txt")).is_err());
        assert!(source_kind(Path::new("models")).is_err());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Float(8080.0)), Some("8080".to_string()));
        assert_eq!(cell_text(&Data::Float(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_text(&Data::Int(42)), Some("42".to_string()));
        assert_eq!(
            cell_text(&Data::String("iPhone 8".to_string())),
            Some("iPhone 8".to_string())
        );
    }

    #[test]
    fn test_read_csv() {
        let data = " Model ,Compatible Models\nX1,\"iPhone 8, iPhone 8 Plus\"\nX2,\nX3\n";
        let table = read_csv(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["model", "compatible models"]);
        assert_eq!(table.row_count(), 3);

        let compat = table.column("compatible models").unwrap();
        assert_eq!(table.cell(0, &compat), Some("iPhone 8, iPhone 8 Plus"));
        assert_eq!(table.cell(1, &compat), None);
        assert_eq!(table.cell(2, &compat), None);
    }

    #[test]
    fn test_read_csv_without_header() {
        let err = read_csv("".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_table("does/not/exist.csv", None).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read data file at 'does/not/exist.csv'"));
    }
}
