//! Renders command results as tables or JSON.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use snapshare_core::error::AppError;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON of the underlying records
    Json,
}

#[derive(Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Prints `rows` as a table, or `records` as JSON. Rows are a flattened
/// view; JSON always carries the full records.
pub fn print_rows<R, J>(rows: &[R], records: &J, format: OutputFormat) -> Result<(), AppError>
where
    R: Tabled,
    J: Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => print_json(records),
        OutputFormat::Table if rows.is_empty() => {
            println!("(none)");
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", Table::new(rows).with(Style::rounded()));
            Ok(())
        }
    }
}

/// Prints a two-column field/value table, or `record` as JSON.
pub fn print_fields<J>(
    fields: Vec<(&'static str, String)>,
    record: &J,
    format: OutputFormat,
) -> Result<(), AppError>
where
    J: Serialize + ?Sized,
{
    let rows: Vec<Field> = fields
        .into_iter()
        .map(|(name, value)| Field { name, value })
        .collect();
    print_rows(&rows, record, format)
}

fn print_json<J: Serialize + ?Sized>(value: &J) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Completion line on stdout.
pub fn success(msg: &str) {
    println!("✓ {msg}");
}

/// Non-fatal problem on stderr.
pub fn warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

/// Fatal problem on stderr.
pub fn failure(msg: &str) {
    eprintln!("✗ {msg}");
}
