//! Output formatting for human-readable and JSON output.

use autoviv::node::Value;
use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact literal form, tuples shown as `(..)`
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Render a value in the selected format.
pub fn render(value: &Value, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(value.to_string()),
        // Through the plain form so non-text keys become JSON strings
        OutputFormat::Json => {
            let json = serde_json::Value::from(value.to_plain());
            serde_json::to_string_pretty(&json)
        }
    }
}

/// Print a value to stdout in the selected format.
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), serde_json::Error> {
    println!("{}", render(value, format)?);
    Ok(())
}
