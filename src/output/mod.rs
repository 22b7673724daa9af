//! Output formatting for subnet results.
//!
//! - [`terminal`] - aligned table for the terminal
//! - [`diagram`] - SVG diagram of the subnet layout
//!
//! JSON output goes straight through `serde_json`.

mod diagram;
mod terminal;

pub use diagram::{diagram_boxes, render_svg, DiagramBox, DiagramLayout};
pub use terminal::{format_field, format_table, table_rows};

use crate::config::OutputFormat;
use crate::models::SubnetResult;
use std::error::Error;

/// Render a result in the requested format.
pub fn render(result: &SubnetResult, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    log::debug!("render format={format}");
    let out = match format {
        OutputFormat::Table => format_table(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| format!("Error serializing JSON: {e}"))?,
        OutputFormat::Svg => render_svg(result),
    };
    Ok(out)
}
