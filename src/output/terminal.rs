//! Terminal output utilities.
//!
//! Renders a [`SubnetResult`] as an aligned two column table.

use crate::config::NOT_APPLICABLE;
use crate::models::SubnetResult;
use colored::Colorize;
use std::net::Ipv4Addr;

/// Width of the label column.
const LABEL_WIDTH: usize = 12;

/// Format a label right-aligned to `width`, followed by `:`.
///
/// # Arguments
/// * `label` - The label text
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: T, width: usize) -> String {
    let label = label.to_string();
    format!("{label:>width$}:")
}

/// An address value, `N/A` dimmed when it does not apply.
fn format_addr(addr: Option<Ipv4Addr>) -> String {
    match addr {
        Some(a) => a.to_string(),
        None => NOT_APPLICABLE.dimmed().to_string(),
    }
}

/// Table rows as `(label, value)` pairs, in display order.
pub fn table_rows(result: &SubnetResult) -> Vec<(&'static str, String)> {
    vec![
        ("Network", format_addr(result.network)),
        ("First usable", format_addr(result.first_usable)),
        ("Supplied IP", format_addr(result.supplied_ip)),
        ("Last usable", format_addr(result.last_usable)),
        ("Broadcast", format_addr(result.broadcast)),
        ("Mask", result.mask_display()),
        ("Usable hosts", result.usable_hosts().to_string()),
    ]
}

/// Render the whole table, one row per line.
pub fn format_table(result: &SubnetResult) -> String {
    table_rows(result)
        .into_iter()
        .map(|(label, value)| format!("{} {value}", format_field(label, LABEL_WIDTH).bold()))
        .collect::<Vec<String>>()
        .join("\n")
}
