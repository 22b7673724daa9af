//! SVG diagram of a subnet layout.
//!
//! The layout depends on the prefix length: a bare mask, a single host (/32),
//! a point-to-point link (/31) or a regular range (0-30).

use crate::models::{addr_or_na, SubnetResult};
use std::fmt::{self, Write};

const BOX_WIDTH: u32 = 150;
const BOX_HEIGHT: u32 = 60;
const GAP: u32 = 10;
const MARGIN: u32 = 20;
const CAPTION_HEIGHT: u32 = 30;

/// Which diagram is drawn for a result.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DiagramLayout {
    /// No address, only the mask and the subnet size.
    MaskOnly,
    /// `/32`, a single host.
    HostRoute,
    /// `/31`, two addresses and no usable range.
    PointToPoint,
    /// `/0` to `/30`, network, usable range and broadcast.
    Range,
}

impl DiagramLayout {
    /// Pick the layout from which addresses the result carries.
    pub fn for_result(result: &SubnetResult) -> DiagramLayout {
        if result.is_mask_only() {
            return DiagramLayout::MaskOnly;
        }
        match result.prefix_length {
            32 => DiagramLayout::HostRoute,
            31 => DiagramLayout::PointToPoint,
            _ => DiagramLayout::Range,
        }
    }
}

/// One labelled box in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBox {
    pub label: &'static str,
    pub value: String,
}

impl DiagramBox {
    fn new(label: &'static str, value: String) -> DiagramBox {
        DiagramBox { label, value }
    }
}

/// Boxes and caption for a result, before any SVG is written.
pub fn diagram_boxes(result: &SubnetResult) -> (Vec<DiagramBox>, String) {
    let hosts = result.usable_hosts();
    match DiagramLayout::for_result(result) {
        DiagramLayout::MaskOnly => (
            vec![DiagramBox::new("Mask", result.mask_display())],
            format!("Usable hosts per subnet: {hosts}"),
        ),
        DiagramLayout::HostRoute => (
            vec![DiagramBox::new("Host", addr_or_na(result.supplied_ip))],
            "Single host route (/32)".to_string(),
        ),
        DiagramLayout::PointToPoint => (
            vec![
                DiagramBox::new("Network", addr_or_na(result.network)),
                DiagramBox::new("Broadcast", addr_or_na(result.broadcast)),
            ],
            format!(
                "Point-to-point link (/31), supplied IP {}",
                addr_or_na(result.supplied_ip)
            ),
        ),
        DiagramLayout::Range => (
            vec![
                DiagramBox::new("Network", addr_or_na(result.network)),
                DiagramBox::new("First usable", addr_or_na(result.first_usable)),
                DiagramBox::new("Supplied IP", addr_or_na(result.supplied_ip)),
                DiagramBox::new("Last usable", addr_or_na(result.last_usable)),
                DiagramBox::new("Broadcast", addr_or_na(result.broadcast)),
            ],
            format!("Usable hosts: {hosts}"),
        ),
    }
}

/// Render the diagram as a standalone SVG document.
pub fn render_svg(result: &SubnetResult) -> String {
    let (boxes, caption) = diagram_boxes(result);
    let mut svg = String::new();
    if let Err(e) = write_svg(&mut svg, &boxes, &caption) {
        log::error!("render_svg: {e}");
    }
    svg
}

fn write_svg(out: &mut String, boxes: &[DiagramBox], caption: &str) -> fmt::Result {
    let count = boxes.len() as u32;
    let width = 2 * MARGIN + count * BOX_WIDTH + count.saturating_sub(1) * GAP;
    let height = 2 * MARGIN + BOX_HEIGHT + CAPTION_HEIGHT;

    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="monospace">"#
    )?;
    for (i, b) in boxes.iter().enumerate() {
        let x = MARGIN + i as u32 * (BOX_WIDTH + GAP);
        let cx = x + BOX_WIDTH / 2;
        writeln!(
            out,
            r##"  <rect x="{x}" y="{MARGIN}" width="{BOX_WIDTH}" height="{BOX_HEIGHT}" rx="4" fill="#eef3fb" stroke="#3b6db3"/>"##
        )?;
        writeln!(
            out,
            r#"  <text x="{cx}" y="{y}" text-anchor="middle" font-size="12">{label}</text>"#,
            y = MARGIN + 22,
            label = b.label,
        )?;
        writeln!(
            out,
            r#"  <text x="{cx}" y="{y}" text-anchor="middle" font-size="13" font-weight="bold">{value}</text>"#,
            y = MARGIN + 44,
            value = b.value,
        )?;
    }
    writeln!(
        out,
        r#"  <text x="{MARGIN}" y="{y}" font-size="12">{caption}</text>"#,
        y = MARGIN + BOX_HEIGHT + 20,
    )?;
    out.push_str("</svg>\n");
    Ok(())
}
