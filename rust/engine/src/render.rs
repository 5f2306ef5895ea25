//! Render a completed reading onto a text grid or an SVG canvas.
//!
//! Both renderers project cards through the spread's layout. A card whose
//! position has no layout slot is skipped silently; spread validation
//! upstream means readings produced by the reader are always complete.

use crate::art;
use crate::reader::SpreadReading;
use crate::spread::LayoutSlot;

/// Fixed width of one text-grid cell; the widest glyph is `XVIIIr`.
pub const TEXT_CELL_WIDTH: usize = 6;

/// Pixel gap around each card on the SVG canvas.
const SVG_PADDING: u32 = 20;

fn grid_extent(layout: &[LayoutSlot]) -> (usize, usize) {
    let max_x = layout.iter().map(|s| s.x).max().unwrap_or(0) as usize;
    let max_y = layout.iter().map(|s| s.y).max().unwrap_or(0) as usize;
    (max_x, max_y)
}

/// Lay the reading out as a fixed-width character grid.
///
/// Each occupied cell holds the card's glyph (reversed variant included);
/// empty cells are blank padding. Cells are joined with single spaces,
/// rows with newlines.
pub fn render_text(reading: &SpreadReading) -> String {
    let layout = &reading.spread.layout;
    if layout.is_empty() {
        return String::new();
    }
    let (max_x, max_y) = grid_extent(layout);
    let blank = " ".repeat(TEXT_CELL_WIDTH);
    let mut grid = vec![vec![blank; max_x + 1]; max_y + 1];
    for cp in &reading.cards {
        if let Some(slot) = layout.iter().find(|s| s.position == cp.position) {
            grid[slot.y as usize][slot.x as usize] = format!(
                "{:^width$}",
                art::glyph(&cp.card, cp.is_reversed),
                width = TEXT_CELL_WIDTH
            );
        }
    }
    grid.into_iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compose the reading into one SVG document.
///
/// With `animate` set, each card's inner vector body is wrapped in a
/// translated (and possibly rotated) group and fades in by deal order.
/// Otherwise each card's standalone document is embedded as a
/// base64-encoded `data:` image. The two output shapes never mix.
pub fn render_svg(reading: &SpreadReading, animate: bool) -> String {
    let (card_w, card_h) = if animate { (300, 500) } else { (100, 166) };
    let layout = &reading.spread.layout;
    let (max_x, max_y) = grid_extent(layout);
    let cell_w = card_w + SVG_PADDING;
    let cell_h = card_h + SVG_PADDING;
    let width = (max_x as u32 + 1) * cell_w;
    let height = (max_y as u32 + 1) * cell_h;

    let mut body = String::new();
    for cp in &reading.cards {
        let Some(slot) = layout.iter().find(|s| s.position == cp.position) else {
            continue;
        };
        let Some(pos) = reading
            .spread
            .positions
            .iter()
            .find(|p| p.position == cp.position)
        else {
            continue;
        };
        let x = slot.x as u32 * cell_w + SVG_PADDING / 2;
        let y = slot.y as u32 * cell_h + SVG_PADDING / 2;
        let rotation = slot.rotation.unwrap_or(0.0);

        if animate {
            // Bodies are drawn in the 300x500 face space, which is the
            // animated cell size, so translation alone places them.
            let transform = if rotation != 0.0 {
                format!(
                    "translate({x} {y}) rotate({rotation} {} {})",
                    card_w / 2,
                    card_h / 2
                )
            } else {
                format!("translate({x} {y})")
            };
            body.push_str(&format!(
                "<g transform=\"{transform}\">{}</g>",
                art::card_svg_body(&cp.card, cp.is_reversed, pos.deal_order)
            ));
        } else {
            let document = art::card_svg_document(&cp.card, cp.is_reversed);
            let rotate_attr = if rotation != 0.0 {
                format!(
                    " transform=\"rotate({rotation} {} {})\"",
                    x + card_w / 2,
                    y + card_h / 2
                )
            } else {
                String::new()
            };
            body.push_str(&format!(
                "<image x=\"{x}\" y=\"{y}\" width=\"{card_w}\" height=\"{card_h}\"{rotate_attr} \
                 href=\"data:image/svg+xml;base64,{}\"/>",
                encode_base64(document.as_bytes())
            ));
        }
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">{body}</svg>"
    )
}

/// Standard-alphabet base64 with padding, enough for data URIs.
fn encode_base64(input: &[u8]) -> String {
    const ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    for chunk in input.chunks(3) {
        let b1 = chunk[0];
        let b2 = chunk.get(1).copied().unwrap_or(0);
        let b3 = chunk.get(2).copied().unwrap_or(0);
        let n = ((b1 as u32) << 16) | ((b2 as u32) << 8) | (b3 as u32);
        out.push(ALPHABET[(n >> 18) as usize & 63] as char);
        out.push(ALPHABET[(n >> 12) as usize & 63] as char);
        out.push(if chunk.len() > 1 {
            ALPHABET[(n >> 6) as usize & 63] as char
        } else {
            '='
        });
        out.push(if chunk.len() > 2 {
            ALPHABET[n as usize & 63] as char
        } else {
            '='
        });
    }
    out
}
