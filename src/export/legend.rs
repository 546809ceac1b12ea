//! Right-hand legend panel for static snapshots.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::truncate_to_width;

/// Draw a single-column legend: optional title, then one colored dot + label per item.
pub fn draw_legend_panel<DB: DrawingBackend>(
    legend_area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBAColor)],
    title: &str, // "" omits the title
) -> Result<()> {
    legend_area
        .fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (w_u32, _) = legend_area.dim_in_pixel();
    let w = w_u32 as i32;

    let font_px: u32 = 14;
    let line_h: i32 = font_px as i32 + 2;
    let row_gap: i32 = 6;
    let pad_x: i32 = 6;
    let pad_top: i32 = 24;
    let marker_radius: i32 = 5;
    let title_font_px: u32 = 16;

    let title_style: TextStyle = TextStyle::from((FontFamily::SansSerif, title_font_px))
        .pos(Pos::new(HPos::Left, VPos::Top));
    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Left, VPos::Center));

    let mut y = pad_top;
    if !title.trim().is_empty() {
        legend_area
            .draw(&Text::new(title, (pad_x, y), title_style))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        y += title_font_px as i32 + 10;
    }

    let marker_x = pad_x + 12;
    let text_x = pad_x + 26;
    let max_text_w = (w - text_x - pad_x).max(40) as u32;

    for (label, color) in items {
        let center_y = y + line_h / 2;
        legend_area
            .draw(&Circle::new(
                (marker_x, center_y),
                marker_radius,
                color.filled(),
            ))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let text = truncate_to_width(label, font_px, max_text_w);
        legend_area
            .draw(&Text::new(text, (text_x, center_y), label_style.clone()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        y += line_h + row_gap;
    }
    Ok(())
}
