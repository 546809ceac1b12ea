//! Static rendering of one animation frame to **SVG** or **PNG**.
//!
//! The picture mirrors what plotly.js shows for that frame: log/log axes
//! pinned to the frame's ranges, markers at their rendered diameter, the
//! legend on the right and the slider's "Year: " caption on top.

use anyhow::Result;
use num_format::{Locale, ToFormattedString};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;
use thiserror::Error;

use super::legend::draw_legend_panel;
use crate::chart::palette::Rgb8;
use crate::figure::{Figure, Frame, Trace};

/// Failures detected by the snapshot renderer itself.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no frame named {0:?}")]
    UnknownFrame(String),
    #[error("{axis} axis bounds must be positive on a log scale, got [{min}, {max}]")]
    NonPositiveRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },
    #[error("drawing backend failed: {0}")]
    Backend(String),
}

fn backend_err<E: std::fmt::Debug>(e: E) -> anyhow::Error {
    RenderError::Backend(format!("{:?}", e)).into()
}

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render the frame named `frame_name` (a year) to `out_path`.
/// The backend is chosen from the extension: `.svg` → SVG, anything else → bitmap.
pub fn render_frame<P: AsRef<Path>>(
    fig: &Figure,
    frame_name: &str,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let frame = fig
        .frame(frame_name)
        .ok_or_else(|| RenderError::UnknownFrame(frame_name.to_string()))?;

    let x_range = frame.layout.xaxis.data_range();
    let y_range = frame.layout.yaxis.data_range();
    check_positive("x", x_range)?;
    check_positive("y", y_range)?;

    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_frame(root, fig, frame, x_range, y_range)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_frame(root, fig, frame, x_range, y_range)?;
    }
    log::info!("rendered frame {} to {}", frame_name, out_path.display());
    Ok(())
}

fn check_positive(axis: &'static str, (min, max): (f64, f64)) -> Result<(), RenderError> {
    if min > 0.0 && max > 0.0 && min.is_finite() && max.is_finite() {
        Ok(())
    } else {
        Err(RenderError::NonPositiveRange { axis, min, max })
    }
}

/// Log tick label: grouped integers from 1 upward, two decimals below.
fn log_tick_label(v: &f64) -> String {
    if *v >= 1.0 {
        (v.round() as u64).to_formatted_string(&Locale::en)
    } else {
        format!("{:.2}", v)
    }
}

fn trace_color(trace: &Trace) -> RGBColor {
    let c = Rgb8::parse_css(&trace.marker.color).unwrap_or(Rgb8 {
        r: 99,
        g: 99,
        b: 99,
    });
    RGBColor(c.r, c.g, c.b)
}

fn draw_frame<DB>(
    root: DrawingArea<DB, Shift>,
    fig: &Figure,
    frame: &Frame,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) -> Result<()>
where
    DB: DrawingBackend,
{
    const MARGIN: u32 = 16;

    let (plot_area, legend_area) = root.split_horizontally((85).percent_width());
    plot_area.fill(&WHITE).map_err(backend_err)?;

    let prefix = fig
        .layout
        .sliders
        .first()
        .map(|s| s.currentvalue.prefix.as_str())
        .unwrap_or("");
    let caption = format!("{prefix}{}", frame.name);

    let x_desc = fig
        .layout
        .xaxis
        .title
        .as_ref()
        .map(|t| t.text.clone())
        .unwrap_or_default();
    let y_desc = fig
        .layout
        .yaxis
        .title
        .as_ref()
        .map(|t| t.text.clone())
        .unwrap_or_default();
    let show_grid = fig
        .layout
        .template
        .as_ref()
        .map(|t| t.layout.xaxis.showgrid)
        .unwrap_or(true);

    let tick_fmt = |v: &f64| log_tick_label(v);

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(MARGIN)
        .caption(caption, (FontFamily::SansSerif, 20))
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        .map_err(backend_err)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_formatter(&tick_fmt)
        .y_label_formatter(&tick_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 14));
    if !show_grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(backend_err)?;

    // Largest bubbles first so small ones stay visible on top.
    let mut bubbles: Vec<(f64, f64, i32, RGBColor)> = Vec::new();
    for trace in &frame.data {
        let color = trace_color(trace);
        for (i, diameter) in trace.marker.rendered_sizes().into_iter().enumerate() {
            let (Some(x), Some(y)) = (trace.x.get(i), trace.y.get(i)) else {
                continue;
            };
            if diameter <= 0.0 || *x <= 0.0 || *y <= 0.0 {
                continue;
            }
            let radius = (diameter / 2.0).round().max(1.0) as i32;
            bubbles.push((*x, *y, radius, color));
        }
    }
    bubbles.sort_by(|a, b| b.2.cmp(&a.2));

    chart
        .draw_series(bubbles.iter().map(|(x, y, r, color)| {
            Circle::new((*x, *y), *r, color.mix(0.8).filled())
        }))
        .map_err(backend_err)?;

    let items: Vec<(String, RGBAColor)> = frame
        .data
        .iter()
        .map(|t| (t.name.clone(), trace_color(t).to_rgba()))
        .collect();
    let legend_title = fig
        .layout
        .legend
        .title
        .as_ref()
        .map(|t| t.text.as_str())
        .unwrap_or("");
    draw_legend_panel(&legend_area, &items, legend_title)?;

    plot_area.present().map_err(backend_err)?;
    legend_area.present().map_err(backend_err)?;
    Ok(())
}
