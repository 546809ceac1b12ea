//! Base figure: log/log scatter, one frame per year, population-sized markers.

use std::collections::BTreeMap;

use crate::figure::{Axis, AxisScale, Figure, Frame, FrameLayout, Layout, Legend, Trace};
use crate::models::{AxisRange, Observation};

use super::palette::ColorMap;
use super::types::{SIZE_MAX, SIZE_MIN};

/// Area-mode size reference so that `max_value` renders at `size_max` px.
///
/// Falls back to `1.0` (Plotly's default) when there is no positive value.
pub fn area_sizeref(max_value: f64, size_max: f64) -> f64 {
    if max_value > 0.0 && size_max > 0.0 {
        2.0 * max_value / (size_max * size_max)
    } else {
        1.0
    }
}

/// Build the animated bubble chart with fixed log axes.
///
/// Frames are ordered by ascending year and every frame carries one trace per
/// continent (possibly empty) so trace indices stay aligned during playback.
/// The forced minimum marker size is applied afterwards on every trace.
pub fn build_base_figure(
    observations: &[Observation],
    gdp_range: AxisRange,
    co2_range: AxisRange,
) -> Figure {
    let colors = ColorMap::from_categories(observations.iter().map(|o| o.continent.as_str()));
    let max_population = observations
        .iter()
        .map(|o| o.population as f64)
        .fold(0.0, f64::max);
    let sizeref = area_sizeref(max_population, SIZE_MAX);

    let xscale = AxisScale::log(gdp_range.0, gdp_range.1);
    let yscale = AxisScale::log(co2_range.0, co2_range.1);

    // year -> rows in input order
    let mut by_year: BTreeMap<i32, Vec<&Observation>> = BTreeMap::new();
    for o in observations {
        by_year.entry(o.year).or_default().push(o);
    }

    let frames: Vec<Frame> = by_year
        .iter()
        .map(|(year, rows)| Frame {
            name: year.to_string(),
            data: continent_traces(rows, &colors, sizeref),
            layout: FrameLayout {
                xaxis: xscale,
                yaxis: yscale,
            },
        })
        .collect();

    let data = frames.first().map(|f| f.data.clone()).unwrap_or_default();

    log::debug!(
        "base figure: {} observations, {} frames, {} continents",
        observations.len(),
        frames.len(),
        colors.len()
    );

    let fig = Figure {
        data,
        layout: Layout {
            xaxis: Axis { scale: xscale, title: None },
            yaxis: Axis { scale: yscale, title: None },
            legend: Legend {
                title: None,
                tracegroupgap: 0,
                itemsizing: "constant".into(),
            },
            ..Layout::default()
        },
        frames,
    };
    force_min_marker_size(fig, SIZE_MIN)
}

fn continent_traces(rows: &[&Observation], colors: &ColorMap, sizeref: f64) -> Vec<Trace> {
    colors
        .categories()
        .iter()
        .map(|continent| {
            let color = colors
                .color_of(continent)
                .map(|c| c.css())
                .unwrap_or_default();
            let mut trace = Trace::scatter(continent, color);
            trace.marker.sizeref = sizeref;
            for o in rows.iter().filter(|o| &o.continent == continent) {
                trace.ids.push(o.country_name.clone());
                trace.hovertext.push(o.country_name.clone());
                trace.x.push(o.gdp);
                trace.y.push(o.co2);
                trace.marker.size.push(o.population as f64);
            }
            trace
        })
        .collect()
}

/// Raise the rendered marker size to at least `min_px` on every trace that
/// carries marker sizes: the initial data and each frame's traces.
pub fn force_min_marker_size(mut fig: Figure, min_px: f64) -> Figure {
    for trace in fig.all_traces_mut() {
        if !trace.marker.size.is_empty() {
            trace.marker.sizemin = Some(min_px);
        }
    }
    fig
}
