//! Chart builder: turns observations into the animated GDP vs CO2 bubble figure.
//!
//! Every step takes a [`Figure`] by value and returns the updated figure:
//!
//! 1. [`build_base_figure`]: log/log scatter, Set1 continent colors, one frame
//!    per year, markers sized by population (max 30 px, forced min 6 px)
//! 2. [`apply_hover_template`]: tooltip on the initial traces and every frame
//! 3. [`apply_animation_controls`]: a single Play button and a year slider
//! 4. [`apply_axis_labels`], [`apply_theme`], [`apply_legend_title`]
//!
//! [`build_chart`] runs the full chain.

pub mod base;
pub mod controls;
pub mod decor;
pub mod hover;
pub mod palette;
pub mod types;

pub use base::{area_sizeref, build_base_figure, force_min_marker_size};
pub use controls::apply_animation_controls;
pub use decor::{apply_axis_labels, apply_legend_title, apply_theme, apply_theme_kind, theme_template};
pub use hover::{
    HoverPoint, apply_custom_hover_template, apply_hover_template, hover_lines, render_hover,
    render_hover_locale,
};
pub use types::Theme;

use crate::figure::Figure;
use crate::models::{AxisRange, Observation};

/// Build the finished figure: base chart followed by every post-processing step.
pub fn build_chart(observations: &[Observation], gdp_range: AxisRange, co2_range: AxisRange) -> Figure {
    let fig = build_base_figure(observations, gdp_range, co2_range);
    let fig = apply_hover_template(fig);
    let fig = apply_animation_controls(fig);
    let fig = apply_axis_labels(fig);
    let fig = apply_theme(fig);
    apply_legend_title(fig)
}
