//! Fixed labels and encoding constants of the bubble chart.

/// Largest rendered marker diameter (px), reached by the largest population.
pub const SIZE_MAX: f64 = 30.0;

/// Smallest rendered marker diameter (px), forced after the frames are built.
pub const SIZE_MIN: f64 = 6.0;

pub const X_AXIS_TITLE: &str = "GDP per capita ($ USD)";
pub const Y_AXIS_TITLE: &str = "CO2 emissions per capita (metric tonnes)";
pub const LEGEND_TITLE: &str = "Continent";

/// Milliseconds per frame while playing.
pub const PLAY_FRAME_MS: u32 = 500;
pub const PLAY_LABEL: &str = "Play";
pub const SLIDER_PREFIX: &str = "Year: ";
pub const SLIDER_FONT_PX: u32 = 20;

/// Tooltip with bold labels and normal-weight values.
pub const BUBBLE_HOVER_TEMPLATE: &str = concat!(
    "<b>Country</b>: %{hovertext}<br>",
    "<b>Population</b>: %{marker.size:,}<br>",
    "<b>GDP</b>: %{x:,.2f} $ USD<br>",
    "<b>CO2</b>: %{y:.2f} metric tonnes",
);

/// Visual themes understood by [`crate::chart::apply_theme_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// White background, axis lines, outside ticks, no grid.
    SimpleWhite,
}
