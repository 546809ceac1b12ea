//! co2_bubble
//!
//! Builds the animated GDP vs CO2 bubble chart: countries as bubbles sized by
//! population, colored by continent, one animation frame per year. The result
//! is a declarative [`Figure`] in the Plotly JSON schema; rendering is left to
//! plotly.js (JSON/HTML export) or to the static snapshot exporter.
//!
//! ### Features
//! - Log/log axes with fixed ranges across all frames
//! - Set1 continent colors, stable from frame to frame
//! - Marker sizes between 6 and 30 px, monotonic in population
//! - Bold-label hover tooltips, a single Play button and a year slider
//! - Export as Plotly JSON, standalone HTML, or SVG/PNG snapshot of one year
//!
//! ### Example
//! ```no_run
//! use co2_bubble::{Observation, chart, export};
//!
//! let rows = vec![
//!     Observation::new("Germany", "Europe", 2000, 23_635.9, 10.1, 82_211_508),
//!     Observation::new("Chad", "Africa", 2000, 166.4, 0.02, 8_259_137),
//! ];
//! let fig = chart::build_chart(&rows, (100.0, 100_000.0), (0.01, 100.0));
//! export::save_html(&fig, "bubble.html", "GDP vs CO2")?;
//! export::render_frame(&fig, "2000", "bubble_2000.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod export;
pub mod figure;
pub mod models;
pub mod stats;
pub mod storage;

pub use chart::build_chart;
pub use figure::Figure;
pub use models::{AxisRange, Observation};
