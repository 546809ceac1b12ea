//! Declarative figure model, serialized in the Plotly JSON schema.
//!
//! A [`Figure`] is the value threaded through the chart pipeline. It owns no
//! rendering logic; plotly.js (or the static snapshot exporter) interprets it.
//! Optional fields are skipped when unset so the JSON stays close to what a
//! hand-written Plotly figure would look like.

use serde::{Deserialize, Serialize};

/// Top-level figure: initial traces, layout and animation frames.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Figure {
    /// Look up a frame by its name (the year as text).
    pub fn frame(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.name == name)
    }

    /// Every trace of the figure: top-level data first, then each frame in order.
    pub fn all_traces(&self) -> impl Iterator<Item = &Trace> {
        self.data
            .iter()
            .chain(self.frames.iter().flat_map(|f| f.data.iter()))
    }

    pub(crate) fn all_traces_mut(&mut self) -> impl Iterator<Item = &mut Trace> {
        self.data
            .iter_mut()
            .chain(self.frames.iter_mut().flat_map(|f| f.data.iter_mut()))
    }
}

/// One animation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
    pub layout: FrameLayout,
}

/// Per-frame layout override. Only the axes are pinned so playback never rescales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    pub xaxis: AxisScale,
    pub yaxis: AxisScale,
}

/// Scatter trace (markers only) for a single continent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub legendgroup: String,
    pub showlegend: bool,
    /// Object constancy key for animation (country names).
    pub ids: Vec<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub hovertext: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    pub marker: Marker,
}

impl Trace {
    /// Empty markers-only scatter trace.
    pub fn scatter(name: &str, color: String) -> Self {
        Self {
            kind: "scatter".into(),
            mode: "markers".into(),
            name: name.to_string(),
            legendgroup: name.to_string(),
            showlegend: true,
            ids: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
            hovertext: Vec::new(),
            hovertemplate: None,
            marker: Marker {
                color,
                size: Vec::new(),
                sizemode: SizeMode::Area,
                sizeref: 1.0,
                sizemin: None,
                symbol: "circle".into(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    Area,
    Diameter,
}

/// Marker encoding. `size` holds the raw data values (population);
/// the pixel size is derived from `sizeref`, `sizemode` and `sizemin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
    pub size: Vec<f64>,
    pub sizemode: SizeMode,
    pub sizeref: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizemin: Option<f64>,
    pub symbol: String,
}

impl Marker {
    /// Rendered diameter in pixels for a data value.
    ///
    /// Non-positive (or non-finite) values are not drawn and map to `0.0`.
    pub fn rendered_size(&self, value: f64) -> f64 {
        if !value.is_finite() || value <= 0.0 || self.sizeref <= 0.0 {
            return 0.0;
        }
        let base = match self.sizemode {
            SizeMode::Area => (2.0 * value / self.sizeref).sqrt(),
            SizeMode::Diameter => value / self.sizeref,
        };
        match self.sizemin {
            Some(min) => base.max(min),
            None => base,
        }
    }

    /// Rendered diameters of every marker, in data order.
    pub fn rendered_sizes(&self) -> Vec<f64> {
        self.size.iter().map(|v| self.rendered_size(*v)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Log,
}

/// Axis type and range. For log axes `range` is in log10 units, as Plotly expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    #[serde(rename = "type")]
    pub kind: AxisType,
    pub range: [f64; 2],
    pub autorange: bool,
}

impl AxisScale {
    /// Fixed logarithmic axis over `[min, max]` in data units.
    pub fn log(min: f64, max: f64) -> Self {
        Self {
            kind: AxisType::Log,
            range: [min.log10(), max.log10()],
            autorange: false,
        }
    }

    /// Range converted back to data units.
    pub fn data_range(&self) -> (f64, f64) {
        match self.kind {
            AxisType::Log => (10f64.powf(self.range[0]), 10f64.powf(self.range[1])),
            AxisType::Linear => (self.range[0], self.range[1]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(flatten)]
    pub scale: AxisScale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub tracegroupgap: u32,
    pub itemsizing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
}

impl Default for Layout {
    fn default() -> Self {
        let unit = AxisScale {
            kind: AxisType::Linear,
            range: [0.0, 1.0],
            autorange: true,
        };
        Self {
            xaxis: Axis { scale: unit, title: None },
            yaxis: Axis { scale: unit, title: None },
            legend: Legend::default(),
            template: None,
            updatemenus: Vec::new(),
            sliders: Vec::new(),
        }
    }
}

// ------------------------ Theme template ------------------------

/// Layout template (`layout.template`). Only the layout part is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub layout: TemplateLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLayout {
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    pub colorway: Vec<String>,
    pub xaxis: TemplateAxis,
    pub yaxis: TemplateAxis,
    pub hovermode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateAxis {
    pub showgrid: bool,
    pub zeroline: bool,
    pub showline: bool,
    pub linecolor: String,
    pub ticks: String,
    pub automargin: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

// ------------------------ Animation controls ------------------------

/// Arguments of a Plotly `animate` call: `[frames, options]`.
/// `None` frames means "all frames".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimateArgs(pub Option<Vec<String>>, pub AnimationOptions);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub frame: FrameTiming,
    pub transition: Transition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fromcurrent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<AnimationMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTiming {
    /// Milliseconds.
    pub duration: u32,
    pub redraw: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Milliseconds.
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    Immediate,
    Next,
    Afterall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Buttons,
    Dropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pad {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub args: AnimateArgs,
    pub label: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: MenuKind,
    pub buttons: Vec<Button>,
    pub direction: String,
    pub pad: Pad,
    pub showactive: bool,
    pub x: f64,
    pub xanchor: String,
    pub y: f64,
    pub yanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderStep {
    pub args: AnimateArgs,
    pub label: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentValue {
    pub prefix: String,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub active: usize,
    pub currentvalue: CurrentValue,
    pub pad: Pad,
    pub steps: Vec<SliderStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animate_args_serialize_as_array() {
        let args = AnimateArgs(
            None,
            AnimationOptions {
                frame: FrameTiming { duration: 500, redraw: true },
                transition: Transition { duration: 500 },
                fromcurrent: Some(true),
                mode: None,
            },
        );
        let v = serde_json::to_value(&args).unwrap();
        assert!(v[0].is_null());
        assert_eq!(v[1]["frame"]["duration"], 500);
        assert_eq!(v[1]["fromcurrent"], true);
        assert!(v[1].get("mode").is_none());
    }

    #[test]
    fn log_axis_keeps_data_units_roundtrip() {
        let a = AxisScale::log(100.0, 100_000.0);
        assert_eq!(a.range, [2.0, 5.0]);
        let (lo, hi) = a.data_range();
        assert!((lo - 100.0).abs() < 1e-9);
        assert!((hi - 100_000.0).abs() < 1e-6);
    }

    #[test]
    fn rendered_size_honors_sizemin_and_skips_non_positive() {
        let mut m = Trace::scatter("Asia", "rgb(0,0,0)".into()).marker;
        m.sizeref = 2.0 * 100.0 / (30.0 * 30.0);
        assert!((m.rendered_size(100.0) - 30.0).abs() < 1e-9);
        assert!(m.rendered_size(0.01) < 6.0);
        m.sizemin = Some(6.0);
        assert_eq!(m.rendered_size(0.01), 6.0);
        assert_eq!(m.rendered_size(0.0), 0.0);
    }
}
