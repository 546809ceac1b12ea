//! Hand-off to external renderers: Plotly JSON, a standalone HTML page, and
//! static SVG/PNG snapshots of single frames.

pub mod legend;
pub mod snapshot;
pub mod text;

pub use snapshot::{RenderError, render_frame};

use crate::figure::Figure;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// plotly.js build loaded by [`save_html`].
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Figure as pretty-printed Plotly JSON.
pub fn to_json(fig: &Figure) -> Result<String> {
    Ok(serde_json::to_string_pretty(fig)?)
}

/// Save the figure as Plotly JSON.
pub fn save_json<P: AsRef<Path>>(fig: &Figure, path: P) -> Result<()> {
    let mut f = File::create(path.as_ref())?;
    f.write_all(to_json(fig)?.as_bytes())?;
    log::info!("wrote figure json to {}", path.as_ref().display());
    Ok(())
}

/// Standalone HTML page that draws the figure with plotly.js and registers its frames.
pub fn to_html(fig: &Figure, title: &str) -> Result<String> {
    // A literal `</` inside the inline script would close the tag early.
    let json = serde_json::to_string(fig)?.replace("</", "<\\/");
    let title = escape_html(title);
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="chart" style="width:100%;height:90vh;"></div>
<script>
const fig = {json};
Plotly.newPlot("chart", fig.data, fig.layout).then(function () {{
  return Plotly.addFrames("chart", fig.frames);
}});
</script>
</body>
</html>
"#,
        cdn = PLOTLY_CDN,
    ))
}

/// Save the figure as a standalone HTML page.
pub fn save_html<P: AsRef<Path>>(fig: &Figure, path: P, title: &str) -> Result<()> {
    let mut f = File::create(path.as_ref())?;
    f.write_all(to_html(fig, title)?.as_bytes())?;
    log::info!("wrote figure html to {}", path.as_ref().display());
    Ok(())
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use crate::models::Observation;
    use tempfile::tempdir;

    fn fig() -> Figure {
        let rows = vec![
            Observation::new("Germany", "Europe", 2000, 23_635.9, 10.1, 82_211_508),
            Observation::new("Chad", "Africa", 2015, 166.4, 0.02, 14_110_975),
        ];
        build_chart(&rows, (100.0, 100_000.0), (0.01, 100.0))
    }

    #[test]
    fn json_parses_back_into_figure() {
        let f = fig();
        let s = to_json(&f).unwrap();
        let back: Figure = serde_json::from_str(&s).unwrap();
        assert_eq!(back.frames.len(), f.frames.len());
        assert_eq!(back.layout.legend, f.layout.legend);
        assert_eq!(back.layout.updatemenus, f.layout.updatemenus);
        assert_eq!(back.data[0].hovertext, f.data[0].hovertext);

        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["layout"]["xaxis"]["type"], "log");
        assert_eq!(v["data"][0]["type"], "scatter");
        assert_eq!(v["data"][0]["marker"]["sizemode"], "area");
    }

    #[test]
    fn html_embeds_figure_and_escapes_title() {
        let html = to_html(&fig(), "GDP <vs> CO2").unwrap();
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.addFrames"));
        assert!(html.contains("<title>GDP &lt;vs&gt; CO2</title>"));
        // the hover template's <br> tags stay inside the script
        assert!(html.contains("<b>Country<\\/b>"));
    }

    #[test]
    fn write_json_and_html() {
        let dir = tempdir().unwrap();
        let j = dir.path().join("fig.json");
        let h = dir.path().join("fig.html");
        save_json(&fig(), &j).unwrap();
        save_html(&fig(), &h, "chart").unwrap();
        assert!(j.exists());
        assert!(h.exists());
    }
}
