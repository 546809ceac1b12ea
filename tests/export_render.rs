use co2_bubble::chart;
use co2_bubble::export::{self, RenderError};
use co2_bubble::models::Observation;
use std::fs;
use tempfile::tempdir;

fn sample_rows() -> Vec<Observation> {
    let mut out = Vec::new();
    for (y, f) in [(2000, 1.0), (2015, 1.3)] {
        out.push(Observation::new("Germany", "Europe", y, 23_000.0 * f, 10.0, 82_000_000));
        out.push(Observation::new("India", "Asia", y, 450.0 * f, 1.0 * f, 1_050_000_000));
        out.push(Observation::new("Chad", "Africa", y, 170.0 * f, 0.02, 8_000_000));
    }
    out
}

#[test]
fn svg_snapshot_has_content() {
    let fig = chart::build_chart(&sample_rows(), (100.0, 100_000.0), (0.01, 50.0));
    let dir = tempdir().unwrap();
    let path = dir.path().join("frame_2015.svg");
    export::render_frame(&fig, "2015", &path, 900, 540).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Continent"));
    assert!(svg.contains("Year: 2015"));
}

#[test]
fn png_snapshot_is_written() {
    let fig = chart::build_chart(&sample_rows(), (100.0, 100_000.0), (0.01, 50.0));
    let dir = tempdir().unwrap();
    let path = dir.path().join("frame_2000.png");
    export::render_frame(&fig, "2000", &path, 640, 400).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn unknown_frame_is_reported() {
    let fig = chart::build_chart(&sample_rows(), (100.0, 100_000.0), (0.01, 50.0));
    let dir = tempdir().unwrap();
    let err = export::render_frame(&fig, "1999", dir.path().join("x.svg"), 400, 300).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::UnknownFrame(name)) if name == "1999"
    ));
}

#[test]
fn non_positive_log_bounds_fail_in_the_renderer() {
    // The builder accepts the bounds as-is; the renderer refuses them.
    let fig = chart::build_chart(&sample_rows(), (0.0, 100_000.0), (0.01, 50.0));
    let dir = tempdir().unwrap();
    let err = export::render_frame(&fig, "2000", dir.path().join("x.svg"), 400, 300).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::NonPositiveRange { axis: "x", .. })
    ));
}

#[test]
fn json_export_is_plotly_shaped() {
    let fig = chart::build_chart(&sample_rows(), (100.0, 100_000.0), (0.01, 50.0));
    let dir = tempdir().unwrap();
    let path = dir.path().join("fig.json");
    export::save_json(&fig, &path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["frames"].as_array().unwrap().len(), 2);
    assert_eq!(v["layout"]["legend"]["title"]["text"], "Continent");
    assert_eq!(v["layout"]["updatemenus"][0]["buttons"][0]["label"], "Play");
    assert!(v["layout"]["updatemenus"][0]["buttons"][0]["args"][0].is_null());
    assert_eq!(v["layout"]["sliders"][0]["steps"][1]["args"][0][0], "2015");
    assert_eq!(v["frames"][1]["data"][0]["marker"]["sizemin"], 6.0);
    assert_eq!(v["layout"]["xaxis"]["range"][0], 2.0);
}
