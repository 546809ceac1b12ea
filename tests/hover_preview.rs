use co2_bubble::chart::{self, hover_lines, render_hover, render_hover_locale};
use co2_bubble::models::Observation;

fn foo_figure() -> co2_bubble::Figure {
    let rows = vec![
        Observation::new("Foo", "Europe", 2000, 1234.5, 6.78, 1_234_567),
        Observation::new("Bar", "Asia", 2000, 800.0, 0.5, 20_000_000),
    ];
    chart::build_chart(&rows, (100.0, 10_000.0), (0.1, 10.0))
}

#[test]
fn foo_tooltip_lines() {
    let fig = foo_figure();
    let trace = fig.data.iter().find(|t| t.name == "Europe").unwrap();
    let point = trace.hover_point(0).unwrap();
    let template = trace.hovertemplate.as_deref().unwrap();
    assert_eq!(
        hover_lines(&render_hover(template, &point)),
        vec![
            "Country: Foo",
            "Population: 1,234,567",
            "GDP: 1,234.50 $ USD",
            "CO2: 6.78 metric tonnes",
        ]
    );
}

#[test]
fn labels_bold_values_plain() {
    let fig = foo_figure();
    let trace = &fig.frames[0].data[0];
    let out = render_hover(
        trace.hovertemplate.as_deref().unwrap(),
        &trace.hover_point(0).unwrap(),
    );
    assert_eq!(out.matches("<b>").count(), 4);
    assert!(out.contains("<b>Population</b>: 1,234,567"));
    assert!(!out.contains("<b>1,234,567"));
}

#[test]
fn frame_traces_carry_the_same_tooltip() {
    let fig = foo_figure();
    let top = fig.data[0].hover_point(0).unwrap();
    let framed = fig.frames[0].data[0].hover_point(0).unwrap();
    assert_eq!(top, framed);
    assert!(fig.data[0].hover_point(5).is_none());
}

#[test]
fn locale_preview_switches_separators() {
    let fig = foo_figure();
    let t = &fig.data[0];
    let out = render_hover_locale(
        t.hovertemplate.as_deref().unwrap(),
        &t.hover_point(0).unwrap(),
        "de",
    );
    let lines = hover_lines(&out);
    assert_eq!(lines[1], "Population: 1.234.567");
    assert_eq!(lines[2], "GDP: 1.234,50 $ USD");
}
