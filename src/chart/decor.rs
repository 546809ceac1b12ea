//! Layout decoration: axis titles, theme template and legend title.

use crate::figure::{Figure, Font, Template, TemplateAxis, TemplateLayout, Title};

use super::palette::SET1;
use super::types::{LEGEND_TITLE, Theme, X_AXIS_TITLE, Y_AXIS_TITLE};

/// Fixed axis titles, independent of the data.
pub fn apply_axis_labels(mut fig: Figure) -> Figure {
    fig.layout.xaxis.title = Some(Title::new(X_AXIS_TITLE));
    fig.layout.yaxis.title = Some(Title::new(Y_AXIS_TITLE));
    fig
}

/// Minimal white theme. Frames only pin axis ranges, so the template
/// applies unchanged to every frame.
pub fn apply_theme(fig: Figure) -> Figure {
    apply_theme_kind(fig, Theme::SimpleWhite)
}

pub fn apply_theme_kind(mut fig: Figure, theme: Theme) -> Figure {
    fig.layout.template = Some(theme_template(theme));
    fig
}

/// Layout template for a theme.
pub fn theme_template(theme: Theme) -> Template {
    match theme {
        Theme::SimpleWhite => {
            let axis = TemplateAxis {
                showgrid: false,
                zeroline: false,
                showline: true,
                linecolor: "rgb(36,36,36)".into(),
                ticks: "outside".into(),
                automargin: true,
            };
            Template {
                layout: TemplateLayout {
                    paper_bgcolor: "white".into(),
                    plot_bgcolor: "white".into(),
                    font: Font {
                        color: Some("rgb(36,36,36)".into()),
                        size: None,
                    },
                    colorway: SET1.iter().map(|c| c.css()).collect(),
                    xaxis: axis.clone(),
                    yaxis: axis,
                    hovermode: "closest".into(),
                },
            }
        }
    }
}

/// Legend title naming the color dimension.
pub fn apply_legend_title(mut fig: Figure) -> Figure {
    fig.layout.legend.title = Some(Title::new(LEGEND_TITLE));
    fig
}
