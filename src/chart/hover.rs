//! Hover tooltips: template injection and a preview renderer.
//!
//! The preview understands the subset of d3-format the bubble template uses:
//! `,` (thousands grouping) and `.Nf` (fixed precision), alone or combined.

use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use regex::{Captures, Regex};

use crate::figure::{Figure, Trace};

use super::types::BUBBLE_HOVER_TEMPLATE;

/// Set the bubble hover template on the initial traces and on every frame's
/// traces. Plotly does not propagate the top-level template into frames.
pub fn apply_hover_template(fig: Figure) -> Figure {
    apply_custom_hover_template(fig, BUBBLE_HOVER_TEMPLATE)
}

/// Same as [`apply_hover_template`] with a caller-provided template.
pub fn apply_custom_hover_template(mut fig: Figure, template: &str) -> Figure {
    let mut n = 0usize;
    for trace in fig.all_traces_mut() {
        trace.hovertemplate = Some(template.to_string());
        n += 1;
    }
    log::debug!("hover template set on {n} traces");
    fig
}

/// Values a hover template can reference for one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPoint {
    pub hovertext: String,
    pub marker_size: f64,
    pub x: f64,
    pub y: f64,
}

impl Trace {
    /// Hover values of the `i`-th marker, if it exists.
    pub fn hover_point(&self, i: usize) -> Option<HoverPoint> {
        Some(HoverPoint {
            hovertext: self.hovertext.get(i)?.clone(),
            marker_size: *self.marker.size.get(i)?,
            x: *self.x.get(i)?,
            y: *self.y.get(i)?,
        })
    }
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"%\{([A-Za-z_][A-Za-z0-9_.]*)(?::([^}]*))?\}").expect("valid placeholder regex")
    })
}

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Render a hover template for one marker with English separators.
pub fn render_hover(template: &str, point: &HoverPoint) -> String {
    render_hover_locale(template, point, "en")
}

/// Render a hover template for one marker using the separators of `locale_tag`.
///
/// Unknown fields are left untouched, like Plotly leaves unresolved placeholders.
pub fn render_hover_locale(template: &str, point: &HoverPoint, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    placeholder_re()
        .replace_all(template, |caps: &Captures| {
            let field = &caps[1];
            let spec = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let value = match field {
                "hovertext" | "text" => return point.hovertext.clone(),
                "marker.size" => point.marker_size,
                "x" => point.x,
                "y" => point.y,
                _ => return caps[0].to_string(),
            };
            format_number(value, spec, locale, dec_sep)
        })
        .into_owned()
}

/// Tooltip as plain lines: bold tags stripped, split on `<br>`.
pub fn hover_lines(rendered: &str) -> Vec<String> {
    rendered
        .split("<br>")
        .map(|line| line.replace("<b>", "").replace("</b>", ""))
        .collect()
}

/// Format `v` with a d3-format subset: `[,][.N][f]`.
fn format_number(v: f64, spec: &str, locale: &Locale, dec_sep: char) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let grouped = spec.starts_with(',');
    let rest = spec.trim_start_matches(',').trim_end_matches('f');
    let precision = rest.strip_prefix('.').and_then(|p| p.parse::<usize>().ok());

    let raw = match precision {
        Some(p) => format!("{:.*}", p, v.abs()),
        None => format!("{}", v.abs()),
    };
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (raw.clone(), None),
    };
    // Values that round to zero print without a sign.
    let rounds_to_zero = raw.chars().all(|c| c == '0' || c == '.');
    let int_text = if grouped {
        group_digits(&int_part, locale)
    } else {
        int_part
    };

    let mut out = String::new();
    if v.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&int_text);
    if let Some(f) = frac_part {
        out.push(dec_sep);
        out.push_str(&f);
    }
    out
}

/// Insert the locale's thousands separator into a plain digit string.
fn group_digits(digits: &str, locale: &Locale) -> String {
    if digits.len() <= 18 {
        if let Ok(n) = digits.parse::<u64>() {
            return n.to_formatted_string(locale);
        }
    }
    let sep = locale.separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}
