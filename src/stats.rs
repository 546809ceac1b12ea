use crate::models::{AxisRange, Observation};

/// Min/max of the strictly positive values, widened multiplicatively by
/// `pad_factor` (`[min / f, max * f]`). Returns `None` without positive values.
pub fn padded_log_range<I>(values: I, pad_factor: f64) -> Option<AxisRange>
where
    I: IntoIterator<Item = f64>,
{
    let mut positive = values.into_iter().filter(|v| v.is_finite() && *v > 0.0).peekable();
    positive.peek()?;
    let (min, max) = positive.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let f = if pad_factor >= 1.0 { pad_factor } else { 1.0 };
    Some((min / f, max * f))
}

/// Default GDP (x) and CO2 (y) ranges derived from the table.
pub fn default_ranges(points: &[Observation], pad_factor: f64) -> Option<(AxisRange, AxisRange)> {
    let gdp = padded_log_range(points.iter().map(|p| p.gdp), pad_factor)?;
    let co2 = padded_log_range(points.iter().map(|p| p.co2), pad_factor)?;
    Some((gdp, co2))
}
