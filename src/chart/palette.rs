//! Qualitative palette and the continent → color assignment.

use ahash::AHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// CSS `rgb(r,g,b)` notation, the form Plotly palettes use.
    pub fn css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Parse the `rgb(r,g,b)` notation produced by [`Rgb8::css`].
    pub fn parse_css(s: &str) -> Option<Self> {
        let inner = s.trim().strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
        let r = parts.next()?.ok()?;
        let g = parts.next()?.ok()?;
        let b = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b })
    }
}

/// ColorBrewer "Set1" qualitative palette (9 colors).
/// Order: Red, Blue, Green, Purple, Orange, Yellow, Brown, Pink, Gray.
pub const SET1: [Rgb8; 9] = [
    Rgb8 { r: 228, g: 26, b: 28 },   // red    (#E41A1C)
    Rgb8 { r: 55, g: 126, b: 184 },  // blue   (#377EB8)
    Rgb8 { r: 77, g: 175, b: 74 },   // green  (#4DAF4A)
    Rgb8 { r: 152, g: 78, b: 163 },  // purple (#984EA3)
    Rgb8 { r: 255, g: 127, b: 0 },   // orange (#FF7F00)
    Rgb8 { r: 255, g: 255, b: 51 },  // yellow (#FFFF33)
    Rgb8 { r: 166, g: 86, b: 40 },   // brown  (#A65628)
    Rgb8 { r: 247, g: 129, b: 191 }, // pink   (#F781BF)
    Rgb8 { r: 153, g: 153, b: 153 }, // gray   (#999999)
];

/// Get a color from the Set1 palette (wraps around).
#[inline]
pub fn set1_color(idx: usize) -> Rgb8 {
    SET1[idx % SET1.len()]
}

/// Stable category → palette assignment in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct ColorMap {
    order: Vec<String>,
    index: AHashMap<String, usize>,
}

impl ColorMap {
    /// Assign colors to categories in the order they first appear.
    pub fn from_categories<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = ColorMap::default();
        for c in categories {
            if !map.index.contains_key(c) {
                map.index.insert(c.to_string(), map.order.len());
                map.order.push(c.to_string());
            }
        }
        map
    }

    /// Categories in assignment order.
    pub fn categories(&self) -> &[String] {
        &self.order
    }

    pub fn color_of(&self, category: &str) -> Option<Rgb8> {
        self.index.get(category).map(|i| set1_color(*i))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order_and_wraparound() {
        let cats = ["Europe", "Asia", "Europe", "Africa", "Oceania", "Americas", "A", "B", "C", "D", "E"];
        let map = ColorMap::from_categories(cats.iter().copied());
        assert_eq!(map.len(), 10);
        assert_eq!(map.categories()[0], "Europe");
        assert_eq!(map.color_of("Europe"), Some(SET1[0]));
        assert_eq!(map.color_of("Asia"), Some(SET1[1]));
        // 10th category wraps to the first color
        assert_eq!(map.color_of("E"), Some(SET1[0]));
        assert_eq!(map.color_of("Antarctica"), None);
    }

    #[test]
    fn css_roundtrip() {
        let c = SET1[1];
        assert_eq!(c.css(), "rgb(55,126,184)");
        assert_eq!(Rgb8::parse_css(&c.css()), Some(c));
        assert_eq!(Rgb8::parse_css("#377EB8"), None);
    }
}
