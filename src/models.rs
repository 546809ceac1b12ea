use serde::{Deserialize, Serialize};

/// Tidy input row (one row = one country in one year).
///
/// Field names on the wire match the tabular columns
/// `Country Name, Continent, Year, GDP, CO2, Population`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Continent")]
    pub continent: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// GDP per capita (x axis).
    #[serde(rename = "GDP")]
    pub gdp: f64,
    /// CO2 emissions per capita (y axis).
    #[serde(rename = "CO2")]
    pub co2: f64,
    /// Marker size.
    #[serde(rename = "Population")]
    pub population: u64,
}

impl Observation {
    pub fn new(
        country_name: impl Into<String>,
        continent: impl Into<String>,
        year: i32,
        gdp: f64,
        co2: f64,
        population: u64,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            continent: continent.into(),
            year,
            gdp,
            co2,
            population,
        }
    }
}

/// Axis bounds in data units, `(min, max)`.
///
/// Both ends are expected to be strictly positive because the chart uses
/// logarithmic axes.
pub type AxisRange = (f64, f64);
