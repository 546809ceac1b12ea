use crate::models::Observation;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Read observations from a CSV file with the header
/// `Country Name,Continent,Year,GDP,CO2,Population`.
///
/// Rows are deserialized as-is; no range or consistency checks are made.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    collect_rows(rdr)
}

/// Same as [`read_csv`] from any reader.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    collect_rows(rdr)
}

fn collect_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Observation>> {
    let mut out = Vec::new();
    for row in rdr.deserialize::<Observation>() {
        out.push(row?);
    }
    log::debug!("read {} observations", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tabular_columns() {
        let data = "Country Name,Continent,Year,GDP,CO2,Population\n\
                    Germany, Europe ,2000,23635.9,10.1,82211508\n\
                    Chad,Africa,2000,166.4,0.02,8259137\n";
        let rows = read_csv_from(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].continent, "Europe");
        assert_eq!(rows[1], Observation::new("Chad", "Africa", 2000, 166.4, 0.02, 8_259_137));
    }

    #[test]
    fn missing_column_is_an_error() {
        let data = "Country Name,Continent,Year,GDP,CO2\nX,Y,2000,1,1\n";
        assert!(read_csv_from(data.as_bytes()).is_err());
    }
}
