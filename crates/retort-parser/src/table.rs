use std::io::Read;
use std::path::Path;

use crate::ResourceLoadError;

/// Load the tabular tree definition: headerless CSV, one root-to-reply
/// path per row, row widths may vary.
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, ResourceLoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| ResourceLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(file).map_err(|source| ResourceLoadError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_rows(reader: impl Read) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headerless_rows() {
        let data = "s,p,,I am fine\ns,p,weather,It is sunny\n";
        let rows = parse_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["s", "p", "", "I am fine"]);
        assert_eq!(rows[1][2], "weather");
    }

    #[test]
    fn allows_varying_row_widths() {
        let data = "s,p,,Hi,Hello there\nq,n,\n";
        let rows = parse_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0].len(), 5);
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn standard_quoting_applies() {
        let data = "s,p,food,\"Pizza, obviously\"\n";
        let rows = parse_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0][3], "Pizza, obviously");
    }

    #[test]
    fn empty_input_gives_no_rows() {
        assert!(parse_rows("".as_bytes()).unwrap().is_empty());
    }
}
