//! Reading regression data from delimited text.
//!
//! The file must start with a header row. Every following record is parsed as
//! real numbers; the last column is the target and the remaining columns, after
//! [`CsvOptions::skip_columns`] leading columns are dropped, are the features.

use std::path::Path;

use crate::dataset::InMemoryDataset;
use crate::error::{LinRegError, Result};

/// Options for [`read_csv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Leading columns to ignore (e.g. a row id).
    pub skip_columns: usize,
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            skip_columns: 0,
            delimiter: b',',
        }
    }
}

/// Loads a dataset from a CSV file with a header row.
///
/// # Errors
/// - `Io`/`Csv` if the file cannot be opened or is not valid CSV (including
///   records of differing lengths).
/// - `Parse` if a cell is not a finite real number (`NaN` and `inf` included). `row` is the 0-based data row
///   (header excluded) and `column` the 0-based column in the file.
/// - `EmptyDataset` if there are no data rows or no column is left for the target.
pub fn read_csv<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<InMemoryDataset> {
    let path = path.as_ref();
    log::debug!("reading {} (skip_columns={})", path.display(), options.skip_columns);

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .trim(::csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .skip(options.skip_columns)
            .map(|(col_idx, cell)| {
                cell.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| LinRegError::Parse {
                        row: row_idx,
                        column: col_idx,
                        value: cell.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    log::debug!("read {} rows from {}", rows.len(), path.display());
    InMemoryDataset::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{contents}").expect("write csv");
        file
    }

    #[test]
    fn test_reads_features_and_last_column_target() {
        let file = write_csv("x1,x2,y\n1, 2, 3\n4,5,6\n");
        let ds = read_csv(file.path(), CsvOptions::default()).unwrap();
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.features(), &[vec![1.0, 2.0], vec![4.0, 5.0]]);
        assert_eq!(ds.targets(), &[3.0, 6.0]);
    }

    #[test]
    fn test_skip_index_column() {
        let file = write_csv("id,size,price\n0,1500,300000\n1,2000,410000\n");
        let options = CsvOptions {
            skip_columns: 1,
            ..CsvOptions::default()
        };
        let ds = read_csv(file.path(), options).unwrap();
        assert_eq!(ds.features(), &[vec![1500.0], vec![2000.0]]);
        assert_eq!(ds.targets(), &[300000.0, 410000.0]);
    }

    #[test]
    fn test_malformed_cell_is_reported() {
        let file = write_csv("x,y\n1,2\nthree,4\n");
        let err = read_csv(file.path(), CsvOptions::default()).unwrap_err();
        match err {
            LinRegError::Parse { row, column, value } => {
                assert_eq!((row, column), (1, 0));
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_cells_are_rejected() {
        for (cell, contents) in [("NaN", "x,y\n1,2\nNaN,3\n5,4\n"), ("inf", "x,y\n1,2\n3,inf\n")] {
            let file = write_csv(contents);
            match read_csv(file.path(), CsvOptions::default()).unwrap_err() {
                LinRegError::Parse { row, value, .. } => {
                    assert_eq!(row, 1);
                    assert_eq!(value, cell);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let file = write_csv("x,y\n");
        let err = read_csv(file.path(), CsvOptions::default()).unwrap_err();
        assert!(matches!(err, LinRegError::EmptyDataset(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv("/definitely/not/here.csv", CsvOptions::default()).unwrap_err();
        assert!(matches!(err, LinRegError::Csv(_) | LinRegError::Io(_)));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let file = write_csv("x;y\n1;2\n");
        let options = CsvOptions {
            delimiter: b';',
            ..CsvOptions::default()
        };
        let ds = read_csv(file.path(), options).unwrap();
        assert_eq!(ds.targets(), &[2.0]);
    }
}
