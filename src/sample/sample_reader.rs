use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use super::feature::CategoricalFeature;
use crate::constants::DEFAULT_MISSING_TOKENS;


/// A struct that reads one categorical column of a CSV file
/// into a [`CategoricalFeature`].
///
/// # Example
/// ```no_run
/// use leafboost::prelude::*;
/// let labels = FeatureReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FeatureReader {
    file: Option<PathBuf>,
    has_header: bool,
    target: Option<String>,
    target_index: Option<usize>,
    missing_tokens: Vec<String>,
}


impl Default for FeatureReader {
    fn default() -> Self {
        Self::new()
    }
}


impl FeatureReader {
    /// Construct a new instance of [`FeatureReader`].
    pub fn new() -> Self {
        let missing_tokens = DEFAULT_MISSING_TOKENS.iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            file: None,
            has_header: false,
            target: None,
            target_index: None,
            missing_tokens,
        }
    }


    /// Set the file name.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is read as the label.
    /// Requires a header row.
    pub fn target_feature<S: ToString>(mut self, column: S) -> Self {
        self.target = Some(column.to_string());
        self
    }


    /// Set the (0-indexed) column position that is read as the label.
    /// Used when no column name is given.
    pub fn target_index(mut self, column: usize) -> Self {
        self.target_index = Some(column);
        self
    }


    /// Replace the strings that denote a missing label.
    pub fn missing_tokens<S: ToString>(mut self, tokens: &[S]) -> Self {
        self.missing_tokens = tokens.iter()
            .map(|s| s.to_string())
            .collect();
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<CategoricalFeature>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<CategoricalFeature> {
        let file = self.file.as_ref()
            .ok_or_else(|| invalid_input("the file name for csv is not set"))?;
        let file = File::open(file)?;
        self.read_from(BufReader::new(file))
    }


    /// Reads the label column from any buffered reader.
    pub fn read_from<R: BufRead>(self, reader: R) -> io::Result<CategoricalFeature> {
        let mut lines = reader.lines();

        let (column, name) = if self.has_header {
            let header = lines.next()
                .ok_or_else(|| invalid_data("the file has no header row"))??;
            let names = header.split(',')
                .map(|s| s.trim().to_string())
                .collect::<Vec<_>>();
            match (&self.target, self.target_index) {
                (Some(target), _) => {
                    let column = names.iter()
                        .position(|n| n == target)
                        .ok_or_else(|| {
                            invalid_input(format!("no column named `{target}`"))
                        })?;
                    (column, target.clone())
                },
                (None, Some(column)) => {
                    let name = names.get(column)
                        .cloned()
                        .ok_or_else(|| {
                            invalid_input(format!("no column at position {column}"))
                        })?;
                    (column, name)
                },
                (None, None) => {
                    return Err(invalid_input(
                        "target column is not specified. \
                        use `FeatureReader::target_feature`."
                    ));
                },
            }
        } else {
            if self.target.is_some() {
                return Err(invalid_input(
                    "a target column name needs a header row. \
                    use `FeatureReader::target_index` instead."
                ));
            }
            let column = self.target_index.unwrap_or(0);
            (column, format!("Feat. [{}]", column + 1))
        };

        let mut feature = CategoricalFeature::new(name);
        for (row, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let value = line.split(',')
                .nth(column)
                .ok_or_else(|| {
                    invalid_data(format!("row {row} has no column {column}"))
                })?
                .trim();
            let missing = self.missing_tokens.iter()
                .any(|token| token == value);
            feature.push(if missing { None } else { Some(value) });
        }

        Ok(feature)
    }
}


fn invalid_input<E: Into<String>>(message: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message.into())
}


fn invalid_data<E: Into<String>>(message: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.into())
}
