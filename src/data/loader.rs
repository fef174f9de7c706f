use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::SampleTable;

/// Lines starting with this character (after leading blanks) are skipped.
const COMMENT_PREFIX: char = '#';

/// Number of columns every data row must have.
const COLUMNS: usize = 2;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: read failed")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: expected 2 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("no data rows found")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a two-column `time phi` table from a text file.
///
/// Columns are separated by any run of whitespace, so spaces and tabs are
/// interchangeable. Blank lines and `#` comment lines are skipped. Every
/// other line must hold exactly two floats, otherwise the whole load fails.
pub fn load_file(path: &Path) -> Result<SampleTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(BufReader::new(file))
}

/// Parse a table from any buffered reader. See [`load_file`] for the format.
pub fn parse_table<R: BufRead>(reader: R) -> Result<SampleTable, LoadError> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_no,
            source,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(COMMENT_PREFIX) {
            log::debug!("skipping comment on line {line_no}");
            continue;
        }

        rows.push(parse_row(trimmed, line_no)?);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(SampleTable::from_rows(rows))
}

fn parse_row(line: &str, line_no: usize) -> Result<(f64, f64), LoadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != COLUMNS {
        return Err(LoadError::ColumnCount {
            line: line_no,
            found: tokens.len(),
        });
    }

    let time = parse_float(tokens[0], line_no, 0)?;
    let phi = parse_float(tokens[1], line_no, 1)?;
    Ok((time, phi))
}

fn parse_float(token: &str, line: usize, column: usize) -> Result<f64, LoadError> {
    token.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        line,
        column,
        token: token.to_string(),
    })
}
