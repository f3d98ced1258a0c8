//! Plain-text matrix files.
//!
//! The first line holds `rows cols`, followed by one line per row with
//! whitespace-separated values.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{MatrixError, Result};

/// A row-major matrix read from text, with its dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixFile {
    pub data: Vec<f64>,
    pub rows: usize,
    pub cols: usize,
}

fn parse_err(line: usize, reason: impl Into<String>) -> MatrixError {
    MatrixError::Parse {
        line,
        reason: reason.into(),
    }
}

pub fn parse_matrix(text: &str) -> Result<MatrixFile> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (header_idx, header) = lines.next().ok_or_else(|| parse_err(1, "missing header"))?;
    let dims: Vec<usize> = header
        .split_whitespace()
        .map(|tok| tok.parse::<usize>())
        .collect::<std::result::Result<Vec<usize>, _>>()
        .map_err(|e| parse_err(header_idx + 1, format!("bad dimension: {e}")))?;
    let [rows, cols] = dims[..] else {
        return Err(parse_err(header_idx + 1, "expected `rows cols`"));
    };
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyDimension);
    }

    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let (idx, line) = lines
            .next()
            .ok_or_else(|| parse_err(header_idx + 2 + r, format!("missing row {r}")))?;
        let before = data.len();
        for tok in line.split_whitespace() {
            let value = tok
                .parse::<f64>()
                .map_err(|e| parse_err(idx + 1, format!("bad value {tok:?}: {e}")))?;
            data.push(value);
        }
        let found = data.len() - before;
        if found != cols {
            return Err(parse_err(idx + 1, format!("expected {cols} values, found {found}")));
        }
    }
    if let Some((idx, _)) = lines.next() {
        return Err(parse_err(idx + 1, "trailing data after last row"));
    }

    Ok(MatrixFile { data, rows, cols })
}

pub fn read_matrix(path: impl AsRef<Path>) -> Result<MatrixFile> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

/// Formats an `m x n` matrix in the same layout `parse_matrix` reads.
pub fn format_matrix(a: &[f64], m: usize, n: usize) -> String {
    let mut out = format!("{m} {n}\n");
    for row in a.chunks_exact(n).take(m) {
        let line: Vec<String> = row.iter().map(|x| format!("{x:e}")).collect();
        // writing into a String cannot fail
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

pub fn write_matrix(path: impl AsRef<Path>, a: &[f64], m: usize, n: usize) -> Result<()> {
    fs::write(path, format_matrix(a, m, n))?;
    Ok(())
}

/// Prints an `m x n` matrix to stdout, tab-separated.
pub fn print_matrix(a: &[f64], m: usize, n: usize) {
    for row in a.chunks_exact(n).take(m) {
        let line: Vec<String> = row.iter().map(|x| format!("{x:.6}")).collect();
        println!("{}", line.join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let m = parse_matrix("2 3\n1 2 3\n4.5 -5 6e-1\n").unwrap();
        assert_eq!((m.rows, m.cols), (2, 3));
        assert_eq!(m.data, vec![1.0, 2.0, 3.0, 4.5, -5.0, 0.6]);
    }

    #[test]
    fn test_format_round_trips() {
        let a = [0.1, -1.0 / 3.0, 1e300, 2.0];
        let m = parse_matrix(&format_matrix(&a, 2, 2)).unwrap();
        assert_eq!(m.data, a.to_vec());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_matrix(""), Err(MatrixError::Parse { line: 1, .. })));
        assert!(matches!(parse_matrix("2\n1\n"), Err(MatrixError::Parse { line: 1, .. })));
        assert!(matches!(
            parse_matrix("2 2\n1 2\n3\n"),
            Err(MatrixError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse_matrix("1 1\nx\n"),
            Err(MatrixError::Parse { line: 2, .. })
        ));
        assert!(matches!(parse_matrix("0 2\n"), Err(MatrixError::EmptyDimension)));
        assert!(matches!(
            parse_matrix("1 1\n1\n2\n"),
            Err(MatrixError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_matrix("/nonexistent/matrix.txt").unwrap_err();
        assert!(matches!(err, MatrixError::Io(_)));
    }
}
