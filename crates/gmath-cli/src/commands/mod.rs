//! CLI command implementations

pub mod covariance;
pub mod ease;
pub mod rand;
pub mod round;
pub mod srgb;
pub mod xyz;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::Path;

/// How results are printed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints `value` as pretty JSON, or `text(value)` otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            let s = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{s}");
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }
}

/// Parses a point file.
///
/// One point per line, columns split on whitespace or commas. Blank lines
/// and lines starting with `#` are skipped. Every row must have the same
/// number of columns.
pub fn parse_points(text: &str) -> Result<Vec<Vec<f32>>> {
    let mut rows: Vec<Vec<f32>> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f32>()
                    .with_context(|| format!("line {}: invalid number '{}'", i + 1, s))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                bail!(
                    "line {}: expected {} columns, found {}",
                    i + 1,
                    first.len(),
                    row.len()
                );
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Reads and parses a point file.
pub fn load_points(path: &Path) -> Result<Vec<Vec<f32>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;
    parse_points(&text).with_context(|| format!("Failed to parse: {}", path.display()))
}

/// Formats floats with a fixed precision, space separated.
pub fn format_row(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{v:>10.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_mixed_separators() {
        let rows = parse_points("1 2 3\n4,5,6\n 7 ,8, 9 \n").unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let rows = parse_points("# x y\n\n0.5 -1\n\n# end\n2 3e-1\n").unwrap();
        assert_eq!(rows, vec![vec![0.5, -1.0], vec![2.0, 0.3]]);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let err = parse_points("1 2\n3 4 5\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_parse_bad_number() {
        let err = parse_points("1 2\n3 x\n").unwrap_err();
        assert!(err.to_string().contains("'x'"), "{err}");
    }

    #[test]
    fn test_load_points_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# samples").unwrap();
        writeln!(file, "1.0, 0.0").unwrap();
        writeln!(file, "-1.0, 0.0").unwrap();
        let rows = load_points(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_points(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_format_row() {
        assert_eq!(format_row(&[1.0, -0.5]), "  1.000000  -0.500000");
    }
}
