//! Covariance command - covariance matrix and principal axes of a point file

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use gmath_math::{
    SquareMatrix, Vec2, Vec3, Vec4, Vector, compute_covariance_matrix, sort_eigen,
    symmetric_eigen,
};

use super::{Output, format_row, load_points};
use crate::CovarianceArgs;

#[derive(Debug, Serialize)]
pub struct Axis {
    pub value: f32,
    pub vector: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct CovarianceReport {
    pub samples: usize,
    pub dim: usize,
    pub matrix: Vec<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axes: Option<Vec<Axis>>,
}

pub fn run(args: CovarianceArgs, out: Output) -> Result<()> {
    let rows = load_points(&args.input)?;
    let report = analyse(&rows, args.eigen)?;
    info!(samples = report.samples, dim = report.dim, "analysed {}", args.input.display());

    out.emit(&report, |r| {
        let mut lines: Vec<String> = r.matrix.iter().map(|row| format_row(row)).collect();
        if let Some(axes) = &r.axes {
            lines.push(String::new());
            for axis in axes {
                lines.push(format!("{:>10.6} | {}", axis.value, format_row(&axis.vector)));
            }
        }
        lines.join("\n")
    })
}

/// Dispatches on the column count of `rows`.
pub fn analyse(rows: &[Vec<f32>], eigen: bool) -> Result<CovarianceReport> {
    let Some(first) = rows.first() else {
        bail!("no points to analyse");
    };
    match first.len() {
        2 => analyse_dim::<Vec2>(rows, eigen),
        3 => analyse_dim::<Vec3>(rows, eigen),
        4 => analyse_dim::<Vec4>(rows, eigen),
        n => bail!("points must have 2 to 4 columns, found {}", n),
    }
}

fn analyse_dim<V: Vector>(rows: &[Vec<f32>], eigen: bool) -> Result<CovarianceReport> {
    let n = V::DIM;
    let points: Vec<V> = rows.iter().map(|row| V::from_fn(|i| row[i])).collect();

    let cov = compute_covariance_matrix(&points).context("Failed to compute covariance")?;
    let matrix = (0..n).map(|r| (0..n).map(|c| cov.get(r, c)).collect()).collect();

    let axes = if eigen {
        let mut e = symmetric_eigen(&cov).context("Eigen decomposition failed")?;
        sort_eigen(&mut e);
        Some(
            (0..n)
                .map(|i| Axis {
                    value: e.values[i],
                    vector: (0..n).map(|r| e.vectors.get(r, i)).collect(),
                })
                .collect(),
        )
    } else {
        None
    };

    Ok(CovarianceReport { samples: points.len(), dim: n, matrix, axes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_points;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    #[test]
    fn test_line_along_x() {
        let rows = parse_points("-2 0\n-1 0\n1 0\n2 0\n").unwrap();
        let r = analyse(&rows, true).unwrap();
        assert_eq!((r.samples, r.dim), (4, 2));
        assert_abs_diff_eq!(r.matrix[0][0], 2.5, epsilon = 1e-6);
        assert_eq!(r.matrix[1][1], 0.0);

        let axes = r.axes.unwrap();
        assert_abs_diff_eq!(axes[0].value, 2.5, epsilon = 1e-5);
        assert_abs_diff_eq!(axes[0].vector[0].abs(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(axes[1].value, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_four_columns() {
        let rows = parse_points("1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 0 1\n").unwrap();
        let r = analyse(&rows, false).unwrap();
        assert_eq!(r.dim, 4);
        assert!(r.axes.is_none());
        assert_abs_diff_eq!(r.matrix[0][0], 0.1875, epsilon = 1e-6);
        assert_abs_diff_eq!(r.matrix[0][1], -0.0625, epsilon = 1e-6);
    }

    #[test]
    fn test_bad_shapes() {
        assert!(analyse(&[], false).is_err());
        assert!(analyse(&[vec![1.0]], false).is_err());
        assert!(analyse(&[vec![1.0; 5]], false).is_err());
    }

    #[test]
    fn test_from_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y,z").ok();
        let err = load_points(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid number"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0,1").unwrap();
        writeln!(file, "0,0,-1").unwrap();
        let rows = load_points(file.path()).unwrap();
        let r = analyse(&rows, true).unwrap();
        assert_abs_diff_eq!(r.matrix[2][2], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.axes.unwrap()[0].vector[2].abs(), 1.0, epsilon = 1e-5);
    }
}
