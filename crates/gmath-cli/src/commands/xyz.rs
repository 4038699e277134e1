//! XYZ command - converts between linear sRGB and CIE XYZ

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

use gmath_color::{ColorSpace, xyz_to_xy};
use gmath_math::Vec3;

use super::{Output, format_row};
use crate::XyzArgs;

#[derive(Debug, Serialize)]
pub struct XyzReport {
    pub from: String,
    pub to: String,
    pub output: [f32; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy: Option<[f32; 2]>,
}

pub fn run(args: XyzArgs, out: Output) -> Result<()> {
    let report = convert(&args)?;
    out.emit(&report, |r| match r.xy {
        Some(xy) => format!("{}\nxy {}", format_row(&r.output), format_row(&xy)),
        None => format_row(&r.output),
    })
}

pub fn convert(args: &XyzArgs) -> Result<XyzReport> {
    if args.chromaticity && args.to == ColorSpace::LinearSrgb {
        bail!("--chromaticity needs an XYZ target, not {}", args.to);
    }

    let input = Vec3::new(args.value[0], args.value[1], args.value[2]);
    let output = args.from.convert(input, args.to);
    debug!(from = %args.from, to = %args.to, ?output, "XYZ conversion");

    Ok(XyzReport {
        from: args.from.to_string(),
        to: args.to.to_string(),
        output: output.to_array(),
        xy: args.chromaticity.then(|| xyz_to_xy(output).to_array()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn args(from: ColorSpace, to: ColorSpace, value: [f32; 3], chromaticity: bool) -> XyzArgs {
        XyzArgs { from, to, value: value.to_vec(), chromaticity }
    }

    #[test]
    fn test_white_chromaticity() {
        let r = convert(&args(ColorSpace::LinearSrgb, ColorSpace::XyzD65, [1.0; 3], true)).unwrap();
        let xy = r.xy.unwrap();
        assert_abs_diff_eq!(xy[0], 0.3127, epsilon = 1e-3);
        assert_abs_diff_eq!(xy[1], 0.3290, epsilon = 1e-3);
        assert_abs_diff_eq!(r.output[1], 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_same_space_is_identity() {
        let r = convert(&args(ColorSpace::XyzD50, ColorSpace::XyzD50, [0.2, 0.3, 0.4], false)).unwrap();
        assert_eq!(r.output, [0.2, 0.3, 0.4]);
        assert!(r.xy.is_none());
    }

    #[test]
    fn test_chromaticity_needs_xyz() {
        assert!(convert(&args(ColorSpace::XyzD65, ColorSpace::LinearSrgb, [1.0; 3], true)).is_err());
    }
}
