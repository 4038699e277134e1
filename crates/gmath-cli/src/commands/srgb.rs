//! sRGB command - encodes or decodes a colour

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

use gmath_color::{
    convert_linear_to_srgb, convert_linear_to_srgb_gamma, convert_srgb_to_linear,
    convert_srgb_to_linear_gamma,
};
use gmath_math::Vec3;

use super::{Output, format_row};
use crate::SrgbArgs;

#[derive(Debug, Serialize)]
pub struct SrgbReport {
    pub direction: &'static str,
    pub gamma: Option<f32>,
    pub input: [f32; 3],
    pub output: [f32; 3],
}

pub fn run(args: SrgbArgs, out: Output) -> Result<()> {
    let report = convert(&args)?;
    out.emit(&report, |r| format_row(&r.output))
}

pub fn convert(args: &SrgbArgs) -> Result<SrgbReport> {
    let input = Vec3::new(args.rgb[0], args.rgb[1], args.rgb[2]);

    if let Some(gamma) = args.gamma {
        if !gamma.is_finite() || gamma <= 0.0 {
            bail!("gamma must be a positive number, got {}", gamma);
        }
    }

    let (direction, output) = match (args.to_linear, args.gamma) {
        (true, None) => ("to-linear", convert_srgb_to_linear(input)),
        (true, Some(g)) => ("to-linear", convert_srgb_to_linear_gamma(input, g)),
        (false, None) => ("to-srgb", convert_linear_to_srgb(input)),
        (false, Some(g)) => ("to-srgb", convert_linear_to_srgb_gamma(input, g)),
    };
    debug!(direction, ?input, ?output, "sRGB conversion");

    Ok(SrgbReport {
        direction,
        gamma: args.gamma,
        input: input.to_array(),
        output: output.to_array(),
    })
}
