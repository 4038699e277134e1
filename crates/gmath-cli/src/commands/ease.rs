//! Ease command - evaluates an easing curve

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::debug;

use super::Output;
use crate::EaseArgs;

#[derive(Debug, Serialize)]
pub struct EaseReport {
    pub family: String,
    pub mode: String,
    pub samples: Vec<[f32; 2]>,
}

pub fn run(args: EaseArgs, out: Output) -> Result<()> {
    let report = evaluate(&args)?;
    out.emit(&report, |r| {
        r.samples
            .iter()
            .map(|[t, v]| format!("{t:.4}\t{v:.6}"))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

pub fn evaluate(args: &EaseArgs) -> Result<EaseReport> {
    let f = args.family.function(args.mode);
    debug!(family = %args.family, mode = %args.mode, count = args.t.len(), "evaluating easing");

    let mut samples = Vec::with_capacity(args.t.len());
    for &t in &args.t {
        if !(0.0..=1.0).contains(&t) {
            bail!("t must be in [0, 1], got {}", t);
        }
        samples.push([t, f(t)]);
    }

    Ok(EaseReport {
        family: args.family.to_string(),
        mode: args.mode.to_string(),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmath_math::{EaseMode, Easing};

    fn args(family: Easing, mode: EaseMode, t: &[f32]) -> EaseArgs {
        EaseArgs { family, mode, t: t.to_vec() }
    }

    #[test]
    fn test_cubic_in() {
        let r = evaluate(&args(Easing::Cubic, EaseMode::In, &[0.0, 0.5, 1.0])).unwrap();
        assert_eq!(r.samples, vec![[0.0, 0.0], [0.5, 0.125], [1.0, 1.0]]);
        assert_eq!(r.family, "cubic");
        assert_eq!(r.mode, "in");
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(evaluate(&args(Easing::Sine, EaseMode::Out, &[0.2, 1.5])).is_err());
        assert!(evaluate(&args(Easing::Sine, EaseMode::Out, &[f32::NAN])).is_err());
    }
}
