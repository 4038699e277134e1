//! Round command - powers of two and multiples on integers

use anyhow::{Result, bail};
use serde::Serialize;

use gmath_math::{
    ceil_multiple, ceil_power_of_two, floor_multiple, floor_power_of_two, is_multiple,
    is_power_of_two, round_multiple, round_power_of_two,
};

use super::Output;
use crate::{RoundArgs, RoundOp};

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoundResult {
    Value(i64),
    Flag(bool),
}

pub fn run(args: RoundArgs, out: Output) -> Result<()> {
    let result = apply(args.op, args.value, args.multiple)?;
    out.emit(&result, |r| match r {
        RoundResult::Value(v) => v.to_string(),
        RoundResult::Flag(b) => b.to_string(),
    })
}

pub fn apply(op: RoundOp, value: i64, multiple: Option<i64>) -> Result<RoundResult> {
    use RoundResult::*;

    let needs_multiple = matches!(
        op,
        RoundOp::CeilMul | RoundOp::FloorMul | RoundOp::RoundMul | RoundOp::IsMul
    );
    let m = match (needs_multiple, multiple) {
        (true, Some(m)) => m,
        (true, None) => bail!("{:?} needs a multiple", op),
        (false, Some(_)) => bail!("{:?} takes no multiple", op),
        (false, None) => 0,
    };

    Ok(match op {
        RoundOp::CeilPow2 => Value(ceil_power_of_two(value)),
        RoundOp::FloorPow2 => Value(floor_power_of_two(value)),
        RoundOp::RoundPow2 => Value(round_power_of_two(value)),
        RoundOp::IsPow2 => Flag(is_power_of_two(value)),
        RoundOp::CeilMul => Value(ceil_multiple(value, m)),
        RoundOp::FloorMul => Value(floor_multiple(value, m)),
        RoundOp::RoundMul => Value(round_multiple(value, m)),
        RoundOp::IsMul => Flag(is_multiple(value, m)),
    })
}
