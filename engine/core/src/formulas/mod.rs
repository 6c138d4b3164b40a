//! Built-in Formulas
//!
//! The catalog shipped with labcalc. Each submodule contributes the
//! calculators of one domain; [`register`] wires them into a
//! [`RegistryBuilder`] in menu order.

pub mod biology;
pub mod math;
pub mod physics;

use crate::error::CalcError;
use crate::registry::{ArgValue, RegistryBuilder};

/// Add the built-in domains to `builder`
#[must_use]
pub fn register(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .domain("math", "Math", math::calculators())
        .domain("physics", "Physics", physics::calculators())
        .domain("biology", "Biology", biology::calculators())
}

/// Numeric argument at `index`, or an argument error naming `label`
pub(crate) fn number(args: &[ArgValue], index: usize, label: &str) -> Result<f64, CalcError> {
    args.get(index)
        .and_then(ArgValue::as_number)
        .ok_or_else(|| CalcError::invalid(label, "is required"))
}

/// Like [`number`], but rejects zero and negative values
pub(crate) fn positive(args: &[ArgValue], index: usize, label: &str) -> Result<f64, CalcError> {
    let value = number(args, index, label)?;
    if value <= 0.0 {
        return Err(CalcError::invalid(label, "must be greater than zero"));
    }
    Ok(value)
}
