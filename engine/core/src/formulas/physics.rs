//! Physics calculators.

use std::f64::consts::PI;

use super::positive;
use crate::error::CalcError;
use crate::registry::{ArgValue, Calculator, FieldSpec, Measurement};

/// Calculators of the Physics domain
#[must_use]
pub fn calculators() -> Vec<Calculator> {
    vec![Calculator::new(
        "high-pass-filter",
        "High Pass Filter",
        vec![
            FieldSpec::numeric("Resistance (Ω)"),
            FieldSpec::numeric("Capacitance (F)"),
        ],
        high_pass_filter,
    )]
}

/// Cutoff frequency of a first-order RC high-pass filter: `f = 1 / (2πRC)`
pub fn high_pass_filter(args: &[ArgValue]) -> Result<Measurement, CalcError> {
    let resistance = positive(args, 0, "Resistance (Ω)")?;
    let capacitance = positive(args, 1, "Capacitance (F)")?;
    Ok(Measurement::new(
        "Cutoff Frequency",
        1.0 / (2.0 * PI * resistance * capacitance),
        "Hz",
    ))
}
