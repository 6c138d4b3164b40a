//! Math calculators: percentage conversions.

use super::number;
use crate::error::CalcError;
use crate::registry::{ArgValue, Calculator, FieldSpec, Measurement};

/// Calculators of the Math domain
#[must_use]
pub fn calculators() -> Vec<Calculator> {
    vec![
        Calculator::new(
            "fraction-to-percent",
            "Fraction to Percent",
            vec![
                FieldSpec::numeric("Numerator"),
                FieldSpec::numeric("Denominator"),
            ],
            fraction_to_percent,
        ),
        Calculator::new(
            "decimal-to-percent",
            "Decimal to Percent",
            vec![FieldSpec::numeric("Decimal")],
            decimal_to_percent,
        ),
    ]
}

/// `numerator / denominator × 100`
pub fn fraction_to_percent(args: &[ArgValue]) -> Result<Measurement, CalcError> {
    let numerator = number(args, 0, "Numerator")?;
    let denominator = number(args, 1, "Denominator")?;
    if denominator == 0.0 {
        return Err(CalcError::invalid("Denominator", "must not be zero"));
    }
    Ok(Measurement::new(
        "Percent",
        numerator / denominator * 100.0,
        "%",
    ))
}

/// `decimal × 100`
pub fn decimal_to_percent(args: &[ArgValue]) -> Result<Measurement, CalcError> {
    let decimal = number(args, 0, "Decimal")?;
    Ok(Measurement::new("Percent", decimal * 100.0, "%"))
}
