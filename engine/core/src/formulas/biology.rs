//! Biology calculators.
//!
//! DNA concentration from spectrophotometer absorbance:
//!
//! ```text
//! C = (A / l) × DF × CF
//! ```
//!
//! `A` is the peak absorbance (usually at 260 nm), `l` the cuvette path
//! length in cm, `DF` the dilution factor and `CF` the conversion factor of
//! the sample type.

use super::{number, positive};
use crate::error::CalcError;
use crate::registry::{ArgValue, Calculator, FieldSpec, Measurement};

/// Sample types accepted by the "Sample Type" field, in display order
pub const SAMPLE_TYPES: &[&str] = &[
    SampleType::SingleStrandedDna.label(),
    SampleType::DoubleStrandedDna.label(),
    SampleType::Rna.label(),
];

/// Nucleic acid being measured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleType {
    /// ssDNA
    SingleStrandedDna,
    /// dsDNA
    DoubleStrandedDna,
    /// RNA
    Rna,
}

impl SampleType {
    /// Display label, also the accepted field value
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleStrandedDna => "Single Stranded DNA",
            Self::DoubleStrandedDna => "Double Stranded DNA",
            Self::Rna => "RNA",
        }
    }

    /// Conversion factor in µg/mL per absorbance unit
    #[must_use]
    pub const fn conversion_factor(self) -> f64 {
        match self {
            Self::SingleStrandedDna => 33.0,
            Self::DoubleStrandedDna => 50.0,
            Self::Rna => 40.0,
        }
    }

    /// Sample type for a canonical label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [Self::SingleStrandedDna, Self::DoubleStrandedDna, Self::Rna]
            .into_iter()
            .find(|kind| kind.label() == label)
    }
}

/// Calculators of the Biology domain
#[must_use]
pub fn calculators() -> Vec<Calculator> {
    vec![
        Calculator::new(
            "dna-concentration",
            "DNA Concentration",
            vec![
                FieldSpec::text("Sample Type", SAMPLE_TYPES),
                FieldSpec::numeric("Absorbance"),
                FieldSpec::numeric("Pathlength"),
                FieldSpec::numeric("Dilution Factor"),
            ],
            dna_concentration,
        ),
        Calculator::new(
            "dna-concentration-custom",
            "DNA Concentration (Custom Factor)",
            vec![
                FieldSpec::numeric("Conversion Factor"),
                FieldSpec::numeric("Absorbance"),
                FieldSpec::numeric("Pathlength"),
                FieldSpec::numeric("Dilution Factor"),
            ],
            dna_concentration_custom,
        ),
    ]
}

/// `C = (A / l) × DF × CF` with `CF` taken from the sample type, in µg/mL
pub fn dna_concentration(args: &[ArgValue]) -> Result<Measurement, CalcError> {
    let sample = args
        .first()
        .and_then(ArgValue::as_text)
        .and_then(SampleType::from_label)
        .ok_or_else(|| {
            CalcError::invalid(
                "Sample Type",
                format!("expected one of: {}", SAMPLE_TYPES.join(", ")),
            )
        })?;
    concentration(args, sample.conversion_factor())
}

/// `C = (A / l) × DF × CF` with an explicit conversion factor, in µg/mL
pub fn dna_concentration_custom(args: &[ArgValue]) -> Result<Measurement, CalcError> {
    let factor = positive(args, 0, "Conversion Factor")?;
    concentration(args, factor)
}

/// Absorbance, pathlength and dilution sit at positions 1 to 3 in both layouts
fn concentration(args: &[ArgValue], factor: f64) -> Result<Measurement, CalcError> {
    let absorbance = number(args, 1, "Absorbance")?;
    let pathlength = positive(args, 2, "Pathlength")?;
    let dilution = number(args, 3, "Dilution Factor")?;

    Ok(Measurement::new(
        "Concentration",
        absorbance / pathlength * dilution * factor,
        "µg/mL",
    ))
}
