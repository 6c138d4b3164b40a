//! Calculator Registry
//!
//! The static catalog of domains and calculators. Built once at startup and
//! read-only afterwards.
//!
//! # Design Philosophy
//!
//! Domains and calculators are addressed by stable identifiers
//! ([`DomainId`], [`CalculatorId`]). Positional indices only exist at the
//! navigation layer and are resolved here through [`Registry::lookup`], which
//! is the single place an out-of-catalog selection is caught. Each
//! [`Calculator`] carries its own formula as a plain function pointer, so
//! dispatch is a field access rather than a branch per calculator.

use std::collections::HashMap;
use std::fmt;

use crate::error::CalcError;

/// Number of decimals used when a [`Measurement`] is formatted without an
/// explicit precision
pub const DEFAULT_PRECISION: usize = 2;

// ============================================================================
// Identifiers
// ============================================================================

/// Stable identifier of a domain (e.g. `biology`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId(pub &'static str);

impl DomainId {
    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Stable identifier of a calculator, unique within its domain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalculatorId(pub &'static str);

impl CalculatorId {
    /// The identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Fully qualified calculator address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalculatorKey {
    /// Owning domain
    pub domain: DomainId,
    /// Calculator within the domain
    pub calculator: CalculatorId,
}

impl fmt::Display for CalculatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.calculator)
    }
}

// ============================================================================
// Field Specs and Parsed Values
// ============================================================================

/// How a field's raw text is interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Decimal floating point
    Numeric,
    /// Free text, or one of a fixed set of variants when `variants` is non-empty
    Text {
        /// Recognized variants (matched ignoring ASCII case)
        variants: &'static [&'static str],
    },
}

/// Immutable description of one calculator argument
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label shown next to the input
    pub label: &'static str,
    /// Parsing rule
    pub kind: FieldKind,
    /// Whether an empty value is rejected
    pub required: bool,
}

impl FieldSpec {
    /// A required numeric field
    #[must_use]
    pub const fn numeric(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Numeric,
            required: true,
        }
    }

    /// A required text field restricted to `variants` (any text if empty)
    #[must_use]
    pub const fn text(label: &'static str, variants: &'static [&'static str]) -> Self {
        Self {
            label,
            kind: FieldKind::Text { variants },
            required: true,
        }
    }

    /// The same spec with `required` cleared
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Recognized variants, empty for numeric and free-text fields
    #[must_use]
    pub fn variants(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Numeric => &[],
            FieldKind::Text { variants } => variants,
        }
    }

    /// Parse one raw value according to this spec
    pub fn parse(&self, raw: &str) -> Result<ArgValue, CalcError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(CalcError::invalid(self.label, "is required"));
            }
            return Ok(ArgValue::Missing);
        }

        match self.kind {
            FieldKind::Numeric => match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(ArgValue::Number(value)),
                _ => Err(CalcError::invalid(
                    self.label,
                    format!("'{trimmed}' is not a number"),
                )),
            },
            FieldKind::Text { variants } if variants.is_empty() => {
                Ok(ArgValue::Text(trimmed.to_string()))
            }
            FieldKind::Text { variants } => variants
                .iter()
                .find(|v| v.eq_ignore_ascii_case(trimmed))
                .map(|v| ArgValue::Variant(*v))
                .ok_or_else(|| {
                    CalcError::invalid(
                        self.label,
                        format!("expected one of: {}", variants.join(", ")),
                    )
                }),
        }
    }
}

/// A parsed field value, handed positionally to a formula
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Parsed numeric value
    Number(f64),
    /// Canonical spelling of a recognized variant
    Variant(&'static str),
    /// Free text (trimmed)
    Text(String),
    /// Optional field left empty
    Missing,
}

impl ArgValue {
    /// Numeric value, if any
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text or variant value, if any
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Variant(v) => Some(v),
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Outcome of a successful evaluation.
///
/// `Display` honours the formatter precision (`{:.3}`), defaulting to
/// [`DEFAULT_PRECISION`] decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Name of the computed quantity
    pub quantity: &'static str,
    /// Computed value
    pub value: f64,
    /// Unit suffix, may be empty
    pub unit: &'static str,
}

impl Measurement {
    /// Create a measurement
    #[must_use]
    pub fn new(quantity: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            quantity,
            value,
            unit,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{}: {:.*}", self.quantity, precision, self.value)?;
        match self.unit {
            "" => Ok(()),
            "%" => f.write_str("%"),
            unit => write!(f, " {unit}"),
        }
    }
}

/// A calculator's pure evaluation function.
///
/// Receives one parsed value per field spec, in spec order.
pub type Formula = fn(&[ArgValue]) -> Result<Measurement, CalcError>;

// ============================================================================
// Catalog Entries
// ============================================================================

/// One calculator: its argument slots and its formula
#[derive(Clone)]
pub struct Calculator {
    /// Stable identifier
    pub id: CalculatorId,
    /// Display name
    pub name: &'static str,
    /// Ordered argument slots
    pub fields: Vec<FieldSpec>,
    /// Evaluation function
    pub formula: Formula,
}

impl Calculator {
    /// Create a calculator
    #[must_use]
    pub fn new(
        id: &'static str,
        name: &'static str,
        fields: Vec<FieldSpec>,
        formula: Formula,
    ) -> Self {
        Self {
            id: CalculatorId(id),
            name,
            fields,
            formula,
        }
    }

    /// Parse `values` against the field specs and run the formula.
    ///
    /// A length mismatch is a [`CalcError::ProgrammerContract`]; parse
    /// failures are reported for the first offending field in spec order.
    /// A result that overflows to infinity or NaN is rejected as an argument
    /// error named after the calculator.
    pub fn evaluate(&self, values: &[String]) -> Result<Measurement, CalcError> {
        if values.len() != self.fields.len() {
            return Err(CalcError::ProgrammerContract {
                expected: self.fields.len(),
                actual: values.len(),
            });
        }

        let args = self
            .fields
            .iter()
            .zip(values)
            .map(|(spec, raw)| spec.parse(raw))
            .collect::<Result<Vec<_>, _>>()?;

        let measurement = (self.formula)(&args)?;
        if !measurement.value.is_finite() {
            return Err(CalcError::invalid(self.name, "result is out of range"));
        }
        Ok(measurement)
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// A domain: a display name plus the ordered calculators it owns
#[derive(Clone, Debug)]
pub struct Domain {
    /// Stable identifier
    pub id: DomainId,
    /// Display name
    pub name: &'static str,
    /// Owned calculators, in menu order
    pub calculators: Vec<CalculatorId>,
}

// ============================================================================
// Registry
// ============================================================================

/// The immutable catalog
#[derive(Clone, Debug)]
pub struct Registry {
    domains: Vec<Domain>,
    calculators: HashMap<CalculatorKey, Calculator>,
}

impl Registry {
    /// Start building a catalog
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The catalog shipped with labcalc
    pub fn builtin() -> Result<Self, CalcError> {
        crate::formulas::register(Self::builder()).build()
    }

    /// All domains, in menu order
    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Number of domains
    #[must_use]
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Domain at a menu position
    #[must_use]
    pub fn domain(&self, index: usize) -> Option<&Domain> {
        self.domains.get(index)
    }

    /// Number of calculators in the domain at `domain_index` (0 if none)
    #[must_use]
    pub fn calculator_count(&self, domain_index: usize) -> usize {
        self.domain(domain_index)
            .map_or(0, |domain| domain.calculators.len())
    }

    /// Calculators of the domain at `domain_index`, in menu order
    pub fn calculators_in(&self, domain_index: usize) -> impl Iterator<Item = &Calculator> {
        self.domain(domain_index).into_iter().flat_map(move |domain| {
            domain.calculators.iter().filter_map(move |id| {
                self.calculators.get(&CalculatorKey {
                    domain: domain.id,
                    calculator: *id,
                })
            })
        })
    }

    /// Calculator by stable identifier
    #[must_use]
    pub fn calculator(&self, key: CalculatorKey) -> Option<&Calculator> {
        self.calculators.get(&key)
    }

    /// Resolve menu positions to a calculator and its key.
    ///
    /// Fails with [`CalcError::NotFound`] when either index is outside the
    /// catalog.
    pub fn lookup(
        &self,
        domain_index: usize,
        calculator_index: usize,
    ) -> Result<(CalculatorKey, &Calculator), CalcError> {
        let not_found = || CalcError::NotFound {
            selection: format!("domain #{domain_index}, calculator #{calculator_index}"),
        };

        let domain = self.domain(domain_index).ok_or_else(not_found)?;
        let id = domain
            .calculators
            .get(calculator_index)
            .ok_or_else(not_found)?;
        let key = CalculatorKey {
            domain: domain.id,
            calculator: *id,
        };
        let calculator = self.calculators.get(&key).ok_or_else(not_found)?;

        Ok((key, calculator))
    }

    /// Evaluate the calculator stored under `key` with raw field values
    pub fn evaluate(&self, key: CalculatorKey, values: &[String]) -> Result<Measurement, CalcError> {
        let calculator = self.calculator(key).ok_or_else(|| CalcError::NotFound {
            selection: key.to_string(),
        })?;
        calculator.evaluate(values)
    }
}

/// Collects domains and validates them into a [`Registry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<(DomainId, &'static str, Vec<Calculator>)>,
}

impl RegistryBuilder {
    /// Append a domain with its calculators (menu order is insertion order)
    #[must_use]
    pub fn domain(
        mut self,
        id: &'static str,
        name: &'static str,
        calculators: impl IntoIterator<Item = Calculator>,
    ) -> Self {
        self.entries
            .push((DomainId(id), name, calculators.into_iter().collect()));
        self
    }

    /// Validate and freeze the catalog.
    ///
    /// Rejects an empty catalog, empty domains and duplicate identifiers so
    /// that every menu position the navigator can reach resolves.
    pub fn build(self) -> Result<Registry, CalcError> {
        if self.entries.is_empty() {
            return Err(CalcError::InvalidCatalog("no domains".to_string()));
        }

        let mut domains = Vec::with_capacity(self.entries.len());
        let mut calculators = HashMap::new();

        for (id, name, entries) in self.entries {
            if domains.iter().any(|d: &Domain| d.id == id) {
                return Err(CalcError::InvalidCatalog(format!("duplicate domain '{id}'")));
            }
            if entries.is_empty() {
                return Err(CalcError::InvalidCatalog(format!(
                    "domain '{id}' has no calculators"
                )));
            }

            let mut ids = Vec::with_capacity(entries.len());
            for calculator in entries {
                let key = CalculatorKey {
                    domain: id,
                    calculator: calculator.id,
                };
                if calculators.contains_key(&key) {
                    return Err(CalcError::InvalidCatalog(format!(
                        "duplicate calculator '{key}'"
                    )));
                }
                ids.push(calculator.id);
                calculators.insert(key, calculator);
            }

            domains.push(Domain {
                id,
                name,
                calculators: ids,
            });
        }

        tracing::debug!(
            domains = domains.len(),
            calculators = calculators.len(),
            "calculator registry built"
        );

        Ok(Registry {
            domains,
            calculators,
        })
    }
}
