//! Navigator - The Stage Machine
//!
//! Owns the single [`SessionState`] of a running labcalc process and mutates
//! it in response to [`NavEvent`]s:
//!
//! ```text
//!   DomainSelect ──confirm──▶ CalculatorSelect ──confirm──▶ ArgumentEntry
//!        ▲                      │      ▲                        │
//!        └────────back──────────┘      ├─────────back───────────┤
//!                                      │                  submit│
//!                                      └──back── Result ◀───────┘
//!
//!   quit (any stage) ──▶ Quitting
//! ```
//!
//! # Design Philosophy
//!
//! One event is processed to completion before the next is accepted; there
//! is no background work and no I/O. List navigation clamps at both ends,
//! focus navigation wraps through the submit sentinel. Evaluation failures
//! caused by user input land in `last_error`; anything else is a defect and
//! is returned as `Err` (and panics in debug builds).

use crate::config::LabcalcConfig;
use crate::error::CalcError;
use crate::events::NavEvent;
use crate::fields::{FieldSet, DEFAULT_CHAR_LIMIT};
use crate::registry::{Calculator, CalculatorKey, Measurement, Registry};

/// Phase of the navigation flow
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Choosing a domain
    #[default]
    DomainSelect,
    /// Choosing a calculator within the selected domain
    CalculatorSelect,
    /// Filling in the calculator's fields
    ArgumentEntry,
    /// Showing the last evaluation
    Result,
    /// Terminal: the runner should stop delivering events and exit
    Quitting,
}

impl Stage {
    /// Short name for logs and status lines
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DomainSelect => "domain-select",
            Self::CalculatorSelect => "calculator-select",
            Self::ArgumentEntry => "argument-entry",
            Self::Result => "result",
            Self::Quitting => "quitting",
        }
    }

    /// Whether no further transitions are possible
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Quitting)
    }
}

/// The mutable session, only changed through [`Navigator::handle_event`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    stage: Stage,
    domain_index: usize,
    calculator_index: usize,
    fields: FieldSet,
    active: Option<CalculatorKey>,
    last_result: Option<Measurement>,
    last_error: Option<CalcError>,
}

impl SessionState {
    /// Current stage
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Highlighted domain
    #[must_use]
    pub fn selected_domain_index(&self) -> usize {
        self.domain_index
    }

    /// Highlighted calculator within the selected domain
    #[must_use]
    pub fn selected_calculator_index(&self) -> usize {
        self.calculator_index
    }

    /// Fields of the calculator being filled in (empty outside argument entry)
    #[must_use]
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Focus position, `fields().len()` meaning the submit action
    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.fields.focus_index()
    }

    /// Calculator entered from the menu, if any
    #[must_use]
    pub fn active_calculator(&self) -> Option<CalculatorKey> {
        self.active
    }

    /// Result of the last successful submission
    #[must_use]
    pub fn last_result(&self) -> Option<&Measurement> {
        self.last_result.as_ref()
    }

    /// Error of the last failed submission
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Describe the first broken invariant, if any
    #[must_use]
    pub fn invariant_violation(&self, registry: &Registry) -> Option<String> {
        if self.domain_index >= registry.domain_count() {
            return Some(format!(
                "domain index {} outside {} domains",
                self.domain_index,
                registry.domain_count()
            ));
        }

        let calculators = registry.calculator_count(self.domain_index);
        if self.calculator_index >= calculators {
            return Some(format!(
                "calculator index {} outside {calculators} calculators",
                self.calculator_index
            ));
        }

        if self.fields.focus_index() > self.fields.len() {
            return Some(format!(
                "focus index {} past submit sentinel {}",
                self.fields.focus_index(),
                self.fields.len()
            ));
        }

        if !self.fields.is_empty() && self.stage != Stage::ArgumentEntry {
            return Some(format!("fields alive in stage {}", self.stage.name()));
        }

        let expected =
            usize::from(self.stage == Stage::ArgumentEntry && !self.fields.is_submit_focused());
        let focused = self.fields.focused_count();
        if focused != expected {
            return Some(format!("{focused} focused fields, expected {expected}"));
        }

        None
    }
}

/// Drives the session through its stages
#[derive(Clone, Debug)]
pub struct Navigator {
    registry: Registry,
    state: SessionState,
    char_limit: usize,
}

impl Navigator {
    /// Start a session at `DomainSelect` with the default field length limit
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::with_char_limit(registry, DEFAULT_CHAR_LIMIT)
    }

    /// Start a session with a custom per-field character limit
    #[must_use]
    pub fn with_char_limit(registry: Registry, char_limit: usize) -> Self {
        Self {
            registry,
            state: SessionState::default(),
            char_limit: char_limit.max(1),
        }
    }

    /// Start a session using the limits from `config`
    #[must_use]
    pub fn from_config(registry: Registry, config: &LabcalcConfig) -> Self {
        Self::with_char_limit(registry, config.char_limit)
    }

    /// The catalog being navigated
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Current session state
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current stage
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    /// Whether the session reached `Quitting`
    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.state.stage.is_terminal()
    }

    /// The calculator currently entered, if any
    #[must_use]
    pub fn active_calculator(&self) -> Option<&Calculator> {
        self.state
            .active
            .and_then(|key| self.registry.calculator(key))
    }

    /// Apply one event and return the resulting stage.
    ///
    /// Events that mean nothing in the current stage are ignored. `Err` is
    /// only returned for defects (an unresolvable selection or a
    /// field/registry mismatch); invalid user input is recorded in
    /// [`SessionState::last_error`] instead.
    pub fn handle_event(&mut self, event: NavEvent) -> Result<Stage, CalcError> {
        let from = self.state.stage;

        match (from, event) {
            (Stage::Quitting, _) => return Ok(Stage::Quitting),
            (_, NavEvent::Quit) => {
                self.state.fields.clear();
                self.state.stage = Stage::Quitting;
            }
            (Stage::DomainSelect, _) => self.on_domain_select(event),
            (Stage::CalculatorSelect, _) => self.on_calculator_select(event)?,
            (Stage::ArgumentEntry, _) => self.on_argument_entry(event)?,
            (Stage::Result, _) => self.on_result(event),
        }

        let to = self.state.stage;
        if from != to {
            tracing::debug!(
                from = from.name(),
                to = to.name(),
                domain = self.state.domain_index,
                calculator = self.state.calculator_index,
                "stage transition"
            );
        }

        debug_assert_eq!(self.state.invariant_violation(&self.registry), None);
        Ok(to)
    }

    fn on_domain_select(&mut self, event: NavEvent) {
        let before = self.state.domain_index;
        match event {
            NavEvent::MoveDown => {
                self.state.domain_index = step_down(before, self.registry.domain_count());
            }
            NavEvent::MoveUp => self.state.domain_index = before.saturating_sub(1),
            NavEvent::Confirm => {
                self.state.calculator_index = 0;
                self.state.stage = Stage::CalculatorSelect;
                return;
            }
            _ => return,
        }

        // The remembered calculator index must stay valid for the new domain.
        if self.state.domain_index != before {
            let count = self.registry.calculator_count(self.state.domain_index);
            self.state.calculator_index = self.state.calculator_index.min(count.saturating_sub(1));
        }
    }

    fn on_calculator_select(&mut self, event: NavEvent) -> Result<(), CalcError> {
        match event {
            NavEvent::MoveDown => {
                let count = self.registry.calculator_count(self.state.domain_index);
                self.state.calculator_index = step_down(self.state.calculator_index, count);
            }
            NavEvent::MoveUp => {
                self.state.calculator_index = self.state.calculator_index.saturating_sub(1);
            }
            NavEvent::Confirm => self.enter_calculator()?,
            NavEvent::Back => self.state.stage = Stage::DomainSelect,
            _ => {}
        }
        Ok(())
    }

    fn on_argument_entry(&mut self, event: NavEvent) -> Result<(), CalcError> {
        match event {
            NavEvent::Edit(edit) => {
                self.state.fields.edit_focused(edit);
            }
            NavEvent::FocusForward => {
                self.state.fields.focus_next();
            }
            NavEvent::FocusBackward => {
                self.state.fields.focus_previous();
            }
            NavEvent::Confirm if self.state.fields.is_submit_focused() => self.submit()?,
            NavEvent::Confirm => {
                self.state.fields.focus_next();
            }
            NavEvent::Back => self.leave_calculator(),
            _ => {}
        }
        Ok(())
    }

    fn on_result(&mut self, event: NavEvent) {
        if event == NavEvent::Back {
            self.leave_calculator();
        }
    }

    fn enter_calculator(&mut self) -> Result<(), CalcError> {
        let (key, calculator) = self
            .registry
            .lookup(self.state.domain_index, self.state.calculator_index)
            .map_err(defect)?;

        self.state.fields = FieldSet::from_specs(&calculator.fields, self.char_limit);
        self.state.active = Some(key);
        self.state.last_result = None;
        self.state.last_error = None;
        self.state.stage = Stage::ArgumentEntry;

        tracing::debug!(
            calculator = %key,
            fields = calculator.fields.len(),
            "calculator entered"
        );
        Ok(())
    }

    fn submit(&mut self) -> Result<(), CalcError> {
        let key = self.state.active.ok_or_else(|| {
            defect(CalcError::NotFound {
                selection: "active calculator".to_string(),
            })
        })?;
        let values = self.state.fields.values();

        match self.registry.evaluate(key, &values) {
            Ok(measurement) => {
                tracing::debug!(calculator = %key, result = %measurement, "evaluated");
                self.state.last_result = Some(measurement);
                self.state.last_error = None;
            }
            Err(err) if err.is_user_facing() => {
                tracing::warn!(calculator = %key, error = %err, "arguments rejected");
                self.state.last_result = None;
                self.state.last_error = Some(err);
            }
            Err(err) => return Err(defect(err)),
        }

        self.state.fields.clear();
        self.state.stage = Stage::Result;
        Ok(())
    }

    fn leave_calculator(&mut self) {
        self.state.fields.clear();
        self.state.active = None;
        self.state.last_result = None;
        self.state.last_error = None;
        self.state.stage = Stage::CalculatorSelect;
    }
}

/// Clamp-to-last increment used by both selection lists
fn step_down(index: usize, count: usize) -> usize {
    (index + 1).min(count.saturating_sub(1))
}

/// Log a defect and abort in debug builds before handing it back
fn defect(err: CalcError) -> CalcError {
    tracing::error!(error = %err, "navigator invariant violated");
    if cfg!(debug_assertions) {
        panic!("navigator invariant violated: {err}");
    }
    err
}
