//! Navigation Integration Tests
//!
//! These tests drive the navigator only through `NavEvent`s, the way a
//! surface does, and check the session and the rendered text.
//!
//! # Test Coverage
//!
//! 1. **Selection**: domain/calculator lists clamp, re-entry resets indices
//! 2. **Argument entry**: DNA concentration submitted with good and bad input
//! 3. **Leaving**: back from the result screen and field round-trips
//! 4. **Properties**: clamping and focus-wrap hold for arbitrary sequences

use labcalc_core::{
    formulas, ArgValue, CalcError, Calculator, FieldSpec, Measurement, NavEvent, Navigator, Registry,
    Renderer, Stage,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

fn echo(args: &[ArgValue]) -> Result<Measurement, CalcError> {
    Ok(Measurement::new(
        "Count",
        args.iter().filter(|a| **a != ArgValue::Missing).count() as f64,
        "",
    ))
}

/// Two domains, Math and Biology
fn math_and_biology() -> Registry {
    Registry::builder()
        .domain("math", "Math", formulas::math::calculators())
        .domain("biology", "Biology", formulas::biology::calculators())
        .build()
        .unwrap()
}

/// One domain with a calculator of `n` optional numeric fields
fn n_fields(n: usize) -> Registry {
    const LABELS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];
    let specs = LABELS[..n]
        .iter()
        .map(|&label| FieldSpec::numeric(label).optional())
        .collect();
    Registry::builder()
        .domain("test", "Test", [Calculator::new("echo", "Echo", specs, echo)])
        .build()
        .unwrap()
}

fn send(nav: &mut Navigator, events: impl IntoIterator<Item = NavEvent>) {
    for event in events {
        nav.handle_event(event).unwrap();
    }
}

/// Math → Biology → DNA Concentration, focus on "Sample Type"
fn enter_dna_concentration() -> Navigator {
    let mut nav = Navigator::new(math_and_biology());
    send(&mut nav, [NavEvent::MoveDown, NavEvent::Confirm, NavEvent::Confirm]);
    assert_eq!(nav.stage(), Stage::ArgumentEntry);
    nav
}

/// Type each value into consecutive fields, then move to submit
fn fill(nav: &mut Navigator, values: &[&str]) {
    for value in values {
        send(nav, NavEvent::typed(value));
        send(nav, [NavEvent::FocusForward]);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_select_second_domain() {
    let mut nav = Navigator::new(math_and_biology());
    assert_eq!(nav.stage(), Stage::DomainSelect);
    assert_eq!(nav.state().selected_domain_index(), 0);

    send(&mut nav, [NavEvent::MoveDown]);
    assert_eq!(nav.state().selected_domain_index(), 1);
    assert_eq!(nav.registry().domains()[1].name, "Biology");

    send(&mut nav, [NavEvent::Confirm]);
    assert_eq!(nav.stage(), Stage::CalculatorSelect);
    assert_eq!(nav.state().selected_calculator_index(), 0);
}

#[test]
fn test_dna_concentration_submission() {
    let mut nav = enter_dna_concentration();
    let labels: Vec<_> = nav
        .state()
        .fields()
        .fields()
        .iter()
        .map(|f| f.spec().label)
        .collect();
    assert_eq!(
        labels,
        vec!["Sample Type", "Absorbance", "Pathlength", "Dilution Factor"]
    );

    fill(&mut nav, &["Single Stranded DNA", "5", "1", "1"]);
    assert!(nav.state().fields().is_submit_focused());

    assert_eq!(nav.handle_event(NavEvent::Confirm).unwrap(), Stage::Result);
    let result = nav.state().last_result().unwrap();
    assert_eq!(result.value, 165.0);
    assert!(nav.state().last_error().is_none());
    assert!(Renderer::default()
        .render(&nav)
        .contains("Concentration: 165.00 µg/mL"));
}

#[test]
fn test_missing_absorbance_reported() {
    let mut nav = enter_dna_concentration();
    fill(&mut nav, &["RNA", "", "1", "1"]);
    send(&mut nav, [NavEvent::Confirm]);

    assert_eq!(nav.stage(), Stage::Result);
    assert!(nav.state().last_result().is_none());
    let err = nav.state().last_error().unwrap();
    assert!(matches!(err, CalcError::InvalidArgument { .. }));
    assert_eq!(err.field_label(), Some("Absorbance"));
    assert!(Renderer::default()
        .render(&nav)
        .contains("Error: Absorbance: is required"));
}

#[test]
fn test_unknown_sample_type_reported() {
    let mut nav = enter_dna_concentration();
    fill(&mut nav, &["Protein", "5", "1", "1"]);
    send(&mut nav, [NavEvent::Confirm]);
    assert_eq!(
        nav.state().last_error().and_then(CalcError::field_label),
        Some("Sample Type")
    );
}

#[test]
fn test_back_from_result_clears_everything() {
    let mut nav = Navigator::new(math_and_biology());
    send(&mut nav, [NavEvent::Confirm, NavEvent::MoveDown]);
    assert_eq!(nav.state().selected_calculator_index(), 1);
    send(&mut nav, [NavEvent::Confirm]);
    fill(&mut nav, &["0.3"]);
    send(&mut nav, [NavEvent::Confirm]);
    assert_eq!(nav.stage(), Stage::Result);

    send(&mut nav, [NavEvent::Back]);
    assert_eq!(nav.stage(), Stage::CalculatorSelect);
    assert_eq!(nav.state().selected_calculator_index(), 1);
    assert!(nav.state().fields().is_empty());
    assert!(nav.state().last_result().is_none());
    assert!(nav.state().last_error().is_none());
}

#[test]
fn test_recover_after_invalid_argument() {
    let mut nav = enter_dna_concentration();
    fill(&mut nav, &["dsdna?", "1", "1", "1"]);
    send(&mut nav, [NavEvent::Confirm]);
    assert!(nav.state().last_error().is_some());

    send(&mut nav, [NavEvent::Back, NavEvent::Confirm]);
    fill(&mut nav, &["double stranded dna", "1", "1", "1"]);
    send(&mut nav, [NavEvent::Confirm]);
    assert!(nav.state().last_error().is_none());
    assert_eq!(nav.state().last_result().map(|m| m.value), Some(50.0));
}

#[test]
fn test_out_of_range_result_reported_as_error() {
    let mut nav = Navigator::new(Registry::builtin().unwrap());
    send(&mut nav, [NavEvent::MoveDown, NavEvent::Confirm, NavEvent::Confirm]);
    fill(&mut nav, &["1e-200", "1e-200"]);
    send(&mut nav, [NavEvent::Confirm]);

    assert_eq!(nav.stage(), Stage::Result);
    assert!(nav.state().last_result().is_none());
    assert_eq!(
        nav.state().last_error().and_then(CalcError::field_label),
        Some("High Pass Filter")
    );
    let text = Renderer::default().render(&nav);
    assert!(text.contains("Error: High Pass Filter: result is out of range"));
    assert!(!text.contains("inf"));
}

#[test]
fn test_custom_conversion_factor() {
    let mut nav = enter_dna_concentration();
    send(&mut nav, [NavEvent::Back, NavEvent::MoveDown, NavEvent::Confirm]);
    fill(&mut nav, &["45", "2", "1", "1"]);
    send(&mut nav, [NavEvent::Confirm]);

    assert_eq!(nav.state().last_result().map(|m| m.value), Some(90.0));
    assert!(Renderer::default()
        .render(&nav)
        .contains("Concentration: 90.00 µg/mL"));
}

#[test]
fn test_reentry_yields_fresh_fields() {
    let mut nav = enter_dna_concentration();
    fill(&mut nav, &["RNA", "2"]);
    send(&mut nav, [NavEvent::Back, NavEvent::Confirm]);

    let fields = nav.state().fields();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields.focus_index(), 0);
    assert!(fields.values().iter().all(String::is_empty));
}

#[test]
fn test_render_is_idempotent_in_every_stage() {
    let renderer = Renderer::default();
    let mut nav = Navigator::new(math_and_biology());
    let script = [
        NavEvent::MoveDown,
        NavEvent::Confirm,
        NavEvent::Confirm,
        NavEvent::char('R'),
        NavEvent::FocusBackward,
        NavEvent::Confirm,
        NavEvent::Back,
        NavEvent::Quit,
    ];
    for event in script {
        send(&mut nav, [event]);
        assert_eq!(renderer.render(&nav), renderer.render(&nav));
        assert_eq!(renderer.screen(&nav), renderer.screen(&nav));
    }
}

// ============================================================================
// Properties
// ============================================================================

fn list_moves() -> impl Strategy<Value = Vec<NavEvent>> {
    prop::collection::vec(
        prop_oneof![Just(NavEvent::MoveUp), Just(NavEvent::MoveDown)],
        0..64,
    )
}

proptest! {
    #[test]
    fn prop_domain_index_stays_in_range(moves in list_moves()) {
        let mut nav = Navigator::new(math_and_biology());
        let domains = nav.registry().domain_count();
        for event in moves {
            nav.handle_event(event).unwrap();
            prop_assert!(nav.state().selected_domain_index() < domains);
        }
    }

    #[test]
    fn prop_calculator_index_stays_in_range(moves in list_moves()) {
        let mut nav = Navigator::new(math_and_biology());
        nav.handle_event(NavEvent::Confirm).unwrap();
        let calculators = nav.registry().calculator_count(0);
        for event in moves {
            nav.handle_event(event).unwrap();
            prop_assert!(nav.state().selected_calculator_index() < calculators);
        }
    }

    #[test]
    fn prop_focus_wraps_with_period_n_plus_one(n in 0usize..8, start in 0usize..9) {
        let mut nav = Navigator::new(n_fields(n));
        send(&mut nav, [NavEvent::Confirm, NavEvent::Confirm]);
        for _ in 0..(start % (n + 1)) {
            nav.handle_event(NavEvent::FocusForward).unwrap();
        }

        let origin = nav.state().focus_index();
        for _ in 0..=n {
            nav.handle_event(NavEvent::FocusForward).unwrap();
            let fields = nav.state().fields();
            let expected = usize::from(!fields.is_submit_focused());
            prop_assert_eq!(fields.focused_count(), expected);
        }
        prop_assert_eq!(nav.state().focus_index(), origin);
    }

    #[test]
    fn prop_entering_calculator_builds_fields_in_declared_order(n in 0usize..8) {
        let mut nav = Navigator::new(n_fields(n));
        send(&mut nav, [NavEvent::Confirm, NavEvent::Confirm]);
        let specs = nav.active_calculator().unwrap().fields.clone();
        let built: Vec<_> = nav.state().fields().fields().iter().map(|f| *f.spec()).collect();
        prop_assert_eq!(built, specs);
    }
}
