//! Render Façade
//!
//! Projects the navigator's state into a [`Screen`]: a title, an ordered list
//! of lines tagged with an [`Emphasis`], and an optional hint. `Screen`
//! implements `Display`, which is the plain-text form of the view.
//!
//! Rendering is a pure function of the navigator and the [`RenderStyle`] the
//! renderer was built with. Colours, borders and layout belong to the
//! surface, which maps each `Emphasis` to its own styling.

use std::fmt;

use serde::Deserialize;

use crate::navigator::{Navigator, Stage};

/// Stage-specific help text supplied by the surface (it owns the key bindings)
pub type HintFn = fn(Stage) -> Option<&'static str>;

/// Immutable textual style for the façade
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    /// Prefix of the highlighted item or focused field
    pub selected_marker: String,
    /// Prefix of every other item
    pub idle_marker: String,
    /// Text of the submit affordance
    pub submit_label: String,
    /// Appended to the focused field's value
    pub cursor: String,
    /// Decimals shown in results
    pub precision: usize,
    /// Whether hints are included
    pub show_hints: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            selected_marker: "> ".to_string(),
            idle_marker: "  ".to_string(),
            submit_label: "Submit".to_string(),
            cursor: "_".to_string(),
            precision: crate::registry::DEFAULT_PRECISION,
            show_hints: true,
        }
    }
}

/// How a line should stand out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Unremarkable
    Normal,
    /// Current list selection or focused field
    Selected,
    /// Submit affordance without focus
    Submit,
    /// Submit affordance with focus
    SubmitSelected,
    /// Secondary information (e.g. accepted variants)
    Detail,
    /// Successful result
    Success,
    /// User-facing error
    Error,
}

/// One rendered line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLine {
    /// Text, markers included
    pub text: String,
    /// Emphasis for the surface
    pub emphasis: Emphasis,
}

impl ScreenLine {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

/// The view of one stage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    /// Stage the screen was rendered from
    pub stage: Stage,
    /// Heading
    pub title: String,
    /// Body lines in display order
    pub lines: Vec<ScreenLine>,
    /// Help text, if enabled and available
    pub hint: Option<String>,
}

impl Screen {
    /// The line tagged as the current selection, if any
    #[must_use]
    pub fn selected_line(&self) -> Option<&ScreenLine> {
        self.lines
            .iter()
            .find(|l| matches!(l.emphasis, Emphasis::Selected | Emphasis::SubmitSelected))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        if let Some(hint) = &self.hint {
            writeln!(f)?;
            writeln!(f, "{hint}")?;
        }
        Ok(())
    }
}

/// Builds screens from navigator state
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    style: RenderStyle,
    hints: Option<HintFn>,
}

impl Renderer {
    /// A renderer with the given style and no hints
    #[must_use]
    pub fn new(style: RenderStyle) -> Self {
        Self { style, hints: None }
    }

    /// Attach the surface's hint table
    #[must_use]
    pub fn with_hints(mut self, hints: HintFn) -> Self {
        self.hints = Some(hints);
        self
    }

    /// The style this renderer was built with
    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Render the current stage as plain text
    #[must_use]
    pub fn render(&self, navigator: &Navigator) -> String {
        self.screen(navigator).to_string()
    }

    /// Render the current stage as a structured screen
    #[must_use]
    pub fn screen(&self, navigator: &Navigator) -> Screen {
        let stage = navigator.stage();
        let (title, lines) = match stage {
            Stage::DomainSelect => self.domain_list(navigator),
            Stage::CalculatorSelect => self.calculator_list(navigator),
            Stage::ArgumentEntry => self.argument_form(navigator),
            Stage::Result => self.outcome(navigator),
            Stage::Quitting => ("Goodbye".to_string(), Vec::new()),
        };

        let hint = if self.style.show_hints {
            self.hints.and_then(|hints| hints(stage)).map(str::to_string)
        } else {
            None
        };

        Screen {
            stage,
            title,
            lines,
            hint,
        }
    }

    fn item(&self, text: &str, selected: bool) -> ScreenLine {
        if selected {
            ScreenLine::new(
                format!("{}{text}", self.style.selected_marker),
                Emphasis::Selected,
            )
        } else {
            ScreenLine::new(format!("{}{text}", self.style.idle_marker), Emphasis::Normal)
        }
    }

    fn domain_list(&self, navigator: &Navigator) -> (String, Vec<ScreenLine>) {
        let selected = navigator.state().selected_domain_index();
        let lines = navigator
            .registry()
            .domains()
            .iter()
            .enumerate()
            .map(|(i, domain)| self.item(domain.name, i == selected))
            .collect();
        ("Select a domain".to_string(), lines)
    }

    fn calculator_list(&self, navigator: &Navigator) -> (String, Vec<ScreenLine>) {
        let state = navigator.state();
        let domain_index = state.selected_domain_index();
        let selected = state.selected_calculator_index();

        let title = navigator
            .registry()
            .domain(domain_index)
            .map_or_else(
                || "Choose a formula".to_string(),
                |domain| format!("Choose a {} formula", domain.name),
            );
        let lines = navigator
            .registry()
            .calculators_in(domain_index)
            .enumerate()
            .map(|(i, calculator)| self.item(calculator.name, i == selected))
            .collect();
        (title, lines)
    }

    fn argument_form(&self, navigator: &Navigator) -> (String, Vec<ScreenLine>) {
        let fields = navigator.state().fields();
        let mut lines = Vec::with_capacity(fields.len() + 2);

        for field in fields.fields() {
            let spec = field.spec();
            let optional = if spec.required { "" } else { " (optional)" };
            let cursor = if field.is_focused() {
                self.style.cursor.as_str()
            } else {
                ""
            };
            let text = format!("{}{optional}: {}{cursor}", spec.label, field.value());
            lines.push(self.item(&text, field.is_focused()));

            if field.is_focused() && !spec.variants().is_empty() {
                lines.push(ScreenLine::new(
                    format!(
                        "{}  one of: {}",
                        self.style.idle_marker,
                        spec.variants().join(" | ")
                    ),
                    Emphasis::Detail,
                ));
            }
        }

        let submit_focused = fields.is_submit_focused();
        let mut submit = format!(
            "{}[ {} ]",
            if submit_focused {
                &self.style.selected_marker
            } else {
                &self.style.idle_marker
            },
            self.style.submit_label
        );
        if !fields.all_required_filled() {
            submit.push_str("  (required fields are empty)");
        }
        lines.push(ScreenLine::new(
            submit,
            if submit_focused {
                Emphasis::SubmitSelected
            } else {
                Emphasis::Submit
            },
        ));

        (self.calculator_title(navigator), lines)
    }

    fn outcome(&self, navigator: &Navigator) -> (String, Vec<ScreenLine>) {
        let state = navigator.state();
        let line = match (state.last_error(), state.last_result()) {
            (Some(err), _) => ScreenLine::new(format!("Error: {err}"), Emphasis::Error),
            (None, Some(measurement)) => ScreenLine::new(
                format!("{:.*}", self.style.precision, measurement),
                Emphasis::Success,
            ),
            (None, None) => ScreenLine::new("No result", Emphasis::Normal),
        };
        (self.calculator_title(navigator), vec![line])
    }

    fn calculator_title(&self, navigator: &Navigator) -> String {
        navigator
            .active_calculator()
            .map_or_else(|| "Calculator".to_string(), |c| c.name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NavEvent;
    use crate::registry::Registry;
    use pretty_assertions::assert_eq;

    fn hints(stage: Stage) -> Option<&'static str> {
        match stage {
            Stage::DomainSelect => Some("pick one"),
            _ => None,
        }
    }

    fn navigator() -> Navigator {
        Navigator::new(Registry::builtin().unwrap())
    }

    #[test]
    fn test_domain_list_marks_selection() {
        let mut nav = navigator();
        nav.handle_event(NavEvent::MoveDown).unwrap();
        let text = Renderer::default().render(&nav);
        assert_eq!(
            text,
            "Select a domain\n\n  Math\n> Physics\n  Biology\n"
        );
    }

    #[test]
    fn test_hints_follow_style_toggle() {
        let nav = navigator();
        let with = Renderer::default().with_hints(hints).screen(&nav);
        assert_eq!(with.hint.as_deref(), Some("pick one"));

        let style = RenderStyle {
            show_hints: false,
            ..RenderStyle::default()
        };
        let without = Renderer::new(style).with_hints(hints).screen(&nav);
        assert_eq!(without.hint, None);
    }

    #[test]
    fn test_argument_form_shows_focus_variants_and_submit() {
        let mut nav = navigator();
        for event in [
            NavEvent::MoveDown,
            NavEvent::MoveDown,
            NavEvent::Confirm,
            NavEvent::Confirm,
        ] {
            nav.handle_event(event).unwrap();
        }
        let screen = Renderer::default().screen(&nav);
        assert_eq!(screen.title, "DNA Concentration");
        assert_eq!(
            screen.selected_line().map(|l| l.text.as_str()),
            Some("> Sample Type: _")
        );
        assert_eq!(screen.lines[1].emphasis, Emphasis::Detail);
        assert!(screen.lines[1].text.contains("Single Stranded DNA | Double Stranded DNA | RNA"));

        let submit = screen.lines.last().unwrap();
        assert_eq!(submit.emphasis, Emphasis::Submit);
        assert!(submit.text.ends_with("(required fields are empty)"));
    }

    #[test]
    fn test_focused_submit_is_distinguished() {
        let mut nav = navigator();
        for event in [NavEvent::Confirm, NavEvent::MoveDown, NavEvent::Confirm] {
            nav.handle_event(event).unwrap();
        }
        for event in NavEvent::typed("0.125") {
            nav.handle_event(event).unwrap();
        }
        nav.handle_event(NavEvent::FocusForward).unwrap();

        let screen = Renderer::default().screen(&nav);
        let submit = screen.selected_line().unwrap();
        assert_eq!(submit.text, "> [ Submit ]");
        assert_eq!(submit.emphasis, Emphasis::SubmitSelected);
    }

    #[test]
    fn test_result_uses_configured_precision() {
        let mut nav = navigator();
        for event in [NavEvent::Confirm, NavEvent::MoveDown, NavEvent::Confirm] {
            nav.handle_event(event).unwrap();
        }
        for event in NavEvent::typed("0.125") {
            nav.handle_event(event).unwrap();
        }
        nav.handle_event(NavEvent::FocusForward).unwrap();
        nav.handle_event(NavEvent::Confirm).unwrap();

        let style = RenderStyle {
            precision: 1,
            ..RenderStyle::default()
        };
        let screen = Renderer::new(style).screen(&nav);
        assert_eq!(screen.title, "Decimal to Percent");
        assert_eq!(screen.lines[0].text, "Percent: 12.5%");
        assert_eq!(screen.lines[0].emphasis, Emphasis::Success);
    }
}
