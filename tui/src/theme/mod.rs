//! Theme and Colors
//!
//! labcalc's palette, plus the [`Theme`] that maps each render
//! [`Emphasis`] to a ratatui style. A theme is built once at startup and
//! never changes while the app runs.

use labcalc_core::Emphasis;
use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Accent teal (selection, titles)
pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);

/// Regular text
pub const TEXT: Color = Color::Rgb(220, 220, 220);

/// System/dim text
pub const DIM_GRAY: Color = Color::Rgb(110, 110, 110);

/// Submit button
pub const SUBMIT_AMBER: Color = Color::Rgb(255, 200, 100);

/// Error red
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Success green
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

// ============================================================================
// Theme
// ============================================================================

/// Colours used by the view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Titles and the current selection
    pub accent: Color,
    /// Unremarkable lines
    pub text: Color,
    /// Borders, details and hints
    pub dim: Color,
    /// Submit affordance
    pub submit: Color,
    /// Results
    pub success: Color,
    /// User-facing errors
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT_TEAL,
            text: TEXT,
            dim: DIM_GRAY,
            submit: SUBMIT_AMBER,
            success: SUCCESS_GREEN,
            error: ERROR_RED,
        }
    }
}

impl Theme {
    /// Style for a body line
    #[must_use]
    pub fn style_for(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Normal => Style::default().fg(self.text),
            Emphasis::Selected => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            Emphasis::Submit => Style::default().fg(self.submit),
            Emphasis::SubmitSelected => Style::default()
                .fg(self.submit)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            Emphasis::Detail => Style::default().fg(self.dim),
            Emphasis::Success => Style::default()
                .fg(self.success)
                .add_modifier(Modifier::BOLD),
            Emphasis::Error => Style::default().fg(self.error),
        }
    }

    /// Style for the frame title
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders and the hint bar
    #[must_use]
    pub fn chrome(&self) -> Style {
        Style::default().fg(self.dim)
    }
}
