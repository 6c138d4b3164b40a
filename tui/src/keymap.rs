//! Key Bindings
//!
//! Translates crossterm key events into core [`NavEvent`]s. The mapping
//! depends on the stage: letters navigate lists but are typed into fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use labcalc_core::{NavEvent, Stage, TextEdit};

/// Map one key press to a navigation event, if it means anything here
#[must_use]
pub fn map_key(stage: Stage, key: KeyEvent) -> Option<NavEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Hard quit works everywhere, including mid-entry
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(NavEvent::Quit);
    }

    match stage {
        Stage::DomainSelect | Stage::CalculatorSelect => list_key(stage, key),
        Stage::ArgumentEntry => entry_key(key, ctrl),
        Stage::Result => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
                Some(NavEvent::Back)
            }
            KeyCode::Char('q') => Some(NavEvent::Quit),
            _ => None,
        },
        Stage::Quitting => None,
    }
}

fn list_key(stage: Stage, key: KeyEvent) -> Option<NavEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(NavEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(NavEvent::MoveDown),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(NavEvent::Confirm),
        KeyCode::Char('q') => Some(NavEvent::Quit),
        KeyCode::Esc if stage == Stage::DomainSelect => Some(NavEvent::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            Some(NavEvent::Back)
        }
        _ => None,
    }
}

fn entry_key(key: KeyEvent, ctrl: bool) -> Option<NavEvent> {
    match key.code {
        KeyCode::Tab | KeyCode::Down => Some(NavEvent::FocusForward),
        KeyCode::BackTab | KeyCode::Up => Some(NavEvent::FocusBackward),
        KeyCode::Enter => Some(NavEvent::Confirm),
        KeyCode::Esc => Some(NavEvent::Back),
        KeyCode::Backspace => Some(NavEvent::Edit(TextEdit::Backspace)),
        KeyCode::Char('u') if ctrl => Some(NavEvent::Edit(TextEdit::Clear)),
        KeyCode::Char(c) if !ctrl => Some(NavEvent::char(c)),
        _ => None,
    }
}

/// Help line for the status bar
#[must_use]
pub fn hint(stage: Stage) -> Option<&'static str> {
    match stage {
        Stage::DomainSelect => Some("↑/↓ move · enter select · q quit"),
        Stage::CalculatorSelect => Some("↑/↓ move · enter select · esc back · q quit"),
        Stage::ArgumentEntry => Some("tab/↓ next · shift+tab/↑ previous · enter submit · esc back"),
        Stage::Result => Some("enter/esc back · q quit"),
        Stage::Quitting => None,
    }
}
