//! Navigation Events
//!
//! Abstract input events fed to the [`Navigator`](crate::Navigator).
//!
//! The core never sees physical keys. Surfaces translate whatever their input
//! device produces into these events and deliver them one at a time.

use crate::fields::TextEdit;

/// One user intent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Previous item in a list
    MoveUp,
    /// Next item in a list
    MoveDown,
    /// Next field (or the submit action)
    FocusForward,
    /// Previous field (or the submit action)
    FocusBackward,
    /// Select / advance / submit, depending on stage
    Confirm,
    /// Leave the current stage
    Back,
    /// Terminate, honoured in every stage
    Quit,
    /// Edit the focused field's text
    Edit(TextEdit),
}

impl NavEvent {
    /// Shorthand for inserting a single character
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::Edit(TextEdit::Insert(c))
    }

    /// One insert event per character of `text`
    pub fn typed(text: &str) -> impl Iterator<Item = NavEvent> + '_ {
        text.chars().map(Self::char)
    }
}
