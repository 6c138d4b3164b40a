//! Field Collector
//!
//! Runtime input fields for the calculator being filled in, plus the focus
//! ring that cycles over them.
//!
//! The ring has `len + 1` positions: one per field and a trailing submit
//! sentinel at index `len`. Every focus change rewrites all `focused` flags
//! inside a single `&mut self` call, so no caller can observe two focused
//! fields.

use crate::error::CalcError;
use crate::registry::FieldSpec;

/// Default maximum number of characters per field
pub const DEFAULT_CHAR_LIMIT: usize = 64;

/// Edit operation applied to the focused field's text buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEdit {
    /// Append a character (ignored past the character limit)
    Insert(char),
    /// Delete the last character
    Backspace,
    /// Empty the buffer
    Clear,
}

/// A field being filled in
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    spec: FieldSpec,
    value: String,
    focused: bool,
    char_limit: usize,
}

impl Field {
    /// Create an empty, unfocused field
    #[must_use]
    pub fn new(spec: FieldSpec, char_limit: usize) -> Self {
        Self {
            spec,
            value: String::new(),
            focused: false,
            char_limit,
        }
    }

    /// The `FieldSpec` this field was created from
    #[must_use]
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Current raw text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this field holds input focus
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the buffer holds anything but whitespace
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Apply an edit, returning whether the buffer changed
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) if c.is_control() => false,
            TextEdit::Insert(c) => {
                if self.value.chars().count() >= self.char_limit {
                    return false;
                }
                self.value.push(c);
                true
            }
            TextEdit::Backspace => self.value.pop().is_some(),
            TextEdit::Clear => {
                let changed = !self.value.is_empty();
                self.value.clear();
                changed
            }
        }
    }
}

/// Ordered fields plus the focus index
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSet {
    fields: Vec<Field>,
    focus: usize,
}

impl FieldSet {
    /// One empty field per spec, in spec order, with the first one focused
    #[must_use]
    pub fn from_specs(specs: &[FieldSpec], char_limit: usize) -> Self {
        let mut set = Self {
            fields: specs
                .iter()
                .map(|spec| Field::new(*spec, char_limit))
                .collect(),
            focus: 0,
        };
        set.sync_focus();
        set
    }

    /// Number of fields (the submit sentinel is not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields, in spec order
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Current focus position, in `0..=len()`
    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// Whether focus sits on the submit sentinel
    #[must_use]
    pub fn is_submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    /// The focused field, `None` on the submit sentinel
    #[must_use]
    pub fn focused(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    /// Advance focus by one, wrapping from the sentinel back to 0
    pub fn focus_next(&mut self) -> usize {
        self.focus = if self.focus >= self.fields.len() {
            0
        } else {
            self.focus + 1
        };
        self.sync_focus();
        self.focus
    }

    /// Move focus back by one, wrapping from 0 to the sentinel
    pub fn focus_previous(&mut self) -> usize {
        self.focus = match self.focus {
            0 => self.fields.len(),
            n => n - 1,
        };
        self.sync_focus();
        self.focus
    }

    /// Replace the raw text of the field at `index`
    pub fn set_value(&mut self, index: usize, raw: &str) -> Result<(), CalcError> {
        let len = self.fields.len();
        let field = self
            .fields
            .get_mut(index)
            .ok_or(CalcError::IndexOutOfRange { index, len })?;
        field.value = raw.to_string();
        Ok(())
    }

    /// Apply an edit to the focused field; no-op on the submit sentinel
    pub fn edit_focused(&mut self, edit: TextEdit) -> bool {
        self.fields
            .get_mut(self.focus)
            .is_some_and(|field| field.apply(edit))
    }

    /// Whether every required field has a value
    #[must_use]
    pub fn all_required_filled(&self) -> bool {
        self.fields
            .iter()
            .filter(|f| f.spec.required)
            .all(Field::is_filled)
    }

    /// Raw values in spec order, ready for evaluation
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    /// Number of fields currently flagged as focused
    #[must_use]
    pub fn focused_count(&self) -> usize {
        self.fields.iter().filter(|f| f.focused).count()
    }

    /// Drop every field and reset focus
    pub fn clear(&mut self) {
        self.fields.clear();
        self.focus = 0;
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == focus;
        }
    }
}
