//! Text input widgets for the personal-info form

use std::collections::HashMap;

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::wizard::phone;
use crate::wizard::{Field, PersonalInfo, ValidationErrors};

/// Longest name or email we accept from the keyboard
pub const MAX_TEXT_LENGTH: usize = 64;

/// A single-line form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// Free text with a movable cursor (cursor is a char index)
    TextInput {
        value: String,
        cursor_pos: usize,
        placeholder: String,
        max_length: Option<usize>,
    },
    /// Digits only, re-masked as `+D DDD DDD DDD` on every keystroke
    PhoneInput { value: String, placeholder: String },
}

impl FormField {
    pub fn text(placeholder: &str, max_length: Option<usize>) -> Self {
        FormField::TextInput {
            value: String::new(),
            cursor_pos: 0,
            placeholder: placeholder.to_string(),
            max_length,
        }
    }

    pub fn phone(placeholder: &str) -> Self {
        FormField::PhoneInput {
            value: String::new(),
            placeholder: placeholder.to_string(),
        }
    }

    /// Get the current value as a string
    pub fn value(&self) -> &str {
        match self {
            FormField::TextInput { value, .. } | FormField::PhoneInput { value, .. } => value,
        }
    }

    /// Set the value from a string
    pub fn set_value(&mut self, new_value: &str) {
        match self {
            FormField::TextInput {
                value, cursor_pos, ..
            } => {
                *value = new_value.to_string();
                *cursor_pos = value.chars().count();
            }
            FormField::PhoneInput { value, .. } => {
                *value = phone::format_phone_number(new_value);
            }
        }
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self {
            FormField::TextInput {
                value,
                cursor_pos,
                max_length,
                ..
            } => {
                let len = value.chars().count();
                match key {
                    KeyCode::Char(c) => {
                        if max_length.map(|m| len < m).unwrap_or(true) {
                            let at = byte_offset(value, *cursor_pos);
                            value.insert(at, c);
                            *cursor_pos += 1;
                        }
                        true
                    }
                    KeyCode::Backspace => {
                        if *cursor_pos > 0 {
                            *cursor_pos -= 1;
                            let at = byte_offset(value, *cursor_pos);
                            value.remove(at);
                        }
                        true
                    }
                    KeyCode::Delete => {
                        if *cursor_pos < len {
                            let at = byte_offset(value, *cursor_pos);
                            value.remove(at);
                        }
                        true
                    }
                    KeyCode::Left => {
                        *cursor_pos = cursor_pos.saturating_sub(1);
                        true
                    }
                    KeyCode::Right => {
                        if *cursor_pos < len {
                            *cursor_pos += 1;
                        }
                        true
                    }
                    KeyCode::Home => {
                        *cursor_pos = 0;
                        true
                    }
                    KeyCode::End => {
                        *cursor_pos = len;
                        true
                    }
                    _ => false,
                }
            }
            FormField::PhoneInput { value, .. } => match key {
                KeyCode::Char(c) => {
                    *value = phone::push_digit(value, c);
                    true
                }
                KeyCode::Backspace => {
                    *value = phone::pop_digit(value);
                    true
                }
                _ => false,
            },
        }
    }

    /// Render the field inside a bordered box; red border when `error` is set
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, error: bool) {
        let border_color = if error {
            Color::Red
        } else if focused {
            Color::Cyan
        } else {
            Color::Gray
        };

        let (value, placeholder) = match self {
            FormField::TextInput {
                value, placeholder, ..
            }
            | FormField::PhoneInput { value, placeholder } => (value, placeholder),
        };

        let content = if value.is_empty() && !focused {
            Line::from(Span::styled(
                placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut text = value.clone();
            if focused {
                let at = match self {
                    FormField::TextInput { cursor_pos, .. } => byte_offset(value, *cursor_pos),
                    FormField::PhoneInput { .. } => value.len(),
                };
                text.insert(at, '|');
            }
            Line::from(text)
        };

        let para = Paragraph::new(content)
            .style(Style::default().fg(if focused { Color::White } else { Color::Gray }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(para, area);
    }
}

/// Byte offset of the `char_index`-th char, or the end of the string
fn byte_offset(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map_or(value.len(), |(i, _)| i)
}

/// The three personal-info inputs plus the last submission's errors
#[derive(Debug, Clone)]
pub struct PersonalInfoForm {
    fields: Vec<(Field, FormField)>,
    /// Currently focused field index
    pub focused_index: usize,
    errors: HashMap<Field, String>,
}

impl Default for PersonalInfoForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalInfoForm {
    pub fn new() -> Self {
        let fields = Field::all()
            .iter()
            .map(|field| {
                let input = match field {
                    Field::PhoneNumber => FormField::phone(field.placeholder()),
                    Field::Name | Field::Email => {
                        FormField::text(field.placeholder(), Some(MAX_TEXT_LENGTH))
                    }
                };
                (*field, input)
            })
            .collect();

        Self {
            fields,
            focused_index: 0,
            errors: HashMap::new(),
        }
    }

    /// Form pre-filled from the info the wizard accepted
    pub fn from_info(info: &PersonalInfo) -> Self {
        let mut form = Self::new();
        form.set_value(Field::Name, &info.name);
        form.set_value(Field::Email, &info.email);
        form.set_value(Field::PhoneNumber, &info.phone_number);
        form
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &FormField)> {
        self.fields.iter().map(|(f, input)| (*f, input))
    }

    /// Get the currently focused field name
    pub fn focused_field(&self) -> Field {
        self.fields
            .get(self.focused_index)
            .map_or(Field::Name, |(f, _)| *f)
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, input)| input.value())
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        if let Some((_, input)) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            input.set_value(value);
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        if self.focused_index < self.fields.len().saturating_sub(1) {
            self.focused_index += 1;
        }
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.focused_index > 0 {
            self.focused_index -= 1;
        }
    }

    /// Feed a key to the focused input; an edit clears that field's error
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let Some((field, input)) = self.fields.get_mut(self.focused_index) else {
            return false;
        };
        let field = *field;
        let before = input.value().to_string();
        let consumed = input.handle_key(key);
        if input.value() != before {
            self.errors.remove(&field);
        }
        consumed
    }

    pub fn to_personal_info(&self) -> PersonalInfo {
        PersonalInfo::new(
            self.value(Field::Name),
            self.value(Field::Email),
            self.value(Field::PhoneNumber),
        )
    }

    /// Replace shown errors and focus the first failing field
    pub fn set_errors(&mut self, errors: &ValidationErrors) {
        self.errors = errors
            .iter()
            .map(|e| (e.field, e.message.clone()))
            .collect();
        if let Some(first) = errors.iter().next() {
            if let Some(index) = self.fields.iter().position(|(f, _)| *f == first.field) {
                self.focused_index = index;
            }
        }
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
