//! In-progress create-form state.
//!
//! A form is an ordered list of named text fields with defaults. The app
//! owns one per entity page; submission reads the values, posts through the
//! API client, and on success resets the form and hides it.

/// A single text field within a [`FormState`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Stable key used when collecting submitted values
    pub name: &'static str,
    /// Human-facing label rendered next to the input
    pub label: &'static str,
    /// Current in-progress text
    pub value: String,
    /// Value restored on reset
    pub default: &'static str,
    /// Required fields must be non-empty before submission
    pub required: bool,
}

impl FormField {
    fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            default: "",
            required: true,
        }
    }

    fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self.value = default.to_string();
        self
    }
}

/// Ordered named fields plus focus tracking for a create form.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FormField>,
    focus: usize,
    visible: bool,
}

impl FormState {
    /// Fields for creating a book. Copy count defaults to one.
    pub fn book() -> Self {
        Self::with_fields(vec![
            FormField::new("title", "Title"),
            FormField::new("author", "Author"),
            FormField::new("isbn", "ISBN"),
            FormField::new("category", "Category"),
            FormField::new("total_copies", "Total copies").with_default("1"),
        ])
    }

    /// Fields for registering a member.
    pub fn member() -> Self {
        Self::with_fields(vec![
            FormField::new("name", "Name"),
            FormField::new("email", "Email"),
            FormField::new("phone", "Phone"),
        ])
    }

    fn with_fields(fields: Vec<FormField>) -> Self {
        debug_assert!(!fields.is_empty());
        Self {
            fields,
            focus: 0,
            visible: false,
        }
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Current value of a field by name; empty string for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Whether the form is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show the form with focus on the first field.
    pub fn open(&mut self) {
        self.visible = true;
        self.focus = 0;
    }

    /// Hide the form, keeping in-progress values.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Append a character to the focused field.
    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    /// Remove the last character from the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Whether every required field is non-blank.
    pub fn is_complete(&self) -> bool {
        self.fields
            .iter()
            .all(|f| !f.required || !f.value.trim().is_empty())
    }

    /// Restore every field to its default and refocus the first field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.to_string();
        }
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_form_defaults() {
        let form = FormState::book();
        assert_eq!(form.value("title"), "");
        assert_eq!(form.value("total_copies"), "1");
        assert!(!form.visible());
        assert!(!form.is_complete());
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut form = FormState::member();
        form.open();
        form.type_char('A');
        form.type_char('n');
        form.type_char('n');
        assert_eq!(form.value("name"), "Ann");

        form.backspace();
        assert_eq!(form.value("name"), "An");
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = FormState::member();
        form.open();
        assert_eq!(form.focus(), 0);

        form.focus_prev();
        assert_eq!(form.focus(), 2);
        form.focus_next();
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_is_complete_requires_all_fields() {
        let mut form = FormState::member();
        form.open();
        form.type_char('a');
        form.focus_next();
        form.type_char('b');
        assert!(!form.is_complete());

        form.focus_next();
        form.type_char('c');
        assert!(form.is_complete());
    }

    #[test]
    fn test_whitespace_only_is_incomplete() {
        let mut form = FormState::member();
        form.open();
        form.type_char(' ');
        form.focus_next();
        form.type_char('b');
        form.focus_next();
        form.type_char('c');
        assert!(!form.is_complete());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::book();
        form.open();
        form.type_char('x');
        // Walk to total_copies and change it
        for _ in 0..4 {
            form.focus_next();
        }
        form.backspace();
        form.type_char('7');
        assert_eq!(form.value("total_copies"), "7");

        form.reset();
        assert_eq!(form.value("title"), "");
        assert_eq!(form.value("total_copies"), "1");
        assert_eq!(form.focus(), 0);
    }

    #[test]
    fn test_failed_submit_leaves_values_intact() {
        // The app only calls reset() on success; values survive otherwise
        let mut form = FormState::member();
        form.open();
        form.type_char('A');
        form.close();
        assert_eq!(form.value("name"), "A");
    }
}
