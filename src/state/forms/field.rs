//! Form field value objects

/// Stable identifier for a contact form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Message,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Email,
        FieldId::Message,
    ];

    /// Display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Phone => "Phone",
            FieldId::Email => "Email (optional)",
            FieldId::Message => "Message",
        }
    }

    /// Stable key for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Phone => "phone",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

/// A single form field: its live value plus its error-display state
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    /// Current inline error; `None` means the field displays as valid
    pub error: Option<String>,
    pub is_multiline: bool,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            error: None,
            is_multiline: matches!(id, FieldId::Message),
        }
    }

    /// The value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value and its error display
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Set or clear the inline error display
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Clear only the error display, leaving the value untouched
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
