//! Contact form state: fields, navigation, whole-form validation, snapshot

use super::field::{FieldId, FormField};
use super::validation;
use serde::Serialize;
use tracing::debug;

/// Index of the submit-button row in the field navigation order
pub const BUTTONS_ROW_INDEX: usize = 4;

/// Immutable copy of all field values taken at submit time.
///
/// Values are trimmed at capture; the struct has no mutators and is handed
/// to the delivery backend as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// The contact form: four fields plus the submit-button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub message: FormField,
    /// 0..=3 are fields, 4 is the buttons row
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldId::Name),
            phone: FormField::new(FieldId::Phone),
            email: FormField::new(FieldId::Email),
            message: FormField::new(FieldId::Message),
            active_field_index: 0,
        }
    }

    /// Total navigation slots: four fields plus the buttons row
    pub fn field_count(&self) -> usize {
        5
    }

    /// Returns true if the submit-button row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
            FieldId::Message => &mut self.message,
        }
    }

    /// The currently active field, or `None` on the buttons row
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.phone),
            2 => Some(&mut self.email),
            3 => Some(&mut self.message),
            _ => None,
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        match self.active_field_index {
            3 => self.message.is_multiline,
            _ => false,
        }
    }

    /// Whole-form check.
    ///
    /// Runs the matching validator for every field and stores the result as
    /// that field's error-display state. Every call fully resynchronizes all
    /// four displays regardless of prior state. Returns the AND of the four
    /// fields being valid.
    pub fn validate(&mut self) -> bool {
        let mut all_valid = true;
        for id in FieldId::ALL {
            let error = match id {
                FieldId::Name => validation::validate_name(&self.name.value),
                FieldId::Phone => validation::validate_phone(&self.phone.value),
                FieldId::Email => validation::validate_email(&self.email.value),
                FieldId::Message => validation::validate_message(&self.message.value),
            };
            if let Some(message) = &error {
                debug!(field = id.as_str(), %message, "field failed validation");
            }
            all_valid &= error.is_none();
            self.field_mut(id).set_error(error);
        }
        all_valid
    }

    /// Optimistic clear of only the active field's error, used on keystrokes.
    /// Does not re-validate; blur or submit provides the authoritative pass.
    pub fn clear_active_field_error(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.clear_error();
        }
    }

    /// Capture the four trimmed values at one instant
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.trimmed().to_string(),
            phone: self.phone.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            message: self.message.trimmed().to_string(),
        }
    }

    /// Empty all values and clear all error displays
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
        self.message.clear();
        self.active_field_index = 0;
    }

    pub fn has_any_error(&self) -> bool {
        FieldId::ALL.iter().any(|id| self.field(*id).has_error())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_valid_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.value = "Jo".to_string();
        form.phone.value = "1234567890".to_string();
        form.email.value = String::new();
        form.message.value = "1234567890".to_string();
        form
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_first_field() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert!(!form.is_buttons_row_active());
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = ContactForm::new();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons_row() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, BUTTONS_ROW_INDEX);
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_active_field_mut_on_buttons_row_is_none() {
            let mut form = ContactForm::new();
            form.active_field_index = BUTTONS_ROW_INDEX;
            assert!(form.active_field_mut().is_none());
        }

        #[test]
        fn test_active_field_order() {
            let mut form = ContactForm::new();
            let expected = [FieldId::Name, FieldId::Phone, FieldId::Email, FieldId::Message];
            for id in expected {
                assert_eq!(form.active_field_mut().unwrap().id, id);
                form.next_field();
            }
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_only_message_is_multiline() {
            let mut form = ContactForm::new();
            assert!(!form.is_active_field_multiline());
            form.active_field_index = 3;
            assert!(form.is_active_field_multiline());
        }
    }

    mod whole_form_validation {
        use super::*;

        #[test]
        fn test_all_valid_returns_true_and_clears_errors() {
            let mut form = filled_valid_form();
            assert!(form.validate());
            assert!(!form.has_any_error());
        }

        #[test]
        fn test_empty_optional_email_is_valid() {
            let mut form = filled_valid_form();
            form.email.value = String::new();
            assert!(form.validate());
            assert!(!form.email.has_error());
        }

        #[test]
        fn test_all_invalid_marks_every_field() {
            let mut form = ContactForm::new();
            form.name.value = "J".to_string();
            form.phone.value = "123".to_string();
            form.email.value = "bad".to_string();
            form.message.value = "short".to_string();

            assert!(!form.validate());
            for id in FieldId::ALL {
                assert!(form.field(id).has_error(), "{} should be errored", id.as_str());
            }
        }

        #[test]
        fn test_single_failing_field_fails_form() {
            let mut form = filled_valid_form();
            form.phone.value = "123".to_string();
            assert!(!form.validate());
            assert!(form.phone.has_error());
            assert!(!form.name.has_error());
        }

        #[test]
        fn test_every_call_resynchronizes_all_displays() {
            let mut form = ContactForm::new();
            form.name.value = "J".to_string();
            form.phone.value = "1234567890".to_string();
            form.message.value = "1234567890".to_string();
            assert!(!form.validate());
            assert!(form.name.has_error());

            // Fix the name, break the phone: both displays must flip
            form.name.value = "Jo".to_string();
            form.phone.value = "123".to_string();
            assert!(!form.validate());
            assert!(!form.name.has_error());
            assert!(form.phone.has_error());
        }

        #[test]
        fn test_stale_error_cleared_even_without_edits() {
            let mut form = filled_valid_form();
            // Error display set out of band (e.g. left over from a prior pass)
            form.name.set_error(Some("stale".to_string()));
            assert!(form.validate());
            assert!(!form.name.has_error());
        }

        #[test]
        fn test_clear_active_field_error_touches_only_that_field() {
            let mut form = ContactForm::new();
            form.validate();
            assert!(form.name.has_error());
            assert!(form.phone.has_error());

            form.active_field_index = 0;
            form.clear_active_field_error();
            assert!(!form.name.has_error());
            assert!(form.phone.has_error());
        }

        #[test]
        fn test_clear_active_field_error_on_buttons_row_is_noop() {
            let mut form = ContactForm::new();
            form.validate();
            form.active_field_index = BUTTONS_ROW_INDEX;
            form.clear_active_field_error();
            assert!(form.name.has_error());
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn test_snapshot_trims_values() {
            let mut form = filled_valid_form();
            form.name.value = "  Jo  ".to_string();
            form.message.value = " 1234567890 ".to_string();
            let snapshot = form.snapshot();
            assert_eq!(snapshot.name, "Jo");
            assert_eq!(snapshot.message, "1234567890");
        }

        #[test]
        fn test_snapshot_is_detached_from_form() {
            let mut form = filled_valid_form();
            let snapshot = form.snapshot();
            form.name.value = "Changed".to_string();
            assert_eq!(snapshot.name, "Jo");
        }

        #[test]
        fn test_snapshot_serializes_for_payload_log() {
            let snapshot = filled_valid_form().snapshot();
            let json = serde_json::to_string(&snapshot).unwrap();
            assert!(json.contains("\"phone\":\"1234567890\""));
        }
    }

    mod clear {
        use super::*;

        #[test]
        fn test_clear_resets_values_errors_and_focus() {
            let mut form = ContactForm::new();
            form.name.value = "J".to_string();
            form.validate();
            form.active_field_index = 3;

            form.clear();
            assert_eq!(form.name.value, "");
            assert!(!form.has_any_error());
            assert_eq!(form.active_field_index, 0);
        }
    }
}
