//! Pure per-field validators for the contact form
//!
//! Each validator maps a field's raw text to `None` (valid) or a
//! human-readable error message. Validators never touch display state;
//! the whole-form check in `ContactForm::validate` owns that.

/// Phone numbers must carry this many digits after stripping formatting.
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

pub const EMAIL_MAX_CHARS: usize = 100;

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Validate the name field.
///
/// Trimmed length must be in [2, 50] and every character must be a letter
/// (any script), whitespace, or a hyphen. Lengths are counted in characters,
/// not bytes, so Cyrillic or accented names are measured correctly.
pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if len < NAME_MIN_CHARS {
        return Some(format!(
            "Name must be at least {NAME_MIN_CHARS} characters"
        ));
    }
    if len > NAME_MAX_CHARS {
        return Some(format!("Name is too long (max {NAME_MAX_CHARS} characters)"));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-')
    {
        return Some("Name may only contain letters, spaces, and hyphens".to_string());
    }
    None
}

/// Validate the phone field.
///
/// Required. Formatting characters are ignored: only the digit count matters,
/// and it must be in [10, 15].
pub fn validate_phone(phone: &str) -> Option<String> {
    if phone.trim().is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < PHONE_MIN_DIGITS {
        return Some(format!(
            "Phone number must contain at least {PHONE_MIN_DIGITS} digits"
        ));
    }
    if digits > PHONE_MAX_DIGITS {
        return Some("Phone number is too long".to_string());
    }
    None
}

/// Validate the email field.
///
/// Optional: empty input is valid. Non-empty input must look like
/// `local@domain.tld` and be at most 100 characters.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().count() > EMAIL_MAX_CHARS {
        return Some(format!("Email is too long (max {EMAIL_MAX_CHARS} characters)"));
    }
    if !has_email_shape(trimmed) {
        return Some("Enter a valid email address".to_string());
    }
    None
}

/// Simple `local@domain.tld` shape check: exactly one `@`, non-empty local
/// part, and a domain whose dot-separated labels are all non-empty. No
/// whitespace anywhere.
fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Validate the message field.
///
/// Trimmed length must be in [10, 1000] characters.
pub fn validate_message(message: &str) -> Option<String> {
    let len = message.trim().chars().count();
    if len < MESSAGE_MIN_CHARS {
        return Some(format!(
            "Message must be at least {MESSAGE_MIN_CHARS} characters"
        ));
    }
    if len > MESSAGE_MAX_CHARS {
        return Some(format!(
            "Message is too long (max {MESSAGE_MAX_CHARS} characters)"
        ));
    }
    None
}
