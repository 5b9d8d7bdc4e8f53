//! Form state management

mod field;
mod form_state;
pub mod validation;

pub use field::{FieldId, FormField};
pub use form_state::{ContactForm, FormSnapshot, BUTTONS_ROW_INDEX};
