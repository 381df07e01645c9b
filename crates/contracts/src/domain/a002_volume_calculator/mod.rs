//! Volume calculator: validation of the three dimension inputs and the
//! computed filler volume.

pub mod field;
pub mod form;
pub mod format;
pub mod parse;

pub use field::{FieldId, FieldState, ValidationError};
pub use form::{CalculatorForm, FieldInput, SubmitOutcome, Volume};
pub use format::{format_volume, result_message};
