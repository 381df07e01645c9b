//! Volume calculator UI
//!
//! - view_model.rs: form signal, input refs and the submit command
//! - field_input.rs: one dimension input with its error slot
//! - view.rs: the form

mod field_input;
mod view;
mod view_model;

pub use view::VolumeCalculator;
pub use view_model::VolumeCalculatorVm;
