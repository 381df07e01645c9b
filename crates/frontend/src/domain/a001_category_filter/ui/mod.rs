//! Category filter UI
//!
//! - view_model.rs: selection signal and commands
//! - view.rs: buttons and blocks

mod view;
mod view_model;

pub use view::{button_class, CategoryFilter};
pub use view_model::CategoryFilterVm;
