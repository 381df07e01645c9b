pub mod modal;
pub mod page_config;

pub use modal::ModalState;
pub use page_config::{CategoryBlock, CategoryConfig, PageConfig};
