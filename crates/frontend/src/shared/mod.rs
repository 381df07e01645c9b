pub mod focus;
pub mod icons;
pub mod modal;
