//! UI components built with Leptos.
//!
//! - [`icons`] - Icon vocabulary mapped onto the configured icon set
//! - [`toggle`] - Floating toggle control shared by both toggles
//! - [`sidebar`] - Navigation sidebar with primary and secondary lists

pub mod icons;
pub mod sidebar;
pub mod toggle;

pub use sidebar::Navigation;
pub use toggle::ToggleButton;
