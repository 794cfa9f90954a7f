//! Single-page application shell: collapsible navigation sidebar plus theme
//! and sidebar toggle controls, rendered with Leptos.
//!
//! State machines live in [`navshell_core`]; this crate wires them into
//! reactive signals and components.

mod app;
pub mod components;
pub mod config;

pub use app::{App, AppContext};
