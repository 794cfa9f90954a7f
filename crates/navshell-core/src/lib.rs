//! UI state core for the navshell application shell.
//!
//! Everything here is plain data and pure functions, so the state machines
//! can be exercised natively without a browser:
//!
//! - [`ThemeMode`] - Light/Dark visual mode
//! - [`ShellState`] - Root-owned theme and sidebar-open flags
//! - [`NavigationState`] - Active navigation item over the static catalogs
//! - [`catalog`] - The two fixed navigation catalogs
//! - [`style`] - Deterministic projection of state to CSS declarations
//! - [`layout`] - Dimensions and toggle control placement

pub mod catalog;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod shell;
pub mod style;
mod theme;

pub use catalog::{Catalog, IconId, NavEntry};
pub use error::{CoreError, Result};
pub use layout::{Anchor, ControlSpec, Shape};
pub use navigation::{NavItemView, NavigationAttempt, NavigationState, RenderedItems};
pub use shell::{ControlView, ShellState};
pub use style::{StyleFlags, Surface, VisualProps, style_for};
pub use theme::ThemeMode;
