//! Application configuration.
//!
//! Compile-time constants for branding and presentation. Layout dimensions
//! live in [`navshell_core::layout`] because state projections depend on them.

// =============================================================================
// Application Metadata
// =============================================================================

/// Wordmark shown next to the logo in the sidebar header.
pub const APP_NAME: &str = "TensorFlow";

/// Logo image, relative to the served `index.html`.
pub const LOGO_SRC: &str = "assets/logo.svg";

/// Alternative text of the logo image.
pub const LOGO_ALT: &str = "TensorFlow logo";

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Solid glyphs closest to the original icon set (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
