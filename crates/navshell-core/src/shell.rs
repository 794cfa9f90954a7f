//! Root-owned shell state: theme mode and sidebar expansion.

use crate::catalog::IconId;
use crate::layout::ControlSpec;
use crate::style::{StyleFlags, Surface, VisualProps, style_for};
use crate::theme::ThemeMode;

/// Global visual state held at the application root.
///
/// Children receive these values read-only; the two toggle operations are
/// the only writers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    theme: ThemeMode,
    sidebar_open: bool,
}

impl ShellState {
    /// Light theme, collapsed sidebar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Flips the theme and returns the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme.toggle();
        self.theme
    }

    /// Inverts the sidebar flag and returns the new value.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    /// Theme toggle: label and icon name the mode a click switches to.
    pub fn theme_control(&self) -> ControlView {
        ControlView::new(
            ControlSpec::theme_toggle(),
            self.theme.toggle_icon(),
            Some(self.theme.toggle_label()),
            self.theme,
        )
    }

    /// Sidebar toggle: positioned against the sidebar edge, arrow pointing
    /// in the direction a click moves it.
    pub fn sidebar_control(&self) -> ControlView {
        let icon = if self.sidebar_open {
            IconId::AngleLeft
        } else {
            IconId::AngleRight
        };
        ControlView::new(
            ControlSpec::sidebar_toggle(self.sidebar_open),
            icon,
            None,
            self.theme,
        )
    }
}

/// Renderable description of a floating toggle control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlView {
    pub spec: ControlSpec,
    pub icon: IconId,
    pub label: Option<&'static str>,
    /// Theme colors merged with placement and shape
    pub visuals: VisualProps,
}

impl ControlView {
    fn new(spec: ControlSpec, icon: IconId, label: Option<&'static str>, theme: ThemeMode) -> Self {
        let visuals = style_for(Surface::ToggleButton, theme, StyleFlags::default())
            .merge(spec.visual_props());
        Self {
            spec,
            icon,
            label,
            visuals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Anchor;

    #[test]
    fn test_initial_state() {
        let shell = ShellState::new();
        assert_eq!(shell.theme(), ThemeMode::Light);
        assert!(!shell.sidebar_open());
    }

    #[test]
    fn test_toggle_theme_updates_control() {
        let mut shell = ShellState::new();
        assert_eq!(shell.toggle_theme(), ThemeMode::Dark);

        let control = shell.theme_control();
        assert_eq!(control.label, Some("Light Mode"));
        assert_eq!(control.icon, IconId::Sun);
        assert_eq!(
            control.visuals.get("background"),
            Some("var(--color-button-background-dark-default)")
        );
    }

    #[test]
    fn test_toggle_sidebar_moves_control() {
        let mut shell = ShellState::new();
        let collapsed = shell.sidebar_control();
        assert_eq!(collapsed.spec.anchor, Anchor::Left(80));
        assert_eq!(collapsed.icon, IconId::AngleRight);
        assert_eq!(collapsed.label, None);

        assert!(shell.toggle_sidebar());
        let expanded = shell.sidebar_control();
        assert_eq!(expanded.spec.anchor, Anchor::Left(260));
        assert_eq!(expanded.visuals.get("left"), Some("260px"));
        assert_eq!(expanded.icon, IconId::AngleLeft);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut shell = ShellState::new();
        shell.toggle_sidebar();
        assert_eq!(shell.theme(), ThemeMode::Light);
        shell.toggle_theme();
        assert!(shell.sidebar_open());
        assert_eq!(shell.theme_control().spec, ControlSpec::theme_toggle());
    }
}
