//! Deterministic projection of UI state to visual properties.
//!
//! [`style_for`] is the single place where theme, open and active flags turn
//! into CSS declarations. Colors are references to design tokens named
//! `--color-<group>-<mode>-<state>`; the token values themselves live in the
//! stylesheet. Hover and pressed colors cannot be expressed inline, so they
//! are emitted as custom properties (`--hover-*`, `--pressed-*`) that the
//! component stylesheets read from their `:hover`/`:active` rules.

use std::fmt;

use crate::layout::{ICON_GAP, LOGO_SIZE, px, sidebar_width};
use crate::theme::ThemeMode;

/// Background of the highlighted navigation row.
pub const ACTIVE_ROW_BACKGROUND: &str = "rgba(59, 130, 246, 0.1)";

const DIVIDER_LIGHT: &str = "rgba(151, 165, 185, 0.2)";
const DIVIDER_DARK: &str = "rgba(240, 242, 255, 0.1)";

// =============================================================================
// VisualProps
// =============================================================================

/// Ordered set of CSS declarations.
///
/// Setting a property twice keeps its first position and the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisualProps {
    declarations: Vec<(&'static str, String)>,
}

impl VisualProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Merges `other` into `self`; `other` wins on conflicts.
    pub fn merge(self, other: VisualProps) -> Self {
        other
            .declarations
            .into_iter()
            .fold(self, |acc, (property, value)| acc.set(property, value))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Renders the declarations as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VisualProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Element whose appearance depends on state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Sidebar,
    Header,
    Logo,
    LogoText,
    NavItem,
    NavIcon,
    NavText,
    BottomSection,
    ToggleButton,
}

/// State flags besides the theme that affect appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleFlags {
    /// Sidebar is expanded
    pub opened: bool,
    /// Navigation row is the active item
    pub active: bool,
}

impl StyleFlags {
    pub const fn opened(opened: bool) -> Self {
        Self {
            opened,
            active: false,
        }
    }

    pub const fn with_active(self, active: bool) -> Self {
        Self { active, ..self }
    }
}

/// Projects theme and flags onto the visual properties of `surface`.
///
/// Pure: equal inputs always produce equal output.
pub fn style_for(surface: Surface, theme: ThemeMode, flags: StyleFlags) -> VisualProps {
    let props = VisualProps::new();
    match surface {
        Surface::Sidebar => props
            .set("background-color", token("sidebar-background", theme, "default"))
            .set("width", px(sidebar_width(flags.opened))),
        Surface::Header => props.set("border-bottom-color", divider(theme)),
        Surface::Logo => props
            .set("width", px(LOGO_SIZE))
            .set("height", px(LOGO_SIZE))
            .set("margin-right", gap(flags.opened)),
        Surface::LogoText => props
            .set("color", token("text-logo", theme, "default"))
            .set("opacity", opacity(flags.opened)),
        Surface::NavItem => {
            let (color, background, radius) = if flags.active {
                (token("text-logo", theme, "default"), ACTIVE_ROW_BACKGROUND.to_string(), "12px")
            } else {
                (token("text", theme, "default"), "transparent".to_string(), "0")
            };
            props
                .set("color", color)
                .set("background-color", background)
                .set("border-radius", radius)
                .set("--hover-background", token("sidebar-background", theme, "hover"))
                .set("--hover-color", token("text", theme, "hover"))
                .set("--pressed-background", token("sidebar-background", theme, "active"))
                .set("--pressed-color", token("text", theme, "active"))
        }
        Surface::NavIcon => props.set("margin-right", gap(flags.opened)),
        Surface::NavText => props
            .set("opacity", opacity(flags.opened))
            .set("font-weight", if flags.active { "600" } else { "400" }),
        Surface::BottomSection => props.set("border-top-color", divider(theme)),
        Surface::ToggleButton => props
            .set("background", token("button-background", theme, "default"))
            .set("color", token("text", theme, "default"))
            .set("--hover-background", token("sidebar-background", theme, "hover"))
            .set("--hover-color", token("text", theme, "hover"))
            .set("--pressed-background", token("button-background", theme, "active"))
            .set("--pressed-color", token("text", theme, "active")),
    }
}

fn token(group: &str, theme: ThemeMode, state: &str) -> String {
    format!("var(--color-{group}-{theme}-{state})")
}

fn divider(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => DIVIDER_LIGHT,
        ThemeMode::Dark => DIVIDER_DARK,
    }
}

fn gap(opened: bool) -> String {
    if opened { px(ICON_GAP) } else { "0".to_string() }
}

fn opacity(opened: bool) -> &'static str {
    if opened { "1" } else { "0" }
}
