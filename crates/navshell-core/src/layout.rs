//! Layout dimensions and floating control placement.
//!
//! The sidebar toggle sits just outside the sidebar's right edge, so its
//! horizontal offset is derived from the same width the sidebar uses.

use crate::style::VisualProps;

/// Sidebar width when expanded, in px.
pub const SIDEBAR_WIDTH_OPENED: u16 = 240;

/// Sidebar width when collapsed, in px.
pub const SIDEBAR_WIDTH_COLLAPSED: u16 = 60;

/// Distance of floating controls from the viewport and sidebar edges, in px.
pub const CONTROL_INSET: u16 = 20;

/// Diameter of the circular sidebar toggle, in px.
pub const ROUND_CONTROL_SIZE: u16 = 48;

/// Logo edge length, in px.
pub const LOGO_SIZE: u16 = 32;

/// Gap between an icon and its label when the sidebar is expanded, in px.
pub const ICON_GAP: u16 = 12;

pub const fn sidebar_width(opened: bool) -> u16 {
    if opened {
        SIDEBAR_WIDTH_OPENED
    } else {
        SIDEBAR_WIDTH_COLLAPSED
    }
}

/// Horizontal anchoring of a fixed-position control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Offset from the viewport's left edge
    Left(u16),
    /// Offset from the viewport's right edge
    Right(u16),
}

/// Outline of a floating control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Rounded rectangle sized by its content (icon + label)
    Pill,
    /// Fixed-size circle holding a single icon
    Circle(u16),
}

/// Position and shape of one floating toggle control.
///
/// Both toggles are the same control type; only these parameters differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSpec {
    pub top: u16,
    pub anchor: Anchor,
    pub shape: Shape,
}

impl ControlSpec {
    /// Theme toggle: a pill in the top-right corner.
    pub const fn theme_toggle() -> Self {
        Self {
            top: CONTROL_INSET,
            anchor: Anchor::Right(CONTROL_INSET),
            shape: Shape::Pill,
        }
    }

    /// Sidebar toggle: a circle that follows the sidebar's right edge.
    pub const fn sidebar_toggle(opened: bool) -> Self {
        Self {
            top: CONTROL_INSET,
            anchor: Anchor::Left(sidebar_width(opened) + CONTROL_INSET),
            shape: Shape::Circle(ROUND_CONTROL_SIZE),
        }
    }

    /// Placement and outline declarations for this control.
    pub fn visual_props(&self) -> VisualProps {
        let props = VisualProps::new().set("top", px(self.top));
        let props = match self.anchor {
            Anchor::Left(offset) => props.set("left", px(offset)),
            Anchor::Right(offset) => props.set("right", px(offset)),
        };
        match self.shape {
            Shape::Pill => props
                .set("border-radius", "12px")
                .set("padding", "12px 20px")
                .set("gap", "8px"),
            Shape::Circle(size) => props
                .set("border-radius", "50%")
                .set("padding", "12px")
                .set("justify-content", "center")
                .set("width", px(size))
                .set("height", px(size)),
        }
    }
}

pub(crate) fn px(value: u16) -> String {
    format!("{value}px")
}
