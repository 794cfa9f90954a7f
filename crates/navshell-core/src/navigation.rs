//! Active navigation item and catalog rendering.
//!
//! The active item is a single title borrowed from the static catalogs, so
//! at most one row across both catalogs can be highlighted at a time.

use std::fmt;

use crate::catalog::{self, Catalog, NavEntry};
use crate::error::Result;
use crate::style::{StyleFlags, Surface, VisualProps, style_for};
use crate::theme::ThemeMode;

/// Title highlighted before any selection.
pub const INITIAL_ACTIVE: &str = "Home";

/// Selection state of the navigation sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    active: &'static str,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            active: INITIAL_ACTIVE,
        }
    }

    /// Title of the active entry.
    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Catalog entry the active title refers to.
    pub fn active_entry(&self) -> Result<&'static NavEntry> {
        catalog::find_entry(self.active)
    }

    pub fn is_active(&self, entry: &NavEntry) -> bool {
        entry.title == self.active
    }

    /// Makes `entry` the active item.
    ///
    /// Re-selecting the active entry leaves the state unchanged. The returned
    /// record describes the navigation attempt for diagnostics; no routing
    /// happens here.
    pub fn select(&mut self, entry: &'static NavEntry) -> NavigationAttempt {
        self.active = entry.title;
        NavigationAttempt {
            title: entry.title,
            path: entry.path,
        }
    }

    /// Projects `catalog` into renderable rows for the given theme and
    /// sidebar state.
    ///
    /// The iterator borrows nothing from `self`; cloning it restarts the
    /// projection from the first entry.
    pub fn render_catalog(&self, catalog: Catalog, theme: ThemeMode, opened: bool) -> RenderedItems {
        RenderedItems {
            entries: catalog.entries().iter(),
            active: self.active,
            theme,
            opened,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic record of a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationAttempt {
    pub title: &'static str,
    pub path: &'static str,
}

impl fmt::Display for NavigationAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "going to \"{}\"", self.path)
    }
}

/// One navigation row ready for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemView {
    pub entry: &'static NavEntry,
    pub is_active: bool,
    /// Row container colors, background and radius
    pub row: VisualProps,
    pub icon: VisualProps,
    pub text: VisualProps,
}

/// Lazy projection of a catalog into [`NavItemView`]s.
#[derive(Clone, Debug)]
pub struct RenderedItems {
    entries: std::slice::Iter<'static, NavEntry>,
    active: &'static str,
    theme: ThemeMode,
    opened: bool,
}

impl Iterator for RenderedItems {
    type Item = NavItemView;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        let is_active = entry.title == self.active;
        let flags = StyleFlags::opened(self.opened).with_active(is_active);

        Some(NavItemView {
            entry,
            is_active,
            row: style_for(Surface::NavItem, self.theme, flags),
            icon: style_for(Surface::NavIcon, self.theme, flags),
            text: style_for(Surface::NavText, self.theme, flags),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for RenderedItems {}
