//! Static navigation catalogs.
//!
//! Two fixed, ordered collections of [`NavEntry`]: the primary list shown at
//! the top of the sidebar and the secondary list pinned to its bottom. They
//! are `'static` slices and are never extended at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

// =============================================================================
// Icon Vocabulary
// =============================================================================

/// Symbolic icon identifier handed to the icon collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    House,
    ChartLine,
    ChartColumn,
    Wallet,
    ChartPie,
    Envelope,
    Sliders,
    PhoneVolume,
    Moon,
    Sun,
    AngleLeft,
    AngleRight,
}

impl IconId {
    pub const ALL: [IconId; 12] = [
        Self::House,
        Self::ChartLine,
        Self::ChartColumn,
        Self::Wallet,
        Self::ChartPie,
        Self::Envelope,
        Self::Sliders,
        Self::PhoneVolume,
        Self::Moon,
        Self::Sun,
        Self::AngleLeft,
        Self::AngleRight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::ChartLine => "chart-line",
            Self::ChartColumn => "chart-column",
            Self::Wallet => "wallet",
            Self::ChartPie => "chart-pie",
            Self::Envelope => "envelope",
            Self::Sliders => "sliders",
            Self::PhoneVolume => "phone-volume",
            Self::Moon => "moon",
            Self::Sun => "sun",
            Self::AngleLeft => "angle-left",
            Self::AngleRight => "angle-right",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| CoreError::UnknownIcon(s.to_string()))
    }
}

// =============================================================================
// Entries
// =============================================================================

/// Immutable navigation record.
///
/// `path` is informational: selecting an entry logs it but never routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavEntry {
    /// Display title, unique within its catalog
    pub title: &'static str,
    pub icon: IconId,
    pub path: &'static str,
}

impl NavEntry {
    const fn new(title: &'static str, icon: IconId, path: &'static str) -> Self {
        Self { title, icon, path }
    }
}

/// Entries of the upper navigation section.
pub const PRIMARY: &[NavEntry] = &[
    NavEntry::new("Home", IconId::House, "/"),
    NavEntry::new("Sales", IconId::ChartLine, "/sales"),
    NavEntry::new("Costs", IconId::ChartColumn, "/costs"),
    NavEntry::new("Payments", IconId::Wallet, "/payments"),
    NavEntry::new("Finances", IconId::ChartPie, "/finances"),
    NavEntry::new("Messages", IconId::Envelope, "/messages"),
];

/// Entries of the bottom navigation section.
pub const SECONDARY: &[NavEntry] = &[
    NavEntry::new("Settings", IconId::Sliders, "/settings"),
    NavEntry::new("Support", IconId::PhoneVolume, "/support"),
];

/// Selector for one of the two catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Catalog {
    Primary,
    Secondary,
}

impl Catalog {
    /// Render order: primary first, then secondary.
    pub const ALL: [Catalog; 2] = [Self::Primary, Self::Secondary];

    pub const fn entries(self) -> &'static [NavEntry] {
        match self {
            Self::Primary => PRIMARY,
            Self::Secondary => SECONDARY,
        }
    }

    pub fn find(self, title: &str) -> Option<&'static NavEntry> {
        self.entries().iter().find(|entry| entry.title == title)
    }
}

/// Iterates both catalogs in render order.
pub fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
    Catalog::ALL.into_iter().flat_map(|c| c.entries().iter())
}

/// Resolves a title across both catalogs.
pub fn find_entry(title: &str) -> Result<&'static NavEntry> {
    Catalog::ALL
        .into_iter()
        .find_map(|c| c.find(title))
        .ok_or_else(|| CoreError::UnknownEntry(title.to_string()))
}
