//! Light/Dark theme mode.

use std::fmt;
use std::str::FromStr;

use crate::catalog::IconId;
use crate::error::CoreError;

/// Two-valued visual mode controlling color tokens.
///
/// Starts as [`ThemeMode::Light`] and only ever changes through
/// [`ThemeMode::toggle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Flips the mode in place.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Token segment used in design-token names and the `data-theme` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Label of the theme toggle: it names the mode a click switches to.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    /// Icon of the theme toggle, inverted together with the label.
    pub const fn toggle_icon(self) -> IconId {
        match self {
            Self::Light => IconId::Moon,
            Self::Dark => IconId::Sun,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_pairs_restore() {
        let mut mode = ThemeMode::Light;
        mode.toggle();
        assert_eq!(mode, ThemeMode::Dark);
        mode.toggle();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_label_and_icon_invert_together() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark Mode");
        assert_eq!(ThemeMode::Light.toggle_icon(), IconId::Moon);
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
        assert_eq!(ThemeMode::Dark.toggle_icon(), IconId::Sun);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(CoreError::UnknownTheme("sepia".to_string()))
        );
    }
}
