//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps the core's symbolic [`IconId`]s to the selected theme's
//! glyphs.

use icondata::Icon;
use navshell_core::IconId;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as AngleLeft, LuChevronRight as AngleRight, LuCoins as ChartPie,
        LuHouse as House, LuMail as Envelope, LuMoon as Moon, LuPhone as PhoneVolume,
        LuReceipt as ChartColumn, LuSlidersHorizontal as Sliders, LuSun as Sun,
        LuTrendingUp as ChartLine, LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBarChartFill as ChartColumn, BsChevronLeft as AngleLeft,
        BsChevronRight as AngleRight, BsEnvelopeFill as Envelope, BsGraphUp as ChartLine,
        BsHouseFill as House, BsMoonFill as Moon, BsPieChartFill as ChartPie,
        BsSliders as Sliders, BsSunFill as Sun, BsTelephoneFill as PhoneVolume,
        BsWallet2 as Wallet,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOUSE, House);
themed_icon!(CHART_LINE, ChartLine);
themed_icon!(CHART_COLUMN, ChartColumn);
themed_icon!(WALLET, Wallet);
themed_icon!(CHART_PIE, ChartPie);
themed_icon!(ENVELOPE, Envelope);
themed_icon!(SLIDERS, Sliders);
themed_icon!(PHONE_VOLUME, PhoneVolume);
themed_icon!(MOON, Moon);
themed_icon!(SUN, Sun);
themed_icon!(ANGLE_LEFT, AngleLeft);
themed_icon!(ANGLE_RIGHT, AngleRight);

/// Glyph for a symbolic icon identifier.
pub fn icon_for(id: IconId) -> Icon {
    match id {
        IconId::House => HOUSE,
        IconId::ChartLine => CHART_LINE,
        IconId::ChartColumn => CHART_COLUMN,
        IconId::Wallet => WALLET,
        IconId::ChartPie => CHART_PIE,
        IconId::Envelope => ENVELOPE,
        IconId::Sliders => SLIDERS,
        IconId::PhoneVolume => PHONE_VOLUME,
        IconId::Moon => MOON,
        IconId::Sun => SUN,
        IconId::AngleLeft => ANGLE_LEFT,
        IconId::AngleRight => ANGLE_RIGHT,
    }
}
