//! State-machine laws and end-to-end scenarios for the shell core.

use navshell_core::catalog::{self, find_entry};
use navshell_core::{Catalog, IconId, NavEntry, NavigationState, ShellState, ThemeMode};
use proptest::prelude::*;

fn entries() -> Vec<&'static NavEntry> {
    catalog::all_entries().collect()
}

fn rendered_active(state: &NavigationState, theme: ThemeMode, opened: bool) -> Vec<&'static str> {
    Catalog::ALL
        .into_iter()
        .flat_map(|c| state.render_catalog(c, theme, opened))
        .filter(|item| item.is_active)
        .map(|item| item.entry.title)
        .collect()
}

proptest! {
    #[test]
    fn theme_parity(n in 0usize..64) {
        let mut shell = ShellState::new();
        for _ in 0..n {
            shell.toggle_theme();
        }
        let expected = if n % 2 == 0 { ThemeMode::Light } else { ThemeMode::Dark };
        prop_assert_eq!(shell.theme(), expected);
    }

    #[test]
    fn sidebar_parity(n in 0usize..64) {
        let mut shell = ShellState::new();
        let initial = shell.sidebar_open();
        for _ in 0..n {
            shell.toggle_sidebar();
        }
        prop_assert_eq!(shell.sidebar_open(), initial ^ (n % 2 == 1));
    }

    #[test]
    fn exactly_one_active_after_select(
        picks in proptest::collection::vec(0usize..8, 1..24),
        dark in any::<bool>(),
        opened in any::<bool>(),
    ) {
        let all = entries();
        let theme = if dark { ThemeMode::Dark } else { ThemeMode::Light };
        let mut state = NavigationState::new();

        for pick in picks {
            let entry = all[pick];
            state.select(entry);
            prop_assert_eq!(rendered_active(&state, theme, opened), vec![entry.title]);
        }
    }

    #[test]
    fn reselect_is_idempotent(pick in 0usize..8) {
        let entry = entries()[pick];
        let mut state = NavigationState::new();
        state.select(entry);
        let once = state;
        state.select(entry);
        prop_assert_eq!(state, once);
    }
}

#[test]
fn scenario_initial_render() {
    let shell = ShellState::new();
    let nav = NavigationState::new();

    assert_eq!(shell.theme(), ThemeMode::Light);
    assert!(!shell.sidebar_open());
    assert_eq!(nav.active(), "Home");

    let rows: Vec<_> = Catalog::ALL
        .into_iter()
        .flat_map(|c| nav.render_catalog(c, shell.theme(), shell.sidebar_open()))
        .collect();
    assert_eq!(rows.len(), 8);
    for row in &rows {
        assert_eq!(row.is_active, row.entry.title == "Home");
    }
}

#[test]
fn scenario_toggle_theme() {
    let mut shell = ShellState::new();
    shell.toggle_theme();

    assert_eq!(shell.theme(), ThemeMode::Dark);
    let control = shell.theme_control();
    assert_eq!(control.label, Some("Light Mode"));
    assert_eq!(control.icon, IconId::Sun);
}

#[test]
fn scenario_toggle_sidebar() {
    use navshell_core::style::{StyleFlags, Surface, style_for};

    let mut shell = ShellState::new();
    let before = shell.sidebar_control().visuals;
    shell.toggle_sidebar();
    let after = shell.sidebar_control().visuals;

    assert!(shell.sidebar_open());
    assert_eq!(before.get("left"), Some("80px"));
    assert_eq!(after.get("left"), Some("260px"));

    let sidebar = style_for(
        Surface::Sidebar,
        shell.theme(),
        StyleFlags::opened(shell.sidebar_open()),
    );
    assert_eq!(sidebar.get("width"), Some("240px"));
}

#[test]
fn scenario_select_settings() {
    let mut nav = NavigationState::new();
    let settings = find_entry("Settings").unwrap();
    assert!(Catalog::Secondary.entries().contains(settings));

    nav.select(settings);

    assert_eq!(nav.active(), "Settings");
    let primary: Vec<_> = nav
        .render_catalog(Catalog::Primary, ThemeMode::Light, false)
        .collect();
    let secondary: Vec<_> = nav
        .render_catalog(Catalog::Secondary, ThemeMode::Light, false)
        .collect();
    assert!(!primary[0].is_active);
    assert!(secondary[0].is_active);
    assert!(!secondary[1].is_active);
}
