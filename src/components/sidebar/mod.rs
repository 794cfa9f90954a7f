//! Navigation sidebar component.
//!
//! Owns the active-item state and renders the primary and secondary
//! catalogs. Theme and open flags arrive from the root as read-only signals;
//! nothing here writes back to them.

use leptos::logging::log;
use leptos::prelude::*;
use leptos_icons::Icon;
use navshell_core::{
    Catalog, NavEntry, NavItemView, NavigationState, StyleFlags, Surface, ThemeMode, style_for,
};

use crate::components::icons::icon_for;
use crate::config::{APP_NAME, LOGO_ALT, LOGO_SRC};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Collapsible sidebar with logo header and two navigation lists.
#[component]
pub fn Navigation(
    #[prop(into)] theme: Signal<ThemeMode>,
    #[prop(into)] opened: Signal<bool>,
) -> impl IntoView {
    let nav = RwSignal::new(NavigationState::new());

    // Highlight only; the path is logged, never routed to.
    let on_select = Callback::new(move |entry: &'static NavEntry| {
        nav.update(|state| {
            let attempt = state.select(entry);
            log!("{attempt}");
        });
    });

    let surface_style = move |surface: Surface| {
        move || style_for(surface, theme.get(), StyleFlags::opened(opened.get())).to_css()
    };

    view! {
        <nav class=css::sidebar style=surface_style(Surface::Sidebar)>
            <div class=css::header style=surface_style(Surface::Header)>
                <img
                    class=css::logo
                    src=LOGO_SRC
                    alt=LOGO_ALT
                    style=surface_style(Surface::Logo)
                />
                <span class=css::logoText style=surface_style(Surface::LogoText)>
                    {APP_NAME}
                </span>
            </div>

            <div class=css::section>
                <NavList
                    catalog=Catalog::Primary
                    nav=nav
                    theme=theme
                    opened=opened
                    on_select=on_select
                />
            </div>

            <div class=css::bottomSection style=surface_style(Surface::BottomSection)>
                <NavList
                    catalog=Catalog::Secondary
                    nav=nav
                    theme=theme
                    opened=opened
                    on_select=on_select
                />
            </div>
        </nav>
    }
}

/// Rows of one catalog, re-projected whenever selection, theme or open
/// state changes.
#[component]
fn NavList(
    catalog: Catalog,
    #[prop(into)] nav: Signal<NavigationState>,
    #[prop(into)] theme: Signal<ThemeMode>,
    #[prop(into)] opened: Signal<bool>,
    on_select: Callback<&'static NavEntry>,
) -> impl IntoView {
    move || {
        let (theme, opened) = (theme.get(), opened.get());
        nav.with(|state| {
            state
                .render_catalog(catalog, theme, opened)
                .map(|item| view! { <NavRow item=item on_select=on_select /> })
                .collect::<Vec<_>>()
        })
    }
}

#[component]
fn NavRow(item: NavItemView, on_select: Callback<&'static NavEntry>) -> impl IntoView {
    let entry = item.entry;
    let on_click = move |_: leptos::ev::MouseEvent| {
        on_select.run(entry);
    };

    view! {
        <div
            class=css::navItem
            style=item.row.to_css()
            data-title=entry.title
            data-active=item.is_active.to_string()
            on:click=on_click
        >
            <div class=css::navIcon style=item.icon.to_css()>
                <Icon icon=icon_for(entry.icon) />
            </div>
            <span class=css::navText style=item.text.to_css()>
                {entry.title}
            </span>
        </div>
    }
}
