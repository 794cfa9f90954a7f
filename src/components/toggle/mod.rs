//! Floating toggle control.
//!
//! One button type serves both the theme and the sidebar toggle. Placement,
//! shape, icon and optional label all come from a [`ControlView`] computed
//! by the core, so the control moves whenever the state it controls changes.

use leptos::prelude::*;
use leptos_icons::Icon;
use navshell_core::ControlView;

use crate::components::icons::icon_for;

stylance::import_crate_style!(css, "src/components/toggle/toggle.module.css");

/// Fixed-position toggle button.
#[component]
pub fn ToggleButton(#[prop(into)] control: Signal<ControlView>, on_toggle: Callback<()>) -> impl IntoView {
    let style = move || control.with(|c| c.visuals.to_css());
    let icon = move || icon_for(control.with(|c| c.icon));
    let label = move || control.with(|c| c.label);

    let on_click = move |_: leptos::ev::MouseEvent| {
        on_toggle.run(());
    };

    view! {
        <button class=css::toggle style=style on:click=on_click>
            {move || view! { <Icon icon=icon() /> }}
            {move || label().map(|text| view! { <span class=css::label>{text}</span> })}
        </button>
    }
}
