//! Root application module.
//!
//! Contains the App component and the AppContext holding the shell-wide
//! state (theme and sidebar expansion).

use leptos::prelude::*;
use navshell_core::{ControlView, ShellState, ThemeMode};

use crate::components::{Navigation, ToggleButton};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessible from any child
/// via `use_context::<AppContext>()`. The toggle methods are the only writers
/// of [`ShellState`]; children get derived read-only signals.
///
/// # Note
///
/// This struct is `Copy` because its field is a Leptos signal, which is
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub shell: RwSignal<ShellState>,
}

impl AppContext {
    /// Light theme, collapsed sidebar.
    pub fn new() -> Self {
        Self {
            shell: RwSignal::new(ShellState::new()),
        }
    }

    pub fn toggle_theme(&self) {
        self.shell.update(|s| {
            s.toggle_theme();
        });
    }

    pub fn toggle_sidebar(&self) {
        self.shell.update(|s| {
            s.toggle_sidebar();
        });
    }

    pub fn theme(&self) -> Signal<ThemeMode> {
        let shell = self.shell;
        Signal::derive(move || shell.with(|s| s.theme()))
    }

    pub fn sidebar_open(&self) -> Signal<bool> {
        let shell = self.shell;
        Signal::derive(move || shell.with(|s| s.sidebar_open()))
    }

    pub fn theme_control(&self) -> Signal<ControlView> {
        let shell = self.shell;
        Signal::derive(move || shell.with(|s| s.theme_control()))
    }

    pub fn sidebar_control(&self) -> Signal<ControlView> {
        let shell = self.shell;
        Signal::derive(move || shell.with(|s| s.sidebar_control()))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the AppContext, renders both toggle controls and
/// hands theme/open state down to the sidebar.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let theme = ctx.theme();
    let on_toggle_theme = Callback::new(move |_: ()| ctx.toggle_theme());
    let on_toggle_sidebar = Callback::new(move |_: ()| ctx.toggle_sidebar());

    view! {
        <div class=css::app data-theme=move || theme.get().as_str()>
            <ToggleButton control=ctx.theme_control() on_toggle=on_toggle_theme />
            <ToggleButton control=ctx.sidebar_control() on_toggle=on_toggle_sidebar />
            <Navigation theme=theme opened=ctx.sidebar_open() />
        </div>
    }
}
