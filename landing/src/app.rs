//! Page shell: owns the theme flag and the current page, binds menu
//! selections to navigation.

use crate::config::SiteConfig;
use crate::menu::{MenuItem, build_menu};
use crate::navigation::{Destination, ShellContext, open_external, resolve};
use crate::pages::LandingPage;
use crate::theme::{Palette, Role, Theme, ThemeContext};
use leptos::prelude::*;

/// Reactive state behind [`App`]. `Copy`, so it moves freely into callbacks.
#[derive(Clone, Copy)]
pub struct Shell {
    config: StoredValue<SiteConfig>,
    theme: RwSignal<Theme>,
    current: RwSignal<String>,
}

impl Shell {
    /// Expects a validated config; an empty page list leaves nothing to show.
    pub fn new(config: SiteConfig) -> Self {
        let home = config.home().map(|page| page.id.clone()).unwrap_or_default();
        Self {
            theme: RwSignal::new(config.theme),
            current: RwSignal::new(home),
            config: StoredValue::new(config),
        }
    }

    /// Id of the page on screen.
    pub fn current_page(&self) -> String {
        self.current.get()
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Follow a `to` reference: switch page or open a new tab.
    pub fn navigate(&self, to: &str) {
        match self.config.with_value(|c| resolve(c, to)) {
            Destination::Page(id) => {
                tracing::info!(page = %id, to, "navigate");
                self.current.set(id);
            }
            Destination::External(url) => open_external(&url),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
        tracing::debug!(theme = self.theme.get_untracked().as_str(), "theme toggled");
    }

    /// Configured menu with every leaf bound to [`Shell::navigate`].
    pub fn menu(self) -> Vec<MenuItem> {
        let navigate = Callback::new(move |to: String| self.navigate(&to));
        self.config.with_value(|c| build_menu(&c.menu, Some(navigate)))
    }
}

/// Site root. Rejects a config that fails validation with
/// [`ConfigErrorNotice`] instead of rendering a half-built site.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    match config.validate() {
        Ok(()) => view! { <ShellView shell=Shell::new(config) /> }.into_any(),
        Err(err) => {
            tracing::error!(error = %err, "site config rejected");
            view! { <ConfigErrorNotice message=err.to_string() /> }.into_any()
        }
    }
}

/// Renders the current page of `shell` and provides the theme and shell
/// contexts to everything below it.
#[component]
pub fn ShellView(shell: Shell) -> impl IntoView {
    provide_context(ThemeContext {
        theme: Signal::derive(move || shell.theme()),
        toggle: Callback::new(move |()| shell.toggle_theme()),
    });
    provide_context(ShellContext {
        navigate: Callback::new(move |to: String| shell.navigate(&to)),
    });

    let menu = shell.menu();
    let brand = shell.config.with_value(|c| c.brand.clone());

    view! {
        <div class=move || format!("min-h-screen transition-colors duration-300 {}", Palette::for_theme(shell.theme()).class(Role::Page))>
            {move || {
                let id = shell.current_page();
                let page = shell.config.with_value(|c| c.page(&id).or_else(|| c.home()).cloned());
                page.map(|page| view! { <LandingPage brand=brand.clone() menu=menu.clone() page=page /> })
            }}
        </div>
    }
}

/// Shown instead of the site when `site.toml` is rejected at startup.
#[component]
pub fn ConfigErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-lg rounded-lg border border-red-200 bg-white p-6 shadow-sm">
                <h1 class="text-xl font-bold text-gray-900 mb-2">"Site configuration error"</h1>
                <pre class="text-sm text-red-700 whitespace-pre-wrap">{message}</pre>
            </div>
        </div>
    }
}
