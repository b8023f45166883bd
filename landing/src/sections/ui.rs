//! Stateless presentation primitives: buttons, cards, badges.

use crate::config::{ActionConfig, ActionStyle};
use crate::icons::{Icon, IconSvg};
use crate::navigation::ShellContext;
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-9 px-3 text-sm",
            ButtonSize::Md => "h-10 px-4 py-2 text-sm",
            ButtonSize::Lg => "h-11 px-8 text-base",
        }
    }
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors focus:outline-none focus-visible:ring-2 focus-visible:ring-purple-500";

#[component]
pub fn Button(
    #[prop(optional)] size: ButtonSize,
    /// Variant classes; reactive so they can follow the theme
    #[prop(optional)]
    class: Option<Signal<String>>,
    #[prop(optional_no_strip)] on_click: Option<Callback<()>>,
    #[prop(optional)] aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = class.map(|c| c.get()).unwrap_or_default();
        format!("{} {} {}", BUTTON_BASE, size.class(), variant)
    };

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Class string for a configured action on the current theme.
pub fn action_class(style: ActionStyle, accent: &str, outline: &str) -> String {
    match style {
        ActionStyle::Primary => format!("bg-gradient-to-r {accent} text-white hover:opacity-90"),
        ActionStyle::Outline => outline.to_string(),
        ActionStyle::Inverse => "bg-white text-purple-600 hover:bg-gray-100".to_string(),
        ActionStyle::OutlineLight => {
            "border border-white text-white hover:bg-white hover:text-gray-900".to_string()
        }
    }
}

/// Row of configured call-to-action buttons.
///
/// Each button with a destination hands it to the shell's navigate callback;
/// without one (or outside a shell) the button is decorative.
#[component]
pub fn ActionButtons(actions: Vec<ActionConfig>, accent: String) -> impl IntoView {
    let theme = use_theme();
    let navigate = use_context::<ShellContext>().map(|shell| shell.navigate);

    view! {
        <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
            {actions
                .into_iter()
                .map(|action| {
                    let accent = accent.clone();
                    let style = action.style;
                    let class = Signal::derive(move || {
                        action_class(style, &accent, theme.class(Role::OutlineButton))
                    });
                    let on_click = match (&action.to, navigate) {
                        (Some(to), Some(navigate)) => {
                            let to = to.clone();
                            Some(Callback::new(move |()| navigate.run(to.clone())))
                        }
                        _ => None,
                    };
                    let arrow = action.arrow;
                    view! {
                        <Button size=ButtonSize::Lg class=class on_click=on_click>
                            {action.label}
                            {arrow.then(|| view! { <IconSvg icon=Icon::ArrowRight class="ml-2 h-5 w-5" /> })}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Card(
    /// Palette role for background and border
    role: Role,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || format!("rounded-lg border shadow-sm p-6 {} {}", theme.class(role), class)>
            {children()}
        </div>
    }
}

/// Small pill above hero headings.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center rounded-full px-3 py-1 text-xs font-semibold bg-gray-100 text-gray-900 mb-4">
            {children()}
        </span>
    }
}
