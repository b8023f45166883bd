//! Navigation header: brand slot, menu with dropdowns, trailing controls and
//! the collapsible mobile panel.

use crate::icons::{Icon, IconSvg};
use crate::menu::{EntryMode, MenuItem, SubMenuItem};
use crate::nav_state::NavState;
use crate::theme::{Palette, Role, Theme};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

const NAV_LINK_BASE: &str = "px-3 py-2 rounded-md text-sm font-medium transition-colors";

#[component]
pub fn Header(
    #[prop(optional)] menu_items: Vec<MenuItem>,
    /// Leading brand content
    #[prop(optional, into)]
    logo: ViewFn,
    /// Trailing controls; also rendered at the bottom of the mobile panel
    #[prop(optional, into)]
    right_content: ViewFn,
    /// Defaults to light when not supplied
    #[prop(optional, into)]
    theme: Option<Signal<Theme>>,
    /// Accepted so callers can wire it; the header never switches theme itself.
    #[prop(optional)]
    on_theme_change: Option<Callback<()>>,
) -> impl IntoView {
    let _ = on_theme_change;
    let state = RwSignal::new(NavState::default());
    let theme = theme.unwrap_or_else(|| Signal::derive(Theme::default));

    view! { <HeaderView state=state menu_items=menu_items logo=logo right_content=right_content theme=theme /> }
}

/// Header body rendered against externally owned state.
#[component]
pub fn HeaderView(
    state: RwSignal<NavState>,
    menu_items: Vec<MenuItem>,
    logo: ViewFn,
    right_content: ViewFn,
    theme: Signal<Theme>,
) -> impl IntoView {
    let class = move |role: Role| Palette::for_theme(theme.get()).class(role);
    let mobile_items = menu_items.clone();
    let mobile_right = right_content.clone();

    view! {
        <header
            class=move || format!("sticky top-0 z-50 w-full border-b backdrop-blur {}", class(Role::HeaderBar))
            data-theme=move || theme.get().as_str()
        >
            <div class="container mx-auto px-4">
                <div class="flex h-16 items-center justify-between">
                    <div class="flex items-center">{logo.run()}</div>

                    <nav class="hidden md:flex items-center space-x-6" data-nav="desktop">
                        {menu_items
                            .into_iter()
                            .map(|item| view! { <DesktopEntry item=item state=state theme=theme /> })
                            .collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center space-x-4">{right_content.run()}</div>

                    <div class="md:hidden">
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            aria-expanded=move || state.get().is_mobile_open().to_string()
                            class=move || format!("inline-flex h-9 items-center rounded-md px-3 {}", class(Role::MenuButton))
                            on:click=move |_| state.update(NavState::toggle_mobile)
                        >
                            {move || {
                                let icon = if state.get().is_mobile_open() { Icon::X } else { Icon::Menu };
                                view! { <IconSvg icon=icon class="h-5 w-5" /> }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=move || state.get().is_mobile_open()>
                    <div
                        class=move || format!("md:hidden border-t py-4 {}", class(Role::Divider))
                        data-nav="mobile"
                    >
                        <nav class="space-y-2">
                            {mobile_items
                                .iter()
                                .map(|item| view! { <MobileEntry item=item.clone() state=state theme=theme /> })
                                .collect_view()}
                            <div class=move || format!("pt-4 border-t {}", class(Role::Divider))>
                                {mobile_right.run()}
                            </div>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// Follow a leaf: run its callback instead of the native link when bound.
fn follow(ev: MouseEvent, selected: bool) {
    if selected {
        ev.prevent_default();
    }
}

#[component]
fn DesktopEntry(item: MenuItem, state: RwSignal<NavState>, theme: Signal<Theme>) -> impl IntoView {
    let class = move |role: Role| Palette::for_theme(theme.get()).class(role);
    let key = item.key;

    match item.mode() {
        EntryMode::Dropdown => {
            let items = item.items.clone().unwrap_or_default();
            view! {
                <div class="relative group" data-nav-entry="dropdown">
                    <button
                        type="button"
                        aria-haspopup="true"
                        aria-expanded=move || state.get().is_open(key).to_string()
                        class=move || format!("flex items-center space-x-1 {} {}", NAV_LINK_BASE, class(Role::NavLink))
                        on:mouseenter=move |_| state.update(|s| s.hover_enter(key))
                        on:mouseleave=move |_| state.update(NavState::hover_leave)
                    >
                        <span>{item.text.clone()}</span>
                        <IconSvg icon=Icon::ChevronDown />
                    </button>
                    <Show when=move || state.get().is_open(key)>
                        <div
                            class=move || format!("absolute top-full left-0 mt-1 w-64 rounded-md shadow-lg border {}", class(Role::DropdownPanel))
                            data-dropdown=key.index().to_string()
                            on:mouseenter=move |_| state.update(|s| s.hover_enter(key))
                            on:mouseleave=move |_| state.update(NavState::hover_leave)
                        >
                            <div class="py-2">
                                {items
                                    .iter()
                                    .map(|sub| view! { <DropdownLink item=sub.clone() theme=theme /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
        EntryMode::Link => {
            let href = item.to.clone().unwrap_or_default();
            let text = item.text.clone();
            view! {
                <div class="relative group" data-nav-entry="link">
                    <a
                        href=href
                        class=move || format!("{} {}", NAV_LINK_BASE, class(Role::NavLink))
                        on:click=move |ev| follow(ev, item.select())
                    >
                        {text}
                    </a>
                </div>
            }
            .into_any()
        }
        EntryMode::Label => view! {
            <div class="relative group" data-nav-entry="label">
                <span class=move || format!("{} {}", NAV_LINK_BASE, class(Role::NavLink))>{item.text.clone()}</span>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn DropdownLink(item: SubMenuItem, theme: Signal<Theme>) -> impl IntoView {
    let class = move |role: Role| Palette::for_theme(theme.get()).class(role);
    let href = item.to.clone();
    let text = item.text.clone();
    let description = item.description.clone();

    view! {
        <a
            href=href
            class=move || format!("block px-4 py-3 text-sm transition-colors {}", class(Role::DropdownLink))
            data-dropdown-item=""
            on:click=move |ev| follow(ev, item.select())
        >
            <div class="font-medium">{text}</div>
            {description.map(|description| {
                view! {
                    <div class=move || format!("text-xs mt-1 {}", class(Role::DropdownDescription))>
                        {description}
                    </div>
                }
            })}
        </a>
    }
}

#[component]
fn MobileEntry(item: MenuItem, state: RwSignal<NavState>, theme: Signal<Theme>) -> impl IntoView {
    let class = move |role: Role| Palette::for_theme(theme.get()).class(role);
    let key = item.key;
    let base = "block px-3 py-2 text-sm font-medium rounded-md transition-colors";

    match item.mode() {
        EntryMode::Dropdown => {
            let items = item.items.clone().unwrap_or_default();
            view! {
                <div data-mobile-entry="dropdown">
                    <button
                        type="button"
                        aria-expanded=move || state.get().is_open(key).to_string()
                        class=move || format!("flex items-center justify-between w-full px-3 py-2 text-sm font-medium rounded-md transition-colors {}", class(Role::NavLink))
                        on:click=move |_| state.update(|s| s.tap(key))
                    >
                        <span>{item.text.clone()}</span>
                        <span class=move || if state.get().is_open(key) { "transition-transform rotate-180" } else { "transition-transform" }>
                            <IconSvg icon=Icon::ChevronDown />
                        </span>
                    </button>
                    <Show when=move || state.get().is_open(key)>
                        <div class="mt-2 ml-4 space-y-1">
                            {items
                                .iter()
                                .map(|sub| {
                                    let sub = sub.clone();
                                    let href = sub.to.clone();
                                    let text = sub.text.clone();
                                    view! {
                                        <a
                                            href=href
                                            class=move || format!("block px-3 py-2 text-sm rounded-md transition-colors {}", class(Role::MobileSubLink))
                                            on:click=move |ev| follow(ev, sub.select())
                                        >
                                            {text}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
        EntryMode::Link => {
            let href = item.to.clone().unwrap_or_default();
            let text = item.text.clone();
            view! {
                <div data-mobile-entry="link">
                    <a
                        href=href
                        class=move || format!("{} {}", base, class(Role::NavLink))
                        on:click=move |ev| follow(ev, item.select())
                    >
                        {text}
                    </a>
                </div>
            }
            .into_any()
        }
        EntryMode::Label => view! {
            <div data-mobile-entry="label">
                <span class=move || format!("{} {}", base, class(Role::NavLink))>{item.text.clone()}</span>
            </div>
        }
        .into_any(),
    }
}
