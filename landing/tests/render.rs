//! Markup checks for the header and page template, rendered to strings.

use axie_landing::app::{Shell, ShellView};
use axie_landing::config::SiteConfig;
use axie_landing::menu::build_menu;
use axie_landing::sections::{Header, HeaderView};
use axie_landing::{App, MenuItem, MenuKey, NavState, Palette, Role, SubMenuItem, Theme, ThemeContext};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;

fn with_theme<T>(theme: Theme, f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ThemeContext {
            theme: Signal::derive(move || theme),
            toggle: Callback::new(|()| {}),
        });
        f()
    })
}

fn services_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::parent(
            MenuKey::new(0),
            "Services",
            vec![SubMenuItem::new("Web", "/web").with_description("Sites")],
        ),
        MenuItem::link(MenuKey::new(1), "Contact", "/contact"),
    ]
}

fn render_with_state(state: NavState, theme: Theme, menu: Vec<MenuItem>) -> String {
    let state = RwSignal::new(state);
    view! {
        <HeaderView
            state=state
            menu_items=menu
            logo=ViewFn::default()
            right_content=ViewFn::default()
            theme=Signal::derive(move || theme)
        />
    }
    .to_html()
}

/// Desktop dropdown opened by pointer hover.
fn hovered(key: usize) -> NavState {
    let mut state = NavState::default();
    state.hover_enter(MenuKey::new(key));
    state
}

/// Mobile panel expanded with a dropdown tapped open inside it.
fn tapped_in_panel(key: usize) -> NavState {
    let mut state = NavState::default();
    state.toggle_mobile();
    state.tap(MenuKey::new(key));
    state
}

#[test]
fn desktop_entries_follow_menu_order() {
    let html = with_theme(Theme::Light, || {
        view! { <Header menu_items=services_menu() /> }.to_html()
    });

    assert_eq!(html.matches("data-nav-entry=").count(), 2);
    let services = html.find("Services").unwrap_or(usize::MAX);
    let contact = html.find("Contact").unwrap_or(usize::MAX);
    assert!(services < contact, "entries out of order: {html}");
}

#[test]
fn items_make_dropdown_and_to_makes_link() {
    let html = with_theme(Theme::Light, || render_with_state(NavState::default(), Theme::Light, services_menu()));

    assert!(html.contains(r#"data-nav-entry="dropdown""#));
    assert!(html.contains(r#"data-nav-entry="link""#));
    assert!(html.contains(r#"href="/contact""#));
    assert!(!html.contains(r#"data-nav-entry="label""#));
}

#[test]
fn entry_without_items_or_destination_is_a_label() {
    let mut bare = MenuItem::link(MenuKey::new(0), "Soon", "/soon");
    bare.to = None;
    let html = with_theme(Theme::Light, || render_with_state(NavState::default(), Theme::Light, vec![bare]));

    assert!(html.contains(r#"data-nav-entry="label""#));
    assert!(!html.contains("href="));
}

#[test]
fn closed_dropdown_hides_sub_entries() {
    let html = with_theme(Theme::Light, || render_with_state(NavState::default(), Theme::Light, services_menu()));

    assert!(!html.contains(r#"data-dropdown="0""#));
    assert!(!html.contains("data-dropdown-item"));
    assert!(!html.contains("Sites"));
}

#[test]
fn open_dropdown_shows_its_sub_entries() {
    let html = with_theme(Theme::Light, || render_with_state(hovered(0), Theme::Light, services_menu()));

    assert!(html.contains(r#"data-dropdown="0""#));
    assert!(html.contains(r#"href="/web""#));
    assert!(html.contains("Sites"));
    assert_eq!(html.matches("data-dropdown-item").count(), 1);
}

#[test]
fn mobile_panel_renders_only_when_open() {
    let closed = with_theme(Theme::Light, || render_with_state(NavState::default(), Theme::Light, services_menu()));
    assert!(!closed.contains(r#"data-nav="mobile""#));
    assert!(closed.contains(r#"aria-expanded="false""#));

    let mut state = NavState::default();
    state.toggle_mobile();
    let open = with_theme(Theme::Light, || render_with_state(state, Theme::Light, services_menu()));
    assert!(open.contains(r#"data-nav="mobile""#));
    assert_eq!(open.matches("data-mobile-entry=").count(), 2);
}

#[test]
fn mobile_dropdown_rotates_chevron_when_open() {
    let html = with_theme(Theme::Light, || render_with_state(tapped_in_panel(0), Theme::Light, services_menu()));

    assert!(html.contains("rotate-180"));
    // desktop panel and mobile sub-list both render the leaf
    assert_eq!(html.matches(r#"href="/web""#).count(), 2);
}

#[test]
fn theme_changes_classes_but_not_state() {
    let state = hovered(0);
    let light = with_theme(Theme::Light, || render_with_state(state, Theme::Light, services_menu()));
    let dark = with_theme(Theme::Dark, || render_with_state(state, Theme::Dark, services_menu()));

    assert!(light.contains(r#"data-theme="light""#));
    assert!(dark.contains(r#"data-theme="dark""#));
    assert!(light.contains(Palette::for_theme(Theme::Light).class(Role::HeaderBar)));
    assert!(dark.contains(Palette::for_theme(Theme::Dark).class(Role::HeaderBar)));
    assert!(dark.contains(r#"data-dropdown="0""#));
    assert_eq!(state, hovered(0));
}

#[test]
fn header_defaults_to_light_theme() {
    let html = with_theme(Theme::Dark, || view! { <Header menu_items=services_menu() /> }.to_html());
    assert!(html.contains(r#"data-theme="light""#));
}

#[test]
fn empty_menu_renders_no_entries() {
    let html = with_theme(Theme::Light, || view! { <Header /> }.to_html());
    assert!(html.contains(r#"data-nav="desktop""#));
    assert_eq!(html.matches("data-nav-entry=").count(), 0);
}

#[test]
fn app_starts_on_home_page() {
    let config = SiteConfig::embedded().expect("embedded site.toml");
    let owner = Owner::new();
    let html = owner.with(|| view! { <App config=config /> }.to_html());

    assert!(html.contains(r#"data-page="home""#));
    assert!(html.contains("Why Choose Axie Studio?"));
    assert!(html.contains("500+"));
    assert!(html.contains("Tjänster"));
    assert!(html.contains("Logga In"));
    assert!(html.contains("All rights reserved."));
}

#[test]
fn about_page_renders_through_the_same_template() {
    use axie_landing::pages::LandingPage;

    let config = SiteConfig::embedded().expect("embedded site.toml");
    let page = config.page("about").cloned().expect("about page");
    let html = with_theme(Theme::Light, || {
        let menu = build_menu(&config.menu, None);
        view! { <LandingPage brand=config.brand.clone() menu=menu page=page /> }.to_html()
    });

    assert!(html.contains(r#"data-page="about""#));
    for section in ["hero", "mission", "features", "values", "cta"] {
        assert!(html.contains(&format!(r#"data-section="{section}""#)), "missing {section}");
    }
    assert!(html.contains("Vår Mission"));
    assert!(html.contains("Alla rättigheter förbehållna."));
    assert!(!html.contains("data-video-dialog"));
}

#[test]
fn hover_leave_hides_rendered_panel() {
    let mut state = hovered(0);
    state.hover_leave();
    let html = with_theme(Theme::Light, || render_with_state(state, Theme::Light, services_menu()));
    assert!(!html.contains(r#"data-dropdown="0""#));
}

#[test]
fn selecting_about_leaf_renders_about_page() {
    let config = SiteConfig::embedded().expect("embedded site.toml");
    let owner = Owner::new();
    let html = owner.with(|| {
        let shell = Shell::new(config);
        let menu = shell.menu();
        let about = menu.iter().find(|item| item.to.as_deref() == Some("/om-oss"));
        assert!(about.is_some_and(MenuItem::select));
        view! { <ShellView shell=shell /> }.to_html()
    });

    assert!(html.contains(r#"data-page="about""#));
    assert!(!html.contains(r#"data-page="home""#));
    assert!(html.contains("Vår Mission"));
}

#[test]
fn app_without_pages_shows_config_notice() {
    let mut config = SiteConfig::embedded().expect("embedded site.toml");
    config.pages.clear();
    let owner = Owner::new();
    let html = owner.with(|| view! { <App config=config /> }.to_html());

    assert!(html.contains("Site configuration error"));
    assert!(html.contains("no pages configured"));
    assert!(!html.contains("data-page="));
}
