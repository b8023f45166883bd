// Page template
// Developed by the Axie Studio team (c)2025

use crate::config::{BrandConfig, PageConfig, SectionConfig};
use crate::icons::{Icon, IconSvg};
use crate::menu::MenuItem;
use crate::sections::ui::{Button, ButtonSize};
use crate::sections::{CallToAction, Features, Footer, Header, Hero, Mission, Stats, Values};
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

/// One page of the site: header, hero, configured sections, footer.
///
/// Every page shares this tree; only `page` differs.
#[component]
pub fn LandingPage(brand: BrandConfig, menu: Vec<MenuItem>, page: PageConfig) -> impl IntoView {
    let theme = use_theme();
    let logo_brand = brand.clone();
    let login_label = brand.login_label.clone();
    let accent = brand.accent.clone();

    view! {
        <Header
            theme=theme.theme
            menu_items=menu
            on_theme_change=theme.toggle
            logo=move || view! { <BrandMark brand=logo_brand.clone() /> }
            right_content=move || view! { <HeaderControls login_label=login_label.clone() /> }
        />
        <main data-page=page.id.clone()>
            <Hero hero=page.hero accent=accent.clone() />
            {page
                .sections
                .into_iter()
                .map(|section| view! { <PageSection section=section accent=accent.clone() /> })
                .collect_view()}
        </main>
        <Footer brand=brand copyright=page.copyright />
    }
}

#[component]
fn PageSection(section: SectionConfig, accent: String) -> impl IntoView {
    match section {
        SectionConfig::Features { title, lead, tone, cards } => {
            view! { <Features title=title lead=lead tone=tone cards=cards /> }.into_any()
        }
        SectionConfig::Stats { tone, stats } => view! { <Stats tone=tone stats=stats /> }.into_any(),
        SectionConfig::Mission { title, paragraphs, tone, highlight } => view! {
            <Mission title=title paragraphs=paragraphs tone=tone highlight=highlight />
        }
        .into_any(),
        SectionConfig::Values { title, tone, items } => {
            view! { <Values title=title tone=tone items=items accent=accent /> }.into_any()
        }
        SectionConfig::Cta { title, lead, tone, actions } => view! {
            <CallToAction title=title lead=lead tone=tone actions=actions accent=accent />
        }
        .into_any(),
    }
}

#[component]
fn BrandMark(brand: BrandConfig) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="flex items-center space-x-2">
            <img src=brand.logo_src alt=brand.name.clone() class="w-8 h-8 rounded-lg object-cover" />
            <span class=move || theme.classes("text-xl font-bold", Role::TextPrimary)>{brand.name}</span>
        </div>
    }
}

/// Theme toggle and login button shown at the trailing edge of the header.
#[component]
fn HeaderControls(login_label: String) -> impl IntoView {
    let theme = use_theme();
    let toggle_class = Signal::derive(move || theme.class(Role::GhostButton).to_string());
    let login_class = Signal::derive(move || theme.class(Role::LoginButton).to_string());

    view! {
        <div class="flex items-center space-x-3" data-header-controls="">
            <Button class=toggle_class on_click=Some(theme.toggle) aria_label="Toggle theme">
                {move || {
                    let icon = if theme.theme.get().is_dark() { Icon::Sun } else { Icon::Moon };
                    view! { <IconSvg icon=icon /> }
                }}
            </Button>
            <Button class=login_class size=ButtonSize::Md>
                <IconSvg icon=Icon::User class="mr-2 h-4 w-4" />
                {login_label}
            </Button>
        </div>
    }
}
