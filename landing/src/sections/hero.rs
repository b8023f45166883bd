use super::tone_role;
use super::ui::{ActionButtons, Badge};
use super::video_dialog::VideoDialog;
use crate::config::HeroConfig;
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

#[component]
pub fn Hero(hero: HeroConfig, accent: String) -> impl IntoView {
    let theme = use_theme();
    let on_image = hero.background.is_some();
    let role = tone_role(hero.tone);

    let section_class = move || {
        if on_image {
            "py-20 px-4 relative bg-cover bg-center bg-no-repeat bg-gray-900".to_string()
        } else {
            theme.classes("py-20 px-4 relative", role)
        }
    };
    let title_class = move || {
        if on_image {
            "text-5xl md:text-7xl font-bold mb-6 text-white".to_string()
        } else {
            theme.classes("text-5xl md:text-7xl font-bold mb-6", Role::TextPrimary)
        }
    };
    let lead_class = move || {
        if on_image {
            "text-xl md:text-2xl mb-8 max-w-3xl mx-auto text-gray-200".to_string()
        } else {
            theme.classes("text-xl md:text-2xl mb-8 max-w-3xl mx-auto", Role::TextSecondary)
        }
    };
    let style = hero
        .background
        .as_ref()
        .map(|src| format!("background-image: url('{src}');"))
        .unwrap_or_default();
    let accent_class = format!("bg-gradient-to-r {accent} bg-clip-text text-transparent");
    let has_actions = !hero.actions.is_empty();

    view! {
        <section class=section_class style=style data-section="hero">
            {on_image.then(|| view! { <div class="absolute inset-0 bg-black/50"></div> })}
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16 relative z-10">
                    <Badge>{hero.badge}</Badge>
                    <h1 class=title_class>
                        {hero.title}
                        <span class=accent_class>{format!(" {}", hero.title_accent)}</span>
                    </h1>
                    <p class=lead_class>{hero.lead}</p>
                    {has_actions.then(|| view! { <ActionButtons actions=hero.actions accent=accent.clone() /> })}
                </div>
                {hero.video.map(|video| view! {
                    <div class="max-w-4xl mx-auto relative z-10">
                        <VideoDialog video=video />
                    </div>
                })}
            </div>
        </section>
    }
}
