use super::tone_role;
use crate::config::{HighlightConfig, Tone};
use crate::icons::IconSvg;
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

/// Long-form copy with a highlight panel alongside.
#[component]
pub fn Mission(
    title: String,
    paragraphs: Vec<String>,
    tone: Tone,
    highlight: HighlightConfig,
) -> impl IntoView {
    let theme = use_theme();
    let role = tone_role(tone);
    let last = paragraphs.len().saturating_sub(1);

    view! {
        <section class=move || theme.classes("py-20 px-4", role) data-section="mission">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class=move || theme.classes("text-4xl font-bold mb-6", Role::TextPrimary)>{title}</h2>
                        {paragraphs
                            .into_iter()
                            .enumerate()
                            .map(|(i, text)| {
                                let base = if i == last { "text-lg" } else { "text-lg mb-6" };
                                view! { <p class=move || theme.classes(base, Role::TextSecondary)>{text}</p> }
                            })
                            .collect_view()}
                    </div>
                    <div class="relative">
                        <div class=move || theme.classes("p-8 rounded-2xl", Role::Highlight)>
                            <IconSvg icon=highlight.icon class="w-16 h-16 text-purple-600 mb-4" />
                            <h3 class=move || theme.classes("text-2xl font-bold mb-4", Role::TextPrimary)>
                                {highlight.title}
                            </h3>
                            <p class=move || theme.class(Role::TextSecondary)>{highlight.text}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
