use super::tone_role;
use crate::config::{StatConfig, Tone};
use crate::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn Stats(tone: Tone, stats: Vec<StatConfig>) -> impl IntoView {
    let theme = use_theme();
    let role = tone_role(tone);

    view! {
        <section class=move || theme.classes("py-20 px-4", role) data-section="stats">
            <div class="max-w-7xl mx-auto">
                <div class="grid md:grid-cols-4 gap-8 text-center">
                    {stats
                        .into_iter()
                        .map(|stat| view! {
                            <div>
                                <div class="text-4xl md:text-5xl font-bold text-white mb-2">{stat.value}</div>
                                <div class="text-purple-100">{stat.label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
