use super::tone_role;
use crate::config::{Tone, ValueConfig};
use crate::icons::IconSvg;
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

#[component]
pub fn Values(title: String, tone: Tone, items: Vec<ValueConfig>, accent: String) -> impl IntoView {
    let theme = use_theme();
    let role = tone_role(tone);
    let bubble = format!(
        "w-16 h-16 bg-gradient-to-br {accent} rounded-full flex items-center justify-center mx-auto mb-4"
    );

    view! {
        <section class=move || theme.classes("py-20 px-4", role) data-section="values">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class=move || theme.classes("text-4xl md:text-5xl font-bold mb-6", Role::TextPrimary)>
                        {title}
                    </h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <div class="text-center">
                                <div class=bubble.clone()>
                                    <IconSvg icon=item.icon class="w-8 h-8 text-white" />
                                </div>
                                <h3 class=move || theme.classes("text-xl font-bold mb-2", Role::TextPrimary)>
                                    {item.title}
                                </h3>
                                <p class=move || theme.classes("text-sm", Role::TextSecondary)>{item.text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
