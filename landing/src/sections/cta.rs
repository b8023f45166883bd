use super::tone_role;
use super::ui::ActionButtons;
use crate::config::{ActionConfig, Tone};
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

#[component]
pub fn CallToAction(
    title: String,
    lead: String,
    tone: Tone,
    actions: Vec<ActionConfig>,
    accent: String,
) -> impl IntoView {
    let theme = use_theme();
    let role = tone_role(tone);
    let on_accent = tone == Tone::Accent;

    let title_class = move || {
        if on_accent {
            "text-4xl md:text-5xl font-bold mb-6 text-white".to_string()
        } else {
            theme.classes("text-4xl md:text-5xl font-bold mb-6", Role::TextPrimary)
        }
    };
    let lead_class = move || {
        if on_accent {
            "text-xl mb-8 text-purple-100".to_string()
        } else {
            theme.classes("text-xl mb-8", Role::TextSecondary)
        }
    };

    view! {
        <section class=move || theme.classes("py-20 px-4", role) data-section="cta">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class=title_class>{title}</h2>
                <p class=lead_class>{lead}</p>
                <ActionButtons actions=actions accent=accent />
            </div>
        </section>
    }
}
