use super::ui::Card;
use super::tone_role;
use crate::config::{CardConfig, Tone};
use crate::icons::{Icon, IconSvg};
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

#[component]
pub fn Features(title: String, lead: String, tone: Tone, cards: Vec<CardConfig>) -> impl IntoView {
    let theme = use_theme();
    let role = tone_role(tone);
    let card_role = if tone == Tone::Alt { Role::CardInset } else { Role::Card };
    let columns = if cards.len() > 3 { "grid md:grid-cols-2 lg:grid-cols-4 gap-8" } else { "grid md:grid-cols-2 lg:grid-cols-3 gap-8" };

    view! {
        <section class=move || theme.classes("py-20 px-4", role) data-section="features">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class=move || theme.classes("text-4xl md:text-5xl font-bold mb-6", Role::TextPrimary)>
                        {title}
                    </h2>
                    <p class=move || theme.classes("text-xl max-w-2xl mx-auto", Role::TextSecondary)>
                        {lead}
                    </p>
                </div>
                <div class=columns>
                    {cards
                        .into_iter()
                        .map(|card| view! { <FeatureCard card=card role=card_role /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(card: CardConfig, role: Role) -> impl IntoView {
    let theme = use_theme();
    let badge_class = format!("w-12 h-12 bg-{}-100 rounded-lg flex items-center justify-center mb-4", card.tint);
    let icon_class = format!("w-6 h-6 text-{}-600", card.tint);

    view! {
        <Card role=role>
            <div class=badge_class>
                <IconSvg icon=card.icon class=icon_class />
            </div>
            <h3 class=move || theme.classes("text-2xl font-semibold leading-none tracking-tight mb-2", Role::TextPrimary)>
                {card.title}
            </h3>
            <p class=move || theme.classes("text-sm", Role::TextSecondary)>{card.description}</p>
            {card.highlight.map(|highlight| view! {
                <div class="flex items-center space-x-2 mt-4">
                    <IconSvg icon=Icon::CheckCircle class="w-5 h-5 text-green-500" />
                    <span class=move || theme.classes("text-sm", Role::TextSecondary)>{highlight}</span>
                </div>
            })}
        </Card>
    }
}
