use crate::config::BrandConfig;
use crate::theme::{Role, use_theme};
use leptos::prelude::*;

#[component]
pub fn Footer(brand: BrandConfig, copyright: String) -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=move || theme.classes("py-12 px-4 border-t", Role::Footer)>
            <div class="max-w-7xl mx-auto text-center">
                <div class="flex items-center justify-center space-x-2 mb-4">
                    <img src=brand.logo_src.clone() alt=brand.name.clone() class="w-8 h-8 rounded-lg object-cover" />
                    <span class=move || theme.classes("text-xl font-bold", Role::TextPrimary)>{brand.name.clone()}</span>
                </div>
                <p class=move || theme.class(Role::TextMuted)>{copyright}</p>
            </div>
        </footer>
    }
}
