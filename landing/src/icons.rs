//! Inline SVG icons (Lucide, 24px grid, stroke based).
//!
//! Circles are expressed as two arcs so every icon is a list of `d` strings.

use leptos::prelude::*;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ArrowRight,
    Award,
    Bot,
    Brain,
    CheckCircle,
    ChevronDown,
    Clock,
    Globe,
    Menu,
    MessageSquare,
    Moon,
    Play,
    Shield,
    Sun,
    User,
    Users,
    X,
    Zap,
}

impl Icon {
    /// Path data for the icon, drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Award => &[
                "m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526",
                "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12",
            ],
            Icon::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Icon::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
                "M12 5v13",
            ],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Clock => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20", "M12 6v6l4 2"],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            Icon::Play => &["m6 3 14 9-14 9V3z"],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Icon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
        }
    }
}

/// Renders an inline stroke icon.
///
/// ```rust,ignore
/// view! { <IconSvg icon=Icon::Globe class="w-6 h-6 text-purple-600" /> }
/// ```
#[component]
pub fn IconSvg(
    icon: Icon,
    /// Size and color classes
    #[prop(into, default = String::from("h-4 w-4"))]
    class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
