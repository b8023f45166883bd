//! Light/dark theme and the palette lookup table.
//!
//! Sections never branch on the theme themselves. They ask for a semantic
//! [`Role`] and the [`Palette`] resolves it to concrete utility classes, so the
//! whole light/dark mapping lives in [`Palette::class`].

use leptos::prelude::*;
use serde::Deserialize;

/// Two-valued theme flag owned by the page shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Semantic styling slots used across the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Page background behind every section.
    Page,
    /// Sticky header bar background and bottom border.
    HeaderBar,
    /// Top-level nav links and dropdown triggers.
    NavLink,
    /// Floating dropdown panel on wide viewports.
    DropdownPanel,
    /// Entries inside the desktop dropdown panel.
    DropdownLink,
    /// Secondary line under a dropdown entry.
    DropdownDescription,
    /// Sub-entries inside the mobile panel.
    MobileSubLink,
    /// Hairline borders between header regions.
    Divider,
    /// Hamburger / close control.
    MenuButton,
    /// Default section background.
    Surface,
    /// Alternating section background (soft gradient in light mode).
    SurfaceAlt,
    /// Full-bleed accent band (stats, about-page CTA).
    AccentBand,
    /// Card sitting on [`Role::Surface`].
    Card,
    /// Card sitting on [`Role::SurfaceAlt`].
    CardInset,
    /// Highlight panel next to long-form copy.
    Highlight,
    /// Headings and other primary text.
    TextPrimary,
    /// Body copy.
    TextSecondary,
    /// Fine print.
    TextMuted,
    /// Footer background and top border.
    Footer,
    /// Icon-only ghost button (theme toggle).
    GhostButton,
    /// Login button in the header.
    LoginButton,
    /// Outlined secondary call-to-action.
    OutlineButton,
}

impl Role {
    pub const ALL: [Role; 22] = [
        Role::Page,
        Role::HeaderBar,
        Role::NavLink,
        Role::DropdownPanel,
        Role::DropdownLink,
        Role::DropdownDescription,
        Role::MobileSubLink,
        Role::Divider,
        Role::MenuButton,
        Role::Surface,
        Role::SurfaceAlt,
        Role::AccentBand,
        Role::Card,
        Role::CardInset,
        Role::Highlight,
        Role::TextPrimary,
        Role::TextSecondary,
        Role::TextMuted,
        Role::Footer,
        Role::GhostButton,
        Role::LoginButton,
        Role::OutlineButton,
    ];
}

/// Resolves roles to classes for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    theme: Theme,
}

impl Palette {
    pub const fn for_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(self) -> Theme {
        self.theme
    }

    /// Class string for `role`. Left column is light, right column is dark.
    pub const fn class(self, role: Role) -> &'static str {
        let (light, dark) = match role {
            Role::Page => ("bg-white", "bg-gray-900"),
            Role::HeaderBar => ("bg-white/80 border-gray-200", "bg-gray-900/80 border-gray-700"),
            Role::NavLink => (
                "text-gray-700 hover:text-gray-900 hover:bg-gray-100",
                "text-gray-300 hover:text-white hover:bg-gray-800",
            ),
            Role::DropdownPanel => ("bg-white border-gray-200", "bg-gray-800 border-gray-700"),
            Role::DropdownLink => (
                "text-gray-700 hover:text-gray-900 hover:bg-gray-50",
                "text-gray-300 hover:text-white hover:bg-gray-700",
            ),
            Role::DropdownDescription => ("text-gray-500", "text-gray-400"),
            Role::MobileSubLink => (
                "text-gray-600 hover:text-gray-900 hover:bg-gray-100",
                "text-gray-400 hover:text-white hover:bg-gray-800",
            ),
            Role::Divider => ("border-gray-200", "border-gray-700"),
            Role::MenuButton => ("text-gray-900 hover:bg-gray-100", "text-white hover:bg-gray-800"),
            Role::Surface => ("bg-white", "bg-gray-800"),
            Role::SurfaceAlt => ("bg-gradient-to-br from-purple-50 to-pink-50", "bg-gray-900"),
            Role::AccentBand => ("bg-gradient-to-r from-purple-600 to-pink-600", "bg-gray-900"),
            Role::Card => ("bg-white border-gray-200", "bg-gray-700 border-gray-600"),
            Role::CardInset => ("bg-white border-gray-200", "bg-gray-800 border-gray-700"),
            Role::Highlight => ("bg-gradient-to-br from-purple-100 to-pink-100", "bg-gray-700"),
            Role::TextPrimary => ("text-gray-900", "text-white"),
            Role::TextSecondary => ("text-gray-600", "text-gray-300"),
            Role::TextMuted => ("text-gray-600", "text-gray-400"),
            Role::Footer => ("bg-gray-50 border-gray-200", "bg-gray-900 border-gray-700"),
            Role::GhostButton => ("text-gray-700 hover:bg-gray-100", "text-white hover:bg-gray-800"),
            Role::LoginButton => (
                "bg-gray-900 text-white hover:bg-gray-800",
                "border border-gray-600 bg-transparent text-white hover:bg-gray-800",
            ),
            Role::OutlineButton => (
                "border border-gray-300 text-gray-900 hover:bg-gray-100",
                "border border-gray-600 text-white hover:bg-gray-800",
            ),
        };
        match self.theme {
            Theme::Light => light,
            Theme::Dark => dark,
        }
    }
}

/// Theme state shared from the shell to every section via context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    /// Reactive class lookup; call inside a `move ||` closure.
    pub fn class(&self, role: Role) -> &'static str {
        Palette::for_theme(self.theme.get()).class(role)
    }

    /// `base` followed by the role's classes.
    pub fn classes(&self, base: &str, role: Role) -> String {
        format!("{} {}", base, self.class(role))
    }
}

/// Theme context provided by [`crate::App`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
