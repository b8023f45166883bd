//! Site content configuration.
//!
//! Everything that differs between pages (brand, menu, copy, section layout)
//! lives in `site.toml`, embedded at compile time. The page template renders
//! whatever this describes.

use crate::error::{Result, SiteError};
use crate::icons::Icon;
use crate::theme::Theme;
use serde::Deserialize;
use std::collections::HashSet;

/// Content file compiled into the binary.
pub const EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

/// Path of the page every unknown internal destination falls back to.
pub const HOME_PATH: &str = "/";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    /// `EnvFilter` directive for the browser console subscriber.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Theme the shell starts in.
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,
    pub pages: Vec<PageConfig>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandConfig {
    pub name: String,
    pub logo_src: String,
    pub login_label: String,
    /// Gradient stops for primary buttons and headline accents,
    /// e.g. `from-purple-600 to-pink-600`.
    pub accent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemConfig {
    pub text: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<SubMenuItemConfig>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubMenuItemConfig {
    pub text: String,
    #[serde(default)]
    pub description: Option<String>,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub id: String,
    pub path: String,
    pub hero: HeroConfig,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    /// Footer fine print.
    pub copyright: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroConfig {
    pub badge: String,
    pub title: String,
    pub title_accent: String,
    pub lead: String,
    #[serde(default)]
    pub tone: Tone,
    /// Full-bleed background image; switches the hero to light-on-dark text.
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionConfig>,
    #[serde(default)]
    pub video: Option<VideoConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoConfig {
    pub src: String,
    pub thumbnail: String,
    pub alt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionConfig {
    pub label: String,
    /// Destination handed to the shell's navigate callback. Absent means the
    /// button is decorative.
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub style: ActionStyle,
    #[serde(default)]
    pub arrow: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionStyle {
    /// Accent gradient fill.
    #[default]
    Primary,
    /// Themed outline.
    Outline,
    /// White fill for use on the accent band.
    Inverse,
    /// White outline for use on images and the accent band.
    OutlineLight,
}

/// Background a section sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    Surface,
    Alt,
    Accent,
    Page,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionConfig {
    Features {
        title: String,
        lead: String,
        #[serde(default)]
        tone: Tone,
        cards: Vec<CardConfig>,
    },
    Stats {
        #[serde(default = "accent_tone")]
        tone: Tone,
        stats: Vec<StatConfig>,
    },
    Mission {
        title: String,
        paragraphs: Vec<String>,
        #[serde(default)]
        tone: Tone,
        highlight: HighlightConfig,
    },
    Values {
        title: String,
        #[serde(default)]
        tone: Tone,
        items: Vec<ValueConfig>,
    },
    Cta {
        title: String,
        lead: String,
        #[serde(default)]
        tone: Tone,
        actions: Vec<ActionConfig>,
    },
}

fn accent_tone() -> Tone {
    Tone::Accent
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    pub icon: Icon,
    /// Tailwind hue for the icon badge, e.g. `purple`.
    #[serde(default = "default_tint")]
    pub tint: String,
    pub title: String,
    pub description: String,
    /// Check-marked one-liner under the card body.
    #[serde(default)]
    pub highlight: Option<String>,
}

fn default_tint() -> String {
    "purple".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatConfig {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    pub icon: Icon,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValueConfig {
    pub icon: Icon,
    pub title: String,
    pub text: String,
}

impl SiteConfig {
    /// Parse and validate the embedded `site.toml`.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_SITE_TOML)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(SiteError::Invalid("no pages configured".into()));
        }

        let mut ids = HashSet::new();
        let mut paths = HashSet::new();
        for page in &self.pages {
            if !page.path.starts_with('/') {
                return Err(SiteError::Invalid(format!(
                    "page '{}' path '{}' must start with '/'",
                    page.id, page.path
                )));
            }
            if !ids.insert(page.id.as_str()) {
                return Err(SiteError::Invalid(format!("duplicate page id '{}'", page.id)));
            }
            if !paths.insert(page.path.as_str()) {
                return Err(SiteError::Invalid(format!("duplicate page path '{}'", page.path)));
            }
        }

        if !paths.contains(HOME_PATH) {
            return Err(SiteError::Invalid(format!("no page mounted at '{HOME_PATH}'")));
        }

        Ok(())
    }

    /// The page mounted at `/`, else the first page. Only `None` for a
    /// config that skipped validation and has no pages.
    pub fn home(&self) -> Option<&PageConfig> {
        self.pages
            .iter()
            .find(|page| page.path == HOME_PATH)
            .or_else(|| self.pages.first())
    }

    pub fn page(&self, id: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn page_by_path(&self, path: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|page| page.path == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"
        [brand]
        name = "Acme"
        logo_src = "/logo.png"
        login_label = "Sign in"
        accent = "from-blue-600 to-cyan-600"

        [[menu]]
        text = "Services"
        [[menu.items]]
        text = "Web"
        to = "/web"

        [[menu]]
        text = "Contact"
        to = "/contact"

        [[pages]]
        id = "home"
        path = "/"
        copyright = "(c) Acme"
        [pages.hero]
        badge = "New"
        title = "Hello"
        title_accent = "World"
        lead = "Lead"
    "#;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::embedded().expect("embedded site.toml must parse");
        assert_eq!(config.home().map(|page| page.id.as_str()), Some("home"));
        assert!(config.page_by_path("/om-oss").is_some());
        assert!(!config.menu.is_empty());
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = SiteConfig::from_toml_str(MINIMAL).expect("minimal config parses");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.menu.len(), 2);
        assert!(config.menu[0].items.is_some());
        assert_eq!(config.menu[1].to.as_deref(), Some("/contact"));
        let home = config.home().expect("home page");
        assert!(home.sections.is_empty());
        assert!(home.hero.video.is_none());
    }

    #[test]
    fn sections_deserialize_by_kind() {
        let doc = format!(
            "{MINIMAL}\n{}",
            r#"
            [[pages.sections]]
            kind = "stats"
            [[pages.sections.stats]]
            value = "24/7"
            label = "Support"

            [[pages.sections]]
            kind = "cta"
            title = "Ready?"
            lead = "Go"
            [[pages.sections.actions]]
            label = "Book"
            to = "https://example.com/#booking"
            style = "outline-light"
            "#
        );
        let config = SiteConfig::from_toml_str(&doc).expect("sections parse");
        let sections = &config.home().expect("home page").sections;
        assert_eq!(sections.len(), 2);
        match &sections[0] {
            SectionConfig::Stats { tone, stats } => {
                assert_eq!(*tone, Tone::Accent);
                assert_eq!(stats[0].value, "24/7");
            }
            other => panic!("expected stats, got {other:?}"),
        }
        match &sections[1] {
            SectionConfig::Cta { actions, .. } => {
                assert_eq!(actions[0].style, ActionStyle::OutlineLight);
                assert!(!actions[0].arrow);
            }
            other => panic!("expected cta, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_home_page() {
        let doc = MINIMAL.replace(r#"path = "/""#, r#"path = "/start""#);
        let err = SiteConfig::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, SiteError::Invalid(_)));
        assert!(err.to_string().contains("no page mounted"));
    }

    #[test]
    fn rejects_duplicate_paths() {
        let extra = r#"
            [[pages]]
            id = "other"
            path = "/"
            copyright = "x"
            [pages.hero]
            badge = "b"
            title = "t"
            title_accent = "a"
            lead = "l"
        "#;
        let err = SiteConfig::from_toml_str(&format!("{MINIMAL}{extra}")).unwrap_err();
        assert!(err.to_string().contains("duplicate page path"));
    }

    #[test]
    fn rejects_relative_paths() {
        let doc = MINIMAL.replace(r#"path = "/""#, r#"path = "home""#);
        let err = SiteConfig::from_toml_str(&doc).unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("[brand\nname = ").unwrap_err();
        assert!(matches!(err, SiteError::Parse(_)));
    }

    #[test]
    fn unknown_icon_is_rejected() {
        let doc = format!(
            "{MINIMAL}\n{}",
            r#"
            [[pages.sections]]
            kind = "values"
            title = "Why"
            [[pages.sections.items]]
            icon = "unicorn"
            title = "t"
            text = "x"
            "#
        );
        assert!(matches!(SiteConfig::from_toml_str(&doc), Err(SiteError::Parse(_))));
    }

    #[test]
    fn unvalidated_config_without_pages_has_no_home() {
        let mut config = SiteConfig::from_toml_str(MINIMAL).expect("minimal config parses");
        config.pages.clear();
        assert!(config.home().is_none());
        assert!(matches!(config.validate(), Err(SiteError::Invalid(_))));
    }
}
