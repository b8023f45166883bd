//! Destination resolution for the page shell.
//!
//! The header and sections only hand a `to` string to the shell; this module
//! decides whether that means switching page or opening a new browser tab.

use crate::config::SiteConfig;
use leptos::prelude::*;

/// Where a `to` reference leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// A configured page, by id.
    Page(String),
    /// Absolute URL opened in a new browsing context.
    External(String),
}

/// Provided by [`crate::App`]; sections use it to follow configured actions.
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub navigate: Callback<String>,
}

pub fn is_external(to: &str) -> bool {
    to.starts_with("http://") || to.starts_with("https://")
}

/// Resolve `to` against the configured pages. Unknown internal paths land on
/// the home page.
pub fn resolve(config: &SiteConfig, to: &str) -> Destination {
    if is_external(to) {
        return Destination::External(to.to_string());
    }

    let path = to.split(['#', '?']).next().unwrap_or(to);
    match config.page_by_path(path) {
        Some(page) => Destination::Page(page.id.clone()),
        None => {
            tracing::debug!(to, "no page at destination, falling back to home");
            Destination::Page(config.home().map(|page| page.id.clone()).unwrap_or_default())
        }
    }
}

/// Open `url` in a new tab. No-op outside a browser.
pub fn open_external(url: &str) {
    tracing::info!(url, "opening external link");
    let Some(window) = web_sys::window() else {
        tracing::warn!(url, "no window available, external link dropped");
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!(url, error = ?err, "window.open failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::embedded().expect("embedded site.toml must parse")
    }

    #[test]
    fn http_and_https_are_external() {
        let config = config();
        assert_eq!(
            resolve(&config, "https://service.axiestudio.se/en#contact"),
            Destination::External("https://service.axiestudio.se/en#contact".into())
        );
        assert_eq!(
            resolve(&config, "http://example.com"),
            Destination::External("http://example.com".into())
        );
    }

    #[test]
    fn configured_path_switches_page() {
        assert_eq!(resolve(&config(), "/om-oss"), Destination::Page("about".into()));
        assert_eq!(resolve(&config(), "/"), Destination::Page("home".into()));
    }

    #[test]
    fn fragment_and_query_are_ignored_for_matching() {
        assert_eq!(resolve(&config(), "/om-oss#mission"), Destination::Page("about".into()));
        assert_eq!(resolve(&config(), "/om-oss?ref=nav"), Destination::Page("about".into()));
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(
            resolve(&config(), "/tjanster/webbutveckling"),
            Destination::Page("home".into())
        );
        assert_eq!(resolve(&config(), ""), Destination::Page("home".into()));
    }

    #[test]
    fn external_detection_needs_scheme() {
        assert!(is_external("https://a.b"));
        assert!(!is_external("/https"));
        assert!(!is_external("mailto:hej@axiestudio.se"));
    }
}
