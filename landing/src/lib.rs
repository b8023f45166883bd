//! # axie-landing
//!
//! Axie Studio marketing site built with [Leptos](https://leptos.dev/) 0.8 in
//! client-side rendering mode.
//!
//! All pages share one template ([`pages::LandingPage`]) driven by the
//! embedded `site.toml`; the only stateful component is the navigation
//! [`sections::Header`] with its dropdowns and mobile panel.
//!
//! ## Architecture
//!
//! - [`config`] - `site.toml` schema and validation
//! - [`menu`] - menu model, synthetic keys, callback binding
//! - [`nav_state`] - header state machine
//! - [`theme`] - light/dark flag and the role palette
//! - [`navigation`] - destination resolution for the shell
//! - [`sections`] - header, hero and content sections
//! - [`pages`] - page template
//! - [`logging`] - tracing subscriber for the browser console
//!
//! ## Rendering without a browser
//!
//! Components render to a string through Leptos' `RenderHtml` trait, which is
//! how the tests inspect markup:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <Header menu_items=menu /> }.to_html();
//! ```

#![recursion_limit = "256"]

pub mod app;
pub mod config;
pub mod error;
pub mod icons;
pub mod logging;
pub mod menu;
pub mod nav_state;
pub mod navigation;
pub mod pages;
pub mod sections;
pub mod theme;

pub use app::{App, ConfigErrorNotice, Shell, ShellView};
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use menu::{EntryMode, MenuItem, MenuKey, SubMenuItem};
pub use nav_state::NavState;
pub use theme::{Palette, Role, Theme, ThemeContext};
