//! Navigation menu model.
//!
//! [`MenuItemConfig`](crate::config::MenuItemConfig) is what `site.toml`
//! describes; [`MenuItem`] is what the header renders. Building the menu assigns
//! every top-level entry a [`MenuKey`] (its position) and binds every leaf to
//! the shell's navigate callback.

use crate::config::{MenuItemConfig, SubMenuItemConfig};
use leptos::prelude::*;
use std::collections::HashMap;

/// Stable identity of a top-level entry within one menu.
///
/// Dropdown state is keyed by this instead of the label so two entries with
/// the same text never open together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuKey(usize);

impl MenuKey {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// How a top-level entry renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    /// `items` present: trigger + dropdown panel.
    Dropdown,
    /// `to` present, no `items`: plain link.
    Link,
    /// Neither: inert label.
    Label,
}

/// Leaf entry inside a dropdown.
#[derive(Clone)]
pub struct SubMenuItem {
    pub text: String,
    pub description: Option<String>,
    pub to: String,
    pub on_click: Option<Callback<()>>,
}

impl SubMenuItem {
    pub fn new(text: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
            to: to.into(),
            on_click: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_on_click(mut self, on_click: Callback<()>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    /// Runs the bound callback. Returns `false` when there is none and the
    /// browser should follow `to` natively.
    pub fn select(&self) -> bool {
        select(self.on_click)
    }
}

/// Top-level navigation entry.
#[derive(Clone)]
pub struct MenuItem {
    pub key: MenuKey,
    pub text: String,
    pub to: Option<String>,
    pub items: Option<Vec<SubMenuItem>>,
    pub on_click: Option<Callback<()>>,
}

impl MenuItem {
    pub fn link(key: MenuKey, text: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            key,
            text: text.into(),
            to: Some(to.into()),
            items: None,
            on_click: None,
        }
    }

    pub fn parent(key: MenuKey, text: impl Into<String>, items: Vec<SubMenuItem>) -> Self {
        Self {
            key,
            text: text.into(),
            to: None,
            items: Some(items),
            on_click: None,
        }
    }

    pub fn with_on_click(mut self, on_click: Callback<()>) -> Self {
        self.on_click = Some(on_click);
        self
    }

    /// Presence of `items` alone decides dropdown mode, even when empty.
    pub fn mode(&self) -> EntryMode {
        match (&self.items, &self.to) {
            (Some(_), _) => EntryMode::Dropdown,
            (None, Some(_)) => EntryMode::Link,
            (None, None) => EntryMode::Label,
        }
    }

    pub fn select(&self) -> bool {
        select(self.on_click)
    }
}

fn select(on_click: Option<Callback<()>>) -> bool {
    match on_click {
        Some(callback) => {
            callback.run(());
            true
        }
        None => false,
    }
}

/// Build the renderable menu from config, keying entries by position.
///
/// With `navigate`, every entry that has a destination gets an `on_click`
/// that hands that destination to the shell.
pub fn build_menu(config: &[MenuItemConfig], navigate: Option<Callback<String>>) -> Vec<MenuItem> {
    let duplicates = duplicate_labels(config);
    if !duplicates.is_empty() {
        tracing::warn!(labels = ?duplicates, "menu has duplicate top-level labels");
    }

    config
        .iter()
        .enumerate()
        .map(|(index, entry)| MenuItem {
            key: MenuKey::new(index),
            text: entry.text.clone(),
            to: entry.to.clone(),
            items: entry
                .items
                .as_ref()
                .map(|items| items.iter().map(|sub| build_sub_item(sub, navigate)).collect()),
            on_click: entry.to.as_ref().and_then(|to| bind(to, navigate)),
        })
        .collect()
}

fn build_sub_item(config: &SubMenuItemConfig, navigate: Option<Callback<String>>) -> SubMenuItem {
    SubMenuItem {
        text: config.text.clone(),
        description: config.description.clone(),
        to: config.to.clone(),
        on_click: bind(&config.to, navigate),
    }
}

fn bind(to: &str, navigate: Option<Callback<String>>) -> Option<Callback<()>> {
    let navigate = navigate?;
    let to = to.to_string();
    Some(Callback::new(move |()| navigate.run(to.clone())))
}

/// Top-level labels that occur more than once, in first-seen order.
pub fn duplicate_labels(config: &[MenuItemConfig]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for entry in config {
        let count = seen.entry(entry.text.as_str()).or_default();
        *count += 1;
        if *count == 2 {
            duplicates.push(entry.text.clone());
        }
    }
    duplicates
}
