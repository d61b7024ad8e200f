//! # Home List State
//!
//! Ephemeral state behind the Home screen: the search field text, the
//! active bottom-navigation tab and the per-flower checkbox flags.
//!
//! Lives inside `ScreenState::Home` and is dropped when navigation leaves
//! Home, so returning always starts from `HomeListState::new`.
//!
//! The search text is stored and echoed back to the field but does not
//! filter the garden list. `visible_flowers` always returns the full list.

use log::warn;
use std::collections::HashMap;

use crate::core::catalog::{Catalog, CatalogItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Home,
    Favourites,
    Profile,
    Cart,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Favourites, Tab::Profile, Tab::Cart];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Favourites => "Favorites",
            Tab::Profile => "Profile",
            Tab::Cart => "Cart",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Favourites => 1,
            Tab::Profile => 2,
            Tab::Cart => 3,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct HomeListState {
    search_text: String,
    active_tab: Tab,
    // Keys are always flower titles; created on first toggle.
    selection: HashMap<String, bool>,
    catalog: Catalog,
}

impl HomeListState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            search_text: String::new(),
            active_tab: Tab::default(),
            selection: HashMap::new(),
            catalog,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Flip the checkbox for `title` and return its new value.
    ///
    /// Titles that are not in the flower list are ignored and report `false`.
    pub fn toggle_selected(&mut self, title: &str) -> bool {
        if !self.catalog.is_flower(title) {
            warn!("Ignoring selection toggle for unknown flower '{}'", title);
            return false;
        }
        let checked = self.selection.entry(title.to_string()).or_insert(false);
        *checked = !*checked;
        *checked
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.selection.get(title).copied().unwrap_or(false)
    }

    /// Flowers to show in the garden list. Never filtered by the search text.
    pub fn visible_flowers(&self) -> &'static [CatalogItem] {
        self.catalog.flowers
    }

    pub fn selected_count(&self) -> usize {
        self.selection.values().filter(|checked| **checked).count()
    }

    /// Number of stored selection entries, checked or not.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }
}
