//! Client runtime state model.
//!
//! The browser runtime (`static/app.js`, shipped into every generated site)
//! keeps a small amount of state in local storage: theme choice, sidebar
//! collapse, favorite tools, and recently viewed tools. This module is the
//! reference implementation of that state machine — same keys, same
//! encodings, same mutation semantics — behind a [`KeyValueStore`]
//! abstraction so the logic is testable without a browser.
//!
//! ## Storage contract
//!
//! All key names live in [`keys`]; `static/app.js` mirrors that table and
//! must stay in sync with it.
//!
//! | key                     | encoding                          |
//! |-------------------------|-----------------------------------|
//! | `kit-theme`             | plain string: `light`/`dark`/`auto` |
//! | `kit-sidebar-collapsed` | `"true"` / `"false"`              |
//! | `kit-favorites`         | JSON array of tool ids            |
//! | `kit-recent`            | JSON array of tool ids, max 10    |
//!
//! Absent or malformed values fall back to defaults — storage absence is
//! never an error.
//!
//! ## Semantics
//!
//! - Favorites: toggle inserts at front when absent, removes when present.
//! - Recent: a page view removes any existing occurrence of the tool id,
//!   inserts it at front, and truncates to [`RECENT_LIMIT`] entries.
//! - Theme `auto` resolves against the OS-reported scheme at apply time;
//!   the browser re-applies on scheme change while `auto` is active.
//! - Every mutation writes through to storage immediately.

use std::collections::BTreeMap;

/// Local storage key names. One table, one source of truth.
pub mod keys {
    pub const THEME: &str = "kit-theme";
    pub const SIDEBAR_COLLAPSED: &str = "kit-sidebar-collapsed";
    pub const FAVORITES: &str = "kit-favorites";
    pub const RECENT: &str = "kit-recent";
}

/// Maximum entries kept in the recent-tools list.
pub const RECENT_LIMIT: usize = 10;

/// User theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    /// Parse a stored theme string. Unknown values → `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }
}

/// The OS-reported color scheme, as seen through `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Light,
    Dark,
}

/// Resolve the applied scheme for a theme choice. `Auto` follows the
/// system; resolution is stateless, so a system change while in `Auto`
/// re-resolves on the next apply.
pub fn resolve_theme(theme: Theme, system: Scheme) -> Scheme {
    match theme {
        Theme::Light => Scheme::Light,
        Theme::Dark => Scheme::Dark,
        Theme::Auto => system,
    }
}

/// Minimal key-value store: the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store used by tests and any host without a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// The complete client-side application state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub favorites: Vec<String>,
    pub recent: Vec<String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            sidebar_collapsed: false,
            favorites: Vec::new(),
            recent: Vec::new(),
        }
    }
}

fn read_list(store: &impl KeyValueStore, key: &str) -> Vec<String> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn write_list(store: &mut impl KeyValueStore, key: &str, list: &[String]) {
    let json = serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string());
    store.set(key, &json);
}

impl ClientState {
    /// Load state from storage. Absent or malformed values become defaults.
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            theme: store
                .get(keys::THEME)
                .and_then(|v| Theme::parse(&v))
                .unwrap_or_default(),
            sidebar_collapsed: store
                .get(keys::SIDEBAR_COLLAPSED)
                .map(|v| v == "true")
                .unwrap_or(false),
            favorites: read_list(store, keys::FAVORITES),
            recent: read_list(store, keys::RECENT),
        }
    }

    pub fn set_theme(&mut self, store: &mut impl KeyValueStore, theme: Theme) {
        self.theme = theme;
        store.set(keys::THEME, theme.as_str());
    }

    pub fn set_sidebar_collapsed(&mut self, store: &mut impl KeyValueStore, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
        store.set(
            keys::SIDEBAR_COLLAPSED,
            if collapsed { "true" } else { "false" },
        );
    }

    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.favorites.iter().any(|id| id == tool_id)
    }

    /// Toggle a favorite: remove if present, insert at front if absent.
    /// Returns whether the tool is a favorite afterwards.
    pub fn toggle_favorite(&mut self, store: &mut impl KeyValueStore, tool_id: &str) -> bool {
        let now_favorite = if let Some(pos) = self.favorites.iter().position(|id| id == tool_id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.insert(0, tool_id.to_string());
            true
        };
        write_list(store, keys::FAVORITES, &self.favorites);
        now_favorite
    }

    /// Record a tool page view: dedup-and-promote to the front, capped at
    /// [`RECENT_LIMIT`] entries.
    pub fn record_visit(&mut self, store: &mut impl KeyValueStore, tool_id: &str) {
        if let Some(pos) = self.recent.iter().position(|id| id == tool_id) {
            self.recent.remove(pos);
        }
        self.recent.insert(0, tool_id.to_string());
        self.recent.truncate(RECENT_LIMIT);
        write_list(store, keys::RECENT, &self.recent);
    }

    /// Erase both persisted lists. The interactive confirmation lives in
    /// the browser layer; this is the irreversible part.
    pub fn clear_saved_lists(&mut self, store: &mut impl KeyValueStore) {
        self.favorites.clear();
        self.recent.clear();
        store.remove(keys::FAVORITES);
        store.remove(keys::RECENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_and_store() -> (ClientState, MemoryStore) {
        (ClientState::default(), MemoryStore::default())
    }

    #[test]
    fn load_from_empty_store_gives_defaults() {
        let store = MemoryStore::default();
        let state = ClientState::load(&store);
        assert_eq!(state, ClientState::default());
    }

    #[test]
    fn load_ignores_malformed_values() {
        let mut store = MemoryStore::default();
        store.set(keys::THEME, "sepia");
        store.set(keys::FAVORITES, "not json");
        let state = ClientState::load(&store);
        assert_eq!(state.theme, Theme::Auto);
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn theme_round_trips_as_plain_string() {
        let (mut state, mut store) = state_and_store();
        state.set_theme(&mut store, Theme::Dark);
        assert_eq!(store.get(keys::THEME).as_deref(), Some("dark"));
        assert_eq!(ClientState::load(&store).theme, Theme::Dark);
    }

    #[test]
    fn auto_resolves_to_system_scheme() {
        assert_eq!(resolve_theme(Theme::Auto, Scheme::Dark), Scheme::Dark);
        assert_eq!(resolve_theme(Theme::Auto, Scheme::Light), Scheme::Light);
    }

    #[test]
    fn auto_follows_system_change() {
        // Stateless resolution: the same Auto choice tracks the system
        let before = resolve_theme(Theme::Auto, Scheme::Light);
        let after = resolve_theme(Theme::Auto, Scheme::Dark);
        assert_eq!(before, Scheme::Light);
        assert_eq!(after, Scheme::Dark);
    }

    #[test]
    fn explicit_theme_ignores_system_scheme() {
        assert_eq!(resolve_theme(Theme::Light, Scheme::Dark), Scheme::Light);
        assert_eq!(resolve_theme(Theme::Dark, Scheme::Light), Scheme::Dark);
    }

    #[test]
    fn toggle_favorite_inserts_at_front() {
        let (mut state, mut store) = state_and_store();
        assert!(state.toggle_favorite(&mut store, "percentage"));
        assert!(state.toggle_favorite(&mut store, "bmi"));
        assert_eq!(state.favorites, vec!["bmi", "percentage"]);
    }

    #[test]
    fn toggle_twice_restores_list() {
        let (mut state, mut store) = state_and_store();
        state.toggle_favorite(&mut store, "percentage");
        state.toggle_favorite(&mut store, "bmi");
        let before = state.favorites.clone();

        state.toggle_favorite(&mut store, "discount");
        state.toggle_favorite(&mut store, "discount");
        assert_eq!(state.favorites, before);
    }

    #[test]
    fn re_adding_a_removed_favorite_goes_to_front() {
        let (mut state, mut store) = state_and_store();
        state.toggle_favorite(&mut store, "percentage");
        state.toggle_favorite(&mut store, "bmi");
        // percentage currently at the back; remove and re-add
        state.toggle_favorite(&mut store, "percentage");
        state.toggle_favorite(&mut store, "percentage");
        assert_eq!(state.favorites, vec!["percentage", "bmi"]);
    }

    #[test]
    fn favorites_persist_through_store() {
        let (mut state, mut store) = state_and_store();
        state.toggle_favorite(&mut store, "percentage");
        let reloaded = ClientState::load(&store);
        assert_eq!(reloaded.favorites, vec!["percentage"]);
    }

    #[test]
    fn recent_dedups_and_promotes() {
        let (mut state, mut store) = state_and_store();
        state.record_visit(&mut store, "a");
        state.record_visit(&mut store, "b");
        state.record_visit(&mut store, "a");
        assert_eq!(state.recent, vec!["a", "b"]);
    }

    #[test]
    fn recent_capped_at_limit() {
        let (mut state, mut store) = state_and_store();
        for i in 0..15 {
            state.record_visit(&mut store, &format!("tool-{i}"));
        }
        assert_eq!(state.recent.len(), RECENT_LIMIT);
        assert_eq!(state.recent[0], "tool-14");
        // Oldest entries fell off
        assert!(!state.recent.contains(&"tool-0".to_string()));
    }

    #[test]
    fn clear_saved_lists_removes_keys() {
        let (mut state, mut store) = state_and_store();
        state.toggle_favorite(&mut store, "percentage");
        state.record_visit(&mut store, "percentage");
        state.clear_saved_lists(&mut store);

        assert!(state.favorites.is_empty());
        assert!(state.recent.is_empty());
        assert!(store.get(keys::FAVORITES).is_none());
        assert!(store.get(keys::RECENT).is_none());
    }

    #[test]
    fn sidebar_collapse_round_trips() {
        let (mut state, mut store) = state_and_store();
        state.set_sidebar_collapsed(&mut store, true);
        assert_eq!(store.get(keys::SIDEBAR_COLLAPSED).as_deref(), Some("true"));
        assert!(ClientState::load(&store).sidebar_collapsed);
    }
}
