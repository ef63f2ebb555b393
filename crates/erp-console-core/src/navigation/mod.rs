//! Declarative navigation table.
//!
//! A single table keyed by stable entry id is the source of truth for the
//! top navigation bar, the context-sensitive sidebars, and the list of
//! protected path prefixes. The table is built once and never mutated;
//! every view is derived from it on demand.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::session::SessionContext;

/// Navigation table errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    /// Two entries share an id.
    #[error("Duplicate navigation id: {0}")]
    DuplicateId(String),

    /// A path does not start with `/`.
    #[error("Invalid path for '{id}': {path}")]
    InvalidPath {
        /// Entry id.
        id: String,
        /// Offending path.
        path: String,
    },
}

/// Icon key understood by the console UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    /// House.
    Home,
    /// Bar chart.
    BarChart3,
    /// Gear.
    Settings,
    /// People.
    Users,
    /// Shield.
    Shield,
    /// Document.
    FileText,
    /// Trend line.
    TrendingUp,
    /// Box.
    Package,
    /// Cart.
    ShoppingCart,
}

/// Badge shown next to a sidebar item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Badge {
    /// Short text such as "New".
    Text(String),
    /// Numeric counter.
    Count(u32),
}

/// One item in a sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Target path.
    pub path: String,
    /// Display label.
    pub label: String,
    /// Icon key.
    pub icon: Icon,
    /// Optional badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Rendered but not clickable.
    #[serde(default)]
    pub disabled: bool,
}

impl SidebarItem {
    /// Create an enabled item without a badge.
    #[must_use]
    pub fn new(path: impl Into<String>, label: impl Into<String>, icon: Icon) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            icon,
            badge: None,
            disabled: false,
        }
    }

    /// Attach a badge.
    #[must_use]
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Sidebar definition nested inside a navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarConfig {
    /// Sidebar heading.
    pub title: String,
    /// Heading icon.
    pub title_icon: Icon,
    /// Items in display order.
    pub items: Vec<SidebarItem>,
    /// Paths (and their sub-paths) on which this sidebar is shown.
    pub show_on_paths: Vec<String>,
}

impl SidebarConfig {
    /// Whether this sidebar is shown on `path`.
    ///
    /// Matches a listed path exactly or any path below it.
    #[must_use]
    pub fn is_shown_on(&self, path: &str) -> bool {
        self.show_on_paths.iter().any(|p| {
            path == p.as_str()
                || path
                    .strip_prefix(p.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Copy with the item list replaced.
    #[must_use]
    pub fn with_items(&self, items: Vec<SidebarItem>) -> Self {
        Self {
            items,
            ..self.clone()
        }
    }

    /// Copy with a badge set on the item at `index`. Out-of-range indices
    /// leave the copy unchanged.
    #[must_use]
    pub fn with_badge(&self, index: usize, badge: Badge) -> Self {
        let mut copy = self.clone();
        if let Some(item) = copy.items.get_mut(index) {
            item.badge = Some(badge);
        }
        copy
    }

    /// Copy with the item at `index` enabled or disabled.
    #[must_use]
    pub fn with_disabled(&self, index: usize, disabled: bool) -> Self {
        let mut copy = self.clone();
        if let Some(item) = copy.items.get_mut(index) {
            item.disabled = disabled;
        }
        copy
    }
}

/// A navigation entry. Its identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    /// Stable identifier.
    pub id: String,
    /// Primary path.
    pub path: String,
    /// Display label.
    pub label: String,
    /// Icon key.
    pub icon: Icon,
    /// Whether the path requires an authenticated session.
    pub require_auth: bool,
    /// Roles the UI restricts this entry to. Not enforced server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Show in the top navigation bar.
    pub show_in_nav: bool,
    /// Show as a sidebar.
    pub show_in_sidebar: bool,
    /// Nested sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarConfig>,
}

impl NavEntry {
    /// Whether the console shows this entry to `session`.
    ///
    /// Auth-required entries are hidden from anonymous sessions. Role-restricted
    /// entries need a `role` field on the user object that is one of `roles`.
    /// UI visibility only; the upstream enforces access.
    #[must_use]
    pub fn is_visible_to(&self, session: &SessionContext) -> bool {
        if self.require_auth && !session.is_authenticated() {
            return false;
        }
        match &self.roles {
            Some(roles) => session
                .user_field("role")
                .is_some_and(|role| roles.iter().any(|r| r == role)),
            None => true,
        }
    }
}

/// Sidebar view keyed by the owning entry id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarView<'a> {
    /// Owning entry id.
    pub key: &'a str,
    /// Sidebar definition.
    pub config: &'a SidebarConfig,
}

/// The immutable navigation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTable {
    entries: Vec<NavEntry>,
}

impl Default for NavigationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NavigationTable {
    /// Build a table from entries.
    ///
    /// # Errors
    ///
    /// Returns error if ids repeat or a path does not start with `/`.
    pub fn new(entries: Vec<NavEntry>) -> Result<Self, NavigationError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// The console's built-in navigation.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
        }
    }

    /// Check id uniqueness and path shape.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), NavigationError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(NavigationError::DuplicateId(entry.id.clone()));
            }

            let sidebar_paths = entry.sidebar.iter().flat_map(|s| {
                s.items
                    .iter()
                    .map(|i| i.path.as_str())
                    .chain(s.show_on_paths.iter().map(String::as_str))
            });
            let bad = std::iter::once(entry.path.as_str())
                .chain(sidebar_paths)
                .find(|p| !p.starts_with('/'));
            if let Some(path) = bad {
                return Err(NavigationError::InvalidPath {
                    id: entry.id.clone(),
                    path: path.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries flagged for the top navigation bar.
    #[must_use]
    pub fn list_nav_entries(&self) -> Vec<&NavEntry> {
        self.entries.iter().filter(|e| e.show_in_nav).collect()
    }

    /// Top navigation entries `session` may see.
    #[must_use]
    pub fn visible_nav_entries(&self, session: &SessionContext) -> Vec<&NavEntry> {
        self.entries
            .iter()
            .filter(|e| e.show_in_nav && e.is_visible_to(session))
            .collect()
    }

    /// Sidebars of entries flagged for sidebar display.
    #[must_use]
    pub fn list_sidebar_configs(&self) -> Vec<SidebarView<'_>> {
        self.entries
            .iter()
            .filter(|e| e.show_in_sidebar)
            .filter_map(|e| {
                e.sidebar.as_ref().map(|config| SidebarView {
                    key: &e.id,
                    config,
                })
            })
            .collect()
    }

    /// Sidebar definition of the entry with `id`.
    #[must_use]
    pub fn find_sidebar_config_by_id(&self, id: &str) -> Option<&SidebarConfig> {
        self.get(id).and_then(|e| e.sidebar.as_ref())
    }

    /// Every path prefix that requires authentication.
    ///
    /// For each entry requiring auth, yields its primary path followed by its
    /// sidebar's `show_on_paths`, in table order. Duplicates are kept.
    #[must_use]
    pub fn list_protected_paths(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.require_auth)
            .flat_map(|e| {
                std::iter::once(e.path.as_str()).chain(
                    e.sidebar
                        .iter()
                        .flat_map(|s| s.show_on_paths.iter().map(String::as_str)),
                )
            })
            .collect()
    }

    /// The first sidebar (in table order) shown on `path`.
    #[must_use]
    pub fn sidebar_for_path(&self, path: &str) -> Option<SidebarView<'_>> {
        self.list_sidebar_configs()
            .into_iter()
            .find(|view| view.config.is_shown_on(path))
    }
}
