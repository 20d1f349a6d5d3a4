//! Sidebar content shared by its desktop and mobile renderings.

use std::rc::Rc;

use crate::nav::{resolve_nav, NavItem, ResolvedNavItem};
use crate::panel::PanelKey;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The two structurally parallel sidebar trees.
pub enum Rendering {
    /// Always-visible column, shown by viewport CSS on wide screens.
    Desktop,
    /// Overlay driven by the panel state machine on narrow screens.
    Mobile,
}

impl Rendering {
    /// Both renderings, desktop first.
    pub const ALL: [Self; 2] = [Self::Desktop, Self::Mobile];

    /// Stable token used in ids and `data-ui-rendering`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone)]
/// Navigation of one sidebar with active flags decided once.
pub struct SidebarNav {
    key: PanelKey,
    items: Rc<[ResolvedNavItem]>,
}

impl SidebarNav {
    /// Resolves `items` against `current`.
    ///
    /// # Errors
    ///
    /// Propagates [`resolve_nav`] key validation errors.
    pub fn new(
        key: PanelKey,
        items: &[NavItem],
        current: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            key,
            items: resolve_nav(items, current)?.into(),
        })
    }

    /// Sidebar key.
    pub fn key(&self) -> &PanelKey {
        &self.key
    }

    /// Resolved entries; both renderings read this same slice.
    pub fn items(&self) -> &[ResolvedNavItem] {
        &self.items
    }

    /// Shared handle to the resolved entries for rendering closures.
    pub fn shared(&self) -> Rc<[ResolvedNavItem]> {
        Rc::clone(&self.items)
    }

    /// DOM id of an entry's link within one rendering.
    pub fn link_id(&self, rendering: Rendering, item: &ResolvedNavItem) -> String {
        format!("{}-{}-nav-{}", self.key, rendering.token(), item.item.key)
    }

    /// DOM id of one rendering's root.
    pub fn root_id(&self, rendering: Rendering) -> String {
        format!("{}-{}", self.key, rendering.token())
    }
}
