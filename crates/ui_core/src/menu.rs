//! Dropdown menu entries and the attributes each entry renders with.

use serde::{Deserialize, Serialize};

use crate::nav::NavLink;
use crate::panel::{ElementRole, PanelKey};
use crate::tokens::{join_classes, MenuItemVariant};

const ITEM_BASE: &str =
    "flex w-full items-center gap-2 rounded-md px-3 py-2 text-left text-sm outline-none";
const ITEM_DISABLED: &str = "opacity-50 cursor-not-allowed pointer-events-none";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// One actionable dropdown entry.
pub struct MenuItem {
    /// Visible label.
    pub label: String,
    /// Optional leading icon name.
    pub icon: Option<String>,
    /// Visual variant.
    pub variant: MenuItemVariant,
    /// Non-interactive when set.
    pub disabled: bool,
    /// Optional trailing text such as a keyboard shortcut.
    pub right_content: Option<String>,
    /// Optional destination; entries without one render as buttons.
    pub link: Option<NavLink>,
}

impl MenuItem {
    /// Builds an enabled default-variant entry.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: MenuItemVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the trailing text.
    pub fn right_content(mut self, text: impl Into<String>) -> Self {
        self.right_content = Some(text.into());
        self
    }

    /// Sets the destination.
    pub fn link(mut self, link: NavLink) -> Self {
        self.link = Some(link);
        self
    }

    /// Attributes for rendering this entry at `index` in the menu of `key`.
    pub fn attrs(&self, key: &PanelKey, index: usize) -> MenuItemAttrs {
        MenuItemAttrs {
            id: item_dom_id(key, index),
            class: join_classes([
                ITEM_BASE,
                self.variant.classes(),
                if self.disabled { ITEM_DISABLED } else { "" },
            ]),
            tabindex: self.disabled.then_some(-1),
            aria_disabled: self.disabled.then_some("true"),
            variant: self.variant.token(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Attribute values for one rendered menu entry.
pub struct MenuItemAttrs {
    /// DOM id, `{key}-content-item-{index}`.
    pub id: String,
    /// Class list.
    pub class: String,
    /// `tabindex`; disabled entries leave the tab order.
    pub tabindex: Option<i32>,
    /// `aria-disabled`; absent on enabled entries.
    pub aria_disabled: Option<&'static str>,
    /// `data-ui-variant` token.
    pub variant: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A dropdown row: an entry or a divider.
pub enum MenuEntry {
    /// Actionable entry.
    Item(MenuItem),
    /// Divider between groups.
    Separator,
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

/// DOM id of the menu entry at `index`.
pub fn item_dom_id(key: &PanelKey, index: usize) -> String {
    format!("{}-item-{index}", key.element_id(ElementRole::Content))
}

/// Parses the index back out of an entry id produced by [`item_dom_id`].
pub fn item_index(key: &PanelKey, id: &str) -> Option<usize> {
    id.strip_prefix(&key.element_id(ElementRole::Content))?
        .strip_prefix("-item-")?
        .parse()
        .ok()
}

/// Focusability of each row, with separators never focusable.
pub fn focusable_rows(entries: &[MenuEntry]) -> Vec<bool> {
    entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item(item) => !item.disabled,
            MenuEntry::Separator => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn key() -> PanelKey {
        PanelKey::new("user-menu").expect("key")
    }

    #[test]
    fn disabled_entries_leave_the_tab_order_and_expose_aria_disabled() {
        let attrs = MenuItem::new("Delete")
            .variant(MenuItemVariant::Danger)
            .disabled(true)
            .attrs(&key(), 2);

        assert_eq!(attrs.id, "user-menu-content-item-2");
        assert_eq!(attrs.tabindex, Some(-1));
        assert_eq!(attrs.aria_disabled, Some("true"));
        assert!(attrs.class.contains("pointer-events-none"));
        assert_eq!(attrs.variant, "danger");
    }

    #[test]
    fn enabled_entries_carry_no_disabled_markers() {
        let attrs = MenuItem::new("Profile").attrs(&key(), 0);
        assert_eq!(attrs.tabindex, None);
        assert_eq!(attrs.aria_disabled, None);
        assert!(!attrs.class.contains("opacity-50"));
    }

    #[test]
    fn entry_ids_round_trip_to_indexes() {
        let key = key();
        assert_eq!(item_index(&key, &item_dom_id(&key, 7)), Some(7));
        assert_eq!(item_index(&key, "other-content-item-1"), None);
        assert_eq!(item_index(&key, "user-menu-content"), None);
    }

    #[test]
    fn separators_are_never_focusable() {
        let entries = vec![
            MenuEntry::from(MenuItem::new("Profile")),
            MenuEntry::Separator,
            MenuItem::new("Delete").disabled(true).into(),
        ];
        assert_eq!(focusable_rows(&entries), vec![true, false, false]);
    }

    #[test]
    fn entries_deserialize_from_tagged_json() {
        let entries: Vec<MenuEntry> = serde_json::from_str(
            r#"[
                { "kind": "item", "label": "Settings", "icon": "cog-6-tooth" },
                { "kind": "separator" },
                { "kind": "item", "label": "Delete", "variant": "danger", "disabled": true }
            ]"#,
        )
        .expect("parse");
        assert_eq!(
            entries[2],
            MenuEntry::Item(
                MenuItem::new("Delete")
                    .variant(MenuItemVariant::Danger)
                    .disabled(true)
            )
        );
    }
}
