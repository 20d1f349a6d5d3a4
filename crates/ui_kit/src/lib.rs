//! Leptos components for the toggleable-panel UI kit.
//!
//! Components are thin renderers over the `ui_core` view models and class tables. The dropdown
//! and mobile sidebar drive a [`PanelController`] that executes the headless panel reducer's
//! effects against the DOM. Every component emits the stable `data-ui-*` attribute contract so
//! application CSS can target primitives without relying on generated class names.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod dom;
mod icon;
mod panel;
mod primitives;

pub use config::{use_translator, use_ui_config, UiProvider};
pub use icon::Icon;
pub use panel::{use_panel, PanelController};
pub use primitives::{
    Avatar, Badge, Breadcrumbs, Button, Dropdown, NavAnchor, Navbar, Separator, Sidebar,
};
pub use ui_core::{
    Align, AvatarShape, AvatarStatus, BadgeShape, BadgeVariant, ButtonShape, ButtonVariant, Crumb,
    HttpMethod, MenuEntry, MenuItem, MenuItemVariant, NavItem, NavLink, Orientation, PanelKey,
    Size, Translator, UiConfig,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        use_translator, use_ui_config, Align, Avatar, AvatarShape, AvatarStatus, Badge,
        BadgeShape, BadgeVariant, Breadcrumbs, Button, ButtonShape, ButtonVariant, Crumb,
        Dropdown, HttpMethod, Icon, MenuEntry, MenuItem, MenuItemVariant, NavAnchor, NavItem,
        NavLink, Navbar, Orientation, Separator, Sidebar, Size, Translator, UiConfig, UiProvider,
    };
}
