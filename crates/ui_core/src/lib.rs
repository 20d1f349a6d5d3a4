//! Headless core for the `ui_kit` component library.
//!
//! The crate owns everything that does not need a browser: the enum-to-class token tables,
//! configuration and translation types, navigation/menu/breadcrumb view models, and the
//! toggleable panel state machine. Panels are driven through [`reduce_panel`], which returns
//! [`PanelEffect`] intents for a host to execute. `ui_kit` executes them against the DOM;
//! [`HeadlessDom`] executes them in memory on a virtual clock.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod avatar;
pub mod config;
pub mod crumbs;
mod error;
pub mod focus;
pub mod headless;
pub mod icon;
pub mod menu;
pub mod nav;
pub mod panel;
pub mod reducer;
pub mod sidebar;
pub mod tokens;
pub mod transition;

pub use avatar::{avatar_content, initials, AvatarContent};
pub use config::{messages, SourceText, Translator, UiConfig};
pub use crumbs::{crumb_trail, Crumb, CrumbEntry};
pub use error::{ConfigError, PanelError};
pub use focus::roving_target;
pub use headless::{HeadlessDom, HeadlessElement};
pub use icon::icon_class;
pub use menu::{MenuEntry, MenuItem, MenuItemAttrs};
pub use nav::{resolve_nav, HttpMethod, NavItem, NavLink, ResolvedNavItem};
pub use panel::{
    ClickTarget, ElementLookup, ElementRole, PanelHandle, PanelHandleBuilder, PanelKey, PanelKind,
};
pub use reducer::{
    focus_target_on_open, reduce_panel, PanelAction, PanelEffect, PanelPhase, PanelState,
};
pub use sidebar::{Rendering, SidebarNav};
pub use tokens::{
    Align, AvatarShape, AvatarStatus, BadgeShape, BadgeVariant, ButtonShape, ButtonVariant,
    MenuItemVariant, Orientation, Size,
};
