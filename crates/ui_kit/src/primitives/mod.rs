//! Presentational, navigation, overlay, and shell components.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use ui_core::tokens::join_classes;
use ui_core::{ConfigError, PanelKey};

use crate::config::{translated, use_translator};
use crate::dom;
use crate::panel::use_panel;
use crate::Icon;

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod shell;

pub use controls::Button;
pub use data_display::{Avatar, Badge};
pub use layout::Separator;
pub use navigation::{Breadcrumbs, NavAnchor, Navbar};
pub use overlays::Dropdown;
pub use shell::Sidebar;

pub(crate) fn merge_layout_class(base: &str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

/// Unwraps a configuration result, panicking with the component name on error.
///
/// Invalid configuration is a development-time mistake and must not render degraded markup.
fn expect_config<T>(component: &str, result: Result<T, ConfigError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{component}: {err}"),
    }
}

fn panel_key(component: &str, id: String) -> PanelKey {
    expect_config(component, PanelKey::new(id))
}
