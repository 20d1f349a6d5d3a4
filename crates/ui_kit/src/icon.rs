//! Icon slot rendering. Glyphs come from the application's icon CSS.

use leptos::*;
use ui_core::{icon_class, Size};

use crate::primitives::merge_layout_class;

#[component]
/// Decorative icon rendered as a `hero-<name>` class for the host stylesheet to resolve.
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(optional)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = format!(
        "{} {}",
        icon_class(&name),
        merge_layout_class(size.icon_classes(), layout_class)
    );
    view! {
        <span
            class=class
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=name
            data-ui-size=size.token()
        ></span>
    }
}
