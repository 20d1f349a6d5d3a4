use ui_core::menu::{focusable_rows, item_dom_id, item_index};
use ui_core::tokens::bool_token;
use ui_core::transition::initial_classes;
use ui_core::{
    messages, roving_target, Align, ButtonShape, ButtonVariant, ElementRole, MenuEntry,
    PanelHandle, PanelKind, Size,
};

use super::controls::button_class;
use super::*;

const CONTENT_BASE: &str = "absolute z-10 mt-2 w-56 rounded-md bg-background shadow-lg \
     ring-1 ring-border focus:outline-none";

#[component]
/// Menu button whose content panel opens on trigger click and closes on outside click, Escape,
/// or item selection.
///
/// The trigger is `{id}-trigger`, the panel `{id}-content`, and entries
/// `{id}-content-item-{index}`. Arrow keys, Home, and End move focus between enabled entries.
///
/// # Panics
///
/// Panics when `id` is blank or contains whitespace.
pub fn Dropdown(
    #[prop(into)] id: String,
    entries: Vec<MenuEntry>,
    #[prop(optional)] align: Align,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(default = ButtonVariant::Outline)] trigger_variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<usize>>,
) -> impl IntoView {
    let key = panel_key("Dropdown", id);
    let controller = use_panel(PanelHandle::dropdown(key.clone()));
    let trigger_id = key.element_id(ElementRole::Trigger);
    let content_id = key.element_id(ElementRole::Content);
    let aria_label = label
        .is_none()
        .then(|| translated(&use_translator(), messages::OPEN_MENU));
    let trigger_icon = icon.unwrap_or_else(|| {
        let name = if label.is_some() {
            "chevron-down"
        } else {
            "ellipsis-vertical"
        };
        name.to_string()
    });
    let trigger_shape = if label.is_some() {
        ButtonShape::Rounded
    } else {
        ButtonShape::Square
    };
    let initial = initial_classes(PanelKind::Dropdown, ElementRole::Content).join(" ");
    let content_class = join_classes([CONTENT_BASE, align.classes(), initial.as_str()]);
    let focusable = focusable_rows(&entries);

    let on_trigger_keydown = {
        let key = key.clone();
        let focusable = focusable.clone();
        move |ev: KeyboardEvent| {
            let pressed = ev.key();
            if !matches!(pressed.as_str(), "ArrowDown" | "ArrowUp") {
                return;
            }
            ev.prevent_default();
            controller.open();
            if let Some(index) = roving_target(&focusable, None, &pressed) {
                let target = item_dom_id(&key, index);
                request_animation_frame(move || {
                    dom::focus_element_by_id(&target);
                });
            }
        }
    };

    let on_content_keydown = {
        let key = key.clone();
        move |ev: KeyboardEvent| {
            let current = dom::active_element_id().and_then(|id| item_index(&key, &id));
            if let Some(next) = roving_target(&focusable, current, &ev.key()) {
                ev.prevent_default();
                dom::focus_element_by_id(&item_dom_id(&key, next));
            }
        }
    };

    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let item = match entry {
                MenuEntry::Separator => {
                    return view! {
                        <div
                            class="my-1 h-px bg-border"
                            role="separator"
                            data-ui-slot="menu-separator"
                        ></div>
                    }
                    .into_view();
                }
                MenuEntry::Item(item) => item,
            };
            let attrs = item.attrs(&key, index);
            let disabled = item.disabled;
            let select = Callback::new(move |_: MouseEvent| {
                if disabled {
                    return;
                }
                if let Some(on_select) = on_select {
                    on_select.call(index);
                }
                controller.close();
            });
            let icon = item.icon.map(|name| view! { <Icon name size=Size::Sm /> });
            let shortcut = item.right_content.map(|text| {
                view! {
                    <span class="ml-auto text-xs text-muted-foreground" data-ui-slot="shortcut">
                        {text}
                    </span>
                }
            });
            let label = item.label;

            match item.link {
                Some(link) => view! {
                    <NavAnchor
                        link
                        id=Some(attrs.id)
                        class=attrs.class
                        role="menuitem"
                        tabindex=attrs.tabindex
                        aria_disabled=disabled
                        data_kind="menu-item"
                        on_click=select
                    >
                        {icon}
                        <span class="flex-1 truncate">{label}</span>
                        {shortcut}
                    </NavAnchor>
                }
                .into_view(),
                None => view! {
                    <button
                        type="button"
                        id=attrs.id
                        class=attrs.class
                        role="menuitem"
                        tabindex=attrs.tabindex
                        aria-disabled=attrs.aria_disabled
                        data-ui-kind="menu-item"
                        data-ui-variant=attrs.variant
                        on:click=move |ev| select.call(ev)
                    >
                        {icon}
                        <span class="flex-1 truncate">{label}</span>
                        {shortcut}
                    </button>
                }
                .into_view(),
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("relative inline-block text-left", layout_class)
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-panel=PanelKind::Dropdown.token()
            data-ui-align=align.token()
        >
            <button
                type="button"
                id=trigger_id.clone()
                class=button_class(trigger_variant, size, trigger_shape)
                aria-haspopup="menu"
                aria-expanded=bool_token(false)
                aria-controls=content_id.clone()
                aria-label=aria_label
                data-ui-slot="trigger"
                on:keydown=on_trigger_keydown
            >
                {label}
                <Icon name=trigger_icon size=size.inline_icon() />
            </button>
            <div
                id=content_id
                hidden=true
                role="menu"
                tabindex="-1"
                aria-labelledby=trigger_id
                class=content_class
                data-ui-slot="content"
                on:keydown=on_content_keydown
            >
                <div class="py-1">{rows}</div>
            </div>
        </div>
    }
}
