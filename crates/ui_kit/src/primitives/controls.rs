use ui_core::{messages, ButtonShape, ButtonVariant, NavLink, Size};

use super::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 font-semibold \
     focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 \
     disabled:cursor-not-allowed disabled:opacity-50";

pub(super) fn button_class(variant: ButtonVariant, size: Size, shape: ButtonShape) -> String {
    join_classes([
        BUTTON_BASE,
        variant.classes(),
        size.button_classes(),
        shape.classes(),
    ])
}

#[component]
/// Button with variant, size, and shape tokens, optional icons, and a loading state.
///
/// Renders an anchor instead of a `<button>` when `link` is set.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] shape: ButtonShape,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] leading_icon: Option<String>,
    #[prop(optional, into)] trailing_icon: Option<String>,
    #[prop(optional)] link: Option<NavLink>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class(&button_class(variant, size, shape), layout_class);
    let icon_size = size.inline_icon();
    let loading_text = translated(&use_translator(), messages::LOADING);
    let leading = move || {
        if loading.get() {
            view! {
                <Icon name="arrow-path" size=icon_size layout_class="animate-spin" />
                <span class="sr-only">{loading_text.clone()}</span>
            }
            .into_view()
        } else {
            leading_icon
                .clone()
                .map(|name| view! { <Icon name size=icon_size /> })
                .into_view()
        }
    };
    let trailing = trailing_icon.map(|name| view! { <Icon name size=icon_size /> });

    if let Some(link) = link {
        return view! {
            <NavAnchor
                link
                id=id
                class=class
                aria_label=aria_label
                aria_disabled=Signal::derive(move || disabled.get() || loading.get())
                data_kind="button"
            >
                {leading}
                {children()}
                {trailing}
            </NavAnchor>
        }
        .into_view();
    }

    view! {
        <button
            type=button_type
            class=class
            id=id
            aria-label=aria_label
            aria-busy=move || loading.get().then_some("true")
            disabled=move || disabled.get() || loading.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-state=move || {
                if loading.get() {
                    "loading"
                } else {
                    "idle"
                }
            }
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading}
            {children()}
            {trailing}
        </button>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_classes_combine_every_table() {
        let class = button_class(ButtonVariant::Danger, Size::Xs, ButtonShape::Pill);
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains(ButtonVariant::Danger.classes()));
        assert!(class.contains(Size::Xs.button_classes()));
        assert!(class.contains(ButtonShape::Pill.classes()));
        assert!(!class.contains("  "));
    }
}
