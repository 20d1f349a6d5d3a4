use ui_core::avatar::PLACEHOLDER_ICON;
use ui_core::{
    avatar_content, AvatarContent, AvatarShape, AvatarStatus, BadgeShape, BadgeVariant, Size,
};

use super::*;

#[component]
/// Compact label with variant color, size, and shape tokens.
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] size: Size,
    #[prop(optional)] shape: BadgeShape,
    #[prop(optional, into)] icon: Option<String>,
    #[prop(optional)] dot: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = join_classes([
        "inline-flex items-center font-medium ring-1 ring-inset",
        variant.classes(),
        size.badge_classes(),
        shape.classes(),
    ]);
    view! {
        <span
            class=merge_layout_class(&class, layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-shape=shape.token()
        >
            {dot.then(|| {
                view! {
                    <span
                        class=format!("size-1.5 rounded-full {}", variant.dot_class())
                        aria-hidden="true"
                        data-ui-slot="dot"
                    ></span>
                }
            })}
            {icon.map(|name| view! { <Icon name size=size.inline_icon() /> })}
            {children()}
        </span>
    }
}

#[component]
/// User picture with initials and placeholder fallbacks and an optional status indicator.
///
/// # Panics
///
/// Panics when `alt` is blank.
pub fn Avatar(
    #[prop(into)] alt: String,
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] size: Size,
    #[prop(optional)] shape: AvatarShape,
    #[prop(optional)] status: Option<AvatarStatus>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let content = expect_config(
        "Avatar",
        avatar_content(src.as_deref(), name.as_deref(), &alt),
    );
    let frame = join_classes([
        "inline-flex shrink-0 items-center justify-center overflow-hidden bg-muted font-medium",
        size.avatar_classes(),
        shape.classes(),
    ]);
    let (fallback, body) = match content {
        AvatarContent::Image { src, alt } => (
            "image",
            view! { <img src=src alt=alt class=join_classes([frame.as_str(), "object-cover"]) /> }
                .into_view(),
        ),
        AvatarContent::Initials(initials) => (
            "initials",
            view! {
                <span class=frame role="img" aria-label=alt>
                    <span aria-hidden="true">{initials}</span>
                </span>
            }
            .into_view(),
        ),
        AvatarContent::Placeholder => (
            "placeholder",
            view! {
                <span class=frame role="img" aria-label=alt>
                    <Icon name=PLACEHOLDER_ICON size=size />
                </span>
            }
            .into_view(),
        ),
    };

    view! {
        <span
            class=merge_layout_class("relative inline-block", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
            data-ui-shape=shape.token()
            data-ui-content=fallback
        >
            {body}
            {status.map(|status| {
                view! {
                    <span
                        class=format!(
                            "absolute bottom-0 right-0 block size-2.5 rounded-full ring-2 ring-background {}",
                            status.classes(),
                        )
                        data-ui-slot="status"
                        data-ui-status=status.token()
                    >
                        <span class="sr-only">{status.label()}</span>
                    </span>
                }
            })}
        </span>
    }
}
