use ui_core::Orientation;

use super::*;

#[component]
/// Divider rule, optionally interrupted by a centered label.
pub fn Separator(
    #[prop(optional)] orientation: Orientation,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let Some(label) = label else {
        return view! {
            <div
                class=merge_layout_class(orientation.classes(), layout_class)
                role="separator"
                aria-orientation=orientation.token()
                data-ui-primitive="true"
                data-ui-kind="separator"
                data-ui-orientation=orientation.token()
            ></div>
        }
        .into_view();
    };

    let (wrapper, rule) = match orientation {
        Orientation::Horizontal => ("flex w-full items-center gap-3", "h-px flex-1 bg-border"),
        Orientation::Vertical => ("flex flex-col self-stretch items-center gap-3", "w-px flex-1 bg-border"),
    };
    view! {
        <div
            class=merge_layout_class(wrapper, layout_class)
            role="separator"
            aria-orientation=orientation.token()
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="separator"
            data-ui-orientation=orientation.token()
        >
            <span class=rule aria-hidden="true"></span>
            <span class="text-xs font-medium text-muted-foreground" aria-hidden="true">{label}</span>
            <span class=rule aria-hidden="true"></span>
        </div>
    }
    .into_view()
}
