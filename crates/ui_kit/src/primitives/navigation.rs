use ui_core::tokens::bool_token;
use ui_core::{crumb_trail, messages, resolve_nav, Crumb, ElementRole, NavItem, NavLink, Size};

use super::*;

#[component]
/// Anchor for a [`NavLink`] in any of its modes.
///
/// `navigate` links carry `data-ui-link="navigate"` for the host router to intercept; method
/// links carry `data-method` and `rel="nofollow"` for the host to submit.
pub fn NavAnchor(
    link: NavLink,
    #[prop(optional_no_strip)] id: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional_no_strip)] aria_label: Option<String>,
    #[prop(optional_no_strip)] aria_current: Option<&'static str>,
    #[prop(optional, into)] aria_disabled: MaybeSignal<bool>,
    #[prop(optional)] role: Option<&'static str>,
    #[prop(optional_no_strip)] tabindex: Option<i32>,
    #[prop(default = "link")] data_kind: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let method = link.method_token();
    view! {
        <a
            href=link.url().to_string()
            id=id
            class=class
            role=role
            tabindex=tabindex
            aria-label=aria_label
            aria-current=aria_current
            aria-disabled=move || aria_disabled.get().then_some("true")
            rel=method.map(|_| "nofollow")
            data-method=method
            data-ui-primitive="true"
            data-ui-kind=data_kind
            data-ui-link=link.mode_token()
            on:click=move |ev| {
                if aria_disabled.get_untracked() {
                    ev.prevent_default();
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </a>
    }
}

#[component]
/// Breadcrumb trail with separators between crumbs and the current page marked.
///
/// # Panics
///
/// Panics when more than one crumb is marked current.
pub fn Breadcrumbs(
    crumbs: Vec<Crumb>,
    #[prop(default = "chevron-right")] separator_icon: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let trail = expect_config("Breadcrumbs", crumb_trail(&crumbs));
    let label = translated(&use_translator(), messages::BREADCRUMB);

    view! {
        <nav
            class=merge_layout_class("flex", layout_class)
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="breadcrumbs"
        >
            <ol role="list" class="flex items-center gap-2">
                {trail
                    .into_iter()
                    .map(|entry| {
                        let separated = entry.separated;
                        let aria_current = entry.aria_current();
                        let is_link = entry.is_link();
                        let crumb = entry.crumb;
                        let icon = crumb.icon.map(|name| view! { <Icon name size=Size::Sm /> });
                        let label = crumb.label;
                        let body = match crumb.link {
                            Some(link) if is_link => view! {
                                <NavAnchor link class="inline-flex items-center gap-1 hover:underline">
                                    {icon}
                                    <span>{label}</span>
                                </NavAnchor>
                            }
                            .into_view(),
                            _ => view! {
                                <span
                                    class="inline-flex items-center gap-1 font-medium"
                                    aria-current=aria_current
                                >
                                    {icon}
                                    <span>{label}</span>
                                </span>
                            }
                            .into_view(),
                        };
                        view! {
                            <li class="flex items-center gap-2" data-ui-slot="crumb">
                                {separated
                                    .then(|| view! { <Icon name=separator_icon size=Size::Sm /> })}
                                {body}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[component]
/// Top navigation bar with a brand link, navigation links, and an end slot.
///
/// With `sidebar_id`, a compact-viewport button targeting that [`Sidebar`](super::Sidebar)'s
/// panel is rendered; the sidebar should then be given `show_trigger=false`.
///
/// # Panics
///
/// Panics when `sidebar_id` is not a valid panel id, or when navigation keys are invalid or
/// repeated.
pub fn Navbar(
    #[prop(optional, into)] brand: Option<String>,
    #[prop(optional, into)] logo: Option<String>,
    #[prop(default = NavLink::navigate("/"))] home: NavLink,
    #[prop(optional)] items: Vec<NavItem>,
    #[prop(optional, into)] current: Option<String>,
    #[prop(optional, into)] sidebar_id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] end: Option<Children>,
) -> impl IntoView {
    let translator = use_translator();
    let nav_label = translated(&translator, messages::MAIN_NAVIGATION);
    let sidebar_trigger = sidebar_id.map(|id| {
        let key = panel_key("Navbar", id);
        let label = translated(&translator, messages::OPEN_SIDEBAR);
        view! {
            <button
                type="button"
                id=key.element_id(ElementRole::Trigger)
                class="-m-2.5 p-2.5 lg:hidden"
                aria-label=label
                aria-controls=key.element_id(ElementRole::Content)
                aria-expanded=bool_token(false)
                data-ui-slot="sidebar-trigger"
            >
                <Icon name="bars-3" size=Size::Lg />
            </button>
        }
    });
    let brand_alt = brand.clone().unwrap_or_default();
    let links = expect_config("Navbar", resolve_nav(&items, current.as_deref()));

    view! {
        <header
            class=merge_layout_class(
                "flex h-16 items-center gap-x-4 border-b px-4 sm:px-6",
                layout_class,
            )
            data-ui-primitive="true"
            data-ui-kind="navbar"
        >
            {sidebar_trigger}
            <NavAnchor link=home class="flex items-center gap-2 font-semibold" data_kind="brand">
                {logo.map(|src| view! { <img src=src alt=brand_alt class="h-8 w-auto" /> })}
                {brand.map(|brand| view! { <span>{brand}</span> })}
            </NavAnchor>
            <nav aria-label=nav_label class="hidden md:flex md:gap-x-6">
                {links
                    .into_iter()
                    .map(|entry| {
                        let aria_current = entry.aria_current();
                        let state = entry.state_token();
                        let item = entry.item;
                        view! {
                            <span data-ui-state=state data-ui-slot="nav-item">
                                <NavAnchor
                                    link=item.link
                                    class="inline-flex items-center gap-1 text-sm font-medium"
                                    aria_current=aria_current
                                >
                                    {item.icon.map(|name| view! { <Icon name size=Size::Sm /> })}
                                    {item.label}
                                </NavAnchor>
                            </span>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="ml-auto flex items-center gap-x-4" data-ui-slot="end">
                {end.map(|end| end())}
            </div>
        </header>
    }
}
