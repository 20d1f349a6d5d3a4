use ui_core::tokens::bool_token;
use ui_core::transition::initial_classes;
use ui_core::{
    messages, ElementRole, NavItem, PanelHandle, PanelKind, Rendering, SidebarNav, Size,
};

use super::*;

const NAV_LINK: &str = "group flex items-center gap-x-3 rounded-md p-2 text-sm font-semibold";
const NAV_LINK_ACTIVE: &str = "bg-muted text-primary";
const NAV_LINK_IDLE: &str = "text-foreground hover:bg-muted hover:text-primary";

#[component]
fn SidebarTree(
    nav: SidebarNav,
    rendering: Rendering,
    nav_label: String,
    #[prop(optional_no_strip)] title: Option<String>,
    #[prop(optional_no_strip)] logo: Option<String>,
    #[prop(optional_no_strip)] bottom: Option<ChildrenFn>,
) -> impl IntoView {
    let links = nav
        .shared()
        .iter()
        .map(|entry| {
            let item = entry.item.clone();
            let class = join_classes([
                NAV_LINK,
                if entry.active {
                    NAV_LINK_ACTIVE
                } else {
                    NAV_LINK_IDLE
                },
            ]);
            view! {
                <li data-ui-state=entry.state_token()>
                    <NavAnchor
                        link=item.link
                        id=Some(nav.link_id(rendering, entry))
                        class=class
                        aria_current=entry.aria_current()
                    >
                        {item.icon.map(|name| view! { <Icon name size=Size::Lg /> })}
                        <span class="truncate">{item.label}</span>
                        {item.badge.map(|badge| {
                            view! {
                                <span
                                    class="ml-auto rounded-full px-2 text-xs font-medium ring-1 ring-inset ring-border"
                                    data-ui-slot="nav-badge"
                                >
                                    {badge}
                                </span>
                            }
                        })}
                    </NavAnchor>
                </li>
            }
        })
        .collect_view();
    let logo_alt = title.clone().unwrap_or_default();

    view! {
        <div
            id=nav.root_id(rendering)
            class="flex grow flex-col gap-y-5 overflow-y-auto bg-background px-6 pb-4"
            data-ui-rendering=rendering.token()
        >
            <div class="flex h-16 shrink-0 items-center gap-x-3" data-ui-slot="brand">
                {logo.map(|src| view! { <img src=src alt=logo_alt class="h-8 w-auto" /> })}
                {title.map(|title| view! { <span class="text-base font-semibold">{title}</span> })}
            </div>
            <nav class="flex flex-1 flex-col" aria-label=nav_label>
                <ul role="list" class="-mx-2 space-y-1">
                    {links}
                </ul>
            </nav>
            {bottom.map(|bottom| view! { <div class="mt-auto" data-ui-slot="bottom">{bottom()}</div> })}
        </div>
    }
}

#[component]
/// Application sidebar rendered twice from one navigation resolution: a static column for wide
/// viewports and an overlay panel for narrow ones.
///
/// The overlay uses `{id}-trigger`, `{id}-content`, `{id}-backdrop`, `{id}-container`, and
/// `{id}-close`. It closes on backdrop or close-control clicks, outside clicks, and Escape. Set
/// `show_trigger=false` when a [`Navbar`](super::Navbar) renders the trigger instead.
///
/// # Panics
///
/// Panics when `id` or a navigation key is blank or contains whitespace, or when two items
/// share a key.
pub fn Sidebar(
    #[prop(into)] id: String,
    items: Vec<NavItem>,
    #[prop(optional, into)] current: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] logo: Option<String>,
    #[prop(optional)] bottom: Option<ChildrenFn>,
    #[prop(default = true)] show_trigger: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let key = panel_key("Sidebar", id);
    use_panel(PanelHandle::sidebar(key.clone()));
    let nav = expect_config(
        "Sidebar",
        SidebarNav::new(key.clone(), &items, current.as_deref()),
    );

    let translator = use_translator();
    let nav_label = translated(&translator, messages::SIDEBAR_NAVIGATION);
    let open_label = translated(&translator, messages::OPEN_SIDEBAR);
    let close_label = translated(&translator, messages::CLOSE_SIDEBAR);

    let companion_class = |base: &str, role: ElementRole| {
        let initial = initial_classes(PanelKind::Sidebar, role).join(" ");
        join_classes([base, initial.as_str()])
    };
    let backdrop_class = companion_class("fixed inset-0 bg-black/80", ElementRole::Backdrop);
    let container_class = companion_class(
        "fixed inset-y-0 left-0 flex w-full max-w-xs",
        ElementRole::Container,
    );

    let trigger = show_trigger.then(|| {
        view! {
            <button
                type="button"
                id=key.element_id(ElementRole::Trigger)
                class="-m-2.5 p-2.5 lg:hidden"
                aria-label=open_label
                aria-controls=key.element_id(ElementRole::Content)
                aria-expanded=bool_token(false)
                data-ui-slot="sidebar-trigger"
            >
                <Icon name="bars-3" size=Size::Lg />
            </button>
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-sidebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="sidebar"
        >
            {trigger}
            <div
                id=key.element_id(ElementRole::Content)
                hidden=true
                class="relative z-50 lg:hidden"
                role="dialog"
                aria-modal="true"
                aria-label=nav_label.clone()
                data-ui-panel=PanelKind::Sidebar.token()
                data-ui-rendering=Rendering::Mobile.token()
            >
                <div
                    id=key.element_id(ElementRole::Backdrop)
                    hidden=true
                    class=backdrop_class
                    aria-hidden="true"
                    data-ui-slot="backdrop"
                ></div>
                <div
                    id=key.element_id(ElementRole::Container)
                    hidden=true
                    class=container_class
                    data-ui-slot="container"
                >
                    <button
                        type="button"
                        id=key.element_id(ElementRole::Close)
                        class="absolute right-0 top-0 -mr-12 p-2.5"
                        aria-label=close_label
                        data-ui-slot="close"
                    >
                        <Icon name="x-mark" size=Size::Lg />
                    </button>
                    <SidebarTree
                        nav=nav.clone()
                        rendering=Rendering::Mobile
                        nav_label=nav_label.clone()
                        title=title.clone()
                        logo=logo.clone()
                        bottom=bottom.clone()
                    />
                </div>
            </div>
            <aside
                class="hidden lg:fixed lg:inset-y-0 lg:z-40 lg:flex lg:w-72 lg:flex-col lg:border-r"
                data-ui-rendering=Rendering::Desktop.token()
            >
                <SidebarTree
                    nav=nav
                    rendering=Rendering::Desktop
                    nav_label=nav_label
                    title=title
                    logo=logo
                    bottom=bottom
                />
            </aside>
        </div>
    }
}
