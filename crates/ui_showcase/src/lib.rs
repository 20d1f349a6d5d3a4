//! Demo surface composing every `ui_kit` component.
//!
//! Menu contents are loaded from JSON the same way an application would ship them, so the
//! showcase also exercises the serde shape of [`MenuEntry`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::*;
use serde::{Deserialize, Serialize};
use ui_kit::prelude::*;

const SIDEBAR_ID: &str = "showcase-sidebar";

const USER_MENU_JSON: &str = r#"[
    { "kind": "item", "label": "Profile", "icon": "user" },
    { "kind": "item", "label": "Settings", "icon": "cog-6-tooth", "right_content": "⌘," },
    { "kind": "separator" },
    { "kind": "item", "label": "Delete", "icon": "trash", "variant": "danger", "disabled": true }
]"#;

const ACTIONS_MENU_JSON: &str = r#"[
    { "kind": "item", "label": "Edit", "icon": "pencil-square" },
    { "kind": "item", "label": "Archive", "icon": "archive-box", "variant": "warning" },
    { "kind": "item", "label": "Documentation", "link": { "mode": "href", "href": "https://leptos.dev" } },
    { "kind": "separator" },
    { "kind": "item", "label": "Sign out", "link": { "mode": "method", "href": "/logout", "method": "delete" } }
]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Showcase pages reachable from the sidebar.
pub enum ShowcasePage {
    /// Overview of every component.
    Overview,
    /// Button matrix.
    Buttons,
    /// Badges and avatars.
    Display,
    /// Navigation components.
    Navigation,
}

impl ShowcasePage {
    const ALL: [Self; 4] = [Self::Overview, Self::Buttons, Self::Display, Self::Navigation];

    fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Buttons => "buttons",
            Self::Display => "display",
            Self::Navigation => "navigation",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::Buttons => "/buttons",
            Self::Display => "/display",
            Self::Navigation => "/navigation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Buttons => "Buttons",
            Self::Display => "Badges & avatars",
            Self::Navigation => "Navigation",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Overview => "home",
            Self::Buttons => "cursor-arrow-rays",
            Self::Display => "user-circle",
            Self::Navigation => "map",
        }
    }

    /// Page served at `path`, ignoring trailing slashes.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == trimmed)
    }
}

fn nav_items() -> Vec<NavItem> {
    ShowcasePage::ALL
        .into_iter()
        .map(|page| {
            let item = NavItem::new(page.key(), page.label(), NavLink::navigate(page.path()))
                .with_icon(page.icon());
            if page == ShowcasePage::Buttons {
                item.with_badge(ButtonVariant::ALL.len().to_string())
            } else {
                item
            }
        })
        .collect()
}

fn load_menu(name: &str, raw: &str) -> Vec<MenuEntry> {
    match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            logging::warn!("showcase menu `{name}` load failed: {err}");
            Vec::new()
        }
    }
}

#[component]
/// Full showcase page: navbar, sidebar, and one section per component family.
pub fn UiShowcaseApp(
    /// Path of the current page, used for active navigation state.
    #[prop(into)]
    path: String,
) -> impl IntoView {
    let page = ShowcasePage::from_path(&path).unwrap_or(ShowcasePage::Overview);
    let last_selection = create_rw_signal::<Option<String>>(None);
    let user_menu = load_menu("user-menu", USER_MENU_JSON);
    let actions_menu = load_menu("actions", ACTIONS_MENU_JSON);
    let user_labels: Vec<String> = user_menu
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item(item) => item.label.clone(),
            MenuEntry::Separator => String::new(),
        })
        .collect();
    let on_user_select = Callback::new(move |index: usize| {
        last_selection.set(user_labels.get(index).cloned());
    });

    let crumbs = vec![
        Crumb::new("Showcase").link(NavLink::navigate("/")).icon("home"),
        Crumb::new(page.label()).current(),
    ];

    view! {
        <div class="min-h-full" data-ui-kind="showcase" data-ui-page=page.key()>
            <Sidebar
                id=SIDEBAR_ID
                items=nav_items()
                current=page.key()
                title="ui_kit"
                show_trigger=false
                bottom=Rc::new(|| {
                    Fragment::new(vec![
                        view! {
                            <div class="flex items-center gap-x-3">
                                <Avatar alt="Ada Lovelace" name="Ada Lovelace" size=Size::Sm status=AvatarStatus::Online />
                                <span class="text-sm font-semibold">"Ada Lovelace"</span>
                            </div>
                        }
                        .into_view(),
                    ])
                })
            />
            <div class="lg:pl-72">
                <Navbar brand="ui_kit showcase" sidebar_id=SIDEBAR_ID end=Box::new(move || {
                    Fragment::new(vec![
                        view! {
                            <Dropdown
                                id="user-menu"
                                entries=user_menu
                                label="Ada"
                                trigger_variant=ButtonVariant::Ghost
                                on_select=on_user_select
                            />
                        }
                        .into_view(),
                    ])
                }) />
                <main class="space-y-10 px-4 py-10 sm:px-6 lg:px-8">
                    <Breadcrumbs crumbs />
                    <p class="text-sm" data-ui-slot="last-selection">
                        {move || {
                            last_selection
                                .get()
                                .map(|label| format!("Last menu selection: {label}"))
                                .unwrap_or_else(|| "No menu selection yet".to_string())
                        }}
                    </p>

                    <section class="space-y-4" aria-labelledby="showcase-buttons">
                        <h2 id="showcase-buttons" class="text-base font-semibold">"Buttons"</h2>
                        <div class="flex flex-wrap items-center gap-3">
                            {ButtonVariant::ALL
                                .into_iter()
                                .map(|variant| view! { <Button variant>{variant.token()}</Button> })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap items-center gap-3">
                            {Size::ALL
                                .into_iter()
                                .map(|size| view! { <Button size leading_icon="plus">{size.token()}</Button> })
                                .collect_view()}
                        </div>
                        <div class="flex flex-wrap items-center gap-3">
                            <Button shape=ButtonShape::Pill trailing_icon="arrow-right">"Pill"</Button>
                            <Button shape=ButtonShape::Square variant=ButtonVariant::Outline aria_label="Add">
                                <Icon name="plus" size=Size::Sm />
                            </Button>
                            <Button loading=true>"Saving"</Button>
                            <Button disabled=true variant=ButtonVariant::Secondary>"Disabled"</Button>
                            <Button link=NavLink::href("https://leptos.dev") variant=ButtonVariant::Ghost>
                                "Link button"
                            </Button>
                        </div>
                    </section>

                    <Separator label="Display" />

                    <section class="space-y-4" aria-labelledby="showcase-display">
                        <h2 id="showcase-display" class="text-base font-semibold">"Badges & avatars"</h2>
                        <div class="flex flex-wrap items-center gap-3">
                            {BadgeVariant::ALL
                                .into_iter()
                                .map(|variant| view! { <Badge variant dot=true>{variant.token()}</Badge> })
                                .collect_view()}
                            <Badge shape=BadgeShape::Pill icon="check" variant=BadgeVariant::Success>
                                "Pill"
                            </Badge>
                        </div>
                        <div class="flex flex-wrap items-center gap-3">
                            {AvatarStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! { <Avatar alt=status.label() name="Grace Hopper" status /> }
                                })
                                .collect_view()}
                            <Avatar alt="Guest" shape=AvatarShape::Square size=Size::Lg />
                        </div>
                    </section>

                    <Separator />

                    <section class="space-y-4" aria-labelledby="showcase-menus">
                        <h2 id="showcase-menus" class="text-base font-semibold">"Menus"</h2>
                        <div class="flex items-center gap-4">
                            <Dropdown id="actions" entries=actions_menu align=Align::Start />
                            <Separator orientation=Orientation::Vertical layout_class="h-6" />
                            <span class="text-sm">"Menus close on outside click and Escape."</span>
                        </div>
                    </section>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_menus_parse() {
        let user = load_menu("user-menu", USER_MENU_JSON);
        assert_eq!(user.len(), 4);
        assert!(matches!(&user[3], MenuEntry::Item(item) if item.disabled));
        assert_eq!(load_menu("actions", ACTIONS_MENU_JSON).len(), 5);
    }

    #[test]
    fn pages_resolve_from_paths() {
        assert_eq!(ShowcasePage::from_path("/"), Some(ShowcasePage::Overview));
        assert_eq!(ShowcasePage::from_path(""), Some(ShowcasePage::Overview));
        assert_eq!(
            ShowcasePage::from_path("/buttons/"),
            Some(ShowcasePage::Buttons)
        );
        assert_eq!(ShowcasePage::from_path("/missing"), None);
    }

    #[test]
    fn every_page_has_a_nav_item() {
        let keys: Vec<_> = nav_items().into_iter().map(|item| item.key).collect();
        assert_eq!(keys, vec!["overview", "buttons", "display", "navigation"]);
    }
}
