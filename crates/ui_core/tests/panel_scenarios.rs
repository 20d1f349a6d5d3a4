use pretty_assertions::assert_eq;
use ui_core::headless::FRAME_MS;
use ui_core::{
    HeadlessDom, MenuEntry, MenuItem, MenuItemVariant, NavItem, NavLink, PanelEffect,
    PanelHandle, PanelKey, PanelKind, SidebarNav,
};

fn key(id: &str) -> PanelKey {
    PanelKey::new(id).expect("valid key")
}

fn dropdown_page(id: &str) -> (HeadlessDom, PanelKey) {
    let key = key(id);
    let mut dom = HeadlessDom::new();
    dom.render_panel(&key, PanelKind::Dropdown);
    dom.mount(PanelHandle::dropdown(key.clone())).expect("mount");
    (dom, key)
}

fn sidebar_page(id: &str) -> (HeadlessDom, PanelKey) {
    let key = key(id);
    let mut dom = HeadlessDom::new();
    dom.insert("page", None);
    dom.render_panel(&key, PanelKind::Sidebar);
    dom.mount(PanelHandle::sidebar(key.clone())).expect("mount");
    (dom, key)
}

fn sidebar_ids() -> [&'static str; 3] {
    ["sidebar-content", "sidebar-backdrop", "sidebar-container"]
}

#[test]
fn open_reveals_every_element_and_close_hides_them_after_the_transition() {
    let (mut dom, key) = sidebar_page("sidebar");

    dom.open(&key);
    for id in sidebar_ids() {
        assert!(dom.is_visible(id), "{id} visible after open");
    }
    dom.run_until_idle();
    let container = dom.element("sidebar-container").expect("container");
    assert!(container.has_class("translate-x-0"));
    assert!(!container.has_class("-translate-x-full"));

    dom.close(&key);
    assert!(dom.is_visible("sidebar-backdrop"), "still visible while leaving");
    dom.advance(299);
    assert!(dom.is_visible("sidebar-container"));
    dom.advance(1);
    for id in sidebar_ids() {
        assert!(!dom.is_visible(id), "{id} hidden after settle");
    }
    let backdrop = dom.element("sidebar-backdrop").expect("backdrop");
    assert!(backdrop.hidden);
    assert!(backdrop.has_class("opacity-0"));
    assert!(!backdrop.has_class("duration-300"));
}

#[test]
fn toggle_twice_restores_logical_visibility() {
    let (mut dom, key) = dropdown_page("menu");

    dom.toggle(&key);
    dom.run_until_idle();
    assert!(dom.is_open(&key));
    assert!(dom.is_visible("menu-content"));

    dom.toggle(&key);
    dom.run_until_idle();
    assert!(!dom.is_open(&key));
    assert!(!dom.is_visible("menu-content"));
    assert_eq!(
        dom.element("menu-trigger")
            .and_then(|trigger| trigger.attribute("aria-expanded")),
        Some("false")
    );
}

#[test]
fn second_open_has_no_effects() {
    let (mut dom, key) = dropdown_page("menu");

    assert!(!dom.open(&key).is_empty());
    assert!(dom.open(&key).is_empty());
    assert!(dom.is_open(&key));
    assert_eq!(dom.pending_callbacks(), 1);
}

#[test]
fn outside_click_and_escape_on_a_closed_panel_do_nothing() {
    let (mut dom, key) = dropdown_page("menu");
    dom.insert("elsewhere", None);

    dom.click("elsewhere");
    dom.key_down("Escape");

    assert!(!dom.is_open(&key));
    assert!(dom.effect_log().is_empty());
    assert_eq!(dom.pending_callbacks(), 0);
}

#[test]
fn panel_without_a_backdrop_still_toggles_its_content() {
    let key = key("sidebar");
    let mut dom = HeadlessDom::new();
    dom.render_panel(&key, PanelKind::Sidebar);
    dom.remove("sidebar-backdrop");
    dom.mount(PanelHandle::sidebar(key.clone())).expect("mount");

    dom.open(&key);
    assert!(dom.is_visible("sidebar-content"));
    assert!(dom.is_visible("sidebar-container"));

    dom.click("sidebar-close");
    dom.run_until_idle();
    assert!(!dom.is_open(&key));
    assert!(!dom.is_visible("sidebar-content"));
    assert!(dom.effect_log().iter().all(|(_, effect)| !matches!(
        effect,
        PanelEffect::Reveal { element } if element == "sidebar-backdrop"
    )));
}

#[test]
fn user_menu_marks_only_the_disabled_entry() {
    let (mut dom, key) = dropdown_page("user-menu");
    dom.render_menu(
        &key,
        &[
            MenuItem::new("Profile").icon("user").into(),
            MenuItem::new("Settings").icon("cog-6-tooth").into(),
            MenuEntry::Separator,
            MenuItem::new("Delete")
                .variant(MenuItemVariant::Danger)
                .disabled(true)
                .into(),
        ],
    );

    assert!(dom.replaced_ids().is_empty());

    dom.click("user-menu-trigger");
    assert!(dom.is_visible("user-menu-content"));

    for id in ["user-menu-content-item-0", "user-menu-content-item-1"] {
        let item = dom.element(id).expect("enabled item");
        assert_eq!(item.attribute("aria-disabled"), None);
        assert_eq!(item.attribute("tabindex"), None);
        assert!(!item.has_class("pointer-events-none"));
    }

    let delete = dom.element("user-menu-content-item-3").expect("delete");
    assert_eq!(delete.attribute("data-label"), Some("Delete"));
    assert_eq!(delete.attribute("aria-disabled"), Some("true"));
    assert_eq!(delete.attribute("tabindex"), Some("-1"));
    assert!(delete.has_class("pointer-events-none"));

    dom.click("user-menu-content-item-0");
    assert!(dom.is_open(&key), "clicks inside the menu keep it open");
}

#[test]
fn active_nav_item_is_marked_in_both_renderings() {
    let (mut dom, key) = sidebar_page("sidebar");
    let nav = SidebarNav::new(
        key,
        &[
            NavItem::new("dashboard", "Dashboard", NavLink::navigate("/")),
            NavItem::new("team", "Team", NavLink::navigate("/team")),
            NavItem::new("reports", "Reports", NavLink::href("/reports")),
        ],
        Some("team"),
    )
    .expect("nav");
    dom.render_sidebar_nav(&nav);

    let current = dom.elements_with_attribute("aria-current", "page");
    assert_eq!(
        current,
        vec!["sidebar-desktop-nav-team", "sidebar-mobile-nav-team"]
    );
    assert!(dom.replaced_ids().is_empty(), "every rendered id is unique");
}

#[test]
fn open_then_immediate_close_ends_closed_with_the_backdrop_hidden() {
    let (mut dom, key) = sidebar_page("sidebar");

    dom.open(&key);
    dom.close(&key);
    assert_eq!(dom.pending_callbacks(), 2);

    dom.run_until_idle();
    assert!(!dom.is_open(&key));
    assert!(!dom.is_visible("sidebar-backdrop"));
    let container = dom.element("sidebar-container").expect("container");
    assert!(!container.has_class("translate-x-0"), "stale frame tick ignored");
}

#[test]
fn close_then_reopen_before_settle_stays_open() {
    let (mut dom, key) = sidebar_page("sidebar");

    dom.open(&key);
    dom.next_frame();
    dom.close(&key);
    dom.advance(100);
    dom.open(&key);
    dom.run_until_idle();

    assert!(dom.is_open(&key));
    for id in sidebar_ids() {
        assert!(dom.is_visible(id), "{id} visible after reopen");
    }
}

#[test]
fn repeated_close_before_settle_still_hides_everything() {
    let (mut dom, key) = sidebar_page("sidebar");

    dom.open(&key);
    dom.close(&key);
    assert!(dom.close(&key).is_empty());
    dom.run_until_idle();

    for id in sidebar_ids() {
        assert!(!dom.is_visible(id));
    }
}

#[test]
fn backdrop_and_outside_clicks_close_but_container_clicks_do_not() {
    let (mut dom, key) = sidebar_page("sidebar");
    dom.insert("sidebar-nav-link", Some("sidebar-container"));

    dom.open(&key);
    dom.click("sidebar-nav-link");
    assert!(dom.is_open(&key));

    dom.click("sidebar-backdrop");
    assert!(!dom.is_open(&key));

    dom.open(&key);
    dom.click("page");
    assert!(!dom.is_open(&key));
}

#[test]
fn escape_closes_and_returns_focus_to_the_trigger() {
    let (mut dom, key) = dropdown_page("menu");

    dom.click("menu-trigger");
    dom.key_down("Escape");

    assert!(!dom.is_open(&key));
    assert_eq!(dom.focused(), Some("menu-trigger"));
}

#[test]
fn independent_panels_do_not_interfere() {
    let first = key("first");
    let second = key("second");
    let mut dom = HeadlessDom::new();
    for key in [&first, &second] {
        dom.render_panel(key, PanelKind::Dropdown);
        dom.mount(PanelHandle::dropdown(key.clone())).expect("mount");
    }

    dom.open(&first);
    dom.open(&second);
    assert!(dom.is_open(&first) && dom.is_open(&second), "no mutual exclusion");

    dom.click("first-content");
    assert!(dom.is_open(&first));
    assert!(!dom.is_open(&second), "outside click for the second panel");

    dom.run_until_idle();
    assert!(dom.is_visible("first-content"));
    assert!(!dom.is_visible("second-content"));
}

#[test]
fn reduced_motion_settles_on_the_next_tick() {
    let key = key("menu");
    let mut dom = HeadlessDom::new().with_reduced_motion(true);
    dom.render_panel(&key, PanelKind::Dropdown);
    dom.mount(PanelHandle::dropdown(key.clone())).expect("mount");

    dom.open(&key);
    dom.next_frame();
    dom.close(&key);
    assert!(dom.is_visible("menu-content"), "hide stays asynchronous");
    dom.advance(0);
    assert!(!dom.is_visible("menu-content"));
    assert!(dom.now_ms() < 2 * FRAME_MS);
}
