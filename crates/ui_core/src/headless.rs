//! In-memory page and scheduler that execute panel effects without a browser.
//!
//! [`HeadlessDom`] stands in for the document: it holds elements with their `hidden` flag,
//! classes, attributes, and parent links, owns the mounted panels, and runs frame and settle
//! callbacks on a virtual clock. The browser executor in `ui_kit` performs the same effects
//! against the real DOM.
//!
//! The `render_*` helpers build the id, parent, class, and attribute layout that `ui_kit`'s
//! `Dropdown` and `Sidebar` emit, from the same `ui_core` helpers those components call
//! ([`PanelKey::element_id`], [`crate::MenuItem::attrs`], [`SidebarNav::link_id`]). A change to
//! either component's markup has to be mirrored here. Rendering an id twice is recorded in
//! [`HeadlessDom::replaced_ids`] so duplicate markup stays visible to tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::menu::MenuEntry;
use crate::panel::{ElementLookup, ElementRole, PanelHandle, PanelHandleBuilder, PanelKey, PanelKind};
use crate::reducer::{PanelAction, PanelEffect};
use crate::sidebar::{Rendering, SidebarNav};
use crate::tokens::bool_token;
use crate::transition::initial_classes;
use crate::PanelError;

/// Virtual duration of one animation frame.
pub const FRAME_MS: u64 = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One element of the in-memory page.
pub struct HeadlessElement {
    /// Parent element id.
    pub parent: Option<String>,
    /// `hidden` state.
    pub hidden: bool,
    /// Class list.
    pub classes: BTreeSet<String>,
    /// Other attributes.
    pub attributes: BTreeMap<String, String>,
}

impl HeadlessElement {
    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    panel: PanelKey,
    action: PanelAction,
}

#[derive(Debug, Default)]
/// In-memory page hosting any number of independent panels.
pub struct HeadlessDom {
    elements: BTreeMap<String, HeadlessElement>,
    panels: BTreeMap<PanelKey, PanelHandle>,
    pending: Vec<Scheduled>,
    now_ms: u64,
    seq: u64,
    focused: Option<String>,
    reduced_motion: bool,
    log: Vec<(PanelKey, PanelEffect)>,
    replaced: Vec<String>,
}

impl ElementLookup for HeadlessDom {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

impl HeadlessDom {
    /// Empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts panels with reduced motion.
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// Inserts (or replaces) an element. Replacements are recorded in [`Self::replaced_ids`].
    pub fn insert(&mut self, id: &str, parent: Option<&str>) -> &mut HeadlessElement {
        if self.elements.contains_key(id) {
            self.replaced.push(id.to_string());
        }
        let element = self.elements.entry(id.to_string()).or_default();
        *element = HeadlessElement {
            parent: parent.map(str::to_string),
            ..HeadlessElement::default()
        };
        element
    }

    /// Removes an element. Children keep their dangling parent link.
    pub fn remove(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Element by id.
    pub fn element(&self, id: &str) -> Option<&HeadlessElement> {
        self.elements.get(id)
    }

    /// Ids of elements whose `name` attribute equals `value`.
    pub fn elements_with_attribute(&self, name: &str, value: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, element)| element.attribute(name) == Some(value))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Whether the element exists and neither it nor any ancestor is hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.contains_key(id)
            && self
                .path_to_root(id)
                .iter()
                .all(|id| self.elements.get(id).map_or(true, |element| !element.hidden))
    }

    /// Currently focused element id.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Ids that were inserted while an element with the same id already existed.
    pub fn replaced_ids(&self) -> &[String] {
        &self.replaced
    }

    /// Every executed effect, oldest first.
    pub fn effect_log(&self) -> &[(PanelKey, PanelEffect)] {
        &self.log
    }

    /// Number of frame/settle callbacks not yet run, including stale ones.
    pub fn pending_callbacks(&self) -> usize {
        self.pending.len()
    }

    /// Renders the initial, closed markup skeleton for a panel, mirroring the components.
    pub fn render_panel(&mut self, key: &PanelKey, kind: PanelKind) {
        let trigger = key.element_id(ElementRole::Trigger);
        let content = key.element_id(ElementRole::Content);
        self.insert(&trigger, None)
            .attributes
            .insert("aria-expanded".to_string(), bool_token(false).to_string());
        self.insert_closed(&content, None, kind, ElementRole::Content);

        if kind == PanelKind::Sidebar {
            let container = key.element_id(ElementRole::Container);
            self.insert_closed(
                &key.element_id(ElementRole::Backdrop),
                Some(content.as_str()),
                kind,
                ElementRole::Backdrop,
            );
            self.insert_closed(&container, Some(content.as_str()), kind, ElementRole::Container);
            self.insert(&key.element_id(ElementRole::Close), Some(container.as_str()));
        }
    }

    fn insert_closed(&mut self, id: &str, parent: Option<&str>, kind: PanelKind, role: ElementRole) {
        let element = self.insert(id, parent);
        element.hidden = true;
        element.classes = initial_classes(kind, role)
            .iter()
            .map(|class| class.to_string())
            .collect();
    }

    /// Renders dropdown rows inside the panel content.
    pub fn render_menu(&mut self, key: &PanelKey, entries: &[MenuEntry]) {
        let content = key.element_id(ElementRole::Content);
        for (index, entry) in entries.iter().enumerate() {
            let MenuEntry::Item(item) = entry else {
                continue;
            };
            let attrs = item.attrs(key, index);
            let element = self.insert(&attrs.id, Some(content.as_str()));
            element.classes = attrs.class.split_whitespace().map(str::to_string).collect();
            element
                .attributes
                .insert("data-label".to_string(), item.label.clone());
            if let Some(tabindex) = attrs.tabindex {
                element
                    .attributes
                    .insert("tabindex".to_string(), tabindex.to_string());
            }
            if let Some(aria_disabled) = attrs.aria_disabled {
                element
                    .attributes
                    .insert("aria-disabled".to_string(), aria_disabled.to_string());
            }
        }
    }

    /// Renders both sidebar navigation trees from one resolution.
    pub fn render_sidebar_nav(&mut self, nav: &SidebarNav) {
        let container = nav.key().element_id(ElementRole::Container);
        for rendering in Rendering::ALL {
            let root = nav.root_id(rendering);
            let parent = match rendering {
                Rendering::Desktop => None,
                Rendering::Mobile => Some(container.as_str()),
            };
            self.insert(&root, parent);
            for item in nav.items() {
                let link = self.insert(&nav.link_id(rendering, item), Some(root.as_str()));
                if let Some(current) = item.aria_current() {
                    link.attributes
                        .insert("aria-current".to_string(), current.to_string());
                }
            }
        }
    }

    /// Builds and registers a panel against the current page.
    ///
    /// # Errors
    ///
    /// Propagates [`PanelError::MissingContent`] from the builder.
    pub fn mount(&mut self, builder: PanelHandleBuilder) -> Result<(), PanelError> {
        let handle = builder.reduced_motion(self.reduced_motion).build(self)?;
        self.panels.insert(handle.key().clone(), handle);
        Ok(())
    }

    /// Whether a mounted panel is logically open.
    pub fn is_open(&self, key: &PanelKey) -> bool {
        self.panels.get(key).is_some_and(PanelHandle::is_open)
    }

    /// Dispatches an action to one panel and executes the resulting effects.
    ///
    /// Unmounted keys yield no effects.
    pub fn dispatch(&mut self, key: &PanelKey, action: PanelAction) -> Vec<PanelEffect> {
        let Some(handle) = self.panels.get_mut(key) else {
            return Vec::new();
        };
        let effects = handle.dispatch(action);
        for effect in &effects {
            self.execute(key, effect);
            self.log.push((key.clone(), effect.clone()));
        }
        effects
    }

    /// Opens a panel.
    pub fn open(&mut self, key: &PanelKey) -> Vec<PanelEffect> {
        self.dispatch(key, PanelAction::Open)
    }

    /// Closes a panel.
    pub fn close(&mut self, key: &PanelKey) -> Vec<PanelEffect> {
        self.dispatch(key, PanelAction::Close)
    }

    /// Toggles a panel.
    pub fn toggle(&mut self, key: &PanelKey) -> Vec<PanelEffect> {
        self.dispatch(key, PanelAction::Toggle)
    }

    /// Clicks an element; every mounted panel sees the click, like a document listener.
    pub fn click(&mut self, id: &str) {
        let path = self.path_to_root(id);
        let keys: Vec<PanelKey> = self.panels.keys().cloned().collect();
        for key in keys {
            let target = match self.panels.get(&key) {
                Some(handle) => handle.elements().classify_click(&path),
                None => continue,
            };
            self.dispatch(&key, PanelAction::Click(target));
        }
    }

    /// Presses a key; every mounted panel sees it.
    pub fn key_down(&mut self, key_name: &str) {
        let keys: Vec<PanelKey> = self.panels.keys().cloned().collect();
        for key in keys {
            self.dispatch(
                &key,
                PanelAction::KeyDown {
                    key: key_name.to_string(),
                },
            );
        }
    }

    /// Advances virtual time, running due callbacks in schedule order.
    pub fn advance(&mut self, ms: u64) {
        let until = self.now_ms + ms;
        while let Some(index) = self.next_due(until) {
            let scheduled = self.pending.remove(index);
            self.now_ms = scheduled.due_ms;
            self.dispatch(&scheduled.panel, scheduled.action);
        }
        self.now_ms = until;
    }

    /// Advances one frame.
    pub fn next_frame(&mut self) {
        self.advance(FRAME_MS);
    }

    /// Runs every pending callback, including ones scheduled while running.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.pending.iter().map(|scheduled| scheduled.due_ms).max() {
            self.advance(due.saturating_sub(self.now_ms));
        }
    }

    fn next_due(&self, until: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, scheduled)| scheduled.due_ms <= until)
            .min_by_key(|(_, scheduled)| (scheduled.due_ms, scheduled.seq))
            .map(|(index, _)| index)
    }

    fn schedule(&mut self, panel: &PanelKey, delay_ms: u64, action: PanelAction) {
        self.seq += 1;
        self.pending.push(Scheduled {
            due_ms: self.now_ms + delay_ms,
            seq: self.seq,
            panel: panel.clone(),
            action,
        });
    }

    fn path_to_root(&self, id: &str) -> Vec<String> {
        let mut path = Vec::new();
        let mut cursor = Some(id.to_string());
        while let Some(current) = cursor {
            if path.contains(&current) {
                break;
            }
            cursor = self
                .elements
                .get(&current)
                .and_then(|element| element.parent.clone());
            path.push(current);
        }
        path
    }

    fn execute(&mut self, key: &PanelKey, effect: &PanelEffect) {
        match effect {
            PanelEffect::Reveal { element } => {
                if let Some(element) = self.elements.get_mut(element) {
                    element.hidden = false;
                }
            }
            PanelEffect::Conceal { element } => {
                if let Some(element) = self.elements.get_mut(element) {
                    element.hidden = true;
                }
            }
            PanelEffect::SwapClasses {
                element,
                remove,
                add,
            } => {
                if let Some(element) = self.elements.get_mut(element) {
                    for class in remove {
                        element.classes.remove(*class);
                    }
                    for class in add {
                        element.classes.insert((*class).to_string());
                    }
                }
            }
            PanelEffect::SetExpanded { element, expanded } => {
                if let Some(element) = self.elements.get_mut(element) {
                    element
                        .attributes
                        .insert("aria-expanded".to_string(), bool_token(*expanded).to_string());
                }
            }
            PanelEffect::RequestFrame { generation } => {
                self.schedule(
                    key,
                    FRAME_MS,
                    PanelAction::FrameTick {
                        generation: *generation,
                    },
                );
            }
            PanelEffect::ScheduleSettle {
                generation,
                delay_ms,
            } => {
                self.schedule(
                    key,
                    u64::from(*delay_ms),
                    PanelAction::Settle {
                        generation: *generation,
                    },
                );
            }
            PanelEffect::Focus { element } => {
                if self.elements.contains_key(element) {
                    self.focused = Some(element.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn callbacks_run_in_due_order_on_the_virtual_clock() {
        let key = PanelKey::new("menu").expect("key");
        let mut dom = HeadlessDom::new();
        dom.render_panel(&key, PanelKind::Dropdown);
        dom.mount(PanelHandle::dropdown(key.clone())).expect("mount");

        dom.open(&key);
        assert_eq!(dom.pending_callbacks(), 1);
        assert!(!dom
            .element("menu-content")
            .expect("content")
            .has_class("opacity-100"));

        dom.next_frame();
        assert_eq!(dom.pending_callbacks(), 0);
        assert_eq!(dom.now_ms(), FRAME_MS);
        assert!(dom
            .element("menu-content")
            .expect("content")
            .has_class("opacity-100"));
    }

    #[test]
    fn click_paths_follow_parent_links() {
        let mut dom = HeadlessDom::new();
        dom.insert("root", None);
        dom.insert("child", Some("root"));
        dom.insert("leaf", Some("child"));
        assert_eq!(dom.path_to_root("leaf"), vec!["leaf", "child", "root"]);
    }

    #[test]
    fn parent_cycles_do_not_hang_path_resolution() {
        let mut dom = HeadlessDom::new();
        dom.insert("a", Some("b"));
        dom.insert("b", Some("a"));
        assert_eq!(dom.path_to_root("a"), vec!["a", "b"]);
    }

    #[test]
    fn rendering_an_id_twice_is_recorded() {
        let mut dom = HeadlessDom::new();
        dom.insert("nav-team", None);
        dom.insert("nav-reports", None);
        assert!(dom.replaced_ids().is_empty());

        dom.insert("nav-team", None);
        assert_eq!(dom.replaced_ids().to_vec(), vec!["nav-team".to_string()]);
    }

    #[test]
    fn dispatch_to_unmounted_key_is_ignored() {
        let mut dom = HeadlessDom::new();
        let key = PanelKey::new("ghost").expect("key");
        assert!(dom.open(&key).is_empty());
        assert!(!dom.is_open(&key));
    }
}
