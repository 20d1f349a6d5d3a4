//! Panel identity, the `{id}-suffix` element convention, and handle assembly.
//!
//! A panel is addressed by a [`PanelKey`]. Its trigger, content, and companion elements are
//! found by suffixing the key, so independent panels on one page never share elements. The
//! [`PanelHandleBuilder`] resolves those ids once against the rendered page and skips companions
//! that are absent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reducer::{reduce_panel, PanelAction, PanelEffect, PanelState};
use crate::transition::{transition_for, Transition};
use crate::{ConfigError, PanelError};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Validated identifier of a toggleable panel.
pub struct PanelKey(String);

impl PanelKey {
    /// Validates a caller-supplied component id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyId`] for blank ids and [`ConfigError::InvalidId`] for ids
    /// containing whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyId);
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of one of the panel's elements.
    pub fn element_id(&self, role: ElementRole) -> String {
        format!("{}-{}", self.0, role.suffix())
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Element roles participating in a panel.
pub enum ElementRole {
    /// Element whose click toggles the panel.
    Trigger,
    /// Shown/hidden region.
    Content,
    /// Dimming layer behind a mobile sidebar.
    Backdrop,
    /// Sliding container holding the mobile sidebar content.
    Container,
    /// Explicit close control.
    Close,
}

impl ElementRole {
    /// Suffix appended to the panel key to form the element id.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Content => "content",
            Self::Backdrop => "backdrop",
            Self::Container => "container",
            Self::Close => "close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Panel families, which differ in companions and transitions.
pub enum PanelKind {
    /// Dropdown menu content anchored to a trigger button.
    Dropdown,
    /// Mobile sidebar overlay with backdrop, sliding container, and close control.
    Sidebar,
}

impl PanelKind {
    /// Stable token used in `data-ui-panel`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Sidebar => "sidebar",
        }
    }
}

/// Page query used to resolve element ids when a handle is built.
pub trait ElementLookup {
    /// Reports whether an element with `id` is present.
    fn has_element(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One resolved element of a panel.
pub struct PanelElement {
    /// Element role.
    pub role: ElementRole,
    /// DOM id.
    pub id: String,
    /// Transition applied while showing or hiding, if any.
    pub transition: Option<&'static Transition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element ids of a panel that were present when the handle was built.
pub struct PanelElements {
    /// Panel key.
    pub key: PanelKey,
    /// Panel family.
    pub kind: PanelKind,
    /// Trigger element id, when rendered.
    pub trigger: Option<String>,
    /// Close control id, when rendered.
    pub close: Option<String>,
    /// Shown/hidden elements in reveal order: content first, then companions.
    pub animated: Vec<PanelElement>,
    /// Collapse every transition to zero duration.
    pub reduced_motion: bool,
}

impl PanelElements {
    fn find(&self, role: ElementRole) -> Option<&PanelElement> {
        self.animated.iter().find(|element| element.role == role)
    }

    /// Content element id.
    pub fn content_id(&self) -> &str {
        self.find(ElementRole::Content)
            .map(|element| element.id.as_str())
            .unwrap_or_default()
    }

    /// Backdrop element id, when present.
    pub fn backdrop_id(&self) -> Option<&str> {
        self.find(ElementRole::Backdrop)
            .map(|element| element.id.as_str())
    }

    /// Element whose bounds count as "inside" for outside-click detection: the sliding container
    /// when present, the content otherwise.
    pub fn region_id(&self) -> &str {
        self.find(ElementRole::Container)
            .map(|element| element.id.as_str())
            .unwrap_or_else(|| self.content_id())
    }

    /// Milliseconds until every element has finished leaving.
    pub fn leave_settle_ms(&self) -> u32 {
        if self.reduced_motion {
            return 0;
        }
        self.animated
            .iter()
            .filter_map(|element| element.transition)
            .map(|transition| transition.leave_ms)
            .max()
            .unwrap_or(0)
    }

    /// Classifies a click by the ids on its path, innermost first.
    ///
    /// Elements without ids are expected to be left out of `path`.
    pub fn classify_click<S: AsRef<str>>(&self, path: &[S]) -> ClickTarget {
        let on_path = |id: &str| path.iter().any(|entry| entry.as_ref() == id);

        if self.close.as_deref().is_some_and(on_path) {
            ClickTarget::CloseControl
        } else if self.backdrop_id().is_some_and(on_path) {
            ClickTarget::Backdrop
        } else if self.trigger.as_deref().is_some_and(on_path) {
            ClickTarget::Trigger
        } else if on_path(self.region_id()) {
            ClickTarget::Inside
        } else {
            ClickTarget::Outside
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a click landed relative to one panel.
pub enum ClickTarget {
    /// On the panel's trigger.
    Trigger,
    /// On the explicit close control.
    CloseControl,
    /// On the backdrop.
    Backdrop,
    /// Inside the panel region.
    Inside,
    /// Anywhere else on the page.
    Outside,
}

#[derive(Debug, Clone)]
/// Collects which elements a panel uses before resolving them against the page.
pub struct PanelHandleBuilder {
    key: PanelKey,
    kind: PanelKind,
    backdrop: bool,
    container: bool,
    close: bool,
    reduced_motion: bool,
}

impl PanelHandleBuilder {
    /// Requests a backdrop companion.
    pub fn backdrop(mut self, enabled: bool) -> Self {
        self.backdrop = enabled;
        self
    }

    /// Requests a sliding container companion.
    pub fn container(mut self, enabled: bool) -> Self {
        self.container = enabled;
        self
    }

    /// Requests a close control.
    pub fn close_control(mut self, enabled: bool) -> Self {
        self.close = enabled;
        self
    }

    /// Collapses transitions to zero duration.
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// Resolves the panel's elements against `page`.
    ///
    /// Requested companions, the trigger, and the close control are skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::MissingContent`] when `{id}-content` is not rendered.
    pub fn build(self, page: &impl ElementLookup) -> Result<PanelHandle, PanelError> {
        let key = self.key;
        let kind = self.kind;
        let present = |role: ElementRole| {
            let id = key.element_id(role);
            page.has_element(&id).then_some(id)
        };

        let content = present(ElementRole::Content).ok_or_else(|| PanelError::MissingContent {
            element: key.element_id(ElementRole::Content),
        })?;

        let mut animated = vec![PanelElement {
            role: ElementRole::Content,
            id: content,
            transition: transition_for(kind, ElementRole::Content),
        }];
        for (wanted, role) in [
            (self.backdrop, ElementRole::Backdrop),
            (self.container, ElementRole::Container),
        ] {
            if !wanted {
                continue;
            }
            if let Some(id) = present(role) {
                animated.push(PanelElement {
                    role,
                    id,
                    transition: transition_for(kind, role),
                });
            }
        }

        let trigger = present(ElementRole::Trigger);
        let close = if self.close {
            present(ElementRole::Close)
        } else {
            None
        };

        Ok(PanelHandle {
            elements: PanelElements {
                key,
                kind,
                trigger,
                close,
                animated,
                reduced_motion: self.reduced_motion,
            },
            state: PanelState::default(),
        })
    }
}

#[derive(Debug, Clone)]
/// A mounted panel: its resolved elements plus its open/closed state.
///
/// Each method returns the effects the host must execute, in order.
pub struct PanelHandle {
    elements: PanelElements,
    state: PanelState,
}

impl PanelHandle {
    /// Starts a handle for an arbitrary panel family with no companions requested.
    pub fn builder(key: PanelKey, kind: PanelKind) -> PanelHandleBuilder {
        PanelHandleBuilder {
            key,
            kind,
            backdrop: false,
            container: false,
            close: false,
            reduced_motion: false,
        }
    }

    /// Starts a dropdown handle: content only.
    pub fn dropdown(key: PanelKey) -> PanelHandleBuilder {
        Self::builder(key, PanelKind::Dropdown)
    }

    /// Starts a mobile sidebar handle: content, backdrop, container, and close control.
    pub fn sidebar(key: PanelKey) -> PanelHandleBuilder {
        Self::builder(key, PanelKind::Sidebar)
            .backdrop(true)
            .container(true)
            .close_control(true)
    }

    /// Resolved elements.
    pub fn elements(&self) -> &PanelElements {
        &self.elements
    }

    /// Panel key.
    pub fn key(&self) -> &PanelKey {
        &self.elements.key
    }

    /// Current state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Whether the panel is logically open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Applies an action and returns the effects to execute.
    pub fn dispatch(&mut self, action: PanelAction) -> Vec<PanelEffect> {
        reduce_panel(&mut self.state, &self.elements, action)
    }

    /// Shows the panel.
    pub fn open(&mut self) -> Vec<PanelEffect> {
        self.dispatch(PanelAction::Open)
    }

    /// Hides the panel.
    pub fn close(&mut self) -> Vec<PanelEffect> {
        self.dispatch(PanelAction::Close)
    }

    /// Closes an open panel, opens a closed one.
    pub fn toggle(&mut self) -> Vec<PanelEffect> {
        self.dispatch(PanelAction::Toggle)
    }

    /// Routes a page click through [`PanelElements::classify_click`].
    pub fn click<S: AsRef<str>>(&mut self, path: &[S]) -> Vec<PanelEffect> {
        let target = self.elements.classify_click(path);
        self.dispatch(PanelAction::Click(target))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Page(BTreeSet<String>);

    impl Page {
        fn with(ids: &[&str]) -> Self {
            Self(ids.iter().map(|id| id.to_string()).collect())
        }
    }

    impl ElementLookup for Page {
        fn has_element(&self, id: &str) -> bool {
            self.0.contains(id)
        }
    }

    fn key(id: &str) -> PanelKey {
        PanelKey::new(id).expect("valid key")
    }

    #[test]
    fn keys_reject_blank_and_whitespace_ids() {
        assert_eq!(PanelKey::new("  "), Err(ConfigError::EmptyId));
        assert_eq!(
            PanelKey::new("user menu"),
            Err(ConfigError::InvalidId("user menu".to_string()))
        );
        assert_eq!(
            key("user-menu").element_id(ElementRole::Content),
            "user-menu-content"
        );
    }

    #[test]
    fn sidebar_builder_resolves_every_companion() {
        let page = Page::with(&[
            "sidebar-trigger",
            "sidebar-content",
            "sidebar-backdrop",
            "sidebar-container",
            "sidebar-close",
        ]);
        let handle = PanelHandle::sidebar(key("sidebar"))
            .build(&page)
            .expect("build");
        let elements = handle.elements();

        let roles: Vec<_> = elements.animated.iter().map(|el| el.role).collect();
        assert_eq!(
            roles,
            vec![
                ElementRole::Content,
                ElementRole::Backdrop,
                ElementRole::Container
            ]
        );
        assert_eq!(elements.trigger.as_deref(), Some("sidebar-trigger"));
        assert_eq!(elements.close.as_deref(), Some("sidebar-close"));
        assert_eq!(elements.region_id(), "sidebar-container");
        assert_eq!(elements.leave_settle_ms(), 300);
    }

    #[test]
    fn missing_companions_are_skipped_but_missing_content_is_an_error() {
        let page = Page::with(&["sidebar-content", "sidebar-container"]);
        let handle = PanelHandle::sidebar(key("sidebar"))
            .build(&page)
            .expect("build");
        assert_eq!(handle.elements().backdrop_id(), None);
        assert_eq!(handle.elements().trigger, None);

        let err = PanelHandle::dropdown(key("menu"))
            .build(&Page::with(&["menu-trigger"]))
            .unwrap_err();
        assert_eq!(
            err,
            PanelError::MissingContent {
                element: "menu-content".to_string()
            }
        );
    }

    #[test]
    fn clicks_are_classified_innermost_role_first() {
        let page = Page::with(&[
            "nav-trigger",
            "nav-content",
            "nav-backdrop",
            "nav-container",
            "nav-close",
        ]);
        let handle = PanelHandle::sidebar(key("nav")).build(&page).expect("build");
        let elements = handle.elements();

        assert_eq!(
            elements.classify_click(&["nav-close", "nav-container", "nav-content"]),
            ClickTarget::CloseControl
        );
        assert_eq!(
            elements.classify_click(&["nav-backdrop", "nav-content"]),
            ClickTarget::Backdrop
        );
        assert_eq!(
            elements.classify_click(&["nav-item-home", "nav-container", "nav-content"]),
            ClickTarget::Inside
        );
        assert_eq!(
            elements.classify_click(&["nav-content"]),
            ClickTarget::Outside
        );
        assert_eq!(
            elements.classify_click(&["nav-trigger", "app"]),
            ClickTarget::Trigger
        );
        assert_eq!(
            elements.classify_click::<&str>(&[]),
            ClickTarget::Outside
        );
    }

    #[test]
    fn reduced_motion_settles_immediately() {
        let handle = PanelHandle::dropdown(key("m"))
            .reduced_motion(true)
            .build(&Page::with(&["m-content"]))
            .expect("build");
        assert_eq!(handle.elements().leave_settle_ms(), 0);
    }
}
