//! Enter/leave class tables for panel elements.

use crate::panel::{ElementRole, PanelKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enter and leave class sets for one animated element.
///
/// Entering applies `enter` + `enter_from` while the element is revealed, then swaps
/// `enter_from` for `enter_to` one frame later. Leaving applies `leave` + `leave_to` and the
/// element is hidden only after `leave_ms` has elapsed.
pub struct Transition {
    /// Transition property/timing classes while entering.
    pub enter: &'static [&'static str],
    /// Visual state the enter animation starts from.
    pub enter_from: &'static [&'static str],
    /// Visual state the enter animation ends at.
    pub enter_to: &'static [&'static str],
    /// Transition property/timing classes while leaving.
    pub leave: &'static [&'static str],
    /// Visual state the leave animation ends at.
    pub leave_to: &'static [&'static str],
    /// Enter duration in milliseconds; matches the `duration-*` class in `enter`.
    pub enter_ms: u32,
    /// Leave duration in milliseconds; matches the `duration-*` class in `leave`.
    pub leave_ms: u32,
}

impl Transition {
    /// Classes that may linger from any earlier phase and must be cleared before entering.
    pub fn enter_clears(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        classes.extend_from_slice(self.leave);
        classes.extend_from_slice(self.leave_to);
        classes.extend_from_slice(self.enter_to);
        classes
    }

    /// Classes applied when an enter begins.
    pub fn enter_start(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        classes.extend_from_slice(self.enter);
        classes.extend_from_slice(self.enter_from);
        classes
    }

    /// Classes that may linger from entering and must be cleared before leaving.
    pub fn leave_clears(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        classes.extend_from_slice(self.enter);
        classes.extend_from_slice(self.enter_from);
        classes.extend_from_slice(self.enter_to);
        classes
    }

    /// Classes applied when a leave begins.
    pub fn leave_start(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        classes.extend_from_slice(self.leave);
        classes.extend_from_slice(self.leave_to);
        classes
    }
}

pub(crate) const DROPDOWN_CONTENT: Transition = Transition {
    enter: &["transition", "ease-out", "duration-100"],
    enter_from: &["opacity-0", "scale-95"],
    enter_to: &["opacity-100", "scale-100"],
    leave: &["transition", "ease-in", "duration-75"],
    leave_to: &["opacity-0", "scale-95"],
    enter_ms: 100,
    leave_ms: 75,
};

pub(crate) const SIDEBAR_BACKDROP: Transition = Transition {
    enter: &["transition-opacity", "ease-linear", "duration-300"],
    enter_from: &["opacity-0"],
    enter_to: &["opacity-100"],
    leave: &["transition-opacity", "ease-linear", "duration-300"],
    leave_to: &["opacity-0"],
    enter_ms: 300,
    leave_ms: 300,
};

pub(crate) const SIDEBAR_CONTAINER: Transition = Transition {
    enter: &["transition", "ease-in-out", "duration-300", "transform"],
    enter_from: &["-translate-x-full"],
    enter_to: &["translate-x-0"],
    leave: &["transition", "ease-in-out", "duration-300", "transform"],
    leave_to: &["-translate-x-full"],
    enter_ms: 300,
    leave_ms: 300,
};

/// Returns the transition for an element of a panel, or `None` when it only toggles `hidden`.
pub fn transition_for(kind: PanelKind, role: ElementRole) -> Option<&'static Transition> {
    match (kind, role) {
        (PanelKind::Dropdown, ElementRole::Content) => Some(&DROPDOWN_CONTENT),
        (PanelKind::Sidebar, ElementRole::Backdrop) => Some(&SIDEBAR_BACKDROP),
        (PanelKind::Sidebar, ElementRole::Container) => Some(&SIDEBAR_CONTAINER),
        _ => None,
    }
}

/// Classes an element carries in its initial (closed) render.
pub fn initial_classes(kind: PanelKind, role: ElementRole) -> &'static [&'static str] {
    transition_for(kind, role)
        .map(|transition| transition.enter_from)
        .unwrap_or(&[])
}
