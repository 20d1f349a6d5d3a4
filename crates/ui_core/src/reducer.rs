//! Panel actions, side-effect intents, and the open/close transition logic.
//!
//! Showing and hiding are two-phase. Opening reveals every element with its enter-start classes
//! and asks the host for a frame callback that swaps in the enter-end classes. Closing applies the
//! leave classes and asks for a settle callback that hides every element once the longest leave
//! transition has run. Every state change bumps the panel generation; callbacks carry the
//! generation they were issued for and are dropped when it is no longer current.

use crate::panel::{ClickTarget, PanelElements, PanelKind};
use crate::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Logical visibility of a panel.
pub enum PanelPhase {
    /// Hidden. Initial phase.
    #[default]
    Closed,
    /// Shown.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-panel state kept by the host between events.
pub struct PanelState {
    /// Logical visibility.
    pub phase: PanelPhase,
    /// Incremented on every phase change; scheduled callbacks compare against it.
    pub generation: u64,
}

impl PanelState {
    /// Whether the panel is logically open.
    pub fn is_open(self) -> bool {
        self.phase == PanelPhase::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_panel`].
pub enum PanelAction {
    /// Show the panel.
    Open,
    /// Hide the panel.
    Close,
    /// Show when hidden, hide when shown.
    Toggle,
    /// A page click, already classified against the panel's elements.
    Click(ClickTarget),
    /// A key press anywhere on the page.
    KeyDown {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// Frame callback requested by [`PanelEffect::RequestFrame`].
    FrameTick {
        /// Generation the callback was scheduled for.
        generation: u64,
    },
    /// Timer callback requested by [`PanelEffect::ScheduleSettle`].
    Settle {
        /// Generation the callback was scheduled for.
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_panel`] for the host to execute in order.
pub enum PanelEffect {
    /// Remove the `hidden` state so the element is painted.
    Reveal {
        /// Element id.
        element: String,
    },
    /// Apply the `hidden` state so the element stops receiving interaction and focus.
    Conceal {
        /// Element id.
        element: String,
    },
    /// Remove then add classes on an element.
    SwapClasses {
        /// Element id.
        element: String,
        /// Classes to remove.
        remove: Vec<&'static str>,
        /// Classes to add.
        add: Vec<&'static str>,
    },
    /// Mirror the logical state on the trigger's `aria-expanded`.
    SetExpanded {
        /// Trigger element id.
        element: String,
        /// New value.
        expanded: bool,
    },
    /// Dispatch [`PanelAction::FrameTick`] after the next paint.
    RequestFrame {
        /// Generation to echo back.
        generation: u64,
    },
    /// Dispatch [`PanelAction::Settle`] after `delay_ms`.
    ScheduleSettle {
        /// Generation to echo back.
        generation: u64,
        /// Delay in milliseconds.
        delay_ms: u32,
    },
    /// Move keyboard focus to an element.
    Focus {
        /// Element id.
        element: String,
    },
}

/// Applies `action` to a panel and returns the effects the host must execute.
///
/// Repeated opens and closes are no-ops. Outside clicks and Escape only affect an open panel.
/// Frame and settle callbacks from superseded generations produce no effects.
pub fn reduce_panel(
    state: &mut PanelState,
    elements: &PanelElements,
    action: PanelAction,
) -> Vec<PanelEffect> {
    match action {
        PanelAction::Open => open(state, elements),
        PanelAction::Close => close(state, elements),
        PanelAction::Toggle => {
            if state.is_open() {
                close(state, elements)
            } else {
                open(state, elements)
            }
        }
        PanelAction::Click(target) => match target {
            ClickTarget::Trigger => reduce_panel(state, elements, PanelAction::Toggle),
            ClickTarget::Inside => Vec::new(),
            ClickTarget::Outside | ClickTarget::Backdrop | ClickTarget::CloseControl => {
                close(state, elements)
            }
        },
        PanelAction::KeyDown { key } => {
            if key != "Escape" || !state.is_open() {
                return Vec::new();
            }
            let mut effects = close(state, elements);
            if let Some(trigger) = elements.trigger.as_ref() {
                effects.push(PanelEffect::Focus {
                    element: trigger.clone(),
                });
            }
            effects
        }
        PanelAction::FrameTick { generation } => {
            if generation != state.generation || !state.is_open() {
                return Vec::new();
            }
            transitioned(elements)
                .map(|(id, transition)| PanelEffect::SwapClasses {
                    element: id.to_string(),
                    remove: transition.enter_from.to_vec(),
                    add: transition.enter_to.to_vec(),
                })
                .collect()
        }
        PanelAction::Settle { generation } => {
            if generation != state.generation || state.is_open() {
                return Vec::new();
            }
            let mut effects = Vec::new();
            for element in &elements.animated {
                effects.push(PanelEffect::Conceal {
                    element: element.id.clone(),
                });
                if let Some(transition) = element.transition {
                    effects.push(PanelEffect::SwapClasses {
                        element: element.id.clone(),
                        remove: transition.leave.to_vec(),
                        add: Vec::new(),
                    });
                }
            }
            effects
        }
    }
}

fn transitioned(elements: &PanelElements) -> impl Iterator<Item = (&str, &'static Transition)> {
    elements.animated.iter().filter_map(|element| {
        element
            .transition
            .map(|transition| (element.id.as_str(), transition))
    })
}

fn set_expanded(elements: &PanelElements, expanded: bool) -> Option<PanelEffect> {
    elements
        .trigger
        .as_ref()
        .map(|trigger| PanelEffect::SetExpanded {
            element: trigger.clone(),
            expanded,
        })
}

fn open(state: &mut PanelState, elements: &PanelElements) -> Vec<PanelEffect> {
    if state.is_open() {
        return Vec::new();
    }
    state.phase = PanelPhase::Open;
    state.generation += 1;

    let mut effects = Vec::new();
    // Start classes land before the reveal so the first painted frame is the "from" state.
    for element in &elements.animated {
        if let Some(transition) = element.transition {
            effects.push(PanelEffect::SwapClasses {
                element: element.id.clone(),
                remove: transition.enter_clears(),
                add: transition.enter_start(),
            });
        }
        effects.push(PanelEffect::Reveal {
            element: element.id.clone(),
        });
    }
    effects.extend(set_expanded(elements, true));
    effects.push(PanelEffect::RequestFrame {
        generation: state.generation,
    });
    effects
}

fn close(state: &mut PanelState, elements: &PanelElements) -> Vec<PanelEffect> {
    if !state.is_open() {
        return Vec::new();
    }
    state.phase = PanelPhase::Closed;
    state.generation += 1;

    let mut effects: Vec<_> = transitioned(elements)
        .map(|(id, transition)| PanelEffect::SwapClasses {
            element: id.to_string(),
            remove: transition.leave_clears(),
            add: transition.leave_start(),
        })
        .collect();
    effects.extend(set_expanded(elements, false));
    effects.push(PanelEffect::ScheduleSettle {
        generation: state.generation,
        delay_ms: elements.leave_settle_ms(),
    });
    effects
}

/// Element id the host should focus first when a panel opens from the keyboard.
pub fn focus_target_on_open(elements: &PanelElements) -> &str {
    match elements.kind {
        PanelKind::Sidebar => elements.close.as_deref().unwrap_or(elements.region_id()),
        PanelKind::Dropdown => elements.content_id(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::panel::{ElementLookup, PanelHandle, PanelKey};

    struct Page(BTreeSet<&'static str>);

    impl ElementLookup for Page {
        fn has_element(&self, id: &str) -> bool {
            self.0.contains(id)
        }
    }

    fn dropdown() -> PanelHandle {
        let page = Page(["menu-trigger", "menu-content"].into_iter().collect());
        PanelHandle::dropdown(PanelKey::new("menu").expect("key"))
            .build(&page)
            .expect("build")
    }

    fn sidebar() -> PanelHandle {
        let page = Page(
            [
                "side-trigger",
                "side-content",
                "side-backdrop",
                "side-container",
                "side-close",
            ]
            .into_iter()
            .collect(),
        );
        PanelHandle::sidebar(PanelKey::new("side").expect("key"))
            .build(&page)
            .expect("build")
    }

    #[test]
    fn open_sets_start_classes_before_reveal_then_requests_a_frame() {
        let mut panel = dropdown();
        let effects = panel.open();

        assert_eq!(
            effects,
            vec![
                PanelEffect::SwapClasses {
                    element: "menu-content".to_string(),
                    remove: vec![
                        "transition",
                        "ease-in",
                        "duration-75",
                        "opacity-0",
                        "scale-95",
                        "opacity-100",
                        "scale-100"
                    ],
                    add: vec!["transition", "ease-out", "duration-100", "opacity-0", "scale-95"],
                },
                PanelEffect::Reveal {
                    element: "menu-content".to_string()
                },
                PanelEffect::SetExpanded {
                    element: "menu-trigger".to_string(),
                    expanded: true
                },
                PanelEffect::RequestFrame { generation: 1 },
            ]
        );
        assert!(panel.is_open());
    }

    #[test]
    fn frame_tick_swaps_to_enter_end_classes() {
        let mut panel = dropdown();
        panel.open();

        let effects = panel.dispatch(PanelAction::FrameTick { generation: 1 });
        assert_eq!(
            effects,
            vec![PanelEffect::SwapClasses {
                element: "menu-content".to_string(),
                remove: vec!["opacity-0", "scale-95"],
                add: vec!["opacity-100", "scale-100"],
            }]
        );
    }

    #[test]
    fn close_applies_leave_classes_and_defers_hidden_to_settle() {
        let mut panel = dropdown();
        panel.open();
        let effects = panel.close();

        assert!(!effects
            .iter()
            .any(|effect| matches!(effect, PanelEffect::Conceal { .. })));
        assert_eq!(
            effects.last(),
            Some(&PanelEffect::ScheduleSettle {
                generation: 2,
                delay_ms: 75
            })
        );

        let settled = panel.dispatch(PanelAction::Settle { generation: 2 });
        assert_eq!(
            settled[0],
            PanelEffect::Conceal {
                element: "menu-content".to_string()
            }
        );
    }

    #[test]
    fn sidebar_settles_after_the_longest_companion_transition() {
        let mut panel = sidebar();
        let reveal_order: Vec<_> = panel
            .open()
            .into_iter()
            .filter_map(|effect| match effect {
                PanelEffect::Reveal { element } => Some(element),
                _ => None,
            })
            .collect();
        assert_eq!(
            reveal_order,
            vec!["side-content", "side-backdrop", "side-container"]
        );

        let effects = panel.close();
        assert!(effects.contains(&PanelEffect::ScheduleSettle {
            generation: 2,
            delay_ms: 300
        }));

        let concealed = panel
            .dispatch(PanelAction::Settle { generation: 2 })
            .into_iter()
            .filter(|effect| matches!(effect, PanelEffect::Conceal { .. }))
            .count();
        assert_eq!(concealed, 3);
    }

    #[test]
    fn repeated_open_and_close_are_noops() {
        let mut panel = dropdown();
        assert!(panel.close().is_empty());
        panel.open();
        assert!(panel.open().is_empty());
        assert_eq!(panel.state().generation, 1);
    }

    #[test]
    fn stale_callbacks_do_not_override_newer_toggles() {
        let mut panel = sidebar();
        panel.open();
        panel.close();

        assert!(panel
            .dispatch(PanelAction::FrameTick { generation: 1 })
            .is_empty());

        panel.open();
        assert!(panel
            .dispatch(PanelAction::Settle { generation: 2 })
            .is_empty());
        assert!(panel.is_open());
    }

    #[test]
    fn outside_click_and_escape_only_close_an_open_panel() {
        let mut panel = dropdown();
        assert!(panel
            .dispatch(PanelAction::Click(ClickTarget::Outside))
            .is_empty());
        assert!(panel
            .dispatch(PanelAction::KeyDown {
                key: "Escape".to_string()
            })
            .is_empty());
        assert_eq!(panel.state(), PanelState::default());

        panel.open();
        assert!(panel
            .dispatch(PanelAction::Click(ClickTarget::Inside))
            .is_empty());
        assert!(panel.is_open());

        let effects = panel.dispatch(PanelAction::KeyDown {
            key: "Escape".to_string(),
        });
        assert!(!panel.is_open());
        assert_eq!(
            effects.last(),
            Some(&PanelEffect::Focus {
                element: "menu-trigger".to_string()
            })
        );
    }

    #[test]
    fn non_escape_keys_are_ignored() {
        let mut panel = dropdown();
        panel.open();
        assert!(panel
            .dispatch(PanelAction::KeyDown {
                key: "Enter".to_string()
            })
            .is_empty());
        assert!(panel.is_open());
    }

    #[test]
    fn trigger_click_toggles() {
        let mut panel = dropdown();
        panel.click(&["menu-trigger"]);
        assert!(panel.is_open());
        panel.click(&["menu-trigger"]);
        assert!(!panel.is_open());
    }

    #[test]
    fn keyboard_open_focus_lands_on_the_close_control_for_sidebars() {
        let panel = sidebar();
        assert_eq!(focus_target_on_open(panel.elements()), "side-close");
        assert_eq!(focus_target_on_open(dropdown().elements()), "menu-content");
    }
}
