//! Browser executor for the headless panel reducer.
//!
//! A [`PanelController`] owns one panel's [`PanelHandle`], resolves it against the document on
//! the first event, and executes the returned effects: `hidden` and class mutations directly on
//! the elements, frame ticks through a double `requestAnimationFrame` so the start classes are
//! painted first, and settles through `setTimeout`.

use std::time::Duration;

use leptos::*;
use ui_core::tokens::bool_token;
use ui_core::{
    focus_target_on_open, ElementLookup, PanelAction, PanelEffect, PanelError, PanelHandle,
    PanelHandleBuilder,
};

use crate::config::use_ui_config;
use crate::dom;

/// Lazily built panel handle. Building is retried on every event until the content element
/// exists, so a panel rendered after its controller still mounts.
enum Mount {
    Pending { reported: bool },
    Ready(PanelHandle),
}

/// A failed build, and whether an earlier failure was already reported.
struct MountFailure {
    err: PanelError,
    repeated: bool,
}

impl Mount {
    fn ensure(
        &mut self,
        builder: &PanelHandleBuilder,
        page: &impl ElementLookup,
    ) -> Result<(), MountFailure> {
        if let Self::Pending { reported } = *self {
            match builder.clone().build(page) {
                Ok(handle) => *self = Self::Ready(handle),
                Err(err) => {
                    *self = Self::Pending { reported: true };
                    return Err(MountFailure {
                        err,
                        repeated: reported,
                    });
                }
            }
        }
        Ok(())
    }

    fn handle(&self) -> Option<&PanelHandle> {
        match self {
            Self::Ready(handle) => Some(handle),
            Self::Pending { .. } => None,
        }
    }

    fn handle_mut(&mut self) -> Option<&mut PanelHandle> {
        match self {
            Self::Ready(handle) => Some(handle),
            Self::Pending { .. } => None,
        }
    }
}

/// Open state for callbacks that may outlive the owning scope. Disposed reads as closed.
fn still_open(open: RwSignal<bool>) -> bool {
    open.try_get_untracked().unwrap_or(false)
}

#[derive(Clone, Copy)]
/// Reactive-owner-scoped handle to one mounted panel.
pub struct PanelController {
    builder: StoredValue<PanelHandleBuilder>,
    mount: StoredValue<Mount>,
    open: RwSignal<bool>,
}

impl PanelController {
    fn new(builder: PanelHandleBuilder) -> Self {
        Self {
            builder: store_value(builder),
            mount: store_value(Mount::Pending { reported: false }),
            open: create_rw_signal(false),
        }
    }

    /// Logical open state, updated synchronously on every open/close.
    pub fn is_open(self) -> Signal<bool> {
        self.open.into()
    }

    /// Shows the panel.
    pub fn open(self) {
        self.dispatch(PanelAction::Open);
    }

    /// Hides the panel.
    pub fn close(self) {
        self.dispatch(PanelAction::Close);
    }

    /// Closes an open panel, opens a closed one.
    pub fn toggle(self) {
        self.dispatch(PanelAction::Toggle);
    }

    /// Moves focus into the panel after the next paint, if it is still open.
    pub fn focus_inside(self) {
        request_animation_frame(move || {
            if !still_open(self.open) {
                return;
            }
            let target = self
                .mount
                .try_with_value(|mount| {
                    mount
                        .handle()
                        .map(|handle| focus_target_on_open(handle.elements()).to_string())
                })
                .flatten();
            if let Some(target) = target {
                dom::focus_element_by_id(&target);
            }
        });
    }

    /// Applies an action and executes the resulting effects.
    pub fn dispatch(self, action: PanelAction) {
        self.run(move |handle| {
            if let PanelAction::FrameTick { generation } | PanelAction::Settle { generation } =
                &action
            {
                if *generation != handle.state().generation {
                    logging::debug_warn!(
                        "panel `{}` ignored callback for superseded generation {generation}",
                        handle.key()
                    );
                }
            }
            handle.dispatch(action)
        });
    }

    fn click(self, path: Vec<String>) {
        let was_open = still_open(self.open);
        self.run(move |handle| handle.click(&path));
        if !was_open && still_open(self.open) {
            self.focus_inside();
        }
    }

    fn run(self, step: impl FnOnce(&mut PanelHandle) -> Vec<PanelEffect>) {
        let Some(builder) = self.builder.try_get_value() else {
            return;
        };
        let outcome = self.mount.try_update_value(|mount| {
            if let Err(failure) = mount.ensure(&builder, &dom::DocumentLookup) {
                if failure.repeated {
                    logging::debug_warn!("panel mount still failing: {}", failure.err);
                } else {
                    logging::warn!("panel mount failed: {}", failure.err);
                }
                return None;
            }
            let handle = mount.handle_mut()?;
            let effects = step(handle);
            Some((effects, handle.is_open()))
        });
        let Some(Some((effects, open))) = outcome else {
            return;
        };

        if self.open.get_untracked() != open {
            self.open.set(open);
        }
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(self, effect: PanelEffect) {
        match effect {
            PanelEffect::Reveal { element } => dom::reveal(&element),
            PanelEffect::Conceal { element } => dom::conceal(&element),
            PanelEffect::SwapClasses {
                element,
                remove,
                add,
            } => dom::swap_classes(&element, &remove, &add),
            PanelEffect::SetExpanded { element, expanded } => {
                dom::set_attribute(&element, "aria-expanded", bool_token(expanded));
            }
            PanelEffect::RequestFrame { generation } => {
                request_animation_frame(move || {
                    request_animation_frame(move || {
                        self.dispatch(PanelAction::FrameTick { generation });
                    });
                });
            }
            PanelEffect::ScheduleSettle {
                generation,
                delay_ms,
            } => {
                set_timeout(
                    move || self.dispatch(PanelAction::Settle { generation }),
                    Duration::from_millis(u64::from(delay_ms)),
                );
            }
            PanelEffect::Focus { element } => {
                if !dom::focus_element_by_id(&element) {
                    logging::debug_warn!("focus target `{element}` not found");
                }
            }
        }
    }
}

/// Creates a controller for the current component and wires the page-level click and keydown
/// listeners that drive it. Listeners are removed when the owning scope is disposed.
pub fn use_panel(builder: PanelHandleBuilder) -> PanelController {
    let reduced_motion = use_ui_config().reduced_motion;
    let controller = PanelController::new(builder.reduced_motion(reduced_motion));

    let click_listener = window_event_listener(ev::click, move |ev| {
        controller.click(dom::event_id_path(&ev));
    });
    on_cleanup(move || click_listener.remove());

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        controller.dispatch(PanelAction::KeyDown { key: ev.key() });
    });
    on_cleanup(move || keydown_listener.remove());

    controller
}

#[cfg(test)]
mod tests {
    use ui_core::{PanelKey, PanelKind};

    use super::*;

    struct Page(Vec<String>);

    impl ElementLookup for Page {
        fn has_element(&self, id: &str) -> bool {
            self.0.iter().any(|element| element == id)
        }
    }

    fn builder() -> PanelHandleBuilder {
        PanelHandle::builder(PanelKey::new("menu").expect("key"), PanelKind::Dropdown)
    }

    #[test]
    fn only_the_first_mount_failure_is_reported_loudly() {
        let mut mount = Mount::Pending { reported: false };
        let empty = Page(Vec::new());

        let first = mount.ensure(&builder(), &empty).err().expect("missing content");
        assert!(!first.repeated);
        let second = mount.ensure(&builder(), &empty).err().expect("missing content");
        assert!(second.repeated);
        assert!(mount.handle().is_none());
    }

    #[test]
    fn content_rendered_late_still_mounts() {
        let mut mount = Mount::Pending { reported: false };
        assert!(mount.ensure(&builder(), &Page(Vec::new())).is_err());

        let page = Page(vec!["menu-trigger".into(), "menu-content".into()]);
        assert!(mount.ensure(&builder(), &page).is_ok());
        assert!(mount.handle_mut().is_some_and(|handle| !handle.is_open()));
    }

    #[test]
    fn disposed_open_flag_reads_as_closed() {
        let runtime = create_runtime();
        let open = create_rw_signal(true);
        assert!(still_open(open));
        open.dispose();
        assert!(!still_open(open));
        runtime.dispose();
    }
}
