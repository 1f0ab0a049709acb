//! Signal routing between the UI environment and drag handlers.
//!
//! # Responsibility
//! - Keep per-element and ambient (whole-surface) handler lists.
//! - Deliver one signal to the target's handlers, then to ambient handlers
//!   unless the signal's propagation was stopped.
//!
//! # Invariants
//! - Handlers run in registration order.
//! - Stopping propagation only affects the dispatch it happens in.
//! - Handler lists are snapshotted before a dispatch, so handlers may
//!   register further handlers without affecting the running dispatch.

use log::trace;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

/// Drag lifecycle signals delivered by the UI environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    DragStart,
    DragEnd,
    DragOver,
    Drop,
    DragEnter,
}

impl SignalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DragStart => "drag_start",
            Self::DragEnd => "drag_end",
            Self::DragOver => "drag_over",
            Self::Drop => "drop",
            Self::DragEnter => "drag_enter",
        }
    }
}

impl Display for SignalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One signal in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    kind: SignalKind,
    target: String,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new(kind: SignalKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Id of the element the signal was fired on.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Keeps ambient handlers from seeing this signal.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Marks the signal as handled; for `DragOver` this permits dropping.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub type SignalHandler = Rc<dyn Fn(&mut DragEvent)>;

/// Whole UI surface: the signal bus shared by every element.
#[derive(Default)]
pub struct EventSurface {
    element_handlers: RefCell<HashMap<(String, SignalKind), Vec<SignalHandler>>>,
    ambient_handlers: RefCell<HashMap<SignalKind, Vec<SignalHandler>>>,
}

impl EventSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handler` to `kind` signals fired on `element_id`.
    pub fn listen(
        &self,
        element_id: &str,
        kind: SignalKind,
        handler: impl Fn(&mut DragEvent) + 'static,
    ) {
        self.element_handlers
            .borrow_mut()
            .entry((element_id.to_string(), kind))
            .or_default()
            .push(Rc::new(handler));
    }

    /// Subscribes `handler` to every `kind` signal that reaches the surface.
    pub fn listen_ambient(&self, kind: SignalKind, handler: impl Fn(&mut DragEvent) + 'static) {
        self.ambient_handlers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Fires one signal on `target` and runs it to completion.
    ///
    /// Returns the finished event so callers can inspect its flags.
    pub fn dispatch(&self, kind: SignalKind, target: &str) -> DragEvent {
        let mut event = DragEvent::new(kind, target);

        let element_handlers = self
            .element_handlers
            .borrow()
            .get(&(target.to_string(), kind))
            .cloned()
            .unwrap_or_default();
        for handler in &element_handlers {
            handler(&mut event);
        }

        if event.is_propagation_stopped() {
            trace!(
                "event=signal_dispatch module=surface status=stopped kind={kind} target={target}"
            );
            return event;
        }

        let ambient_handlers = self
            .ambient_handlers
            .borrow()
            .get(&kind)
            .cloned()
            .unwrap_or_default();
        for handler in &ambient_handlers {
            handler(&mut event);
        }

        trace!(
            "event=signal_dispatch module=surface status=ok kind={kind} target={target} element_handlers={} ambient_handlers={}",
            element_handlers.len(),
            ambient_handlers.len()
        );
        event
    }

    /// Returns whether `element_id` has at least one handler for `kind`.
    pub fn has_listener(&self, element_id: &str, kind: SignalKind) -> bool {
        self.element_handlers
            .borrow()
            .get(&(element_id.to_string(), kind))
            .is_some_and(|handlers| !handlers.is_empty())
    }
}

impl Debug for EventSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventSurface")
            .field("element_handlers", &self.element_handlers.borrow().len())
            .field("ambient_handlers", &self.ambient_handlers.borrow().len())
            .finish()
    }
}
