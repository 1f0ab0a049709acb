//! Drag-and-drop interaction broker.
//!
//! # Responsibility
//! - Register draggable elements and typed drop areas on the event surface.
//! - Track the current drag session (dragged item, hovered drop target).
//! - Dispatch `on_drop` when the dragged item's kind matches the target.
//!
//! # Invariants
//! - At most one item is dragged at a time.
//! - `on_drop` runs at most once per drop signal and only on a kind match.
//! - Drag end clears the session regardless of the drop outcome.
//! - Registries only grow; re-registering an id replaces its entry.
//! - Registry borrows are released before element callbacks run.

use crate::dragdrop::element::{Draggable, DropTarget, ElementHandle, VisualTag};
use crate::dragdrop::surface::{DragEvent, EventSurface, SignalKind};
use crate::state::property::ReactiveProperty;
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

/// Registered drop target paired with the item kind it accepts.
pub struct DropAreaDescriptor<D: Draggable + ?Sized> {
    pub element: Rc<dyn DropTarget<D>>,
    pub accepts: D::Kind,
}

impl<D: Draggable + ?Sized> Clone for DropAreaDescriptor<D> {
    fn clone(&self) -> Self {
        Self {
            element: Rc::clone(&self.element),
            accepts: self.accepts,
        }
    }
}

type DropTargetHandle<D> = ElementHandle<dyn DropTarget<D>>;

/// Coordinator of drag sessions over one event surface.
///
/// Constructed once per process and shared through `Rc`; never torn down.
pub struct DragDropBroker<D: Draggable + ?Sized + 'static> {
    surface: Rc<EventSurface>,
    self_ref: Weak<Self>,
    draggables: RefCell<BTreeMap<String, Rc<D>>>,
    drop_areas: RefCell<BTreeMap<String, DropAreaDescriptor<D>>>,
    current_draggable: ReactiveProperty<ElementHandle<D>>,
    current_droppable: ReactiveProperty<DropTargetHandle<D>>,
}

impl<D: Draggable + ?Sized + 'static> DragDropBroker<D> {
    /// Creates the broker and subscribes its ambient enter handler.
    pub fn new(surface: Rc<EventSurface>) -> Rc<Self> {
        let broker = Rc::new_cyclic(|self_ref| Self {
            surface: Rc::clone(&surface),
            self_ref: self_ref.clone(),
            draggables: RefCell::new(BTreeMap::new()),
            drop_areas: RefCell::new(BTreeMap::new()),
            current_draggable: ReactiveProperty::new(),
            current_droppable: ReactiveProperty::new().with_listener(Self::on_droppable_change),
        });

        let weak = Rc::downgrade(&broker);
        surface.listen_ambient(SignalKind::DragEnter, move |_| {
            if let Some(broker) = weak.upgrade() {
                broker.on_ambient_enter();
            }
        });
        broker
    }

    /// Makes `element` drag-initiable and tracks its drag lifecycle.
    pub fn register_draggable(&self, element: Rc<D>) {
        let id = element.id().to_string();
        let replaced = self
            .draggables
            .borrow_mut()
            .insert(id.clone(), Rc::clone(&element))
            .is_some();
        if !replaced {
            self.subscribe(&id, SignalKind::DragStart, Self::on_drag_start);
            self.subscribe(&id, SignalKind::DragEnd, Self::on_drag_end);
        }

        element.visual_tags().add(VisualTag::Draggable);
        element.set_draggable(true);
        debug!("event=register_draggable module=dragdrop status=ok id={id} replaced={replaced}");
    }

    /// Makes `element` a drop area for items of kind `accepts`.
    pub fn register_drop_area(&self, element: Rc<dyn DropTarget<D>>, accepts: D::Kind) {
        let id = element.id().to_string();
        let descriptor = DropAreaDescriptor {
            element: Rc::clone(&element),
            accepts,
        };
        let replaced = self
            .drop_areas
            .borrow_mut()
            .insert(id.clone(), descriptor)
            .is_some();
        if !replaced {
            self.subscribe(&id, SignalKind::DragOver, Self::on_drag_over);
            self.subscribe(&id, SignalKind::Drop, Self::on_drop);
            self.subscribe(&id, SignalKind::DragEnter, Self::on_drag_enter);
        }

        element.visual_tags().add(VisualTag::DropArea);
        debug!(
            "event=register_drop_area module=dragdrop status=ok id={id} accepts={accepts:?} replaced={replaced}"
        );
    }

    pub fn surface(&self) -> &Rc<EventSurface> {
        &self.surface
    }

    /// Item being dragged, if a session is in progress.
    pub fn current_draggable(&self) -> Option<Rc<D>> {
        self.current_draggable
            .get()
            .map(|handle| Rc::clone(handle.element()))
    }

    /// Id of the hovered drop target, if any.
    pub fn current_droppable_id(&self) -> Option<String> {
        self.current_droppable
            .get()
            .map(|handle| handle.element().id().to_string())
    }

    pub fn is_dragging(&self) -> bool {
        self.current_draggable.is_set()
    }

    /// Registered draggable with element id `id`.
    pub fn draggable(&self, id: &str) -> Option<Rc<D>> {
        self.draggables.borrow().get(id).cloned()
    }

    pub fn is_draggable_registered(&self, id: &str) -> bool {
        self.draggables.borrow().contains_key(id)
    }

    pub fn is_drop_area_registered(&self, id: &str) -> bool {
        self.drop_areas.borrow().contains_key(id)
    }

    fn subscribe(&self, element_id: &str, kind: SignalKind, handler: fn(&Self, &mut DragEvent)) {
        let broker = self.self_ref.clone();
        self.surface.listen(element_id, kind, move |event| {
            if let Some(broker) = broker.upgrade() {
                handler(&broker, event);
            }
        });
    }

    fn on_drag_start(&self, event: &mut DragEvent) {
        let element = self.draggables.borrow().get(event.target()).cloned();
        let Some(element) = element else {
            return;
        };

        element.visual_tags().add(VisualTag::Dragging);
        self.current_draggable.set(Some(ElementHandle::new(element)));
        debug!(
            "event=drag_start module=dragdrop status=ok id={}",
            event.target()
        );
    }

    fn on_drag_end(&self, event: &mut DragEvent) {
        if let Some(current) = self.current_draggable.get() {
            current.element().visual_tags().remove(VisualTag::Dragging);
        }
        let element = self.draggables.borrow().get(event.target()).cloned();
        if let Some(element) = element {
            element.visual_tags().remove(VisualTag::Dragging);
        }

        self.current_draggable.delete();
        debug!(
            "event=drag_end module=dragdrop status=ok id={}",
            event.target()
        );
    }

    fn on_drag_over(&self, event: &mut DragEvent) {
        event.prevent_default();
    }

    fn on_drag_enter(&self, event: &mut DragEvent) {
        if !self.current_draggable.is_set() {
            return;
        }
        let element = self
            .drop_areas
            .borrow()
            .get(event.target())
            .map(|area| Rc::clone(&area.element));
        let Some(element) = element else {
            return;
        };

        self.current_droppable.set(Some(ElementHandle::new(element)));
        // The ambient handler would read this enter as leaving every target.
        event.stop_propagation();
    }

    fn on_ambient_enter(&self) {
        self.current_droppable.delete();
    }

    fn on_drop(&self, event: &mut DragEvent) {
        let area = self.drop_areas.borrow().get(event.target()).cloned();
        let Some(area) = area else {
            return;
        };
        let Some(draggable) = self.current_draggable.get() else {
            debug!(
                "event=drop module=dragdrop status=skip reason=no_draggable target={}",
                event.target()
            );
            return;
        };

        let kind = draggable.element().kind();
        if kind != area.accepts {
            debug!(
                "event=drop module=dragdrop status=skip reason=kind_mismatch target={} kind={kind:?} accepts={:?}",
                event.target(),
                area.accepts
            );
            return;
        }

        area.element.on_drop(draggable.element());
        self.current_droppable.delete();
        debug!(
            "event=drop module=dragdrop status=ok target={} item={}",
            event.target(),
            draggable.element().id()
        );
    }

    fn on_droppable_change(new: Option<&DropTargetHandle<D>>, old: Option<&DropTargetHandle<D>>) {
        if let Some(old) = old {
            old.element().visual_tags().remove(VisualTag::Droppable);
        }
        if let Some(new) = new {
            new.element().visual_tags().add(VisualTag::Droppable);
        }
    }
}

impl<D: Draggable + ?Sized + 'static> Debug for DragDropBroker<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropBroker")
            .field("draggables", &self.draggables.borrow().len())
            .field("drop_areas", &self.drop_areas.borrow().len())
            .field("current_draggable", &self.current_draggable.get())
            .field("current_droppable", &self.current_droppable_id())
            .finish()
    }
}
