//! Process-wide application context.
//!
//! # Responsibility
//! - Own the event surface, the drag-and-drop broker and the project store.
//! - Hand shared references to every component that needs them.
//!
//! # Invariants
//! - Constructed once at process start; components never reach for globals.

use crate::board::card::ProjectCard;
use crate::dragdrop::broker::DragDropBroker;
use crate::dragdrop::surface::EventSurface;
use crate::model::project::Project;
use crate::store::entity_store::EntityStore;
use std::rc::Rc;

/// Shared engines of one board process.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub surface: Rc<EventSurface>,
    pub broker: Rc<DragDropBroker<ProjectCard>>,
    pub store: Rc<EntityStore<Project>>,
}

impl AppContext {
    pub fn new() -> Self {
        let surface = Rc::new(EventSurface::new());
        Self {
            broker: DragDropBroker::new(Rc::clone(&surface)),
            store: Rc::new(EntityStore::new()),
            surface,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
