//! Core runtime for the project board.
//! This crate owns the observable entity store, the reactive property and the
//! drag-and-drop broker, plus the board components built on them.

pub mod board;
pub mod context;
pub mod dragdrop;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;

pub use board::card::{card_element_id, BoardItemKind, ProjectCard};
pub use board::input::{ProjectForm, ProjectInput};
pub use board::list::ProjectList;
pub use board::{BoardError, ProjectBoard};
pub use context::AppContext;
pub use dragdrop::broker::{DragDropBroker, DropAreaDescriptor};
pub use dragdrop::element::{
    Draggable, DropTarget, ElementBase, ElementError, ElementHandle, UiElement, VisualTag,
    VisualTags,
};
pub use dragdrop::surface::{DragEvent, EventSurface, SignalKind};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::entity::{Entity, FieldValue};
pub use model::project::{Project, ProjectField, ProjectState, ProjectValidationError};
pub use state::property::{ChangeListener, ReactiveProperty};
pub use store::entity_store::{EntityStore, StoreError, StoreObserver, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
