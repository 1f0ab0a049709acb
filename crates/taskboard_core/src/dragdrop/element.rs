//! UI element capabilities consumed by the drag-and-drop broker.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

/// Presentation-only marker mutated by drag state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisualTag {
    Draggable,
    Dragging,
    DropArea,
    Droppable,
}

impl VisualTag {
    /// Stable class name exposed to the rendering layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draggable => "draggable",
            Self::Dragging => "dragging",
            Self::DropArea => "drop-area",
            Self::Droppable => "droppable",
        }
    }
}

impl Display for VisualTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interior-mutable visual tag set of one element.
#[derive(Debug, Default)]
pub struct VisualTags {
    tags: RefCell<BTreeSet<VisualTag>>,
}

impl VisualTags {
    /// Returns `true` when the tag was not present before.
    pub fn add(&self, tag: VisualTag) -> bool {
        self.tags.borrow_mut().insert(tag)
    }

    /// Returns `true` when the tag was present before.
    pub fn remove(&self, tag: VisualTag) -> bool {
        self.tags.borrow_mut().remove(&tag)
    }

    pub fn contains(&self, tag: VisualTag) -> bool {
        self.tags.borrow().contains(&tag)
    }

    /// Tag names in stable order.
    pub fn snapshot(&self) -> Vec<&'static str> {
        self.tags.borrow().iter().map(|tag| tag.as_str()).collect()
    }
}

/// Base capability: stable id plus visual tags.
pub trait UiElement {
    fn id(&self) -> &str;
    fn visual_tags(&self) -> &VisualTags;
}

/// Element able to start a drag session.
pub trait Draggable: UiElement {
    /// Enumerated type tag compared against drop area descriptors.
    type Kind: Copy + Eq + Debug;

    fn kind(&self) -> Self::Kind;
    fn set_draggable(&self, draggable: bool);
    fn is_draggable(&self) -> bool;
}

/// Element able to accept drops of `D`.
pub trait DropTarget<D: ?Sized>: UiElement {
    fn on_drop(&self, item: &Rc<D>);
}

/// Shared element reference compared by identity, not by content.
pub struct ElementHandle<T: ?Sized>(Rc<T>);

impl<T: ?Sized> ElementHandle<T> {
    pub fn new(element: Rc<T>) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Rc<T> {
        &self.0
    }
}

impl<T: ?Sized> Clone for ElementHandle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ElementHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ElementHandle<T> {}

impl<T: ?Sized + UiElement> Debug for ElementHandle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ElementHandle").field(&self.0.id()).finish()
    }
}

/// Element construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    EmptyId,
    /// Id already taken by a different element.
    IdInUse(String),
}

impl Display for ElementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "element id must not be empty"),
            Self::IdInUse(id) => write!(f, "element id already in use: {id}"),
        }
    }
}

impl Error for ElementError {}

/// Reusable element state for concrete board elements.
#[derive(Debug)]
pub struct ElementBase {
    id: String,
    tags: VisualTags,
    draggable: Cell<bool>,
}

impl ElementBase {
    pub fn new(id: impl Into<String>) -> Result<Self, ElementError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ElementError::EmptyId);
        }
        Ok(Self {
            id,
            tags: VisualTags::default(),
            draggable: Cell::new(false),
        })
    }

    pub fn set_draggable(&self, draggable: bool) {
        self.draggable.set(draggable);
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable.get()
    }
}

impl UiElement for ElementBase {
    fn id(&self) -> &str {
        &self.id
    }

    fn visual_tags(&self) -> &VisualTags {
        &self.tags
    }
}
