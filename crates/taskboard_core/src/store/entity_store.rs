//! Generic observable entity store.
//!
//! # Responsibility
//! - Provide insert/update/query APIs over any `Entity`.
//! - Notify observers once per successful mutation, in registration order.
//!
//! # Invariants
//! - Write paths call `Entity::validate()` before any mutation.
//! - A failed write leaves contents and observers untouched.
//! - `update` replaces in place; insertion order is never disturbed.
//! - Internal borrows are released before observers run, so observers may
//!   query or write the store from inside a notification.

use crate::model::entity::{Entity, FieldValue};
use log::debug;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

pub type StoreResult<T, E> = Result<T, StoreError<E>>;

/// Store write errors; `E` is the entity's validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError<E> {
    Validation(E),
    DuplicateId(String),
    NotFound(String),
}

impl<E: Display> Display for StoreError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate id: {id}"),
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
        }
    }
}

impl<E: Error + 'static> Error for StoreError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

/// Observer notified after successful store writes.
pub trait StoreObserver<T> {
    fn on_insert(&self, entity: &T);
    fn on_update(&self, entity: &T);
}

/// Keyed, insertion-ordered collection of validated entities.
pub struct EntityStore<T: Entity> {
    entities: RefCell<Vec<T>>,
    observers: RefCell<Vec<Rc<dyn StoreObserver<T>>>>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entities: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers observers for future inserts/updates.
    ///
    /// Existing entities are not replayed to new observers.
    pub fn add_listeners(&self, observers: impl IntoIterator<Item = Rc<dyn StoreObserver<T>>>) {
        self.observers.borrow_mut().extend(observers);
    }

    /// Validates and appends one entity.
    ///
    /// # Errors
    /// - `Validation` when `entity.validate()` fails (error unchanged).
    /// - `DuplicateId` when an entity with the same id exists.
    pub fn insert(&self, entity: T) -> StoreResult<(), T::ValidationError> {
        entity.validate().map_err(StoreError::Validation)?;
        let id = entity.id();
        {
            let mut entities = self.entities.borrow_mut();
            if entities.iter().any(|existing| existing.id() == id) {
                debug!("event=store_insert module=store status=rejected reason=duplicate_id id={id}");
                return Err(StoreError::DuplicateId(id));
            }
            entities.push(entity.clone());
        }

        debug!("event=store_insert module=store status=ok id={id}");
        self.notify(|observer| observer.on_insert(&entity));
        Ok(())
    }

    /// Validates one entity and replaces the stored entity with the same id.
    ///
    /// # Errors
    /// - `Validation` when `entity.validate()` fails (error unchanged).
    /// - `NotFound` when no entity with that id exists.
    pub fn update(&self, entity: T) -> StoreResult<(), T::ValidationError> {
        entity.validate().map_err(StoreError::Validation)?;
        let id = entity.id();
        {
            let mut entities = self.entities.borrow_mut();
            let Some(slot) = entities.iter_mut().find(|existing| existing.id() == id) else {
                debug!("event=store_update module=store status=rejected reason=not_found id={id}");
                return Err(StoreError::NotFound(id));
            };
            *slot = entity.clone();
        }

        debug!("event=store_update module=store status=ok id={id}");
        self.notify(|observer| observer.on_update(&entity));
        Ok(())
    }

    /// Returns a fresh copy of stored entities in insertion order.
    ///
    /// Filters by `field == value` only when both are given.
    pub fn query(&self, field: Option<T::Field>, value: Option<&FieldValue>) -> Vec<T> {
        let entities = self.entities.borrow();
        match (field, value) {
            (Some(field), Some(value)) => entities
                .iter()
                .filter(|entity| entity.field_value(field) == *value)
                .cloned()
                .collect(),
            _ => entities.clone(),
        }
    }

    pub fn query_all(&self) -> Vec<T> {
        self.query(None, None)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.entities
            .borrow()
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entities.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.borrow().is_empty()
    }

    fn notify(&self, event: impl Fn(&dyn StoreObserver<T>)) {
        let observers = self.observers.borrow().clone();
        for observer in &observers {
            event(observer.as_ref());
        }
    }
}

impl<T: Entity + Debug> Debug for EntityStore<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("entities", &self.entities.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityStore, StoreError, StoreObserver};
    use crate::model::entity::{Entity, FieldValue};
    use std::cell::RefCell;
    use std::error::Error;
    use std::fmt::{Display, Formatter};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        name: String,
        color: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum LabelField {
        Color,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct EmptyName;

    impl Display for EmptyName {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "label name must not be empty")
        }
    }

    impl Error for EmptyName {}

    impl Entity for Label {
        type Field = LabelField;
        type ValidationError = EmptyName;

        fn validate(&self) -> Result<(), EmptyName> {
            if self.name.is_empty() {
                return Err(EmptyName);
            }
            Ok(())
        }

        fn id(&self) -> String {
            self.name.clone()
        }

        fn field_value(&self, field: LabelField) -> FieldValue {
            match field {
                LabelField::Color => FieldValue::text(self.color),
            }
        }
    }

    fn label(name: &str, color: &'static str) -> Label {
        Label {
            name: name.to_string(),
            color,
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<String>>,
    }

    impl StoreObserver<Label> for Recorder {
        fn on_insert(&self, entity: &Label) {
            self.events.borrow_mut().push(format!("insert:{}", entity.name));
        }

        fn on_update(&self, entity: &Label) {
            self.events.borrow_mut().push(format!("update:{}", entity.name));
        }
    }

    #[test]
    fn validation_error_is_propagated_unchanged() {
        let store = EntityStore::new();
        let err = store.insert(label("", "red")).expect_err("empty name must fail");
        assert_eq!(err, StoreError::Validation(EmptyName));
        assert!(err.source().is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn query_filters_only_when_field_and_value_are_given() {
        let store = EntityStore::new();
        store.insert(label("a", "red")).expect("insert a");
        store.insert(label("b", "blue")).expect("insert b");
        store.insert(label("c", "red")).expect("insert c");

        let red = FieldValue::text("red");
        let names = |labels: Vec<Label>| labels.into_iter().map(|l| l.name).collect::<Vec<_>>();
        assert_eq!(names(store.query(Some(LabelField::Color), Some(&red))), ["a", "c"]);
        assert_eq!(names(store.query(Some(LabelField::Color), None)), ["a", "b", "c"]);
        assert_eq!(names(store.query(None, Some(&red))), ["a", "b", "c"]);
    }

    #[test]
    fn observer_may_query_store_during_notification() {
        struct Counter {
            store: Rc<EntityStore<Label>>,
            seen: RefCell<Vec<usize>>,
        }

        impl StoreObserver<Label> for Counter {
            fn on_insert(&self, _entity: &Label) {
                self.seen.borrow_mut().push(self.store.len());
            }

            fn on_update(&self, _entity: &Label) {}
        }

        let store = Rc::new(EntityStore::new());
        let counter = Rc::new(Counter {
            store: Rc::clone(&store),
            seen: RefCell::new(Vec::new()),
        });
        store.add_listeners([counter.clone() as Rc<dyn StoreObserver<Label>>]);

        store.insert(label("a", "red")).expect("insert a");
        store.insert(label("b", "red")).expect("insert b");
        assert_eq!(*counter.seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn late_observer_only_sees_future_writes() {
        let store = EntityStore::new();
        store.insert(label("a", "red")).expect("insert a");

        let recorder = Rc::new(Recorder::default());
        store.add_listeners([recorder.clone() as Rc<dyn StoreObserver<Label>>]);
        store.insert(label("b", "red")).expect("insert b");
        store.update(label("a", "blue")).expect("update a");

        assert_eq!(*recorder.events.borrow(), vec!["insert:b", "update:a"]);
    }
}
