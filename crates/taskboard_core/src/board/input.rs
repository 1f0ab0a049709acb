//! Project input form.
//!
//! # Responsibility
//! - Normalize raw form fields into a `Project`.
//! - Insert submitted projects through the store.
//!
//! # Invariants
//! - Text fields are trimmed before validation.
//! - A non-numeric people count is a validation error, not a parse panic.

use crate::model::project::{Project, ProjectValidationError};
use crate::store::entity_store::{EntityStore, StoreError, StoreResult};
use log::warn;
use std::rc::Rc;

/// Raw form field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Builds an active project from trimmed field values.
    ///
    /// Only the people count is checked here; the remaining invariants are
    /// enforced by the store.
    pub fn to_project(&self) -> Result<Project, ProjectValidationError> {
        let people_text = self.people.trim();
        let people = people_text
            .parse::<i64>()
            .map_err(|_| ProjectValidationError::InvalidPeople(people_text.to_string()))?;
        Ok(Project::new(
            self.title.trim(),
            self.description.trim(),
            people,
        ))
    }
}

/// Submit handler for the project form.
pub struct ProjectInput {
    store: Rc<EntityStore<Project>>,
}

impl ProjectInput {
    pub fn new(store: Rc<EntityStore<Project>>) -> Self {
        Self { store }
    }

    /// Converts and inserts one submitted form.
    ///
    /// Errors are returned for the caller to surface to the user.
    pub fn submit(&self, form: &ProjectForm) -> StoreResult<(), ProjectValidationError> {
        let project = form.to_project().map_err(StoreError::Validation)?;
        self.insert(project)
    }

    pub fn insert(&self, project: Project) -> StoreResult<(), ProjectValidationError> {
        self.store.insert(project).inspect_err(|err| {
            warn!("event=project_submit module=board status=error error={err}");
        })
    }
}
