//! Project domain model.
//!
//! # Responsibility
//! - Define the work item tracked by the board and its two lifecycle states.
//! - Enforce project invariants before a project can enter the store.
//!
//! # Invariants
//! - `title` and `description` are non-empty.
//! - `people` is never negative.
//! - `id()` is the lowercase title, so two projects whose titles differ only
//!   by case share one identity.

use crate::model::entity::{Entity, FieldValue};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Board lifecycle state of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    /// Work in progress.
    #[default]
    Active,
    /// Work completed.
    Finished,
}

impl ProjectState {
    /// Stable string id used for element ids and query values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    pub fn all() -> [ProjectState; 2] {
        [Self::Active, Self::Finished]
    }
}

impl Display for ProjectState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queryable project fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    People,
    State,
}

/// Work item shown on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Number of people assigned; must be non-negative.
    pub people: i64,
    pub state: ProjectState,
}

impl Project {
    /// Creates an active project.
    ///
    /// Does not validate; the store validates on every write.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: i64) -> Self {
        Self::with_state(title, description, people, ProjectState::Active)
    }

    pub fn with_state(
        title: impl Into<String>,
        description: impl Into<String>,
        people: i64,
        state: ProjectState,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
            state,
        }
    }

    /// Returns a copy of this project moved to `state`.
    pub fn moved_to(&self, state: ProjectState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }
}

impl Entity for Project {
    type Field = ProjectField;
    type ValidationError = ProjectValidationError;

    fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.is_empty() {
            return Err(ProjectValidationError::MissingTitle);
        }
        if self.description.is_empty() {
            return Err(ProjectValidationError::MissingDescription);
        }
        if self.people < 0 {
            return Err(ProjectValidationError::InvalidPeople(self.people.to_string()));
        }
        Ok(())
    }

    fn id(&self) -> String {
        self.title.to_lowercase()
    }

    fn field_value(&self, field: ProjectField) -> FieldValue {
        match field {
            ProjectField::Title => FieldValue::text(self.title.as_str()),
            ProjectField::Description => FieldValue::text(self.description.as_str()),
            ProjectField::People => FieldValue::Integer(self.people),
            ProjectField::State => FieldValue::text(self.state.as_str()),
        }
    }
}

/// Project invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    MissingTitle,
    MissingDescription,
    /// People count is negative or not a number; carries the raw input.
    InvalidPeople(String),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "project must have a title"),
            Self::MissingDescription => write!(f, "project must have a description"),
            Self::InvalidPeople(value) => write!(
                f,
                "project must have a non-negative number of people, got `{value}`"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

#[derive(Deserialize)]
struct ProjectRecord {
    title: String,
    description: String,
    people: i64,
    #[serde(default)]
    state: ProjectState,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        let project = Project::with_state(
            record.title,
            record.description,
            record.people,
            record.state,
        );
        project.validate()?;
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectField, ProjectState, ProjectValidationError};
    use crate::model::entity::{Entity, FieldValue};

    #[test]
    fn id_is_lowercase_title() {
        let project = Project::new("Ship Board", "desc", 2);
        assert_eq!(project.id(), "ship board");
        assert_eq!(project.id(), Project::new("SHIP BOARD", "other", 1).id());
    }

    #[test]
    fn validate_reports_first_violation() {
        assert_eq!(
            Project::new("", "", -1).validate(),
            Err(ProjectValidationError::MissingTitle)
        );
        assert_eq!(
            Project::new("title", "", -1).validate(),
            Err(ProjectValidationError::MissingDescription)
        );
        assert_eq!(
            Project::new("title", "desc", -1).validate(),
            Err(ProjectValidationError::InvalidPeople("-1".to_string()))
        );
        assert!(Project::new("title", "desc", 0).validate().is_ok());
    }

    #[test]
    fn moved_to_keeps_identity() {
        let project = Project::new("Alpha", "desc", 1);
        let moved = project.moved_to(ProjectState::Finished);
        assert_eq!(moved.id(), project.id());
        assert_eq!(
            moved.field_value(ProjectField::State),
            FieldValue::text("finished")
        );
    }

    #[test]
    fn deserialize_validates_and_defaults_state() {
        let project: Project = serde_json::from_str(
            r#"{"title":"Alpha","description":"desc","people":3}"#,
        )
        .expect("valid project json");
        assert_eq!(project.state, ProjectState::Active);

        let finished: Project = serde_json::from_str(
            r#"{"title":"Beta","description":"desc","people":0,"state":"finished"}"#,
        )
        .expect("finished project json");
        assert_eq!(finished.state, ProjectState::Finished);

        let err = serde_json::from_str::<Project>(
            r#"{"title":"","description":"desc","people":1}"#,
        )
        .expect_err("empty title must be rejected");
        assert!(err.to_string().contains("project must have a title"));
    }
}
