//! Project board: the UI-facing consumers of the store and the broker.
//!
//! # Responsibility
//! - Turn form input into validated projects.
//! - Render one list of draggable project cards per project state.
//! - Move projects between states when a card is dropped on a list.
//!
//! # Invariants
//! - All project writes go through `EntityStore`.
//! - All drag state goes through `DragDropBroker`.

pub mod card;
pub mod input;
pub mod list;

use crate::context::AppContext;
use crate::dragdrop::element::ElementError;
use crate::model::project::{Project, ProjectState, ProjectValidationError};
use crate::store::entity_store::{StoreError, StoreObserver};
use card::{BoardItemKind, ProjectCard};
use input::ProjectInput;
use list::ProjectList;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub const EXAMPLE_PROJECT_TITLE: &str = "Example Project";
pub const EXAMPLE_PROJECT_DESCRIPTION: &str =
    "This is just an example to use for testing while you develop the UI and business logic of the application.";
pub const EXAMPLE_PROJECT_PEOPLE: i64 = 12;

/// Board bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Element(ElementError),
    Store(StoreError<ProjectValidationError>),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Element(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ElementError> for BoardError {
    fn from(value: ElementError) -> Self {
        Self::Element(value)
    }
}

impl From<StoreError<ProjectValidationError>> for BoardError {
    fn from(value: StoreError<ProjectValidationError>) -> Self {
        Self::Store(value)
    }
}

/// Input form plus one list per project state, wired to one context.
pub struct ProjectBoard {
    input: ProjectInput,
    active: Rc<ProjectList>,
    finished: Rc<ProjectList>,
}

impl ProjectBoard {
    /// Builds the board and registers its lists with store and broker.
    ///
    /// # Contract
    /// - Lists become drop areas accepting `BoardItemKind::Project`.
    /// - Lists observe the store before any project is inserted.
    pub fn bootstrap(ctx: &AppContext) -> Result<Self, BoardError> {
        let input = ProjectInput::new(Rc::clone(&ctx.store));
        let active = Rc::new(ProjectList::new(ctx, ProjectState::Active)?);
        let finished = Rc::new(ProjectList::new(ctx, ProjectState::Finished)?);

        for list in [&active, &finished] {
            ctx.broker
                .register_drop_area(list.clone(), BoardItemKind::Project);
            list.render();
        }
        ctx.store.add_listeners([
            Rc::clone(&active) as Rc<dyn StoreObserver<Project>>,
            Rc::clone(&finished) as Rc<dyn StoreObserver<Project>>,
        ]);

        info!("event=board_bootstrap module=board status=ok lists=2");
        Ok(Self {
            input,
            active,
            finished,
        })
    }

    /// Inserts the example project shown on first start.
    pub fn seed_example(&self) -> Result<(), BoardError> {
        self.input.insert(Project::new(
            EXAMPLE_PROJECT_TITLE,
            EXAMPLE_PROJECT_DESCRIPTION,
            EXAMPLE_PROJECT_PEOPLE,
        ))?;
        Ok(())
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn list(&self, state: ProjectState) -> &Rc<ProjectList> {
        match state {
            ProjectState::Active => &self.active,
            ProjectState::Finished => &self.finished,
        }
    }

    /// Finds the rendered card for a project id in any list.
    pub fn find_card(&self, project_id: &str) -> Option<Rc<ProjectCard>> {
        ProjectState::all()
            .into_iter()
            .find_map(|state| self.list(state).find_card(project_id))
    }
}
