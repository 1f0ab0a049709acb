//! Project list: drop area and store observer for one project state.

use crate::board::card::ProjectCard;
use crate::context::AppContext;
use crate::dragdrop::broker::DragDropBroker;
use crate::dragdrop::element::{DropTarget, ElementBase, ElementError, UiElement, VisualTags};
use crate::model::entity::{Entity, FieldValue};
use crate::model::project::{Project, ProjectField, ProjectState};
use crate::store::entity_store::{EntityStore, StoreObserver};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Rendered list of the projects in one state.
pub struct ProjectList {
    base: ElementBase,
    state: ProjectState,
    store: Rc<EntityStore<Project>>,
    broker: Rc<DragDropBroker<ProjectCard>>,
    cards: RefCell<Vec<Rc<ProjectCard>>>,
}

impl ProjectList {
    pub fn new(ctx: &AppContext, state: ProjectState) -> Result<Self, ElementError> {
        Ok(Self {
            base: ElementBase::new(format!("{state}-projects"))?,
            state,
            store: Rc::clone(&ctx.store),
            broker: Rc::clone(&ctx.broker),
            cards: RefCell::new(Vec::new()),
        })
    }

    pub fn state(&self) -> ProjectState {
        self.state
    }

    /// List heading, e.g. `ACTIVE`.
    pub fn heading(&self) -> String {
        self.state.as_str().to_uppercase()
    }

    /// Currently rendered cards in store order.
    pub fn cards(&self) -> Vec<Rc<ProjectCard>> {
        self.cards.borrow().clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.cards
            .borrow()
            .iter()
            .map(|card| card.project().clone())
            .collect()
    }

    pub fn find_card(&self, project_id: &str) -> Option<Rc<ProjectCard>> {
        self.cards
            .borrow()
            .iter()
            .find(|card| card.project().id() == project_id)
            .cloned()
    }

    /// Replaces the rendered cards with the store's projects in this state.
    pub fn render(&self) {
        let state_value = FieldValue::text(self.state.as_str());
        let projects = self
            .store
            .query(Some(ProjectField::State), Some(&state_value));

        let mut cards = Vec::with_capacity(projects.len());
        for project in projects {
            match ProjectCard::register(&self.broker, project) {
                Ok(card) => cards.push(card),
                Err(err) => {
                    warn!(
                        "event=render_card module=board status=error list={} error={err}",
                        self.id()
                    );
                }
            }
        }

        debug!(
            "event=render_list module=board status=ok list={} cards={}",
            self.id(),
            cards.len()
        );
        *self.cards.borrow_mut() = cards;
    }
}

impl UiElement for ProjectList {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn visual_tags(&self) -> &VisualTags {
        self.base.visual_tags()
    }
}

impl DropTarget<ProjectCard> for ProjectList {
    fn on_drop(&self, item: &Rc<ProjectCard>) {
        let moved = item.project().moved_to(self.state);
        if let Err(err) = self.store.update(moved) {
            warn!(
                "event=project_move module=board status=error list={} item={} error={err}",
                self.id(),
                item.id()
            );
        }
    }
}

impl StoreObserver<Project> for ProjectList {
    fn on_insert(&self, _project: &Project) {
        self.render();
    }

    fn on_update(&self, _project: &Project) {
        self.render();
    }
}
