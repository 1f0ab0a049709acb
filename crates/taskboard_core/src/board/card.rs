//! Draggable project card.

use crate::dragdrop::broker::DragDropBroker;
use crate::dragdrop::element::{Draggable, ElementBase, ElementError, UiElement, VisualTags};
use crate::model::entity::Entity;
use crate::model::project::Project;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::rc::Rc;

static NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z]+").expect("valid non-letter regex"));

/// Type tags for items dragged on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardItemKind {
    Project,
}

/// Element id of the card rendering `project`.
///
/// Shape: `project-<slug>-<state>`. The slug keeps the letters of the project
/// id and writes every other char as `_<hex code point>_`, so distinct
/// projects never share an element id.
pub fn card_element_id(project: &Project) -> String {
    let id = project.id();
    let slug = NON_LETTER_RE.replace_all(&id, |caps: &Captures<'_>| {
        caps[0]
            .chars()
            .map(|ch| format!("_{:x}_", u32::from(ch)))
            .collect::<String>()
    });
    format!("project-{slug}-{}", project.state)
}

/// One rendered project inside a list.
#[derive(Debug)]
pub struct ProjectCard {
    base: ElementBase,
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Result<Self, ElementError> {
        Ok(Self {
            base: ElementBase::new(card_element_id(&project))?,
            project,
        })
    }

    /// Builds the card for `project` and registers it as draggable.
    ///
    /// A card of the same project replaces its previous rendering.
    ///
    /// # Errors
    /// - `IdInUse` when the element id is registered for another project.
    pub fn register(
        broker: &DragDropBroker<ProjectCard>,
        project: Project,
    ) -> Result<Rc<Self>, ElementError> {
        let card = Rc::new(Self::new(project)?);
        if let Some(existing) = broker.draggable(card.id()) {
            if existing.project.id() != card.project.id() {
                return Err(ElementError::IdInUse(card.id().to_string()));
            }
        }
        broker.register_draggable(Rc::clone(&card));
        Ok(card)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn people_text(&self) -> String {
        if self.project.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.project.people)
        }
    }
}

impl UiElement for ProjectCard {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn visual_tags(&self) -> &VisualTags {
        self.base.visual_tags()
    }
}

impl Draggable for ProjectCard {
    type Kind = BoardItemKind;

    fn kind(&self) -> BoardItemKind {
        BoardItemKind::Project
    }

    fn set_draggable(&self, draggable: bool) {
        self.base.set_draggable(draggable);
    }

    fn is_draggable(&self) -> bool {
        self.base.is_draggable()
    }
}

#[cfg(test)]
mod tests {
    use super::{card_element_id, ProjectCard};
    use crate::dragdrop::broker::DragDropBroker;
    use crate::dragdrop::element::{ElementBase, ElementError, UiElement};
    use crate::dragdrop::surface::EventSurface;
    use crate::model::project::{Project, ProjectState};
    use std::rc::Rc;

    #[test]
    fn element_id_encodes_non_letters() {
        let project = Project::new("Ship v2.0 Board!", "desc", 3);
        assert_eq!(
            card_element_id(&project),
            "project-ship_20_v_32__2e__30__20_board_21_-active"
        );

        let finished = project.moved_to(ProjectState::Finished);
        assert_eq!(
            card_element_id(&finished),
            "project-ship_20_v_32__2e__30__20_board_21_-finished"
        );
    }

    #[test]
    fn element_ids_differ_for_distinct_projects() {
        let pairs = [
            ("Alpha 1", "Alpha 2"),
            ("123", "456"),
            ("a b", "ab"),
            ("a_b", "a b"),
        ];
        for (left, right) in pairs {
            assert_ne!(
                card_element_id(&Project::new(left, "desc", 1)),
                card_element_id(&Project::new(right, "desc", 1)),
                "{left} vs {right}"
            );
        }
        assert_eq!(
            card_element_id(&Project::new("123", "desc", 1)),
            "project-_31__32__33_-active"
        );
    }

    #[test]
    fn register_rejects_id_taken_by_another_project() {
        let broker = DragDropBroker::<ProjectCard>::new(Rc::new(EventSurface::new()));
        let alpha = Project::new("Alpha", "desc", 1);
        let squatter = Rc::new(ProjectCard {
            base: ElementBase::new(card_element_id(&alpha)).expect("squatter element"),
            project: Project::new("Beta", "desc", 2),
        });
        broker.register_draggable(Rc::clone(&squatter));

        let err = ProjectCard::register(&broker, alpha).expect_err("id is taken");
        assert_eq!(err, ElementError::IdInUse("project-alpha-active".to_string()));
        let registered = broker
            .draggable("project-alpha-active")
            .expect("squatter stays registered");
        assert!(Rc::ptr_eq(&registered, &squatter));
    }

    #[test]
    fn register_replaces_previous_card_of_same_project() {
        let broker = DragDropBroker::<ProjectCard>::new(Rc::new(EventSurface::new()));
        let first = ProjectCard::register(&broker, Project::new("Alpha", "desc", 1))
            .expect("first rendering");
        let second = ProjectCard::register(&broker, Project::new("Alpha", "desc", 3))
            .expect("second rendering");

        let registered = broker.draggable(first.id()).expect("card registered");
        assert!(Rc::ptr_eq(&registered, &second));
    }

    #[test]
    fn people_text_uses_singular_for_one() {
        let one = ProjectCard::new(Project::new("Solo", "desc", 1)).expect("card");
        let many = ProjectCard::new(Project::new("Team", "desc", 4)).expect("card");
        let none = ProjectCard::new(Project::new("Idle", "desc", 0)).expect("card");

        assert_eq!(one.people_text(), "1 person");
        assert_eq!(many.people_text(), "4 people");
        assert_eq!(none.people_text(), "0 people");
        assert_eq!(one.id(), "project-solo-active");
    }
}
