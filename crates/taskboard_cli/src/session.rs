//! Scripted board session: form submissions and simulated drag gestures.

use log::{info, warn};
use serde::Serialize;
use taskboard_core::{
    AppContext, Entity, Project, ProjectBoard, ProjectForm, ProjectState, SignalKind, UiElement,
};

/// Parses `TITLE|DESCRIPTION|PEOPLE` into raw form fields.
pub fn parse_project_arg(value: &str) -> Result<ProjectForm, String> {
    let mut parts = value.splitn(3, '|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(title), Some(description), Some(people)) => {
            Ok(ProjectForm::new(title, description, people))
        }
        _ => Err(format!(
            "expected `TITLE|DESCRIPTION|PEOPLE`, got `{value}`"
        )),
    }
}

/// Submits one form, reporting rejections the way the form would.
pub fn submit(board: &ProjectBoard, raw: &str) -> Result<(), String> {
    let form = parse_project_arg(raw)?;
    board
        .input()
        .submit(&form)
        .map_err(|err| format!("project `{}` rejected: {err}", form.title.trim()))
}

/// Drags the active card of `title` onto the finished list.
pub fn finish(ctx: &AppContext, board: &ProjectBoard, title: &str) -> Result<(), String> {
    let project_id = Project::new(title.trim(), "-", 0).id();
    let card = board
        .list(ProjectState::Active)
        .find_card(&project_id)
        .ok_or_else(|| format!("no active project titled `{}`", title.trim()))?;
    let target = board.list(ProjectState::Finished);

    drag_and_drop(ctx, card.id(), target.id());
    let moved = board.list(ProjectState::Finished).find_card(&project_id).is_some();
    if !moved {
        warn!("event=cli_finish module=cli status=error project={project_id}");
        return Err(format!("project `{}` did not move", title.trim()));
    }
    info!("event=cli_finish module=cli status=ok project={project_id}");
    Ok(())
}

/// Fires the signal sequence a pointer drag from `source` to `target` produces.
pub fn drag_and_drop(ctx: &AppContext, source: &str, target: &str) {
    ctx.surface.dispatch(SignalKind::DragStart, source);
    ctx.surface.dispatch(SignalKind::DragEnter, target);
    let over = ctx.surface.dispatch(SignalKind::DragOver, target);
    if over.is_default_prevented() {
        ctx.surface.dispatch(SignalKind::Drop, target);
    }
    ctx.surface.dispatch(SignalKind::DragEnd, source);
}

/// Serializable view of the final board.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot {
    pub active: Vec<Project>,
    pub finished: Vec<Project>,
}

impl BoardSnapshot {
    pub fn capture(board: &ProjectBoard) -> Self {
        Self {
            active: board.list(ProjectState::Active).projects(),
            finished: board.list(ProjectState::Finished).projects(),
        }
    }
}

pub fn render_text(board: &ProjectBoard) -> String {
    let mut out = String::new();
    for state in ProjectState::all() {
        let list = board.list(state);
        out.push_str(&list.heading());
        out.push('\n');
        for card in list.cards() {
            let project = card.project();
            out.push_str(&format!(
                "  - {} ({}): {}\n",
                project.title,
                card.people_text(),
                project.description
            ));
        }
    }
    out
}
