use crate::{Clock, CoreError, CoreResult, SprintCard, TaskFragment, TaskId, UserDirectory};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info};

/// Task list of one sprint card
#[derive(Debug)]
struct TaskSection {
    sprint: SprintCard,
    next_number: usize,
    fragments: Vec<TaskFragment>,
    revealed: Option<TaskId>,
}

/// Builds and owns the unsaved task fragments of every sprint on the page.
///
/// The user directory and clock are injected once and shared with each
/// fragment it creates.
#[derive(Debug)]
pub struct TaskComposer {
    directory: UserDirectory,
    clock: Arc<dyn Clock>,
    sections: Vec<TaskSection>,
}

impl TaskComposer {
    pub fn new(directory: UserDirectory, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            clock,
            sections: Vec::new(),
        }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Make a sprint card known to the composer. Returns false if a card with
    /// the same id was already registered; the first registration wins.
    pub fn register_sprint(&mut self, sprint: SprintCard) -> bool {
        if self.section(&sprint.id).is_some() {
            return false;
        }

        debug!("Registered sprint {} (ends {})", sprint.id, sprint.end_date);
        self.sections.push(TaskSection {
            sprint,
            next_number: 1,
            fragments: Vec::new(),
            revealed: None,
        });
        true
    }

    pub fn sprints(&self) -> impl Iterator<Item = &SprintCard> {
        self.sections.iter().map(|section| &section.sprint)
    }

    /// Append a new empty fragment to the sprint's task list and reveal it.
    ///
    /// Numbering is per sprint and never reuses a number, even after removals.
    #[track_caller]
    pub fn add_task(&mut self, sprint_id: &str) -> CoreResult<TaskId> {
        let location = Location::caller();
        let directory = self.directory.clone();
        let clock = Arc::clone(&self.clock);

        let section = self
            .sections
            .iter_mut()
            .find(|section| section.sprint.id == sprint_id)
            .ok_or_else(|| CoreError::UnknownSprint {
                sprint_id: sprint_id.to_string(),
                location: ErrorLocation::from(location),
            })?;

        let id = TaskId::new(sprint_id, section.next_number);
        section.next_number += 1;
        section.fragments.push(TaskFragment::new(
            id.clone(),
            section.sprint.clone(),
            directory,
            clock,
        ));
        section.revealed = Some(id.clone());

        info!("Added task fragment {id}");
        Ok(id)
    }

    /// The fragment's delete affordance
    #[track_caller]
    pub fn remove_task(&mut self, task_id: &TaskId) -> CoreResult<TaskFragment> {
        let location = Location::caller();

        for section in &mut self.sections {
            if let Some(index) = section
                .fragments
                .iter()
                .position(|fragment| fragment.id() == task_id)
            {
                if section.revealed.as_ref() == Some(task_id) {
                    section.revealed = None;
                }
                debug!("Removed task fragment {task_id}");
                return Ok(section.fragments.remove(index));
            }
        }

        Err(CoreError::UnknownTask {
            task_id: task_id.to_string(),
            location: ErrorLocation::from(location),
        })
    }

    pub fn fragment(&self, task_id: &TaskId) -> Option<&TaskFragment> {
        self.sections
            .iter()
            .flat_map(|section| section.fragments.iter())
            .find(|fragment| fragment.id() == task_id)
    }

    pub fn fragment_mut(&mut self, task_id: &TaskId) -> Option<&mut TaskFragment> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.fragments.iter_mut())
            .find(|fragment| fragment.id() == task_id)
    }

    /// Fragments of one sprint in creation order; empty for unknown sprints
    pub fn fragments(&self, sprint_id: &str) -> &[TaskFragment] {
        self.section(sprint_id)
            .map(|section| section.fragments.as_slice())
            .unwrap_or(&[])
    }

    /// The fragment most recently scrolled into view in this sprint
    pub fn revealed(&self, sprint_id: &str) -> Option<&TaskId> {
        self.section(sprint_id)
            .and_then(|section| section.revealed.as_ref())
    }

    fn section(&self, sprint_id: &str) -> Option<&TaskSection> {
        self.sections
            .iter()
            .find(|section| section.sprint.id == sprint_id)
    }
}
