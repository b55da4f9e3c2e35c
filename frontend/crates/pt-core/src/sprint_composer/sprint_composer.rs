use crate::{Clock, CoreError, CoreResult, SprintDraft, SprintPayload};

use std::sync::Arc;

use log::{debug, info};

/// The "new sprint" modal: opening creates a fresh draft, closing discards it
#[derive(Debug)]
pub struct SprintComposer {
    clock: Arc<dyn Clock>,
    draft: Option<SprintDraft>,
}

impl SprintComposer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, draft: None }
    }

    /// Show the modal. Re-opening an open modal keeps the current draft.
    pub fn open(&mut self) -> &mut SprintDraft {
        let today = self.clock.today();
        self.draft.get_or_insert_with(|| {
            debug!("Opened sprint form (earliest start {today})");
            SprintDraft::new(today)
        })
    }

    pub fn close(&mut self) {
        if self.draft.take().is_some() {
            debug!("Closed sprint form");
        }
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&SprintDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut SprintDraft> {
        self.draft.as_mut()
    }

    /// Produce the trimmed payload of an open, submittable form.
    ///
    /// The draft stays open so a rejected submission can be corrected; close
    /// it once the sprint has been saved.
    #[track_caller]
    pub fn submit(&mut self) -> CoreResult<SprintPayload> {
        let draft = self
            .draft
            .as_mut()
            .ok_or_else(|| CoreError::validation("sprint form is not open", None))?;

        if !draft.validate_form() {
            return Err(CoreError::validation(
                "sprint form is incomplete or invalid",
                None,
            ));
        }

        let payload = draft.payload();
        info!("Submitting sprint '{}'", payload.sprint_name);
        Ok(payload)
    }
}
