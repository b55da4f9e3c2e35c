use crate::{ClientResult, SaveResponse};

use pt_core::Feedback;

use log::{error, info};

/// How a save attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; the authoritative list was reloaded
    Saved,
    /// The existence check reported a sprint with the same name
    Duplicate,
    /// Client-side checks failed; nothing was sent
    Invalid,
    /// The server answered `success: false` with this message
    Rejected(String),
    /// The request failed at the HTTP or transport level
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Turn a save reply into alerts, a reload on success, and an outcome.
/// `noun` names the saved thing in the alert texts ("sprint", "task").
pub(crate) fn report(
    result: ClientResult<SaveResponse>,
    noun: &str,
    feedback: &dyn Feedback,
) -> SubmitOutcome {
    match result {
        Ok(response) => {
            info!("Response data: {response:?}");
            if response.success {
                feedback.alert(&format!("{} saved successfully!", capitalize(noun)));
                feedback.reload();
                SubmitOutcome::Saved
            } else {
                let message = response
                    .error
                    .unwrap_or_else(|| String::from("Unknown error"));
                feedback.alert(&format!("Error saving {noun}: {message}"));
                SubmitOutcome::Rejected(message)
            }
        }
        Err(e) => {
            error!("Error saving {noun}: {e}");
            let message = e.user_message().to_string();
            feedback.alert(&format!(
                "An error occurred while saving the {noun}: {message}"
            ));
            SubmitOutcome::Failed(message)
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
