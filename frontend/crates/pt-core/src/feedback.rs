use std::sync::Mutex;

/// User-facing side effects of the workflow: blocking alerts and the
/// reload of authoritative data after a successful save.
pub trait Feedback: Send + Sync {
    fn alert(&self, message: &str);

    fn reload(&self);
}

/// Feedback sink that records what would have been shown
#[derive(Debug, Default)]
pub struct RecordedFeedback {
    alerts: Mutex<Vec<String>>,
    reloads: Mutex<usize>,
}

impl RecordedFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every alert raised so far, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        self.alerts().pop()
    }

    pub fn reload_count(&self) -> usize {
        *self
            .reloads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Feedback for RecordedFeedback {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }

    fn reload(&self) {
        *self
            .reloads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) += 1;
    }
}
