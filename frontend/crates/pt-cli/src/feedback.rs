use pt_core::Feedback;

use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;

/// Terminal feedback: alerts go to stderr, reloads are counted and logged
#[derive(Debug, Default)]
pub struct TerminalFeedback {
    alerts: AtomicUsize,
    reloads: AtomicUsize,
}

impl TerminalFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.load(Ordering::Relaxed)
    }

    pub fn reloaded(&self) -> bool {
        self.reloads.load(Ordering::Relaxed) > 0
    }
}

impl Feedback for TerminalFeedback {
    fn alert(&self, message: &str) {
        self.alerts.fetch_add(1, Ordering::Relaxed);
        eprintln!("{message}");
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::Relaxed);
        info!("Server data changed; reload requested");
    }
}
