//! Transient, non-blocking user notifications.

use std::sync::Mutex;
use tracing::warn;

/// A sink for toast messages. The dashboard surfaces fetch errors through
/// this seam so that views never block on notification delivery.
pub trait Toasts: Send + Sync {
    /// Surfaces an error toast.
    fn error(&self, message: &str);
}

/// Emits toasts as `tracing` warnings, which is what a terminal user sees.
#[derive(Debug, Default)]
pub struct TracingToasts;

impl Toasts for TracingToasts {
    fn error(&self, message: &str) {
        warn!(target: "toast", "{message}");
    }
}

/// Collects toasts in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemoryToasts {
    messages: Mutex<Vec<String>>,
}

impl MemoryToasts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("toast lock").clone()
    }
}

impl Toasts for MemoryToasts {
    fn error(&self, message: &str) {
        self.messages.lock().expect("toast lock").push(message.to_string());
    }
}
