//! Toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Maximum number of toasts kept on screen; the oldest is dropped first
pub const TOAST_LIMIT: usize = 3;

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            variant,
            created_at: Instant::now(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Default)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, ToastVariant::Destructive)
    }

    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Bounded queue of visible toasts, newest last
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    /// Show a toast. Fire-and-forget: nothing is returned to the caller.
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(id = %toast.id, title = %toast.title, "toast");
        self.toasts.push_back(toast);
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    /// Dismiss the most recent toast
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.toasts.pop_back()
    }

    /// Drop every toast that has been visible for at least `ttl`
    pub fn expire(&mut self, now: Instant, ttl: Duration) {
        self.toasts.retain(|t| !t.is_expired(now, ttl));
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
