//! Page controllers.
//!
//! Each page owns its result slots and reports every action as a [`Toast`].
//! Actions never fail towards the caller: errors are turned into
//! destructive toasts here, at the page boundary. Every action tracks its own
//! in-flight state; nothing orders or cancels overlapping requests, so the
//! response that settles last owns the slot.

pub mod candidates_page;
pub mod processes_page;
pub mod recruiters_page;
pub mod rejection_email_page;

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn from_error(err: &Error) -> Self {
        Self::error(err.user_message())
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

pub(crate) fn found_toast(count: usize) -> Toast {
    Toast::success("Success", format!("{} candidate(s) found", count))
}

pub(crate) fn failure_toast<A: std::fmt::Debug>(action: A, err: &Error) -> Toast {
    warn!(action = ?action, error = %err, "Page action failed");
    Toast::from_error(err)
}

/// Per-action in-flight counters.
///
/// An action is pending while at least one of its requests is outstanding.
#[derive(Debug)]
pub struct InFlight<A> {
    counts: Mutex<HashMap<A, usize>>,
}

impl<A> Default for InFlight<A> {
    fn default() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
        }
    }
}

impl<A> InFlight<A>
where
    A: Copy + Eq + Hash + Ord,
{
    pub fn begin(self: &Arc<Self>, action: A) -> PendingGuard<A> {
        *self
            .counts
            .lock()
            .expect("in-flight mutex poisoned")
            .entry(action)
            .or_insert(0) += 1;
        PendingGuard {
            tracker: Arc::clone(self),
            action,
        }
    }

    pub fn is_pending(&self, action: A) -> bool {
        self.counts
            .lock()
            .expect("in-flight mutex poisoned")
            .contains_key(&action)
    }

    pub fn pending(&self) -> Vec<A> {
        let mut actions: Vec<A> = self
            .counts
            .lock()
            .expect("in-flight mutex poisoned")
            .keys()
            .copied()
            .collect();
        actions.sort();
        actions
    }

    fn finish(&self, action: A) {
        let mut counts = self.counts.lock().expect("in-flight mutex poisoned");
        if let Some(count) = counts.get_mut(&action) {
            *count -= 1;
            if *count == 0 {
                counts.remove(&action);
            }
        }
    }
}

/// Marks an action pending until dropped.
pub struct PendingGuard<A>
where
    A: Copy + Eq + Hash + Ord,
{
    tracker: Arc<InFlight<A>>,
    action: A,
}

impl<A> Drop for PendingGuard<A>
where
    A: Copy + Eq + Hash + Ord,
{
    fn drop(&mut self) {
        self.tracker.finish(self.action);
    }
}
