use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of an operational event.
///
/// Only `CriticalError` and `Hack` are worth retaining; everything else is
/// routine and gets discarded by the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    CriticalError,
    Hack,
    RegularEvent,
}

impl EventKind {
    pub fn is_significant(&self) -> bool {
        matches!(self, EventKind::CriticalError | EventKind::Hack)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::CriticalError => "critical_error",
            EventKind::Hack => "hack",
            EventKind::RegularEvent => "regular_event",
        }
    }
}

/// An operational occurrence worth retaining.
///
/// Constructed only by `EventLog::append`, which stamps the timestamp at
/// insertion time. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignificantEvent {
    pub kind: EventKind,
    pub description: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Append-only, type-filterable record of significant events.
///
/// The inner `Vec` is mutex-protected so `append`/`query`/`trim` stay
/// consistent when audits run concurrently against one auditor. Capacity
/// is bounded only by explicit `trim` calls, never on append.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<SignificantEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the event if its kind is significant.
    ///
    /// Anything else is silently dropped and `false` is returned. This is
    /// filtering, not a validation failure.
    pub fn append(
        &self,
        kind: EventKind,
        description: impl Into<String>,
        details: Option<String>,
    ) -> bool {
        if !kind.is_significant() {
            return false;
        }

        let event = SignificantEvent {
            kind,
            description: description.into(),
            details,
            timestamp: Utc::now(),
        };

        let mut events = self.events.lock().expect("event log lock poisoned");
        events.push(event);
        true
    }

    /// Defensive copy of stored events, insertion order preserved.
    /// With a filter, only events of that kind are returned.
    pub fn query(&self, filter: Option<EventKind>) -> Vec<SignificantEvent> {
        let events = self.events.lock().expect("event log lock poisoned");
        match filter {
            Some(kind) => events.iter().filter(|e| e.kind == kind).cloned().collect(),
            None => events.clone(),
        }
    }

    pub fn clear(&self) {
        self.events.lock().expect("event log lock poisoned").clear();
    }

    /// Discard the oldest entries until at most `max_size` remain.
    pub fn trim(&self, max_size: usize) {
        let mut events = self.events.lock().expect("event log lock poisoned");
        if events.len() > max_size {
            let excess = events.len() - max_size;
            events.drain(..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("event log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
