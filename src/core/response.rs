use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::memory::{EventKind, EventLog};
use crate::models::ThreatLevel;

/// Status token returned by a response handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseOutcome {
    LockdownActive,
    AutoPatchApplied,
    PatchScheduled,
}

impl ResponseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseOutcome::LockdownActive => "lockdown_active",
            ResponseOutcome::AutoPatchApplied => "auto_patch_applied",
            ResponseOutcome::PatchScheduled => "patch_scheduled",
        }
    }
}

/// Maps each threat level to its automated response.
///
/// The mapping is an exhaustive match, so "no handler for `None`" is a
/// compile-time-checked case rather than a missing-key lookup. The event
/// log is injected per call, which keeps the handlers testable against any
/// log instance.
#[derive(Debug, Default)]
pub struct ResponseDispatcher;

impl ResponseDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Run the handler bound to `level`, synchronously.
    ///
    /// `ThreatLevel::None` has no handler and triggers nothing.
    pub fn dispatch(&self, level: ThreatLevel, log: &EventLog) -> Option<ResponseOutcome> {
        match level {
            ThreatLevel::None => None,
            ThreatLevel::MediumRisk => Some(self.scheduled_patch()),
            ThreatLevel::HighRisk => Some(self.auto_patch()),
            ThreatLevel::Critical => Some(self.lockdown(log)),
        }
    }

    /// Lockdown protocol for critical threats. The only handler that
    /// writes to the event log.
    fn lockdown(&self, log: &EventLog) -> ResponseOutcome {
        warn!("🔒 LOCKDOWN INITIATED: critical security threat detected");
        warn!("all transactions suspended, system access restricted, security team alerted");

        log.append(
            EventKind::CriticalError,
            "System lockdown initiated",
            Some("Critical security threat detected during contract audit".to_string()),
        );

        ResponseOutcome::LockdownActive
    }

    fn auto_patch(&self) -> ResponseOutcome {
        warn!("⚡ AUTO-PATCH ACTIVATED: high risk vulnerability detected");
        info!("applying security patches, monitoring system integrity");

        ResponseOutcome::AutoPatchApplied
    }

    fn scheduled_patch(&self) -> ResponseOutcome {
        info!("📅 SCHEDULED PATCH: medium risk vulnerability detected");
        info!("patch queued for next maintenance window, stakeholders notified");

        ResponseOutcome::PatchScheduled
    }
}
