use tracing::{info, warn};

use crate::core::response::ResponseDispatcher;
use crate::memory::EventLog;
use crate::models::{AuditResult, FetchOutcome, ThreatLevel, VerificationVerdict};
use crate::verification::VerificationEngine;

/// Chain identifier used when the caller does not pick one.
pub const DEFAULT_CHAIN: &str = "eth";

const DEFAULT_CRITICAL_THRESHOLD: usize = 2;

/// Drives verification for a contract address, classifies the verdict
/// into a threat level, and triggers the matching auto-response.
///
/// Owns the event log; lockdown responses write to it through the
/// dispatcher.
pub struct ContractAuditor {
    engine: VerificationEngine,
    dispatcher: ResponseDispatcher,
    memory: EventLog,
    critical_threshold: usize,
}

impl ContractAuditor {
    pub fn new(engine: VerificationEngine) -> Self {
        Self {
            engine,
            dispatcher: ResponseDispatcher::new(),
            memory: EventLog::new(),
            critical_threshold: DEFAULT_CRITICAL_THRESHOLD,
        }
    }

    /// Override the issue count above which a verdict classifies as
    /// Critical (default 2).
    pub fn with_critical_threshold(mut self, threshold: usize) -> Self {
        self.critical_threshold = threshold;
        self
    }

    /// The significant-event log owned by this auditor.
    pub fn memory(&self) -> &EventLog {
        &self.memory
    }

    /// Audit the contract at `address` on the default chain.
    pub async fn audit(&self, address: &str) -> AuditResult {
        self.audit_contract(address, DEFAULT_CHAIN).await
    }

    /// Fetch, verify, classify, and respond.
    ///
    /// Fetch failures return `AuditResult::Failed` without touching the
    /// dispatcher or the event log. Otherwise the derived threat level is
    /// dispatched synchronously before the result is returned.
    pub async fn audit_contract(&self, address: &str, chain: &str) -> AuditResult {
        info!(%address, %chain, "starting contract audit");

        match self.engine.fetch_and_verify(address, chain).await {
            FetchOutcome::Failure { error, .. } => {
                warn!(%address, %error, "contract audit failed");
                AuditResult::Failed {
                    contract_address: address.to_string(),
                    error,
                }
            }
            FetchOutcome::Success { verification, .. } => {
                let threat_level = self.classify(&verification);

                if let Some(response) = self.dispatcher.dispatch(threat_level, &self.memory) {
                    info!(
                        threat_level = threat_level.as_str(),
                        response = response.as_str(),
                        "auto-response dispatched"
                    );
                }

                AuditResult::Complete {
                    contract_address: address.to_string(),
                    verification,
                    threat_level,
                }
            }
        }
    }

    /// Classify a verdict into a threat level.
    ///
    /// Unverified source is a distinct, higher-priority risk than a merely
    /// flagged one, so it short-circuits the issue-count rules.
    pub fn classify(&self, verification: &VerificationVerdict) -> ThreatLevel {
        let issues = verification.security_issues.len();

        if !verification.has_source_code {
            ThreatLevel::HighRisk
        } else if issues > self.critical_threshold {
            ThreatLevel::Critical
        } else if issues >= 1 {
            ThreatLevel::HighRisk
        } else {
            ThreatLevel::None
        }
    }
}
