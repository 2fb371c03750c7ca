use serde::{Deserialize, Serialize};

use super::threat::ThreatLevel;
use super::verdict::VerificationVerdict;
use crate::explorer::ContractEnvelope;

/// Result of one composed fetch-and-verify call.
///
/// Client and engine errors are converted into the `Failure` variant at
/// this boundary; below it errors propagate as `AuditError`, at and above
/// it they are data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FetchOutcome {
    Success {
        address: String,
        chain: String,
        contract_data: ContractEnvelope,
        verification: VerificationVerdict,
    },
    Failure {
        address: String,
        chain: String,
        error: String,
    },
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// Result of one full contract audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AuditResult {
    Complete {
        contract_address: String,
        verification: VerificationVerdict,
        threat_level: ThreatLevel,
    },
    Failed {
        contract_address: String,
        error: String,
    },
}

impl AuditResult {
    pub fn contract_address(&self) -> &str {
        match self {
            AuditResult::Complete {
                contract_address, ..
            } => contract_address,
            AuditResult::Failed {
                contract_address, ..
            } => contract_address,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, AuditResult::Complete { .. })
    }
}

impl std::fmt::Display for AuditResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f, "                 CONTRACT AUDIT REPORT")?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f)?;

        match self {
            AuditResult::Complete {
                contract_address,
                verification,
                threat_level,
            } => {
                writeln!(f, "Address: {}", contract_address)?;
                writeln!(f, "Contract Name: {}", verification.contract_name)?;
                writeln!(f, "Compiler: {}", verification.compiler_version)?;
                writeln!(
                    f,
                    "Source Code: {}",
                    if verification.has_source_code {
                        "available"
                    } else {
                        "not verified"
                    }
                )?;
                writeln!(
                    f,
                    "ABI: {}",
                    if verification.has_abi {
                        "available"
                    } else {
                        "not available"
                    }
                )?;
                writeln!(f)?;
                writeln!(f, "═══ VERDICT ═══")?;
                writeln!(
                    f,
                    "{} Threat Level: {}",
                    threat_level.emoji(),
                    threat_level.as_str()
                )?;
                writeln!(f, "Verified: {}", verification.verified)?;

                if !verification.security_issues.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "═══ SECURITY ISSUES ═══")?;
                    for issue in &verification.security_issues {
                        writeln!(f, "⚠️  {}", issue)?;
                    }
                }

                if !verification.warnings.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "═══ WARNINGS ═══")?;
                    for warning in &verification.warnings {
                        writeln!(f, "⚡ {}", warning)?;
                    }
                }
            }
            AuditResult::Failed {
                contract_address,
                error,
            } => {
                writeln!(f, "Address: {}", contract_address)?;
                writeln!(f, "❌ Audit failed: {}", error)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "═══════════════════════════════════════════════════════════")
    }
}
