use serde::{Deserialize, Serialize};

/// Outcome of running verification checks against one contract's data.
///
/// Built once by the verification engine and never mutated afterwards.
/// `verified` holds only when source code is present and the scan found
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationVerdict {
    pub verified: bool,
    pub has_source_code: bool,
    pub has_abi: bool,
    /// Findings in scan-table order; duplicates are not suppressed.
    pub security_issues: Vec<String>,
    /// Non-fatal data-quality notes (API error status, missing ABI, ...).
    pub warnings: Vec<String>,
    pub contract_name: String,
    pub compiler_version: String,
}

impl Default for VerificationVerdict {
    fn default() -> Self {
        Self {
            verified: false,
            has_source_code: false,
            has_abi: false,
            security_issues: Vec::new(),
            warnings: Vec::new(),
            contract_name: "Unknown".to_string(),
            compiler_version: "Unknown".to_string(),
        }
    }
}
