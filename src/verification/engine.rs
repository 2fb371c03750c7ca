use tracing::{info, warn};

use crate::explorer::{ContractEnvelope, ExplorerClient};
use crate::models::{FetchOutcome, VerificationVerdict};
use crate::scanner::PatternScanner;

/// Turns explorer envelopes into verification verdicts.
pub struct VerificationEngine {
    client: ExplorerClient,
    scanner: PatternScanner,
}

impl VerificationEngine {
    pub fn new(client: ExplorerClient) -> Self {
        Self {
            client,
            scanner: PatternScanner::new(),
        }
    }

    /// Replace the baseline scan table.
    pub fn with_scanner(mut self, scanner: PatternScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Derive a verdict from one explorer envelope.
    ///
    /// A non-success status or an empty result collection is not an error:
    /// it produces a valid negative verdict carrying a warning.
    pub fn verify(&self, envelope: &ContractEnvelope) -> VerificationVerdict {
        let mut verdict = VerificationVerdict::default();

        if !envelope.is_success() {
            let message = if envelope.message.is_empty() {
                "Unknown error"
            } else {
                envelope.message.as_str()
            };
            verdict
                .warnings
                .push(format!("API returned non-success status: {}", message));
            return verdict;
        }

        let record = match envelope.result.first() {
            Some(record) => record,
            None => {
                verdict.warnings.push("No contract data found".to_string());
                return verdict;
            }
        };

        if record.has_source() {
            verdict.has_source_code = true;
        } else {
            verdict
                .security_issues
                .push("Contract source code not verified on Etherscan".to_string());
        }

        if record.has_abi() {
            verdict.has_abi = true;
        } else {
            verdict.warnings.push("Contract ABI not available".to_string());
        }

        if !record.contract_name.is_empty() {
            verdict.contract_name = record.contract_name.clone();
        }
        if !record.compiler_version.is_empty() {
            verdict.compiler_version = record.compiler_version.clone();
        }

        if verdict.has_source_code {
            verdict
                .security_issues
                .extend(self.scanner.scan(&record.source_code));
        }

        verdict.verified = verdict.has_source_code && verdict.security_issues.is_empty();
        verdict
    }

    /// Fetch a contract and verify it in one call.
    ///
    /// Every client and engine error is converted into
    /// `FetchOutcome::Failure` here; nothing escapes as `Err`.
    pub async fn fetch_and_verify(&self, address: &str, chain: &str) -> FetchOutcome {
        match self.client.fetch_source(address, chain).await {
            Ok(envelope) => {
                let verification = self.verify(&envelope);
                info!(
                    %address,
                    verified = verification.verified,
                    issues = verification.security_issues.len(),
                    "contract verification complete"
                );
                FetchOutcome::Success {
                    address: address.to_string(),
                    chain: chain.to_string(),
                    contract_data: envelope,
                    verification,
                }
            }
            Err(e) => {
                warn!(%address, error = %e, "contract fetch failed");
                FetchOutcome::Failure {
                    address: address.to_string(),
                    chain: chain.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::ContractRecord;

    fn engine() -> VerificationEngine {
        VerificationEngine::new(ExplorerClient::new(None))
    }

    fn envelope_with(record: ContractRecord) -> ContractEnvelope {
        ContractEnvelope {
            status: "1".to_string(),
            message: "OK".to_string(),
            result: vec![record],
        }
    }

    #[test]
    fn test_clean_verified_contract() {
        let verdict = engine().verify(&envelope_with(ContractRecord {
            source_code: "contract Token { uint256 supply; }".to_string(),
            abi: "[]".to_string(),
            contract_name: "Token".to_string(),
            compiler_version: "v0.8.19".to_string(),
        }));

        assert!(verdict.verified);
        assert!(verdict.has_source_code);
        assert!(verdict.has_abi);
        assert!(verdict.security_issues.is_empty());
        assert_eq!(verdict.contract_name, "Token");
        assert_eq!(verdict.compiler_version, "v0.8.19");
    }

    #[test]
    fn test_dangerous_source_never_verified() {
        let verdict = engine().verify(&envelope_with(ContractRecord {
            source_code: "contract K { function kill() { selfdestruct(owner); } }".to_string(),
            abi: "[]".to_string(),
            ..Default::default()
        }));

        assert!(!verdict.verified);
        assert!(verdict.has_source_code);
        assert_eq!(verdict.security_issues.len(), 1);
        assert!(verdict.security_issues[0].contains("destruction risk"));
    }

    #[test]
    fn test_unverified_record() {
        // Shape the explorer returns for contracts without published source
        let verdict = engine().verify(&envelope_with(ContractRecord {
            source_code: String::new(),
            abi: ContractRecord::ABI_UNAVAILABLE.to_string(),
            contract_name: String::new(),
            compiler_version: String::new(),
        }));

        assert!(!verdict.verified);
        assert!(!verdict.has_source_code);
        assert!(!verdict.has_abi);
        assert_eq!(verdict.security_issues.len(), 1);
        assert!(verdict.security_issues[0].contains("not verified"));
        assert_eq!(verdict.warnings, vec!["Contract ABI not available".to_string()]);
        assert_eq!(verdict.contract_name, "Unknown");
        assert_eq!(verdict.compiler_version, "Unknown");
    }

    #[test]
    fn test_non_success_status_is_negative_verdict() {
        let verdict = engine().verify(&ContractEnvelope {
            status: "0".to_string(),
            message: "NOTOK".to_string(),
            result: Vec::new(),
        });

        assert!(!verdict.verified);
        assert!(!verdict.has_source_code);
        assert!(!verdict.has_abi);
        assert_eq!(
            verdict.warnings,
            vec!["API returned non-success status: NOTOK".to_string()]
        );
    }

    #[test]
    fn test_non_success_status_with_empty_message() {
        let verdict = engine().verify(&ContractEnvelope {
            status: "0".to_string(),
            message: String::new(),
            result: Vec::new(),
        });

        assert_eq!(
            verdict.warnings,
            vec!["API returned non-success status: Unknown error".to_string()]
        );
    }

    #[test]
    fn test_success_status_with_no_records() {
        let verdict = engine().verify(&ContractEnvelope {
            status: "1".to_string(),
            message: "OK".to_string(),
            result: Vec::new(),
        });

        assert!(!verdict.verified);
        assert_eq!(verdict.warnings, vec!["No contract data found".to_string()]);
    }

    #[test]
    fn test_only_first_record_is_used() {
        let clean = ContractRecord {
            source_code: "contract A {}".to_string(),
            abi: "[]".to_string(),
            contract_name: "A".to_string(),
            compiler_version: "v0.8.0".to_string(),
        };
        let dangerous = ContractRecord {
            source_code: "selfdestruct(owner)".to_string(),
            ..Default::default()
        };

        let verdict = engine().verify(&ContractEnvelope {
            status: "1".to_string(),
            message: "OK".to_string(),
            result: vec![clean, dangerous],
        });

        assert!(verdict.verified);
        assert_eq!(verdict.contract_name, "A");
    }
}
