use serde::{Deserialize, Deserializer, Serialize};

/// JSON envelope returned by the explorer API.
///
/// Decoded once at the client boundary; downstream code never re-checks
/// field presence. The explorer returns `status: "1"` on success and a
/// string-typed `result` payload on some error responses, which decodes
/// here as an empty record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEnvelope {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "records_or_empty")]
    pub result: Vec<ContractRecord>,
}

impl ContractEnvelope {
    /// Status value the explorer uses for successful responses.
    pub const SUCCESS_STATUS: &'static str = "1";

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS_STATUS
    }
}

/// The explorer's raw description of one contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractRecord {
    #[serde(rename = "SourceCode")]
    pub source_code: String,
    #[serde(rename = "ABI")]
    pub abi: String,
    #[serde(rename = "ContractName")]
    pub contract_name: String,
    #[serde(rename = "CompilerVersion")]
    pub compiler_version: String,
}

impl ContractRecord {
    /// Sentinel the explorer places in the ABI field of unverified contracts.
    pub const ABI_UNAVAILABLE: &'static str = "Contract source code not verified";

    pub fn has_source(&self) -> bool {
        !self.source_code.is_empty()
    }

    pub fn has_abi(&self) -> bool {
        !self.abi.is_empty() && self.abi != Self::ABI_UNAVAILABLE
    }
}

fn records_or_empty<'de, D>(deserializer: D) -> Result<Vec<ContractRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    // On rate-limit and error responses the explorer puts a plain string in
    // `result` instead of a record array.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawResult {
        Records(Vec<ContractRecord>),
        Other(serde_json::Value),
    }

    Ok(match RawResult::deserialize(deserializer)? {
        RawResult::Records(records) => records,
        RawResult::Other(_) => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_envelope() {
        let body = r#"{
            "status": "1",
            "message": "OK",
            "result": [{
                "SourceCode": "contract Token {}",
                "ABI": "[]",
                "ContractName": "Token",
                "CompilerVersion": "v0.8.19"
            }]
        }"#;

        let envelope: ContractEnvelope = serde_json::from_str(body).unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.result.len(), 1);
        assert_eq!(envelope.result[0].contract_name, "Token");
        assert!(envelope.result[0].has_source());
        assert!(envelope.result[0].has_abi());
    }

    #[test]
    fn test_decode_string_result_as_empty() {
        let body = r#"{
            "status": "0",
            "message": "NOTOK",
            "result": "Max rate limit reached"
        }"#;

        let envelope: ContractEnvelope = serde_json::from_str(body).unwrap();

        assert!(!envelope.is_success());
        assert!(envelope.result.is_empty());
    }

    #[test]
    fn test_decode_defaults_missing_record_fields() {
        let body = r#"{"status": "1", "result": [{}]}"#;

        let envelope: ContractEnvelope = serde_json::from_str(body).unwrap();
        let record = &envelope.result[0];

        assert!(!record.has_source());
        assert!(!record.has_abi());
        assert!(record.contract_name.is_empty());
    }

    #[test]
    fn test_abi_sentinel_means_unavailable() {
        let record = ContractRecord {
            abi: ContractRecord::ABI_UNAVAILABLE.to_string(),
            ..Default::default()
        };
        assert!(!record.has_abi());
    }
}
