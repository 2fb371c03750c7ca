use serde::{Deserialize, Serialize};

/// Severity classification driving the automated response.
///
/// Ordered by severity: `None < MediumRisk < HighRisk < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatLevel {
    None,
    MediumRisk,
    HighRisk,
    Critical,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::None => "none",
            ThreatLevel::MediumRisk => "medium_risk",
            ThreatLevel::HighRisk => "high_risk",
            ThreatLevel::Critical => "critical",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ThreatLevel::Critical => "🔴",
            ThreatLevel::HighRisk => "🟠",
            ThreatLevel::MediumRisk => "🟡",
            ThreatLevel::None => "🟢",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(ThreatLevel::None < ThreatLevel::MediumRisk);
        assert!(ThreatLevel::MediumRisk < ThreatLevel::HighRisk);
        assert!(ThreatLevel::HighRisk < ThreatLevel::Critical);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(ThreatLevel::Critical.as_str(), "critical");
        assert_eq!(ThreatLevel::HighRisk.as_str(), "high_risk");
        assert_eq!(ThreatLevel::MediumRisk.as_str(), "medium_risk");
    }
}
