/// One entry in the scan table: a lowercase needle and the finding it
/// produces on a match.
#[derive(Debug, Clone)]
pub struct SecurityPattern {
    pub needle: String,
    pub message: String,
}

impl SecurityPattern {
    pub fn new(needle: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            needle: needle.into().to_lowercase(),
            message: message.into(),
        }
    }
}

/// Heuristic source-text scanner for dangerous constructs.
///
/// Plain case-insensitive substring containment, checked in table order.
/// No tokenization: a match inside a comment or string literal still
/// counts, which is a known false-positive source.
pub struct PatternScanner {
    patterns: Vec<SecurityPattern>,
}

impl PatternScanner {
    /// Scanner with the baseline table of dangerous Solidity constructs.
    pub fn new() -> Self {
        Self {
            patterns: vec![
                SecurityPattern::new(
                    "selfdestruct",
                    "Contains selfdestruct - potential contract destruction risk",
                ),
                SecurityPattern::new(
                    "delegatecall",
                    "Uses delegatecall - potential security risk if not properly validated",
                ),
                SecurityPattern::new(
                    "tx.origin",
                    "Uses tx.origin - phishing attack vulnerability",
                ),
            ],
        }
    }

    /// Scanner with a caller-supplied table.
    pub fn from_table(patterns: Vec<SecurityPattern>) -> Self {
        Self { patterns }
    }

    pub fn with_pattern(
        mut self,
        needle: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.patterns.push(SecurityPattern::new(needle, message));
        self
    }

    /// Scan source text, returning one finding per matched table entry in
    /// table order. Pure: no I/O, no side effects.
    pub fn scan(&self, source: &str) -> Vec<String> {
        let source_lower = source.to_lowercase();

        self.patterns
            .iter()
            .filter(|pattern| source_lower.contains(pattern.needle.as_str()))
            .map(|pattern| pattern.message.clone())
            .collect()
    }
}

impl Default for PatternScanner {
    fn default() -> Self {
        Self::new()
    }
}
