pub mod core;
pub mod explorer;
pub mod memory;
pub mod models;
pub mod scanner;
pub mod utils;
pub mod verification;

pub use crate::core::{ContractAuditor, ResponseDispatcher, ResponseOutcome, DEFAULT_CHAIN};
pub use crate::explorer::{ContractEnvelope, ContractRecord, ExplorerClient};
pub use crate::memory::{EventKind, EventLog, SignificantEvent};
pub use crate::models::{AuditResult, FetchOutcome, ThreatLevel, VerificationVerdict};
pub use crate::scanner::{PatternScanner, SecurityPattern};
pub use crate::utils::{AuditError, Result};
pub use crate::verification::VerificationEngine;
