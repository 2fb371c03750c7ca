pub mod auditor;
pub mod response;

pub use auditor::{ContractAuditor, DEFAULT_CHAIN};
pub use response::{ResponseDispatcher, ResponseOutcome};
