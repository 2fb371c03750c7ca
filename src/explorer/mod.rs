pub mod client;
pub mod envelope;

pub use client::{ExplorerClient, DEFAULT_BASE_URL};
pub use envelope::{ContractEnvelope, ContractRecord};
