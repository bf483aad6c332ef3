use alloy::primitives::Address;
use anyhow::Result;
use async_trait::async_trait;

/// Seam to the external engine that performs the actual network calls.
///
/// The registry never talks to a chain itself; view generation hands encoded
/// call data to an implementation of this trait and decodes what comes back.
#[async_trait]
pub trait ContractCaller: Send + Sync {
    /// Perform a static call (read-only) and return the raw return data
    ///
    /// # Arguments
    /// * `to` - The contract address to call
    /// * `call_data` - The encoded function call data
    async fn static_call(&self, to: Address, call_data: Vec<u8>) -> Result<Vec<u8>>;

    /// Get a human-readable description of this caller
    fn description(&self) -> &str;
}
