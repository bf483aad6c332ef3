use std::collections::HashMap;
use std::sync::Arc;

use alloy::json_abi::JsonAbi;
use tracing::{debug, info};

use crate::error::{RegistryError, Result};

/// A contract interface registered under a logical name.
///
/// Immutable once created. The stored blob is the canonical JSON rendering
/// of the parsed ABI, so two descriptors built from differently formatted
/// documents of the same interface serialize identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDescriptor {
    name: String,
    abi: JsonAbi,
    raw: String,
}

impl ContractDescriptor {
    /// Parse a JSON ABI document (the array form emitted by solc).
    pub fn from_json(name: &str, abi_json: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(abi_json).map_err(|e| RegistryError::AbiParse {
            contract: name.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_abi(name, abi)
    }

    /// Parse human-readable signatures such as
    /// `function getInboundNonce(uint64 sourceChainSelector, bytes sender) view returns (uint64)`.
    pub fn from_signatures(name: &str, signatures: &[&str]) -> Result<Self> {
        let abi = JsonAbi::parse(signatures.iter().copied()).map_err(|e| RegistryError::AbiParse {
            contract: name.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_abi(name, abi)
    }

    pub fn from_abi(name: &str, abi: JsonAbi) -> Result<Self> {
        let raw = serde_json::to_string(&abi)?;
        Ok(Self {
            name: name.to_string(),
            abi,
            raw,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Canonical JSON of the interface, as embedded in reader/writer configs.
    pub fn raw_abi(&self) -> &str {
        &self.raw
    }
}

/// Source of contract descriptors for the configuration builders.
pub trait AbiProvider: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Arc<ContractDescriptor>>;

    fn descriptor(&self, name: &str) -> Result<Arc<ContractDescriptor>> {
        self.lookup(name)
            .ok_or_else(|| RegistryError::UnknownContract(name.to_string()))
    }
}

/// Append-only catalog of contract interfaces.
///
/// Registration needs `&mut self`; once built the catalog is shared behind an
/// `Arc` and only read, so no reader can see a half-registered catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    contracts: HashMap<String, Arc<ContractDescriptor>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the built-in CCIP interface definitions.
    pub fn with_builtin_definitions() -> Result<Self> {
        let mut catalog = Self::new();
        super::definitions::register_builtin(&mut catalog)?;
        Ok(catalog)
    }

    /// Register a JSON ABI under `name`.
    ///
    /// Registering the same interface twice is a no-op; registering a
    /// different one under a taken name fails.
    pub fn register(&mut self, name: &str, abi_json: &str) -> Result<Arc<ContractDescriptor>> {
        let descriptor = ContractDescriptor::from_json(name, abi_json)?;
        self.insert(descriptor)
    }

    pub fn register_signatures(
        &mut self,
        name: &str,
        signatures: &[&str],
    ) -> Result<Arc<ContractDescriptor>> {
        let descriptor = ContractDescriptor::from_signatures(name, signatures)?;
        self.insert(descriptor)
    }

    fn insert(&mut self, descriptor: ContractDescriptor) -> Result<Arc<ContractDescriptor>> {
        if let Some(existing) = self.contracts.get(descriptor.name()) {
            if existing.abi() == descriptor.abi() {
                debug!("Contract {} already registered with an identical ABI", descriptor.name());
                return Ok(existing.clone());
            }
            return Err(RegistryError::ConflictingRegistration(descriptor.name().to_string()));
        }

        info!(
            "Registered contract {} ({} functions, {} events)",
            descriptor.name(),
            descriptor.abi().functions().count(),
            descriptor.abi().events().count()
        );
        let descriptor = Arc::new(descriptor);
        self.contracts
            .insert(descriptor.name().to_string(), descriptor.clone());
        Ok(descriptor)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<ContractDescriptor>> {
        self.contracts.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contracts.contains_key(name)
    }

    /// Registered contract names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contracts.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl AbiProvider for Catalog {
    fn lookup(&self, name: &str) -> Option<Arc<ContractDescriptor>> {
        Catalog::lookup(self, name)
    }
}
