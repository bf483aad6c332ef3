use std::collections::BTreeMap;

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::abi::{resolve_method, ContractDescriptor};
use crate::error::{Result, ValidationError};

/// A logical write resolved against the contract's ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteDefinition {
    pub chain_specific_name: String,
    pub from_address: Address,
    pub gas_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractWriterConfig {
    #[serde(rename = "contractABI")]
    pub contract_abi: String,
    /// Logical write name -> resolved definition.
    pub configs: BTreeMap<String, WriteDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterConfig {
    pub contracts: BTreeMap<String, ContractWriterConfig>,
    #[serde(with = "decimal_u256")]
    pub max_gas_price: U256,
}

impl WriterConfig {
    pub fn contract(&self, name: &str) -> Option<&ContractWriterConfig> {
        self.contracts.get(name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A logical write requested from the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOperation {
    /// ABI lookup key: a bare name or a full signature.
    pub method: String,
    pub gas_limit: u64,
    /// Name used in the gas limit error; defaults to the logical name.
    pub limit_name: Option<String>,
}

impl WriteOperation {
    pub fn new(method: &str, gas_limit: u64) -> Self {
        Self {
            method: method.to_string(),
            gas_limit,
            limit_name: None,
        }
    }

    pub fn with_limit_name(mut self, name: &str) -> Self {
        self.limit_name = Some(name.to_string());
        self
    }
}

/// Validate the writer inputs and resolve every logical write.
///
/// Checks run in a fixed order and the first violation is returned:
/// sender address, presence of the gas price cap, its sign, then each gas
/// limit in logical-name order. Nothing is resolved until all checks pass.
pub fn new_writer_config(
    contract_name: &str,
    descriptor: &ContractDescriptor,
    from_address: Address,
    max_gas_price: Option<U256>,
    operations: BTreeMap<String, WriteOperation>,
) -> Result<WriterConfig> {
    if from_address.is_zero() {
        return Err(ValidationError::ZeroFromAddress.into());
    }
    let max_gas_price = max_gas_price.ok_or(ValidationError::MissingMaxGasPrice)?;
    if max_gas_price.is_zero() {
        return Err(ValidationError::NonPositiveMaxGasPrice.into());
    }
    for (logical, op) in &operations {
        if op.gas_limit == 0 {
            let name = op.limit_name.clone().unwrap_or_else(|| logical.clone());
            return Err(ValidationError::NonPositiveGasLimit(name).into());
        }
    }

    let mut configs = BTreeMap::new();
    for (logical, op) in operations {
        let chain_specific_name = resolve_method(descriptor, &op.method)?;
        configs.insert(
            logical,
            WriteDefinition {
                chain_specific_name,
                from_address,
                gas_limit: op.gas_limit,
            },
        );
    }

    info!(
        "Built writer config for {} with {} writes from {}",
        contract_name,
        configs.len(),
        from_address
    );

    let mut contracts = BTreeMap::new();
    contracts.insert(
        contract_name.to_string(),
        ContractWriterConfig {
            contract_abi: descriptor.raw_abi().to_string(),
            configs,
        },
    );
    Ok(WriterConfig {
        contracts,
        max_gas_price,
    })
}

/// Shorthand for building the logical write map.
pub fn writes<const N: usize>(entries: [(&str, WriteOperation); N]) -> BTreeMap<String, WriteOperation> {
    entries
        .into_iter()
        .map(|(logical, op)| (logical.to_string(), op))
        .collect()
}

mod decimal_u256 {
    use alloy::primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_str_radix(&s, 10).map_err(de::Error::custom)
    }
}
