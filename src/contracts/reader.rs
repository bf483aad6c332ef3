use std::collections::BTreeMap;

use alloy::dyn_abi::DynSolType;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::abi::{resolve, resolve_indexed_topic, ContractDescriptor, OperationKind};
use crate::error::{Result, ValidationError};

/// Extraction rule for one 32-byte word of a log's non-indexed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataWordDetail {
    pub name: String,
    pub index: u8,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinitions {
    /// Generic topic name -> indexed parameter name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub generic_topic_names: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub generic_data_word_details: BTreeMap<String, DataWordDetail>,
}

impl EventDefinitions {
    fn is_empty(&self) -> bool {
        self.generic_topic_names.is_empty() && self.generic_data_word_details.is_empty()
    }
}

/// A logical read resolved against the contract's ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadDefinition {
    pub chain_specific_name: String,
    pub read_type: OperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_definitions: Option<EventDefinitions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollingFilter {
    #[serde(default)]
    pub generic_event_names: Vec<String>,
}

impl PollingFilter {
    pub fn is_empty(&self) -> bool {
        self.generic_event_names.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractReaderConfig {
    #[serde(rename = "contractABI")]
    pub contract_abi: String,
    #[serde(default, skip_serializing_if = "PollingFilter::is_empty")]
    pub contract_polling_filter: PollingFilter,
    /// Logical read name -> resolved definition.
    pub configs: BTreeMap<String, ReadDefinition>,
}

/// Contract name -> reader configuration for that contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    pub contracts: BTreeMap<String, ContractReaderConfig>,
}

impl ReaderConfig {
    pub fn contract(&self, name: &str) -> Option<&ContractReaderConfig> {
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

/// A logical read requested from the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOperation {
    /// ABI lookup key: a bare name or a full signature.
    pub name: String,
    pub kind: OperationKind,
    /// Generic topic name -> indexed parameter name, events only.
    pub topics: BTreeMap<String, String>,
    /// Skip (and log) instead of failing when the name is not in the ABI.
    pub optional: bool,
}

impl ReadOperation {
    pub fn method(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: OperationKind::Method,
            topics: BTreeMap::new(),
            optional: false,
        }
    }

    pub fn event(name: &str) -> Self {
        Self {
            kind: OperationKind::Event,
            ..Self::method(name)
        }
    }

    pub fn with_topic(mut self, generic_name: &str, param: &str) -> Self {
        self.topics.insert(generic_name.to_string(), param.to_string());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataWordRule {
    pub field: String,
    pub index: u8,
    pub word_type: String,
}

impl DataWordRule {
    pub fn new(field: &str, index: u8, word_type: &str) -> Self {
        Self {
            field: field.to_string(),
            index,
            word_type: word_type.to_string(),
        }
    }
}

/// Log polling metadata for one contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Logical event reads to poll for.
    pub generic_event_names: Vec<String>,
    /// Logical event read -> data word extraction rules.
    pub data_words: BTreeMap<String, Vec<DataWordRule>>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event read to poll for; repeated names are kept once.
    pub fn poll(mut self, logical_event: &str) -> Self {
        if !self.generic_event_names.iter().any(|name| name == logical_event) {
            self.generic_event_names.push(logical_event.to_string());
        }
        self
    }

    pub fn with_data_word(mut self, logical_event: &str, rule: DataWordRule) -> Self {
        self.data_words
            .entry(logical_event.to_string())
            .or_default()
            .push(rule);
        self
    }
}

fn is_single_word(ty: &DynSolType) -> bool {
    matches!(
        ty,
        DynSolType::Bool
            | DynSolType::Int(_)
            | DynSolType::Uint(_)
            | DynSolType::FixedBytes(_)
            | DynSolType::Address
    )
}

fn validate(reads: &BTreeMap<String, ReadOperation>, filter: &EventFilter) -> Result<()> {
    let is_event = |name: &str| {
        reads
            .get(name)
            .map(|op| op.kind == OperationKind::Event)
            .unwrap_or(false)
    };

    for name in &filter.generic_event_names {
        if !is_event(name) {
            return Err(ValidationError::UnknownPollingEvent(name.clone()).into());
        }
    }

    for (logical, op) in reads {
        if op.kind == OperationKind::Method && !op.topics.is_empty() {
            return Err(ValidationError::EventDetailsOnMethod(logical.clone()).into());
        }
    }

    for (event, rules) in &filter.data_words {
        match reads.get(event) {
            None => return Err(ValidationError::UnknownDataWordTarget(event.clone()).into()),
            Some(op) if op.kind == OperationKind::Method => {
                return Err(ValidationError::EventDetailsOnMethod(event.clone()).into())
            }
            Some(_) => {}
        }

        let mut seen = Vec::with_capacity(rules.len());
        for rule in rules {
            if seen.contains(&rule.field.as_str()) {
                return Err(ValidationError::DuplicateDataWord {
                    event: event.clone(),
                    field: rule.field.clone(),
                }
                .into());
            }
            seen.push(rule.field.as_str());

            let valid = DynSolType::parse(&rule.word_type)
                .map(|ty| is_single_word(&ty))
                .unwrap_or(false);
            if !valid {
                return Err(ValidationError::InvalidDataWordType {
                    event: event.clone(),
                    field: rule.field.clone(),
                    ty: rule.word_type.clone(),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Resolve every logical read of one contract into a reader configuration.
///
/// Inputs are validated before any name is resolved. Optional reads that do
/// not resolve are dropped, along with their polling entry.
pub fn new_reader_config(
    contract_name: &str,
    descriptor: &ContractDescriptor,
    reads: BTreeMap<String, ReadOperation>,
    filter: EventFilter,
) -> Result<ReaderConfig> {
    validate(&reads, &filter)?;

    let mut configs = BTreeMap::new();
    for (logical, op) in &reads {
        let chain_specific_name = match resolve(descriptor, &op.name, op.kind) {
            Ok(name) => name,
            Err(err) if op.optional && err.is_name_resolution() => {
                warn!("Skipping optional read {} on {}: {}", logical, contract_name, err);
                continue;
            }
            Err(err) => return Err(err),
        };

        let event_definitions = match op.kind {
            OperationKind::Method => None,
            OperationKind::Event => {
                let mut definitions = EventDefinitions::default();
                for (generic, param) in &op.topics {
                    let topic = resolve_indexed_topic(descriptor, &op.name, param)?;
                    definitions.generic_topic_names.insert(generic.clone(), topic);
                }
                for rule in filter.data_words.get(logical).into_iter().flatten() {
                    definitions.generic_data_word_details.insert(
                        rule.field.clone(),
                        DataWordDetail {
                            name: rule.field.clone(),
                            index: rule.index,
                            ty: rule.word_type.clone(),
                        },
                    );
                }
                (!definitions.is_empty()).then_some(definitions)
            }
        };

        debug!("{}.{} -> {} ({})", contract_name, logical, chain_specific_name, op.kind);
        configs.insert(
            logical.clone(),
            ReadDefinition {
                chain_specific_name,
                read_type: op.kind,
                event_definitions,
            },
        );
    }

    let mut generic_event_names: Vec<String> = Vec::new();
    for name in filter.generic_event_names {
        if configs.contains_key(&name) && !generic_event_names.contains(&name) {
            generic_event_names.push(name);
        }
    }

    info!("Built reader config for {} with {} reads", contract_name, configs.len());

    let mut contracts = BTreeMap::new();
    contracts.insert(
        contract_name.to_string(),
        ContractReaderConfig {
            contract_abi: descriptor.raw_abi().to_string(),
            contract_polling_filter: PollingFilter { generic_event_names },
            configs,
        },
    );
    Ok(ReaderConfig { contracts })
}

/// Union of reader configs over contract name.
///
/// When several inputs define the same contract, the last one replaces the
/// earlier entries wholesale; operations are never merged within a contract.
pub fn merge_reader_configs<I>(configs: I) -> ReaderConfig
where
    I: IntoIterator<Item = ReaderConfig>,
{
    let mut merged = ReaderConfig::default();
    for config in configs {
        for (name, contract) in config.contracts {
            if merged.contracts.insert(name.clone(), contract).is_some() {
                debug!("Reader config for {} replaced by a later config", name);
            }
        }
    }
    merged
}

/// Shorthand for building the logical read map.
pub fn reads<const N: usize>(entries: [(&str, ReadOperation); N]) -> BTreeMap<String, ReadOperation> {
    entries
        .into_iter()
        .map(|(logical, op)| (logical.to_string(), op))
        .collect()
}
