use std::fmt;

use alloy::json_abi::{Event, Function, JsonAbi};
use serde::{Deserialize, Serialize};

use super::catalog::ContractDescriptor;
use crate::error::{AbiItemKind, RegistryError, Result};

/// How a logical operation is decoded: a direct call return or a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Method,
    Event,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::Method => f.write_str("method"),
            OperationKind::Event => f.write_str("event"),
        }
    }
}

impl From<OperationKind> for AbiItemKind {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Method => AbiItemKind::Method,
            OperationKind::Event => AbiItemKind::Event,
        }
    }
}

// A key containing '(' is a full signature and selects one overload.
fn find_function<'a>(abi: &'a JsonAbi, key: &str) -> Option<&'a Function> {
    if key.contains('(') {
        abi.functions().find(|f| f.signature() == key)
    } else {
        abi.function(key).and_then(|overloads| overloads.first())
    }
}

fn find_event<'a>(abi: &'a JsonAbi, key: &str) -> Option<&'a Event> {
    if key.contains('(') {
        abi.events().find(|e| e.signature() == key)
    } else {
        abi.event(key).and_then(|overloads| overloads.first())
    }
}

fn not_found(descriptor: &ContractDescriptor, name: &str, kind: AbiItemKind) -> RegistryError {
    RegistryError::NameResolution {
        contract: descriptor.name().to_string(),
        name: name.to_string(),
        kind,
    }
}

/// Resolve a method lookup key to the chain-specific method name.
pub fn resolve_method(descriptor: &ContractDescriptor, name: &str) -> Result<String> {
    find_function(descriptor.abi(), name)
        .map(|f| f.name.clone())
        .ok_or_else(|| not_found(descriptor, name, AbiItemKind::Method))
}

/// Resolve an event lookup key to the chain-specific event name.
pub fn resolve_event(descriptor: &ContractDescriptor, name: &str) -> Result<String> {
    find_event(descriptor.abi(), name)
        .map(|e| e.name.clone())
        .ok_or_else(|| not_found(descriptor, name, AbiItemKind::Event))
}

pub fn resolve(descriptor: &ContractDescriptor, name: &str, kind: OperationKind) -> Result<String> {
    match kind {
        OperationKind::Method => resolve_method(descriptor, name),
        OperationKind::Event => resolve_event(descriptor, name),
    }
}

/// Check that `param` is an indexed input of `event` and return its name.
pub fn resolve_indexed_topic(
    descriptor: &ContractDescriptor,
    event: &str,
    param: &str,
) -> Result<String> {
    let event_item = find_event(descriptor.abi(), event)
        .ok_or_else(|| not_found(descriptor, event, AbiItemKind::Event))?;

    event_item
        .inputs
        .iter()
        .find(|input| input.indexed && input.name == param)
        .map(|input| input.name.clone())
        .ok_or_else(|| not_found(descriptor, &format!("{}.{}", event_item.name, param), AbiItemKind::IndexedTopic))
}
