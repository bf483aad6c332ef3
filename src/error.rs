use std::fmt;

use thiserror::Error;

/// The kind of ABI item a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiItemKind {
    Method,
    Event,
    IndexedTopic,
}

impl fmt::Display for AbiItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiItemKind::Method => f.write_str("method"),
            AbiItemKind::Event => f.write_str("event"),
            AbiItemKind::IndexedTopic => f.write_str("indexed topic"),
        }
    }
}

/// Input that violates a reader/writer configuration invariant.
///
/// The display strings of the writer variants are relied upon by callers
/// and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("fromAddress cannot be zero")]
    ZeroFromAddress,

    #[error("maxGasPrice cannot be nil")]
    MissingMaxGasPrice,

    #[error("maxGasPrice must be greater than zero")]
    NonPositiveMaxGasPrice,

    #[error("{0} must be greater than zero")]
    NonPositiveGasLimit(String),

    #[error("polling filter references {0}, which is not an event read of this contract")]
    UnknownPollingEvent(String),

    #[error("data word rules target {0}, which is not a read of this contract")]
    UnknownDataWordTarget(String),

    #[error("{0} is a method read and cannot carry event topics or data words")]
    EventDetailsOnMethod(String),

    #[error("data word {field} of {event} has type {ty}, which is not a single static word")]
    InvalidDataWordType {
        event: String,
        field: String,
        ty: String,
    },

    #[error("data word {field} is declared more than once for {event}")]
    DuplicateDataWord { event: String, field: String },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse ABI for contract {contract}: {reason}")]
    AbiParse { contract: String, reason: String },

    #[error("contract {0} is already registered with a different ABI")]
    ConflictingRegistration(String),

    #[error("contract {0} is not registered")]
    UnknownContract(String),

    #[error("{kind} {name:?} not found in ABI of contract {contract}")]
    NameResolution {
        contract: String,
        name: String,
        kind: AbiItemKind,
    },

    #[error(transparent)]
    ConfigValidation(#[from] ValidationError),

    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// True for a logical name that is missing from the registered ABI.
    pub fn is_name_resolution(&self) -> bool {
        matches!(self, RegistryError::NameResolution { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
