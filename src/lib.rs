//! Contract interface registry.
//!
//! Holds the ABI catalog for a set of on-chain contracts, resolves logical
//! method/event names against it, and builds the static reader and writer
//! configurations consumed by an external chain execution engine. Decoded
//! call results can be projected into display-friendly views.

pub mod config;
pub mod contracts;
pub mod error;
pub mod services;
pub mod views;

pub use config::RegistrySettings;
pub use contracts::abi::{AbiProvider, Catalog, ContractDescriptor, OperationKind};
pub use contracts::execution::ContractCaller;
pub use contracts::reader::{merge_reader_configs, new_reader_config, ReaderConfig};
pub use contracts::writer::{new_writer_config, WriterConfig};
pub use error::{RegistryError, Result, ValidationError};
pub use services::{bootstrap, generate_fee_quoter_view, Registry};
pub use views::{value_view, ToView};
