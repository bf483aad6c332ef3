pub mod catalog;
pub mod definitions;
pub mod resolver;

pub use catalog::{AbiProvider, Catalog, ContractDescriptor};
pub use definitions::{register_builtin, BUILTIN_DEFINITIONS};
pub use resolver::{resolve, resolve_event, resolve_indexed_topic, resolve_method, OperationKind};
