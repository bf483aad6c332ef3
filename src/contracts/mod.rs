pub mod abi;
pub mod execution;
pub mod names;
pub mod operations;
pub mod reader;
pub mod writer;

// Re-export key types for convenience
pub use abi::*;
pub use execution::*;
pub use operations::*;
pub use reader::{
    merge_reader_configs, new_reader_config, ContractReaderConfig, DataWordDetail, DataWordRule,
    EventDefinitions, EventFilter, PollingFilter, ReadDefinition, ReadOperation, ReaderConfig,
};
pub use writer::{new_writer_config, ContractWriterConfig, WriteDefinition, WriteOperation, WriterConfig};
