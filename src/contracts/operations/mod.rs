pub mod chain_reader;
pub mod chain_writer;
pub mod usdc;

pub use chain_reader::{dest_reader_config, source_reader_config};
pub use chain_writer::offramp_writer_config;
pub use usdc::usdc_reader_config;
