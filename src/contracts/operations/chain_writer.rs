use alloy::primitives::{Address, U256};

use crate::contracts::abi::AbiProvider;
use crate::contracts::names::{CONTRACT_OFF_RAMP, METHOD_COMMIT, METHOD_EXECUTE};
use crate::contracts::writer::{new_writer_config, writes, WriteOperation, WriterConfig};
use crate::error::Result;

/// Writer config for submitting commit and execute reports to the OffRamp.
pub fn offramp_writer_config(
    abis: &dyn AbiProvider,
    from_address: Address,
    max_gas_price: Option<U256>,
    commit_gas_limit: u64,
    exec_gas_limit: u64,
) -> Result<WriterConfig> {
    let off_ramp = abis.descriptor(CONTRACT_OFF_RAMP)?;

    new_writer_config(
        CONTRACT_OFF_RAMP,
        &off_ramp,
        from_address,
        max_gas_price,
        writes([
            (
                METHOD_COMMIT,
                WriteOperation::new("commit", commit_gas_limit).with_limit_name("commitGasLimit"),
            ),
            (
                METHOD_EXECUTE,
                WriteOperation::new("execute", exec_gas_limit).with_limit_name("execBatchGasLimit"),
            ),
        ]),
    )
}
