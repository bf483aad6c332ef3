use crate::contracts::abi::AbiProvider;
use crate::contracts::names::*;
use crate::contracts::reader::{
    merge_reader_configs, new_reader_config, reads, EventFilter, ReadOperation, ReaderConfig,
};
use crate::error::Result;

/// Reads served by the destination chain: OffRamp, FeeQuoter, NonceManager
/// and RMNRemote.
pub fn dest_reader_config(abis: &dyn AbiProvider) -> Result<ReaderConfig> {
    let off_ramp = abis.descriptor(CONTRACT_OFF_RAMP)?;
    let nonce_manager = abis.descriptor(CONTRACT_NONCE_MANAGER)?;
    let rmn_remote = abis.descriptor(CONTRACT_RMN_REMOTE)?;

    let off_ramp_config = new_reader_config(
        CONTRACT_OFF_RAMP,
        &off_ramp,
        reads([
            (METHOD_OFF_RAMP_GET_STATIC_CONFIG, ReadOperation::method("getStaticConfig")),
            (METHOD_OFF_RAMP_GET_DYNAMIC_CONFIG, ReadOperation::method("getDynamicConfig")),
            (METHOD_GET_SOURCE_CHAIN_CONFIG, ReadOperation::method("getSourceChainConfig")),
            (
                METHOD_GET_LATEST_PRICE_SEQUENCE_NUMBER,
                ReadOperation::method("getLatestPriceSequenceNumber"),
            ),
            (EVENT_COMMIT_REPORT_ACCEPTED, ReadOperation::event("CommitReportAccepted")),
            (
                EVENT_EXECUTION_STATE_CHANGED,
                ReadOperation::event("ExecutionStateChanged")
                    .with_topic(TOPIC_SOURCE_CHAIN_SELECTOR, "sourceChainSelector")
                    .with_topic(TOPIC_SEQUENCE_NUMBER, "sequenceNumber"),
            ),
        ]),
        EventFilter::new()
            .poll(EVENT_COMMIT_REPORT_ACCEPTED)
            .poll(EVENT_EXECUTION_STATE_CHANGED),
    )?;

    let nonce_manager_config = new_reader_config(
        CONTRACT_NONCE_MANAGER,
        &nonce_manager,
        reads([(METHOD_GET_INBOUND_NONCE, ReadOperation::method("getInboundNonce"))]),
        EventFilter::new(),
    )?;

    let rmn_remote_config = new_reader_config(
        CONTRACT_RMN_REMOTE,
        &rmn_remote,
        reads([
            (METHOD_GET_VERSIONED_CONFIG, ReadOperation::method("getVersionedConfig")),
            (METHOD_GET_CURSED_SUBJECTS, ReadOperation::method("getCursedSubjects")),
            (
                METHOD_GET_REPORT_DIGEST_HEADER,
                ReadOperation::method("getReportDigestHeader").optional(),
            ),
        ]),
        EventFilter::new(),
    )?;

    Ok(merge_reader_configs([
        off_ramp_config,
        fee_quoter_reader_config(abis)?,
        nonce_manager_config,
        rmn_remote_config,
    ]))
}

/// Reads served by the source chain: OnRamp, FeeQuoter and Router.
pub fn source_reader_config(abis: &dyn AbiProvider) -> Result<ReaderConfig> {
    let on_ramp = abis.descriptor(CONTRACT_ON_RAMP)?;
    let router = abis.descriptor(CONTRACT_ROUTER)?;

    let on_ramp_config = new_reader_config(
        CONTRACT_ON_RAMP,
        &on_ramp,
        reads([
            (
                METHOD_GET_EXPECTED_NEXT_SEQUENCE_NUMBER,
                ReadOperation::method("getExpectedNextSequenceNumber"),
            ),
            (METHOD_ON_RAMP_GET_DYNAMIC_CONFIG, ReadOperation::method("getDynamicConfig")),
            (METHOD_ON_RAMP_GET_DEST_CHAIN_CONFIG, ReadOperation::method("getDestChainConfig")),
            (
                EVENT_CCIP_MESSAGE_SENT,
                ReadOperation::event("CCIPMessageSent")
                    .with_topic(TOPIC_DEST_CHAIN_SELECTOR, "destChainSelector")
                    .with_topic(TOPIC_SEQUENCE_NUMBER, "sequenceNumber"),
            ),
        ]),
        EventFilter::new().poll(EVENT_CCIP_MESSAGE_SENT),
    )?;

    let router_config = new_reader_config(
        CONTRACT_ROUTER,
        &router,
        reads([(METHOD_ROUTER_GET_WRAPPED_NATIVE, ReadOperation::method("getWrappedNative"))]),
        EventFilter::new(),
    )?;

    Ok(merge_reader_configs([
        on_ramp_config,
        fee_quoter_reader_config(abis)?,
        router_config,
    ]))
}

fn fee_quoter_reader_config(abis: &dyn AbiProvider) -> Result<ReaderConfig> {
    let fee_quoter = abis.descriptor(CONTRACT_FEE_QUOTER)?;

    new_reader_config(
        CONTRACT_FEE_QUOTER,
        &fee_quoter,
        reads([
            (METHOD_FEE_QUOTER_GET_TOKEN_PRICE, ReadOperation::method("getTokenPrice")),
            (METHOD_GET_FEE_PRICE_UPDATE, ReadOperation::method("getDestinationChainGasPrice")),
            (METHOD_GET_DEST_CHAIN_CONFIG, ReadOperation::method("getDestChainConfig")),
            (METHOD_FEE_QUOTER_GET_STATIC_CONFIG, ReadOperation::method("getStaticConfig")),
            (
                METHOD_FEE_QUOTER_GET_TOKEN_PRICE_FEED_CONFIG,
                ReadOperation::method("getTokenPriceFeedConfig"),
            ),
        ]),
        EventFilter::new(),
    )
}
