use crate::contracts::abi::AbiProvider;
use crate::contracts::names::{
    CCTP_MESSAGE_SENT_VALUE, CONTRACT_CCTP_MESSAGE_TRANSMITTER, EVENT_CCTP_MESSAGE_SENT,
};
use crate::contracts::reader::{
    new_reader_config, reads, DataWordRule, EventFilter, ReadOperation, ReaderConfig,
};
use crate::error::Result;

// MessageSent carries the CCTP message as bytes; the third data word
// (index 2) holds the value used to match a message.
const MESSAGE_SENT_VALUE_WORD: u8 = 2;

/// Reader config polling CCTP `MessageSent` logs on the message transmitter.
pub fn usdc_reader_config(abis: &dyn AbiProvider) -> Result<ReaderConfig> {
    let transmitter = abis.descriptor(CONTRACT_CCTP_MESSAGE_TRANSMITTER)?;

    new_reader_config(
        CONTRACT_CCTP_MESSAGE_TRANSMITTER,
        &transmitter,
        reads([(EVENT_CCTP_MESSAGE_SENT, ReadOperation::event("MessageSent"))]),
        EventFilter::new()
            .poll(EVENT_CCTP_MESSAGE_SENT)
            .with_data_word(
                EVENT_CCTP_MESSAGE_SENT,
                DataWordRule::new(CCTP_MESSAGE_SENT_VALUE, MESSAGE_SENT_VALUE_WORD, "bytes32"),
            ),
    )
}
