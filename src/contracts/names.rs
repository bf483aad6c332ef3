//! Logical names shared by the reader/writer presets and their consumers.
//!
//! Contract names key the catalog and the top level of every config; the
//! remaining constants are the logical operation names consumers ask for.

// Contracts
pub const CONTRACT_OFF_RAMP: &str = "OffRamp";
pub const CONTRACT_ON_RAMP: &str = "OnRamp";
pub const CONTRACT_FEE_QUOTER: &str = "FeeQuoter";
pub const CONTRACT_NONCE_MANAGER: &str = "NonceManager";
pub const CONTRACT_RMN_REMOTE: &str = "RMNRemote";
pub const CONTRACT_ROUTER: &str = "Router";
pub const CONTRACT_CCTP_MESSAGE_TRANSMITTER: &str = "CCTPMessageTransmitter";

// OffRamp writes
pub const METHOD_COMMIT: &str = "Commit";
pub const METHOD_EXECUTE: &str = "Execute";

// OffRamp reads
pub const METHOD_OFF_RAMP_GET_STATIC_CONFIG: &str = "OffRampGetStaticConfig";
pub const METHOD_OFF_RAMP_GET_DYNAMIC_CONFIG: &str = "OffRampGetDynamicConfig";
pub const METHOD_GET_SOURCE_CHAIN_CONFIG: &str = "GetSourceChainConfig";
pub const METHOD_GET_LATEST_PRICE_SEQUENCE_NUMBER: &str = "GetLatestPriceSequenceNumber";
pub const EVENT_EXECUTION_STATE_CHANGED: &str = "ExecutionStateChanged";
pub const EVENT_COMMIT_REPORT_ACCEPTED: &str = "CommitReportAccepted";

// OnRamp reads
pub const METHOD_GET_EXPECTED_NEXT_SEQUENCE_NUMBER: &str = "GetExpectedNextSequenceNumber";
pub const METHOD_ON_RAMP_GET_DYNAMIC_CONFIG: &str = "OnRampGetDynamicConfig";
pub const METHOD_ON_RAMP_GET_DEST_CHAIN_CONFIG: &str = "OnRampGetDestChainConfig";
pub const EVENT_CCIP_MESSAGE_SENT: &str = "CCIPMessageSent";

// FeeQuoter reads
pub const METHOD_FEE_QUOTER_GET_TOKEN_PRICE: &str = "GetTokenPrice";
pub const METHOD_GET_FEE_PRICE_UPDATE: &str = "GetFeePriceUpdate";
pub const METHOD_GET_DEST_CHAIN_CONFIG: &str = "GetDestChainConfig";
pub const METHOD_FEE_QUOTER_GET_STATIC_CONFIG: &str = "FeeQuoterGetStaticConfig";
pub const METHOD_FEE_QUOTER_GET_TOKEN_PRICE_FEED_CONFIG: &str = "GetTokenPriceFeedConfig";

// NonceManager reads
pub const METHOD_GET_INBOUND_NONCE: &str = "GetInboundNonce";

// RMNRemote reads
pub const METHOD_GET_VERSIONED_CONFIG: &str = "GetVersionedConfig";
pub const METHOD_GET_REPORT_DIGEST_HEADER: &str = "GetReportDigestHeader";
pub const METHOD_GET_CURSED_SUBJECTS: &str = "GetCursedSubjects";

// Router reads
pub const METHOD_ROUTER_GET_WRAPPED_NATIVE: &str = "GetWrappedNative";

// USDC / CCTP
pub const EVENT_CCTP_MESSAGE_SENT: &str = "CCTPMessageSent";
pub const CCTP_MESSAGE_SENT_VALUE: &str = "CCTPMessageSentValue";

// Generic topic names
pub const TOPIC_SOURCE_CHAIN_SELECTOR: &str = "SourceChainSelector";
pub const TOPIC_DEST_CHAIN_SELECTOR: &str = "DestChainSelector";
pub const TOPIC_SEQUENCE_NUMBER: &str = "SequenceNumber";
