use tracing::debug;

use super::catalog::Catalog;
use crate::contracts::names::*;
use crate::error::Result;

// Only the members the reader/writer presets and the fee quoter view touch.
// Struct returns are written as bare tuples.

const OFF_RAMP: &[&str] = &[
    "function commit(bytes32[2] reportContext, bytes report, bytes32[] rs, bytes32[] ss, bytes32 rawVs)",
    "function execute(bytes32[2] reportContext, bytes report)",
    "function getStaticConfig() view returns ((uint64,uint16,address,address,address))",
    "function getDynamicConfig() view returns ((address,uint32,address))",
    "function getSourceChainConfig(uint64 sourceChainSelector) view returns ((address,bool,uint64,bool,bytes))",
    "function getLatestPriceSequenceNumber() view returns (uint64)",
    "event ExecutionStateChanged(uint64 indexed sourceChainSelector, uint64 indexed sequenceNumber, bytes32 indexed messageId, bytes32 messageHash, uint8 state, bytes returnData, uint256 gasUsed)",
    "event CommitReportAccepted((uint64,bytes,uint64,uint64,bytes32)[] blessedMerkleRoots, (uint64,bytes,uint64,uint64,bytes32)[] unblessedMerkleRoots, ((address,uint224)[],(uint64,uint224)[]) priceUpdates)",
];

const ON_RAMP: &[&str] = &[
    "function getExpectedNextSequenceNumber(uint64 destChainSelector) view returns (uint64)",
    "function getDynamicConfig() view returns ((address,bool,address,address,address))",
    "function getDestChainConfig(uint64 destChainSelector) view returns (uint64 sequenceNumber, bool allowlistEnabled, address router)",
    "event CCIPMessageSent(uint64 indexed destChainSelector, uint64 indexed sequenceNumber, ((bytes32,uint64,uint64,uint64,uint64),address,bytes,bytes,bytes,address,uint256,uint256,(address,bytes,bytes,uint256,bytes)[]) message)",
];

const FEE_QUOTER: &[&str] = &[
    "function typeAndVersion() view returns (string)",
    "function owner() view returns (address)",
    "function getAllAuthorizedCallers() view returns (address[])",
    "function getFeeTokens() view returns (address[])",
    "function getTokenPrice(address token) view returns ((uint224,uint32))",
    "function getDestinationChainGasPrice(uint64 destChainSelector) view returns ((uint224,uint32))",
    "function getStaticConfig() view returns ((uint96,address,uint32))",
    "function getDestChainConfig(uint64 destChainSelector) view returns ((bool,uint16,uint32,uint32,uint32,uint16,uint32,uint16,uint16,uint16,uint32,uint32,uint64,uint32,bool,bytes4))",
    "function getTokenPriceFeedConfig(address token) view returns ((address,uint8))",
    "function getTokenTransferFeeConfig(uint64 destChainSelector, address token) view returns ((uint32,uint32,uint16,uint32,uint32,bool))",
    "event UsdPerTokenUpdated(address indexed token, uint256 value, uint256 timestamp)",
    "event UsdPerUnitGasUpdated(uint64 indexed destChain, uint256 value, uint256 timestamp)",
];

const NONCE_MANAGER: &[&str] = &[
    "function getInboundNonce(uint64 sourceChainSelector, bytes sender) view returns (uint64)",
    "function getOutboundNonce(uint64 destChainSelector, address sender) view returns (uint64)",
];

// getReportDigestHeader is not part of the deployed interface.
const RMN_REMOTE: &[&str] = &[
    "function getVersionedConfig() view returns (uint32 version, (bytes32,(bytes32,uint64)[],uint64) config)",
    "function getCursedSubjects() view returns (bytes16[] subjects)",
];

const ROUTER: &[&str] = &[
    "function getWrappedNative() view returns (address)",
    "function getOnRamp(uint64 destChainSelector) view returns (address)",
];

const CCTP_MESSAGE_TRANSMITTER: &[&str] = &[
    "function localDomain() view returns (uint32)",
    "event MessageSent(bytes message)",
];

/// Built-in interface definitions, keyed by logical contract name.
pub const BUILTIN_DEFINITIONS: &[(&str, &[&str])] = &[
    (CONTRACT_OFF_RAMP, OFF_RAMP),
    (CONTRACT_ON_RAMP, ON_RAMP),
    (CONTRACT_FEE_QUOTER, FEE_QUOTER),
    (CONTRACT_NONCE_MANAGER, NONCE_MANAGER),
    (CONTRACT_RMN_REMOTE, RMN_REMOTE),
    (CONTRACT_ROUTER, ROUTER),
    (CONTRACT_CCTP_MESSAGE_TRANSMITTER, CCTP_MESSAGE_TRANSMITTER),
];

/// Register every built-in definition whose name is not yet taken.
///
/// Names registered beforehand (e.g. from ABI override files) are left alone.
pub fn register_builtin(catalog: &mut Catalog) -> Result<()> {
    for (name, signatures) in BUILTIN_DEFINITIONS {
        if catalog.contains(name) {
            debug!("Keeping previously registered ABI for {}", name);
            continue;
        }
        catalog.register_signatures(name, signatures)?;
    }
    Ok(())
}
