use std::collections::BTreeMap;

use alloy::sol;
use serde::{Deserialize, Serialize};

use super::{address_hex, bytes_hex, ToView};

// FeeQuoter 1.6 return shapes and the read-only calls the view issues.
sol! {
    #[derive(Debug, PartialEq, Eq)]
    struct StaticConfig {
        uint96 maxFeeJuelsPerMsg;
        address linkToken;
        uint32 stalenessThreshold;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct DestChainConfig {
        bool isEnabled;
        uint16 maxNumberOfTokensPerMsg;
        uint32 maxDataBytes;
        uint32 maxPerMsgGasLimit;
        uint32 destGasOverhead;
        uint16 destGasPerPayloadByte;
        uint32 destDataAvailabilityOverheadGas;
        uint16 destGasPerDataAvailabilityByte;
        uint16 destDataAvailabilityMultiplierBps;
        uint16 defaultTokenFeeUSDCents;
        uint32 defaultTokenDestGasOverhead;
        uint32 defaultTxGasLimit;
        uint64 gasMultiplierWeiPerEth;
        uint32 networkFeeUSDCents;
        bool enforceOutOfOrder;
        bytes4 chainFamilySelector;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TokenPriceFeedConfig {
        address dataFeedAddress;
        uint8 tokenDecimals;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct TokenTransferFeeConfig {
        uint32 minFeeUSDCents;
        uint32 maxFeeUSDCents;
        uint16 deciBps;
        uint32 destGasOverhead;
        uint32 destBytesOverhead;
        bool isEnabled;
    }

    interface IFeeQuoter {
        function typeAndVersion() external view returns (string memory);
        function owner() external view returns (address);
        function getAllAuthorizedCallers() external view returns (address[] memory);
        function getFeeTokens() external view returns (address[] memory);
        function getStaticConfig() external view returns (StaticConfig memory);
        function getDestChainConfig(uint64 destChainSelector) external view returns (DestChainConfig memory);
        function getTokenPriceFeedConfig(address token) external view returns (TokenPriceFeedConfig memory);
        function getTokenTransferFeeConfig(uint64 destChainSelector, address token) external view returns (TokenTransferFeeConfig memory);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticConfigView {
    pub max_fee_juels_per_msg: String,
    pub link_token: String,
    pub staleness_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestChainConfigView {
    pub is_enabled: bool,
    pub max_number_of_tokens_per_msg: u16,
    pub max_data_bytes: u32,
    pub max_per_msg_gas_limit: u32,
    pub dest_gas_overhead: u32,
    pub dest_gas_per_payload_byte: u16,
    pub dest_data_availability_overhead_gas: u32,
    pub dest_gas_per_data_availability_byte: u16,
    pub dest_data_availability_multiplier_bps: u16,
    #[serde(rename = "defaultTokenFeeUSDCents")]
    pub default_token_fee_usd_cents: u16,
    pub default_token_dest_gas_overhead: u32,
    pub default_tx_gas_limit: u32,
    pub gas_multiplier_wei_per_eth: u64,
    #[serde(rename = "networkFeeUSDCents")]
    pub network_fee_usd_cents: u32,
    pub enforce_out_of_order: bool,
    pub chain_family_selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPriceFeedConfigView {
    pub data_feed_address: String,
    pub token_decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransferFeeConfigView {
    #[serde(rename = "minFeeUSDCents")]
    pub min_fee_usd_cents: u32,
    #[serde(rename = "maxFeeUSDCents")]
    pub max_fee_usd_cents: u32,
    pub deci_bps: u16,
    pub dest_gas_overhead: u32,
    pub dest_bytes_overhead: u32,
    pub is_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadata {
    pub type_and_version: String,
    pub address: String,
    pub owner: String,
}

/// Snapshot of a FeeQuoter deployment, assembled from individual reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuoterView {
    #[serde(flatten)]
    pub metadata: ContractMetadata,
    pub authorized_callers: Vec<String>,
    pub fee_tokens: Vec<String>,
    pub static_config: StaticConfigView,
    /// Keyed by destination chain selector.
    pub dest_chain_config: BTreeMap<u64, DestChainConfigView>,
    /// Keyed by token address.
    pub token_price_feed_config: BTreeMap<String, TokenPriceFeedConfigView>,
    /// Keyed by destination chain selector, then token address.
    pub token_transfer_fee_config: BTreeMap<u64, BTreeMap<String, TokenTransferFeeConfigView>>,
}

impl ToView for StaticConfig {
    type View = StaticConfigView;

    fn to_view(&self) -> StaticConfigView {
        StaticConfigView {
            max_fee_juels_per_msg: self.maxFeeJuelsPerMsg.to_string(),
            link_token: address_hex(&self.linkToken),
            staleness_threshold: self.stalenessThreshold,
        }
    }
}

impl ToView for DestChainConfig {
    type View = DestChainConfigView;

    fn to_view(&self) -> DestChainConfigView {
        DestChainConfigView {
            is_enabled: self.isEnabled,
            max_number_of_tokens_per_msg: self.maxNumberOfTokensPerMsg,
            max_data_bytes: self.maxDataBytes,
            max_per_msg_gas_limit: self.maxPerMsgGasLimit,
            dest_gas_overhead: self.destGasOverhead,
            dest_gas_per_payload_byte: self.destGasPerPayloadByte,
            dest_data_availability_overhead_gas: self.destDataAvailabilityOverheadGas,
            dest_gas_per_data_availability_byte: self.destGasPerDataAvailabilityByte,
            dest_data_availability_multiplier_bps: self.destDataAvailabilityMultiplierBps,
            default_token_fee_usd_cents: self.defaultTokenFeeUSDCents,
            default_token_dest_gas_overhead: self.defaultTokenDestGasOverhead,
            default_tx_gas_limit: self.defaultTxGasLimit,
            gas_multiplier_wei_per_eth: self.gasMultiplierWeiPerEth,
            network_fee_usd_cents: self.networkFeeUSDCents,
            enforce_out_of_order: self.enforceOutOfOrder,
            chain_family_selector: bytes_hex(self.chainFamilySelector),
        }
    }
}

impl ToView for TokenPriceFeedConfig {
    type View = TokenPriceFeedConfigView;

    fn to_view(&self) -> TokenPriceFeedConfigView {
        TokenPriceFeedConfigView {
            data_feed_address: address_hex(&self.dataFeedAddress),
            token_decimals: self.tokenDecimals,
        }
    }
}

impl ToView for TokenTransferFeeConfig {
    type View = TokenTransferFeeConfigView;

    fn to_view(&self) -> TokenTransferFeeConfigView {
        TokenTransferFeeConfigView {
            min_fee_usd_cents: self.minFeeUSDCents,
            max_fee_usd_cents: self.maxFeeUSDCents,
            deci_bps: self.deciBps,
            dest_gas_overhead: self.destGasOverhead,
            dest_bytes_overhead: self.destBytesOverhead,
            is_enabled: self.isEnabled,
        }
    }
}
