use std::collections::BTreeMap;

use alloy::primitives::Address;
use alloy::sol_types::SolCall;
use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::contracts::execution::ContractCaller;
use crate::views::fee_quoter::IFeeQuoter;
use crate::views::{address_hex, ContractMetadata, FeeQuoterView, ToView};

/// Read a FeeQuoter deployment through the execution engine and assemble its view.
///
/// Every call is decoded as soon as it returns; the first failing call or
/// decode aborts the whole view.
pub async fn generate_fee_quoter_view(
    caller: &dyn ContractCaller,
    address: Address,
    dest_chain_selectors: &[u64],
    tokens: &[Address],
) -> Result<FeeQuoterView> {
    info!(
        "📊 Generating FeeQuoter view for {} via {} ({} dest chains, {} tokens)",
        address,
        caller.description(),
        dest_chain_selectors.len(),
        tokens.len()
    );

    let type_and_version = call(caller, address, IFeeQuoter::typeAndVersionCall {}).await?;
    let owner = call(caller, address, IFeeQuoter::ownerCall {}).await?;
    let authorized_callers = call(caller, address, IFeeQuoter::getAllAuthorizedCallersCall {}).await?;
    let fee_tokens = call(caller, address, IFeeQuoter::getFeeTokensCall {}).await?;
    let static_config = call(caller, address, IFeeQuoter::getStaticConfigCall {}).await?;

    let mut dest_chain_config = BTreeMap::new();
    let mut token_transfer_fee_config = BTreeMap::new();
    for &selector in dest_chain_selectors {
        let config = call(
            caller,
            address,
            IFeeQuoter::getDestChainConfigCall {
                destChainSelector: selector,
            },
        )
        .await?;
        dest_chain_config.insert(selector, config.to_view());

        let mut per_token = BTreeMap::new();
        for &token in tokens {
            let fee_config = call(
                caller,
                address,
                IFeeQuoter::getTokenTransferFeeConfigCall {
                    destChainSelector: selector,
                    token,
                },
            )
            .await?;
            per_token.insert(address_hex(&token), fee_config.to_view());
        }
        token_transfer_fee_config.insert(selector, per_token);
    }

    let mut token_price_feed_config = BTreeMap::new();
    for &token in tokens {
        let feed = call(caller, address, IFeeQuoter::getTokenPriceFeedConfigCall { token }).await?;
        token_price_feed_config.insert(address_hex(&token), feed.to_view());
    }

    Ok(FeeQuoterView {
        metadata: ContractMetadata {
            type_and_version,
            address: address_hex(&address),
            owner: address_hex(&owner),
        },
        authorized_callers: authorized_callers.iter().map(address_hex).collect(),
        fee_tokens: fee_tokens.iter().map(address_hex).collect(),
        static_config: static_config.to_view(),
        dest_chain_config,
        token_price_feed_config,
        token_transfer_fee_config,
    })
}

async fn call<C: SolCall>(caller: &dyn ContractCaller, to: Address, call: C) -> Result<C::Return> {
    let data = caller
        .static_call(to, call.abi_encode())
        .await
        .with_context(|| format!("{} call to {} failed", C::SIGNATURE, to))?;
    debug!("{} returned {} bytes", C::SIGNATURE, data.len());
    C::abi_decode_returns(&data).with_context(|| format!("failed to decode {} result from {}", C::SIGNATURE, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fee_quoter::tests::{link_token, sample_dest_chain_config, sample_static_config};
    use crate::views::fee_quoter::{TokenPriceFeedConfig, TokenTransferFeeConfig};
    use alloy::sol_types::SolValue;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::str::FromStr;

    /// Answers static calls from a table keyed by exact call data.
    struct MockCaller {
        responses: HashMap<Vec<u8>, Vec<u8>>,
    }

    impl MockCaller {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
            }
        }

        fn respond<C: SolCall>(&mut self, call: C, response: Vec<u8>) {
            self.responses.insert(call.abi_encode(), response);
        }
    }

    #[async_trait]
    impl ContractCaller for MockCaller {
        async fn static_call(&self, _to: Address, call_data: Vec<u8>) -> Result<Vec<u8>> {
            self.responses
                .get(&call_data)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("execution reverted"))
        }

        fn description(&self) -> &str {
            "mock caller"
        }
    }

    const DEST_SELECTOR: u64 = 16015286601757825753;

    fn fee_quoter() -> Address {
        Address::from_str("0x1111111111111111111111111111111111111111").unwrap()
    }

    fn owner() -> Address {
        Address::from_str("0x2222222222222222222222222222222222222222").unwrap()
    }

    fn transfer_fee_config() -> TokenTransferFeeConfig {
        TokenTransferFeeConfig {
            minFeeUSDCents: 25,
            maxFeeUSDCents: 10_000,
            deciBps: 5,
            destGasOverhead: 90_000,
            destBytesOverhead: 32,
            isEnabled: true,
        }
    }

    fn populated_caller() -> MockCaller {
        let mut caller = MockCaller::new();
        caller.respond(
            IFeeQuoter::typeAndVersionCall {},
            "FeeQuoter 1.6.0".to_string().abi_encode(),
        );
        caller.respond(IFeeQuoter::ownerCall {}, owner().abi_encode());
        caller.respond(IFeeQuoter::getAllAuthorizedCallersCall {}, vec![owner()].abi_encode());
        caller.respond(IFeeQuoter::getFeeTokensCall {}, vec![link_token()].abi_encode());
        caller.respond(IFeeQuoter::getStaticConfigCall {}, sample_static_config().abi_encode());
        caller.respond(
            IFeeQuoter::getDestChainConfigCall {
                destChainSelector: DEST_SELECTOR,
            },
            sample_dest_chain_config().abi_encode(),
        );
        caller.respond(
            IFeeQuoter::getTokenTransferFeeConfigCall {
                destChainSelector: DEST_SELECTOR,
                token: link_token(),
            },
            transfer_fee_config().abi_encode(),
        );
        caller.respond(
            IFeeQuoter::getTokenPriceFeedConfigCall { token: link_token() },
            TokenPriceFeedConfig {
                dataFeedAddress: owner(),
                tokenDecimals: 18,
            }
            .abi_encode(),
        );
        caller
    }

    #[tokio::test]
    async fn test_generate_fee_quoter_view() {
        let caller = populated_caller();

        let result = generate_fee_quoter_view(&caller, fee_quoter(), &[DEST_SELECTOR], &[link_token()]).await;
        assert!(result.is_ok(), "View generation failed: {:?}", result.err());
        let view = result.unwrap();

        assert_eq!(view.metadata.type_and_version, "FeeQuoter 1.6.0");
        assert_eq!(view.metadata.address, "0x1111111111111111111111111111111111111111");
        assert_eq!(view.metadata.owner, "0x2222222222222222222222222222222222222222");
        assert_eq!(view.fee_tokens, vec!["0x514910771AF9Ca656af840dff83E8264EcF986CA".to_string()]);
        assert_eq!(view.static_config, sample_static_config().to_view());
        assert_eq!(view.dest_chain_config[&DEST_SELECTOR].chain_family_selector, "2812d52c");

        let link = "0x514910771AF9Ca656af840dff83E8264EcF986CA";
        assert_eq!(view.token_price_feed_config[link].token_decimals, 18);
        assert_eq!(
            view.token_transfer_fee_config[&DEST_SELECTOR][link],
            transfer_fee_config().to_view()
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["typeAndVersion"], "FeeQuoter 1.6.0");
        assert_eq!(json["staticConfig"]["maxFeeJuelsPerMsg"], "100000000000000000000");
        println!("✅ FeeQuoter view: {}", json);
    }

    #[tokio::test]
    async fn test_failed_call_aborts_view() {
        let mut caller = populated_caller();
        let static_config_call = IFeeQuoter::getStaticConfigCall {}.abi_encode();
        caller.responses.remove(&static_config_call);

        let err = generate_fee_quoter_view(&caller, fee_quoter(), &[DEST_SELECTOR], &[link_token()])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("getStaticConfig()"), "unexpected error: {}", err);
    }

    #[tokio::test]
    async fn test_undecodable_result_aborts_view() {
        let mut caller = populated_caller();
        caller.respond(IFeeQuoter::getFeeTokensCall {}, vec![0x01, 0x02]);

        let err = generate_fee_quoter_view(&caller, fee_quoter(), &[], &[])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to decode getFeeTokens()"), "unexpected error: {}", err);
    }
}
