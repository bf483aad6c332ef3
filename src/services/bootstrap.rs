use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use tracing::info;

use crate::config::RegistrySettings;
use crate::contracts::abi::{register_builtin, Catalog};
use crate::contracts::operations::{
    dest_reader_config, offramp_writer_config, source_reader_config, usdc_reader_config,
};
use crate::contracts::reader::{merge_reader_configs, ReaderConfig};
use crate::contracts::writer::WriterConfig;
use crate::error::{RegistryError, ValidationError};

/// The catalog and the configs derived from it for one deployment.
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Arc<Catalog>,
    reader: ReaderConfig,
    writer: WriterConfig,
}

impl Registry {
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn reader(&self) -> &ReaderConfig {
        &self.reader
    }

    pub fn writer(&self) -> &WriterConfig {
        &self.writer
    }

    pub fn reader_json(&self) -> Result<String> {
        Ok(self.reader.to_json()?)
    }

    pub fn writer_json(&self) -> Result<String> {
        Ok(self.writer.to_json()?)
    }
}

/// Load the catalog and build the reader and writer configs from settings.
///
/// ABI override files are registered first; built-in definitions only fill
/// the names that are still free.
pub fn bootstrap(settings: &RegistrySettings) -> Result<Registry> {
    info!("🚀 Bootstrapping contract interface registry");

    let mut catalog = Catalog::new();
    for abi_override in &settings.abi_overrides {
        let json = std::fs::read_to_string(&abi_override.path)
            .with_context(|| format!("failed to read ABI file {} for {}", abi_override.path, abi_override.name))?;
        catalog.register(&abi_override.name, &json)?;
    }
    register_builtin(&mut catalog)?;
    let catalog = Arc::new(catalog);

    let from_address = Address::from_str(&settings.writer.from_address)
        .with_context(|| format!("invalid writer.from_address {}", settings.writer.from_address))?;
    // The sender check outranks anything wrong with the price.
    if from_address.is_zero() {
        return Err(RegistryError::from(ValidationError::ZeroFromAddress).into());
    }
    let max_gas_price = settings
        .writer
        .max_gas_price
        .as_deref()
        .map(parse_max_gas_price)
        .transpose()?;

    let writer = offramp_writer_config(
        catalog.as_ref(),
        from_address,
        max_gas_price,
        settings.writer.commit_gas_limit,
        settings.writer.exec_gas_limit,
    )?;

    let mut reader_configs = vec![dest_reader_config(catalog.as_ref())?, source_reader_config(catalog.as_ref())?];
    if settings.usdc.enabled {
        reader_configs.push(usdc_reader_config(catalog.as_ref())?);
    }
    let reader = merge_reader_configs(reader_configs);

    info!(
        "✅ Registry ready: {} contracts catalogued, {} read contracts, {} write contracts",
        catalog.len(),
        reader.contracts.len(),
        writer.contracts.len()
    );

    Ok(Registry {
        catalog,
        reader,
        writer,
    })
}

/// Decimal or `0x` hex. A negative value is a non-positive price, not a
/// malformed one.
fn parse_max_gas_price(price: &str) -> Result<U256> {
    if price.trim_start().starts_with('-') {
        return Err(RegistryError::from(ValidationError::NonPositiveMaxGasPrice).into());
    }
    U256::from_str(price.trim()).with_context(|| format!("invalid writer.max_gas_price {}", price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::names::*;
    use std::io::Write;

    fn settings(extra: &str) -> RegistrySettings {
        let toml = format!(
            r#"
            [writer]
            from_address = "0xabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd"
            max_gas_price = "0x3b9aca00"
            commit_gas_limit = 21000
            exec_gas_limit = 42000
            {}
            "#,
            extra
        );
        RegistrySettings::from_toml_str(&toml).unwrap()
    }

    #[test]
    fn test_bootstrap_with_builtin_definitions() {
        let registry = bootstrap(&settings(""));
        assert!(registry.is_ok(), "Bootstrap failed: {:?}", registry.err());
        let registry = registry.unwrap();

        assert_eq!(registry.writer().max_gas_price, U256::from(1_000_000_000u64));
        assert!(registry.writer().contract(CONTRACT_OFF_RAMP).is_some());
        for name in [
            CONTRACT_OFF_RAMP,
            CONTRACT_ON_RAMP,
            CONTRACT_FEE_QUOTER,
            CONTRACT_NONCE_MANAGER,
            CONTRACT_RMN_REMOTE,
            CONTRACT_ROUTER,
        ] {
            assert!(registry.reader().contract(name).is_some(), "missing reader config for {}", name);
        }
        assert!(registry.reader().contract(CONTRACT_CCTP_MESSAGE_TRANSMITTER).is_none());

        let json = registry.writer_json().unwrap();
        assert!(json.contains("\"maxGasPrice\":\"1000000000\""));
        println!("✅ Writer config: {}", json);
    }

    #[test]
    fn test_bootstrap_with_usdc_enabled() {
        let registry = bootstrap(&settings("[usdc]\nenabled = true")).unwrap();
        assert!(registry.reader().contract(CONTRACT_CCTP_MESSAGE_TRANSMITTER).is_some());
    }

    #[test]
    fn test_abi_override_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"type":"function","name":"getWrappedNative","inputs":[],"outputs":[{"name":"","type":"address"}],"stateMutability":"view"},
                {"type":"function","name":"isChainSupported","inputs":[{"name":"chainSelector","type":"uint64"}],"outputs":[{"name":"","type":"bool"}],"stateMutability":"view"}
            ]"#,
        )
        .unwrap();

        let extra = format!(
            "[[abi_overrides]]\nname = \"{}\"\npath = \"{}\"",
            CONTRACT_ROUTER,
            file.path().display()
        );
        let registry = bootstrap(&settings(&extra)).unwrap();

        let router = registry.catalog().lookup(CONTRACT_ROUTER).unwrap();
        assert!(router.abi().function("isChainSupported").is_some());
        let reader = registry.reader().contract(CONTRACT_ROUTER).unwrap();
        assert_eq!(reader.contract_abi, router.raw_abi());
    }

    #[test]
    fn test_missing_override_file() {
        let extra = "[[abi_overrides]]\nname = \"Router\"\npath = \"/nonexistent/Router.json\"";
        let err = bootstrap(&settings(extra)).unwrap_err();
        assert!(err.to_string().contains("failed to read ABI file"), "unexpected error: {}", err);
    }

    #[test]
    fn test_missing_max_gas_price_is_rejected() {
        let settings = RegistrySettings::from_toml_str(
            r#"
            [writer]
            from_address = "0xabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd"
            commit_gas_limit = 21000
            exec_gas_limit = 42000
            "#,
        )
        .unwrap();

        let err = bootstrap(&settings).unwrap_err();
        assert_eq!(err.to_string(), "maxGasPrice cannot be nil");
        match err.downcast_ref::<RegistryError>() {
            Some(RegistryError::ConfigValidation(ValidationError::MissingMaxGasPrice)) => {}
            other => panic!("expected missing max gas price, got {:?}", other),
        }
    }

    fn writer_settings(from_address: &str, max_gas_price: &str, gas_limit: u64) -> RegistrySettings {
        RegistrySettings::from_toml_str(&format!(
            r#"
            [writer]
            from_address = "{}"
            max_gas_price = "{}"
            commit_gas_limit = {}
            exec_gas_limit = {}
            "#,
            from_address, max_gas_price, gas_limit, gas_limit
        ))
        .unwrap()
    }

    fn validation_error(err: &anyhow::Error) -> Option<&ValidationError> {
        match err.downcast_ref::<RegistryError>() {
            Some(RegistryError::ConfigValidation(validation)) => Some(validation),
            _ => None,
        }
    }

    #[test]
    fn test_zero_sender_wins_over_bad_price() {
        let zero = "0x0000000000000000000000000000000000000000";
        for price in ["-1", "not-a-number", "0"] {
            let err = bootstrap(&writer_settings(zero, price, 0)).unwrap_err();
            assert_eq!(err.to_string(), "fromAddress cannot be zero", "price {}", price);
            assert_eq!(validation_error(&err), Some(&ValidationError::ZeroFromAddress));
        }
    }

    #[test]
    fn test_negative_max_gas_price_is_non_positive() {
        let sender = "0xabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd";
        let err = bootstrap(&writer_settings(sender, "-1", 21000)).unwrap_err();
        assert_eq!(err.to_string(), "maxGasPrice must be greater than zero");
        assert_eq!(validation_error(&err), Some(&ValidationError::NonPositiveMaxGasPrice));

        let err = bootstrap(&writer_settings(sender, "0", 21000)).unwrap_err();
        assert_eq!(validation_error(&err), Some(&ValidationError::NonPositiveMaxGasPrice));
    }

    #[test]
    fn test_malformed_max_gas_price() {
        let sender = "0xabcdabcdabcdabcdabcdabcdabcdabcdabcdabcd";
        let err = bootstrap(&writer_settings(sender, "lots", 21000)).unwrap_err();
        assert!(err.to_string().contains("invalid writer.max_gas_price lots"), "unexpected error: {}", err);
        assert!(validation_error(&err).is_none());
    }
}
