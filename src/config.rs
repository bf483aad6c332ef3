use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SETTINGS_FILE: &str = "config/registry";
pub const ENV_PREFIX: &str = "CONTRACT_REGISTRY";

#[derive(Debug, Deserialize, Clone)]
pub struct RegistrySettings {
    pub writer: WriterSettings,
    /// JSON ABI files registered ahead of the built-in definitions.
    #[serde(default)]
    pub abi_overrides: Vec<AbiOverride>,
    #[serde(default)]
    pub usdc: UsdcSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WriterSettings {
    pub from_address: String,
    /// Decimal or `0x` hex. Absent is rejected when the writer config is built.
    #[serde(default)]
    pub max_gas_price: Option<String>,
    pub commit_gas_limit: u64,
    pub exec_gas_limit: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AbiOverride {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct UsdcSettings {
    #[serde(default)]
    pub enabled: bool,
}

impl RegistrySettings {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_SETTINGS_FILE)
    }

    /// Load from an optional settings file layered with environment variables,
    /// e.g. `CONTRACT_REGISTRY__WRITER__COMMIT_GAS_LIMIT`.
    pub fn load_from(path: &str) -> Result<Self> {
        tracing::info!("Loading registry settings...");

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("failed to read registry settings")?;

        let settings: RegistrySettings = settings
            .try_deserialize()
            .context("registry settings are incomplete or malformed")?;
        settings.log_summary();
        Ok(settings)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .context("failed to parse inline registry settings")?;

        settings
            .try_deserialize()
            .context("registry settings are incomplete or malformed")
    }

    fn log_summary(&self) {
        tracing::info!("Final configuration:");
        tracing::info!("  Writer from: {}", self.writer.from_address);
        tracing::info!(
            "  Gas limits: commit={} exec={}",
            self.writer.commit_gas_limit,
            self.writer.exec_gas_limit
        );
        tracing::info!("  ABI overrides: {}", self.abi_overrides.len());
        tracing::info!("  USDC reader: {}", self.usdc.enabled);
    }
}
