//! # Application Configuration
//!
//! Static chain/network configuration with optional environment overrides.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The browser build has no environment, so [`Config::from_env()`] yields the
//! built-in defaults there; native tools and tests can override them:
//!
//! | Variable                  | Meaning                                               |
//! |---------------------------|-------------------------------------------------------|
//! | `DAPP_NAME`               | Name announced to wallet extensions                   |
//! | `DAPP_DEFAULT_NETWORK`    | Network id used for balances and contract calls       |
//! | `DAPP_NETWORK_ENDPOINTS`  | Comma-separated WebSocket endpoints for that network  |
//! | `DAPP_FUND_REF_TIME`      | Weight ref time passed to `create_pop_to_hydra_xcm`   |
//! | `DAPP_FUND_PROOF_SIZE`    | Weight proof size passed to `create_pop_to_hydra_xcm` |
//!
//! The config is an explicit value: build it once at startup and pass it to
//! whoever needs it.
//!
//! ```rust
//! use lib_core::config::Config;
//!
//! let config = Config::default();
//! config.validate().unwrap();
//! assert_eq!(config.default_network().unwrap().endpoints, vec!["ws://127.0.0.1:9944"]);
//! ```

use crate::error::{AppError, Result};
use crate::fund::FundSettings;
use lib_utils::envs::{self, get_env_list, get_env_or, get_env_parse};
use lib_utils::validation::validate_ws_url;
use serde::{Deserialize, Serialize};

/// Id of the local Pop testnet node.
pub const POP_TESTNET_LOCAL: &str = "pop-testnet-local";

/// Id of Polkadot Asset Hub.
pub const POLKADOT_ASSET_HUB: &str = "polkadot-asset-hub";

/// A supported chain and where to reach it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub id: String,
    pub name: String,
    /// WebSocket endpoints, tried in order by the gateway
    pub endpoints: Vec<String>,
    /// Native token symbol
    pub symbol: String,
    /// Native token decimals
    pub decimals: u8,
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Name announced to wallet extensions when requesting access
    pub app_name: String,

    /// Supported networks, in display order
    pub networks: Vec<NetworkInfo>,

    /// Network used for balances and contract calls
    pub default_network_id: String,

    /// Weight limits for the fund action
    pub fund: FundSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "Hydra Playground".to_string(),
            networks: vec![
                NetworkInfo {
                    id: POP_TESTNET_LOCAL.to_string(),
                    name: "Pop Testnet Local".to_string(),
                    endpoints: vec!["ws://127.0.0.1:9944".to_string()],
                    symbol: "PAS".to_string(),
                    decimals: 18,
                },
                NetworkInfo {
                    id: POLKADOT_ASSET_HUB.to_string(),
                    name: "Polkadot Asset Hub".to_string(),
                    endpoints: vec!["wss://polkadot-asset-hub-rpc.polkadot.io".to_string()],
                    symbol: "DOT".to_string(),
                    decimals: 10,
                },
            ],
            default_network_id: POP_TESTNET_LOCAL.to_string(),
            fund: FundSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration: `.env` file (if any), environment overrides, validation.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Built-in defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.app_name = get_env_or("DAPP_NAME", &config.app_name);
        config.default_network_id = get_env_or("DAPP_DEFAULT_NETWORK", &config.default_network_id);

        match get_env_list("DAPP_NETWORK_ENDPOINTS") {
            Ok(endpoints) => {
                let network = config
                    .networks
                    .iter_mut()
                    .find(|n| n.id == config.default_network_id)
                    .ok_or_else(|| {
                        AppError::Config(format!(
                            "DAPP_NETWORK_ENDPOINTS set but network '{}' is unknown",
                            config.default_network_id
                        ))
                    })?;
                network.endpoints = endpoints;
            }
            Err(envs::Error::MissingEnv(_)) => {}
            Err(e) => return Err(e.into()),
        }

        config.fund.ref_time = optional_env("DAPP_FUND_REF_TIME")?.unwrap_or(config.fund.ref_time);
        config.fund.proof_size =
            optional_env("DAPP_FUND_PROOF_SIZE")?.unwrap_or(config.fund.proof_size);

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(AppError::Config("DAPP_NAME cannot be empty".to_string()));
        }

        if self.networks.is_empty() {
            return Err(AppError::Config("At least one network must be configured".to_string()));
        }

        for network in &self.networks {
            if network.endpoints.is_empty() {
                return Err(AppError::Config(format!(
                    "Network '{}' has no endpoints",
                    network.id
                )));
            }
            for endpoint in &network.endpoints {
                validate_ws_url(endpoint).map_err(AppError::Config)?;
            }
        }

        self.default_network()?;

        if self.fund.ref_time == 0 || self.fund.proof_size == 0 {
            return Err(AppError::Config("Fund weight limits must be non-zero".to_string()));
        }

        Ok(())
    }

    /// Look up a network by id.
    pub fn network(&self, id: &str) -> Option<&NetworkInfo> {
        self.networks.iter().find(|n| n.id == id)
    }

    /// The network used for balances and contract calls.
    pub fn default_network(&self) -> Result<&NetworkInfo> {
        self.network(&self.default_network_id).ok_or_else(|| {
            AppError::Config(format!("Unknown default network '{}'", self.default_network_id))
        })
    }
}

fn optional_env(name: &'static str) -> Result<Option<u64>> {
    match get_env_parse::<u64>(name) {
        Ok(value) => Ok(Some(value)),
        Err(envs::Error::MissingEnv(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
