use std::env;

/// Environment variable that overrides the identity query binary
pub const IDENTITY_BINARY_ENV: &str = "COMETBFT_BIN";

/// Top-level settings for one `configure-nodes` run
#[derive(Debug, Clone, PartialEq)]
pub struct SetupConfig {
    /// Chain identifier written into every genesis document
    pub chain_id: String,
    /// Listen address written to `rpc.laddr`
    pub rpc_laddr: String,
    /// Port other nodes dial for consensus gossip
    pub p2p_port: u16,
    /// Voting power assigned to every validator, as CometBFT expects it (a string)
    pub validator_power: String,
    /// Name of each node's CometBFT home inside its working directory
    pub home_subdir: String,
    /// Binary queried for each node's network id (name on PATH or explicit path)
    pub identity_binary: String,
    /// Alternate storage backend settings, used when MongoDB is enabled
    pub mongodb: MongoSettings,
}

/// MongoDB block store settings
#[derive(Debug, Clone, PartialEq)]
pub struct MongoSettings {
    /// Value written to `db_backend`
    pub backend: String,
    pub user: String,
    pub password: String,
    /// Appended to the node name to form the sibling service host
    pub host_suffix: String,
    pub port: u16,
    pub database: String,
}

impl MongoSettings {
    /// Connection string for the MongoDB service that sits next to `node`
    pub fn connection_string(&self, node: &str) -> String {
        format!(
            "mongodb://{}:{}@{}{}:{}",
            self.user, self.password, node, self.host_suffix, self.port
        )
    }
}

impl SetupConfig {
    /// Defaults with overrides taken from the process environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(binary) = env::var(IDENTITY_BINARY_ENV) {
            if !binary.trim().is_empty() {
                config.identity_binary = binary.trim().to_string();
            }
        }
        config
    }
}

/// Default implementation for SetupConfig
impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            chain_id: "wineventchain".to_string(),
            rpc_laddr: "tcp://0.0.0.0:26657".to_string(),
            p2p_port: 26656,
            validator_power: "10".to_string(),
            home_subdir: "cometbft-data".to_string(),
            identity_binary: "cometbft".to_string(),
            mongodb: MongoSettings::default(),
        }
    }
}

/// Default implementation for MongoSettings
impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            backend: "mongodb".to_string(),
            user: "root".to_string(),
            password: "root".to_string(),
            host_suffix: "-mongodb".to_string(),
            port: 27017,
            database: "blockstore".to_string(),
        }
    }
}
