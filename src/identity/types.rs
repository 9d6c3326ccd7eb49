use serde_json::Value;

use crate::node::NodeDirectory;

/// Identity of one node, collected before any document is touched
#[derive(Debug, Clone, PartialEq)]
pub struct NodeIdentity {
    pub name: NodeDirectory,
    /// Id used in `id@host:port` peer addresses
    pub network_id: String,
    /// Validator public key exactly as found in `priv_validator_key.json`
    pub pub_key: Value,
}
