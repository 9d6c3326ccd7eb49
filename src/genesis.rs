//! Genesis assembler for `genesis.json`.
//!
//! Every node's genesis document gets the same `genesis_time` and
//! `chain_id`, and a validator set holding every node in the cluster. The
//! node's own entry stays first; the others follow in identity collection
//! order.
//!
//! The validator list is rebuilt on each run: entries after the first are
//! dropped before the other nodes are appended, so running the setup twice
//! gives the same document instead of duplicating validators.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde_json::{Map, Value};

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::identity::NodeIdentity;

/// Genesis timestamp shared by every node of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisTime(String);

impl GenesisTime {
    /// Current UTC time. Call once per run and pass the value around.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self(time.to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenesisTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a node's `genesis.json`
pub fn parse_genesis(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| SetupError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a genesis document with a 2-space indent
pub fn render_genesis(path: &Path, genesis: &Value) -> Result<String> {
    serde_json::to_string_pretty(genesis).map_err(|source| SetupError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn validator_entry(identity: &NodeIdentity, power: &str) -> Value {
    let mut entry = Map::new();
    entry.insert("pub_key".to_string(), identity.pub_key.clone());
    entry.insert("power".to_string(), Value::String(power.to_string()));
    entry.insert("name".to_string(), Value::String(identity.name.to_string()));
    Value::Object(entry)
}

/// Apply the shared genesis settings and validator set to one node's document
///
/// # Arguments
/// * `genesis` - Parsed `genesis.json` of the node
/// * `path` - Where the document came from, for error messages
/// * `own` - Identity of the node being configured
/// * `identities` - Every node of the cluster, in collection order
/// * `time` - Timestamp computed once for the whole run
/// * `config` - Setup constants
pub fn apply_genesis(
    genesis: &mut Value,
    path: &Path,
    own: &NodeIdentity,
    identities: &[NodeIdentity],
    time: &GenesisTime,
    config: &SetupConfig,
) -> Result<()> {
    let root = genesis
        .as_object_mut()
        .ok_or_else(|| SetupError::invalid_document(path, "genesis is not a JSON object"))?;

    root.insert(
        "genesis_time".to_string(),
        Value::String(time.as_str().to_string()),
    );
    root.insert("chain_id".to_string(), Value::String(config.chain_id.clone()));

    let validators = root
        .entry("validators")
        .or_insert_with(|| Value::Array(Vec::new()));
    if validators.is_null() {
        *validators = Value::Array(Vec::new());
    }
    let validators = validators
        .as_array_mut()
        .ok_or_else(|| SetupError::invalid_document(path, "'validators' is not an array"))?;

    if validators.is_empty() {
        validators.push(validator_entry(own, &config.validator_power));
    }
    validators.truncate(1);

    let own_entry = validators[0]
        .as_object_mut()
        .ok_or_else(|| SetupError::invalid_document(path, "validators[0] is not an object"))?;
    own_entry.insert(
        "power".to_string(),
        Value::String(config.validator_power.clone()),
    );
    own_entry.insert("name".to_string(), Value::String(own.name.to_string()));

    validators.extend(
        identities
            .iter()
            .filter(|identity| identity.name != own.name)
            .map(|identity| validator_entry(identity, &config.validator_power)),
    );

    debug!("Genesis for {} lists {} validators", own.name, validators.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeDirectory;
    use chrono::TimeZone;
    use serde_json::json;

    const FIXTURE: &str = include_str!("../tests/fixtures/genesis.json");

    fn identity(name: &str) -> NodeIdentity {
        NodeIdentity {
            name: NodeDirectory::new(name),
            network_id: format!("{}-id", name),
            pub_key: json!({"type": "tendermint/PubKeyEd25519", "value": format!("{}-key", name)}),
        }
    }

    fn time() -> GenesisTime {
        GenesisTime::from_datetime(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap())
    }

    fn assembled(genesis: &mut Value, own: &str) {
        let identities = vec![identity("node0"), identity("node1"), identity("node2")];
        let own = identities
            .iter()
            .find(|i| i.name.as_str() == own)
            .unwrap()
            .clone();
        apply_genesis(
            genesis,
            Path::new("genesis.json"),
            &own,
            &identities,
            &time(),
            &SetupConfig::default(),
        )
        .unwrap();
    }

    #[test]
    fn test_genesis_time_format() {
        assert_eq!(time().as_str(), "2024-05-06T07:08:09.000000Z");
    }

    #[test]
    fn test_shared_fields() {
        let mut genesis = parse_genesis(Path::new("genesis.json"), FIXTURE).unwrap();
        assembled(&mut genesis, "node1");

        assert_eq!(genesis["genesis_time"], json!("2024-05-06T07:08:09.000000Z"));
        assert_eq!(genesis["chain_id"], json!("wineventchain"));
    }

    #[test]
    fn test_own_validator_first() {
        let mut genesis = parse_genesis(Path::new("genesis.json"), FIXTURE).unwrap();
        assembled(&mut genesis, "node1");

        let validators = genesis["validators"].as_array().unwrap();
        assert_eq!(validators.len(), 3);
        assert_eq!(validators[0]["name"], json!("node1"));
        assert_eq!(validators[0]["power"], json!("10"));
        // Fields written by the node's own init are kept
        assert_eq!(validators[0]["pub_key"]["value"], json!("SELFKEY"));
        assert_eq!(
            validators[0]["address"],
            json!("D1A2C3B4E5F60718293A4B5C6D7E8F9012345678")
        );

        assert_eq!(validators[1]["name"], json!("node0"));
        assert_eq!(validators[1]["pub_key"]["value"], json!("node0-key"));
        assert_eq!(validators[2]["name"], json!("node2"));
        assert_eq!(validators[2]["power"], json!("10"));
    }

    #[test]
    fn test_reapplying_does_not_duplicate() {
        let mut genesis = parse_genesis(Path::new("genesis.json"), FIXTURE).unwrap();
        assembled(&mut genesis, "node0");
        let first = genesis.clone();
        assembled(&mut genesis, "node0");

        assert_eq!(genesis, first);
        assert_eq!(genesis["validators"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_validators_uses_own_key() {
        let mut genesis = json!({"chain_id": "x", "validators": []});
        assembled(&mut genesis, "node2");

        let validators = genesis["validators"].as_array().unwrap();
        assert_eq!(validators[0]["name"], json!("node2"));
        assert_eq!(validators[0]["pub_key"]["value"], json!("node2-key"));
        assert_eq!(validators.len(), 3);
    }

    #[test]
    fn test_untouched_fields_and_order_preserved() {
        let mut genesis = parse_genesis(Path::new("genesis.json"), FIXTURE).unwrap();
        assembled(&mut genesis, "node0");

        assert_eq!(genesis["initial_height"], json!("0"));
        assert_eq!(
            genesis["consensus_params"]["block"]["max_bytes"],
            json!("22020096")
        );
        let keys: Vec<&str> = genesis
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(
            keys,
            vec![
                "genesis_time",
                "chain_id",
                "initial_height",
                "consensus_params",
                "validators",
                "app_hash"
            ]
        );
    }

    #[test]
    fn test_round_trip_without_mutation() {
        let path = Path::new("genesis.json");
        let original = parse_genesis(path, FIXTURE).unwrap();
        let rendered = render_genesis(path, &original).unwrap();

        assert_eq!(rendered.trim_end(), FIXTURE.trim_end());
    }

    #[test]
    fn test_rejects_non_object() {
        let mut genesis = json!([1, 2, 3]);
        let err = apply_genesis(
            &mut genesis,
            Path::new("genesis.json"),
            &identity("node0"),
            &[identity("node0")],
            &time(),
            &SetupConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, SetupError::InvalidDocument { .. }));
    }

    #[test]
    fn test_rejects_non_array_validators() {
        let mut genesis = json!({"validators": {"oops": true}});
        let err = apply_genesis(
            &mut genesis,
            Path::new("genesis.json"),
            &identity("node0"),
            &[identity("node0")],
            &time(),
            &SetupConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, SetupError::InvalidDocument { .. }));
    }
}
