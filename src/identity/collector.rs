//! Identity collector: network ids first, then validator public keys.

use std::fs;

use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SetupError};
use crate::identity::source::NodeIdentitySource;
use crate::identity::types::NodeIdentity;
use crate::node::NodeLayout;

/// The part of `priv_validator_key.json` this tool reads; the key itself is opaque
#[derive(Debug, Deserialize)]
struct PrivValidatorKey {
    pub_key: Value,
}

/// Read the validator public key of one node
pub fn read_pub_key(layout: &NodeLayout) -> Result<Value> {
    let path = layout.validator_key_json();
    let content = fs::read_to_string(&path).map_err(|e| SetupError::io(&path, e))?;
    let key: PrivValidatorKey =
        serde_json::from_str(&content).map_err(|source| SetupError::Json { path, source })?;

    Ok(key.pub_key)
}

/// Collect the identity of every node, in the order given.
///
/// All network ids are queried before any key file is read. Nothing is
/// written.
pub fn collect_identities<S>(layouts: &[NodeLayout], source: &S) -> Result<Vec<NodeIdentity>>
where
    S: NodeIdentitySource + ?Sized,
{
    let mut network_ids = Vec::with_capacity(layouts.len());
    for layout in layouts {
        let id = source.network_id(layout)?;
        debug!("Node {} has network id {}", layout.node, id);
        network_ids.push(id);
    }

    let mut identities = Vec::with_capacity(layouts.len());
    for (layout, network_id) in layouts.iter().zip(network_ids) {
        identities.push(NodeIdentity {
            name: layout.node.clone(),
            network_id,
            pub_key: read_pub_key(layout)?,
        });
    }

    info!("Collected identities for {} nodes", identities.len());
    Ok(identities)
}
