//! Peer connection management.
//!
//! This file builds the persistent peer set of a node from the identities
//! collected for the whole cluster.

use crate::identity::NodeIdentity;
use crate::node::NodeDirectory;
use crate::topology::types::{Peer, PeerSet};

/// Build the full-mesh peer set of `self_name`
///
/// # Arguments
/// * `identities` - Every collected node identity, in collection order
/// * `self_name` - The node whose peers are wanted
///
/// # Returns
/// Every identity except `self_name`, preserving order
pub fn build_peers(identities: &[NodeIdentity], self_name: &NodeDirectory) -> PeerSet {
    PeerSet::new(
        identities
            .iter()
            // Don't connect to self
            .filter(|identity| &identity.name != self_name)
            .map(|identity| Peer {
                name: identity.name.clone(),
                network_id: identity.network_id.clone(),
            })
            .collect(),
    )
}
