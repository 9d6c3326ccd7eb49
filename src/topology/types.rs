//! Peer set type definitions.

use crate::node::NodeDirectory;

/// One peer another node should dial
#[derive(Debug, Clone, PartialEq)]
pub struct Peer {
    pub name: NodeDirectory,
    pub network_id: String,
}

impl Peer {
    /// Address in CometBFT's `id@host:port` form; the host is the peer's directory name
    pub fn address(&self, port: u16) -> String {
        format!("{}@{}:{}", self.network_id, self.name, port)
    }
}

/// Peers of one node, in identity collection order, never including the node itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeerSet {
    peers: Vec<Peer>,
}

impl PeerSet {
    pub fn new(peers: Vec<Peer>) -> Self {
        Self { peers }
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peer> {
        self.peers.iter()
    }

    /// Value for `p2p.persistent_peers`: every peer address joined with `,`
    pub fn persistent_peers(&self, port: u16) -> String {
        self.peers
            .iter()
            .map(|peer| peer.address(port))
            .collect::<Vec<_>>()
            .join(",")
    }
}
