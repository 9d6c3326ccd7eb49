//! Peer topology module.
//!
//! This module derives, for each node, the set of other nodes it keeps
//! persistent connections to. Only the full mesh is supported: every node
//! is a persistent peer of every other node, with no seed nodes.

pub mod types;
pub mod connections;

// Re-export key types and functions for easier access
pub use types::{Peer, PeerSet};
pub use connections::build_peers;
