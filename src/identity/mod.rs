//! Node identity collection.
//!
//! Each node contributes two things to the cluster wiring: its network id,
//! which peers use to address it, and its validator public key, which goes
//! into every genesis document.
//!
//! ## Sources
//!
//! The network id comes from a [`NodeIdentitySource`]. In production that is
//! [`CometbftCli`], which runs `cometbft show_node_id --home=<home>` once per
//! node. Tests substitute a fixed mapping so no external binary is needed.
//!
//! The public key is always read from `priv_validator_key.json`.

pub mod binary;
pub mod collector;
pub mod source;
pub mod types;

pub use binary::{resolve_binary_path, validate_binary};
pub use collector::{collect_identities, read_pub_key};
pub use source::{CometbftCli, NodeIdentitySource};
pub use types::NodeIdentity;
