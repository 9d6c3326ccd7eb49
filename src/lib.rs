//! # cometnet-setup - Setup utilities for CometBFT test networks
//!
//! This library wires a set of pre-initialized CometBFT nodes into one test
//! network and converts exported event logs.
//!
//! ## Overview
//!
//! Each node lives in its own directory under a shared volume root, with a
//! CometBFT home already created by `cometbft init`:
//!
//! ```text
//! volumes/
//! |-- node0/cometbft-data/config/{config.toml,genesis.json,priv_validator_key.json}
//! |-- node1/cometbft-data/config/...
//! \-- node2/cometbft-data/config/...
//! ```
//!
//! `configure-nodes` turns those independent nodes into one cluster:
//!
//! - **Full mesh**: every node lists every other node in `p2p.persistent_peers`
//! - **Open RPC**: `rpc.laddr` listens on all interfaces
//! - **Private ranges**: `p2p.addr_book_strict` is disabled
//! - **Shared genesis**: one `genesis_time`, one `chain_id` and the same validator set
//! - **Optional MongoDB**: the block store can point at a `<node>-mongodb` service
//!
//! ## Architecture
//!
//! - `config`: setup constants and environment overrides
//! - `node`: node directory scanning and on-disk layout
//! - `identity`: network id queries and validator key collection
//! - `topology`: full-mesh peer sets
//! - `network_config`: `config.toml` mutation
//! - `genesis`: `genesis.json` assembly
//! - `orchestrator`: plans every node in memory, then writes
//! - `events`: CSV event export to JSON
//! - `cli`: usage handling shared by the binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cometnet_setup::config::SetupConfig;
//! use cometnet_setup::identity::CometbftCli;
//! use cometnet_setup::orchestrator::ClusterSetup;
//! use std::path::Path;
//!
//! let config = SetupConfig::default();
//! let source = CometbftCli::new(config.identity_binary.clone());
//! let report = ClusterSetup::new(config, false).run(Path::new("volumes"), &source)?;
//! println!("Configured {} nodes at {}", report.nodes.len(), report.genesis_time);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`error::SetupError`]. The binaries report it
//! through `color_eyre`. There are no retries: the first error aborts the
//! run, and because documents are only written after every node has been
//! planned, an aborted run leaves the node files as they were.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod genesis;
pub mod identity;
pub mod network_config;
pub mod node;
pub mod orchestrator;
pub mod topology;
