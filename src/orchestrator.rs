//! Cluster setup orchestrator.
//!
//! This module coordinates one `configure-nodes` run, from scanning the
//! volume root through writing every node's documents.
//!
//! ## Phases
//!
//! 1. **Scan**: list node directories and check each has its config directory
//! 2. **Collect**: query every network id, then read every validator key
//! 3. **Plan**: read, mutate and serialize each node's `config.toml` and
//!    `genesis.json` in memory
//! 4. **Apply**: write the planned documents
//!
//! Nothing is written until every node has been planned, so a malformed
//! document or a failed identity query leaves the whole cluster untouched.
//! The genesis timestamp is taken once and handed to every node's plan.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::genesis::{apply_genesis, parse_genesis, render_genesis, GenesisTime};
use crate::identity::{collect_identities, NodeIdentity, NodeIdentitySource};
use crate::network_config::{apply_network_config, parse_network_config, render_network_config};
use crate::node::{scan_node_dirs, NodeDirectory, NodeLayout};
use crate::topology::build_peers;

/// Planned documents of one node, ready to be written
#[derive(Debug, Clone)]
pub struct NodePlan {
    pub layout: NodeLayout,
    pub peer_count: usize,
    pub config_toml: String,
    pub genesis_json: String,
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub nodes: Vec<NodeDirectory>,
    pub genesis_time: GenesisTime,
    pub files_written: Vec<PathBuf>,
}

/// Drives the configuration of every node under one root
#[derive(Debug, Clone)]
pub struct ClusterSetup {
    config: SetupConfig,
    use_mongodb: bool,
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SetupError::io(path, e))
}

impl ClusterSetup {
    pub fn new(config: SetupConfig, use_mongodb: bool) -> Self {
        Self {
            config,
            use_mongodb,
        }
    }

    /// Scan `root` and resolve the layout of every node.
    ///
    /// Fails with [`SetupError::MissingConfigDir`] on the first node without
    /// a config directory.
    pub fn layouts(&self, root: &Path) -> Result<Vec<NodeLayout>> {
        let nodes = scan_node_dirs(root)?;
        info!("Found {} node directories under {:?}", nodes.len(), root);

        let mut layouts = Vec::with_capacity(nodes.len());
        for node in nodes {
            let layout = NodeLayout::new(root, node, &self.config);
            let config_dir = layout.config_dir();
            if !config_dir.is_dir() {
                return Err(SetupError::MissingConfigDir {
                    node: layout.node.to_string(),
                    path: config_dir,
                });
            }
            layouts.push(layout);
        }
        Ok(layouts)
    }

    /// Compute the new documents of one node without writing them
    pub fn plan_node(
        &self,
        layout: &NodeLayout,
        identities: &[NodeIdentity],
        time: &GenesisTime,
    ) -> Result<NodePlan> {
        let own = identities
            .iter()
            .find(|identity| identity.name == layout.node)
            .ok_or_else(|| {
                SetupError::invalid_document(
                    layout.config_dir(),
                    format!("no identity collected for node {}", layout.node),
                )
            })?;
        let peers = build_peers(identities, &layout.node);

        let config_path = layout.config_toml();
        let mut network_config = parse_network_config(&config_path, &read_document(&config_path)?)?;
        apply_network_config(
            &mut network_config,
            &config_path,
            &layout.node,
            &peers,
            &self.config,
            self.use_mongodb,
        )?;

        let genesis_path = layout.genesis_json();
        let mut genesis = parse_genesis(&genesis_path, &read_document(&genesis_path)?)?;
        apply_genesis(&mut genesis, &genesis_path, own, identities, time, &self.config)?;

        Ok(NodePlan {
            layout: layout.clone(),
            peer_count: peers.len(),
            config_toml: render_network_config(&network_config),
            genesis_json: render_genesis(&genesis_path, &genesis)?,
        })
    }

    /// Plan every node; stops at the first failure
    pub fn plan<S>(
        &self,
        layouts: &[NodeLayout],
        source: &S,
        time: &GenesisTime,
    ) -> Result<Vec<NodePlan>>
    where
        S: NodeIdentitySource + ?Sized,
    {
        let identities = collect_identities(layouts, source)?;
        if identities.len() == 1 {
            warn!("Only one node found; it will have no persistent peers");
        }

        layouts
            .iter()
            .map(|layout| self.plan_node(layout, &identities, time))
            .collect()
    }

    /// Write every planned document
    pub fn apply(plans: &[NodePlan]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(plans.len() * 2);
        for plan in plans {
            let config_path = plan.layout.config_toml();
            fs::write(&config_path, &plan.config_toml).map_err(|e| SetupError::io(&config_path, e))?;
            written.push(config_path);

            let genesis_path = plan.layout.genesis_json();
            fs::write(&genesis_path, &plan.genesis_json)
                .map_err(|e| SetupError::io(&genesis_path, e))?;
            written.push(genesis_path);

            debug!(
                "Wrote configuration for {} ({} peers)",
                plan.layout.node, plan.peer_count
            );
        }
        Ok(written)
    }

    /// Run the whole setup with a genesis timestamp taken now
    pub fn run<S>(&self, root: &Path, source: &S) -> Result<SetupReport>
    where
        S: NodeIdentitySource + ?Sized,
    {
        self.run_at(root, source, GenesisTime::now())
    }

    /// Run the whole setup with the given genesis timestamp
    pub fn run_at<S>(&self, root: &Path, source: &S, time: GenesisTime) -> Result<SetupReport>
    where
        S: NodeIdentitySource + ?Sized,
    {
        let layouts = self.layouts(root)?;
        let plans = self.plan(&layouts, source, &time)?;
        info!("Planned configuration for {} nodes, writing", plans.len());

        let files_written = Self::apply(&plans)?;

        Ok(SetupReport {
            nodes: layouts.into_iter().map(|layout| layout.node).collect(),
            genesis_time: time,
            files_written,
        })
    }
}
