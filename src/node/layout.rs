//! Paths of the files one node's setup reads and writes.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::SetupConfig;

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.toml";
const GENESIS_FILE: &str = "genesis.json";
const VALIDATOR_KEY_FILE: &str = "priv_validator_key.json";

/// Name of a node's working directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeDirectory(String);

impl NodeDirectory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolved paths for one node
///
/// ```text
/// <root>/<node>/
/// \-- cometbft-data/              # home, passed as --home
///     \-- config/
///         |-- config.toml
///         |-- genesis.json
///         \-- priv_validator_key.json
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub node: NodeDirectory,
    pub home: PathBuf,
}

impl NodeLayout {
    pub fn new(root: &Path, node: NodeDirectory, config: &SetupConfig) -> Self {
        let home = root.join(node.as_str()).join(&config.home_subdir);
        Self { node, home }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(CONFIG_DIR)
    }

    pub fn config_toml(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE)
    }

    pub fn genesis_json(&self) -> PathBuf {
        self.config_dir().join(GENESIS_FILE)
    }

    pub fn validator_key_json(&self) -> PathBuf {
        self.config_dir().join(VALIDATOR_KEY_FILE)
    }

    /// Value for the identity query's `--home` argument
    pub fn home_arg(&self) -> String {
        format!("--home={}", self.home.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = NodeLayout::new(
            Path::new("/volumes"),
            NodeDirectory::new("node1"),
            &SetupConfig::default(),
        );

        assert_eq!(layout.home, PathBuf::from("/volumes/node1/cometbft-data"));
        assert_eq!(
            layout.config_toml(),
            PathBuf::from("/volumes/node1/cometbft-data/config/config.toml")
        );
        assert_eq!(
            layout.genesis_json(),
            PathBuf::from("/volumes/node1/cometbft-data/config/genesis.json")
        );
        assert_eq!(
            layout.validator_key_json(),
            PathBuf::from("/volumes/node1/cometbft-data/config/priv_validator_key.json")
        );
        assert_eq!(layout.home_arg(), "--home=/volumes/node1/cometbft-data");
    }

    #[test]
    fn test_node_directory_ordering() {
        let mut nodes = vec![NodeDirectory::new("node2"), NodeDirectory::new("node0")];
        nodes.sort();
        assert_eq!(nodes[0].as_str(), "node0");
        assert_eq!(nodes[1].to_string(), "node2");
    }
}
