//! Node directory scanner.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, SetupError};
use crate::node::NodeDirectory;

/// List every immediate entry of `root` as a node.
///
/// Nothing is filtered out: the caller is trusted to pass a tree that holds
/// only node directories. Names are sorted so runs are reproducible.
pub fn scan_node_dirs(root: &Path) -> Result<Vec<NodeDirectory>> {
    let entries = fs::read_dir(root).map_err(|e| SetupError::io(root, e))?;

    let mut nodes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SetupError::io(root, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!("Found node directory: {}", name);
        nodes.push(NodeDirectory::new(name));
    }
    nodes.sort();

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_sorted_names() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["node2", "node0", "node1"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let nodes = scan_node_dirs(dir.path()).unwrap();
        let names: Vec<&str> = nodes.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["node0", "node1", "node2"]);
    }

    #[test]
    fn test_scan_does_not_filter_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("node0")).unwrap();
        fs::write(dir.path().join("notes.txt"), "stray").unwrap();

        let nodes = scan_node_dirs(dir.path()).unwrap();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = scan_node_dirs(&missing).unwrap_err();
        assert!(matches!(err, SetupError::Io { .. }));
    }
}
