//! Network id sources.

use std::io::ErrorKind;
use std::process::Command;

use log::debug;

use crate::error::{Result, SetupError};
use crate::identity::binary::resolve_binary_path;
use crate::node::NodeLayout;

/// Something that can report a node's network id
pub trait NodeIdentitySource {
    fn network_id(&self, layout: &NodeLayout) -> Result<String>;
}

/// Queries the CometBFT binary: `<binary> show_node_id --home=<home>`
#[derive(Debug, Clone)]
pub struct CometbftCli {
    binary: String,
}

impl CometbftCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl NodeIdentitySource for CometbftCli {
    fn network_id(&self, layout: &NodeLayout) -> Result<String> {
        let program = resolve_binary_path(&self.binary)?;
        debug!("Running {} show_node_id {}", program.display(), layout.home_arg());

        let output = Command::new(&program)
            .arg("show_node_id")
            .arg(layout.home_arg())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    SetupError::IdentityCommandUnavailable {
                        binary: program.display().to_string(),
                    }
                }
                _ => SetupError::io(&program, e),
            })?;

        if !output.status.success() {
            return Err(SetupError::IdentityCommandFailed {
                node: layout.node.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if id.is_empty() {
            return Err(SetupError::EmptyNodeId {
                node: layout.node.to_string(),
            });
        }
        Ok(id)
    }
}
