//! Node directories and their on-disk layout.
//!
//! Every immediate entry under the cluster root is one node. Its directory
//! name is the node's logical name everywhere else: peer host, validator
//! name and MongoDB service prefix.

pub mod layout;
pub mod scan;

pub use layout::{NodeDirectory, NodeLayout};
pub use scan::scan_node_dirs;
