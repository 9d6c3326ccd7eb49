//! Network configuration mutator for `config.toml`.
//!
//! Only the keys below are touched; every other key keeps its value and
//! position:
//!
//! | Key                              | Value                                   |
//! |----------------------------------|-----------------------------------------|
//! | `rpc.laddr`                      | `tcp://0.0.0.0:26657`                   |
//! | `p2p.addr_book_strict`           | `false` (private test IP ranges)        |
//! | `p2p.persistent_peers`           | `id@peer:26656,...` for every other node |
//! | `db_backend`                     | `mongodb` (MongoDB only)                |
//! | `db_options.connection_string`   | `mongodb://root:root@<node>-mongodb:27017` (MongoDB only) |
//! | `db_options.database`            | `blockstore` (MongoDB only)             |

use std::path::Path;

use log::debug;
use toml_edit::{value, DocumentMut, Item, Table, TableLike, Value};

use crate::config::SetupConfig;
use crate::error::{Result, SetupError};
use crate::node::NodeDirectory;
use crate::topology::PeerSet;

/// Parse a node's `config.toml`, keeping its comments and formatting
pub fn parse_network_config(path: &Path, content: &str) -> Result<DocumentMut> {
    content
        .parse::<DocumentMut>()
        .map_err(|source| SetupError::TomlParse {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize a node's `config.toml`; untouched lines come back byte for byte
pub fn render_network_config(doc: &DocumentMut) -> String {
    doc.to_string()
}

/// Get a top-level section, creating it when absent
fn section_mut<'a>(doc: &'a mut DocumentMut, key: &str, path: &Path) -> Result<&'a mut dyn TableLike> {
    if !doc.contains_key(key) {
        doc.insert(key, Item::Table(Table::new()));
    }
    let item = &mut doc[key];
    let type_name = item.type_name();
    item.as_table_like_mut().ok_or_else(|| {
        SetupError::invalid_document(
            path,
            format!("'{}' is a {} instead of a table", key, type_name),
        )
    })
}

/// Replace a key's value in place so the comment above it survives
fn set_item(table: &mut dyn TableLike, key: &str, item: Item) {
    match table.get_mut(key) {
        Some(existing) => *existing = item,
        None => {
            table.insert(key, item);
        }
    }
}

fn set_value(table: &mut dyn TableLike, key: &str, new: impl Into<Value>) {
    set_item(table, key, value(new));
}

/// Apply the cluster wiring to one node's configuration
///
/// # Arguments
/// * `doc` - Parsed `config.toml` of the node
/// * `path` - Where the document came from, for error messages
/// * `node` - The node being configured
/// * `peers` - Every other node in the cluster
/// * `config` - Setup constants
/// * `use_mongodb` - Switch the block store to the node's MongoDB service
pub fn apply_network_config(
    doc: &mut DocumentMut,
    path: &Path,
    node: &NodeDirectory,
    peers: &PeerSet,
    config: &SetupConfig,
    use_mongodb: bool,
) -> Result<()> {
    let rpc = section_mut(doc, "rpc", path)?;
    set_value(rpc, "laddr", config.rpc_laddr.as_str());

    let p2p = section_mut(doc, "p2p", path)?;
    set_value(p2p, "addr_book_strict", false);
    set_value(
        p2p,
        "persistent_peers",
        peers.persistent_peers(config.p2p_port),
    );

    if use_mongodb {
        let mongo = &config.mongodb;
        let mut db_options = Table::new();
        db_options.insert("connection_string", value(mongo.connection_string(node.as_str())));
        db_options.insert("database", value(mongo.database.as_str()));

        let root = doc.as_table_mut();
        set_value(root, "db_backend", mongo.backend.as_str());
        set_item(root, "db_options", Item::Table(db_options));
    }

    debug!("Configured {} with {} persistent peers", node, peers.len());
    Ok(())
}
