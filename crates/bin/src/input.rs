//! Loading JSON documents from files or stdin.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use autoviv::{Node, node::Value};

/// Reads one JSON document; `-` reads stdin.
pub fn read_value(path: &Path) -> autoviv::Result<Value> {
    let text = if path == Path::new("-") {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)?
    };
    let json: serde_json::Value = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded document");
    Ok(json.into())
}

/// Reads one JSON document that must construct a node.
pub fn read_node(path: &Path) -> autoviv::Result<Node> {
    match read_value(path)? {
        Value::Node(node) => Ok(node),
        other => Ok(Node::from_sources([other])?),
    }
}

/// Reads every document in order.
pub fn read_values(paths: &[PathBuf]) -> autoviv::Result<Vec<Value>> {
    paths.iter().map(|path| read_value(path)).collect()
}
