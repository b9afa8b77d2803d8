//! Prune command - strips empty and falsy content.

use autoviv::node::{PruneOptions, Value};

use crate::cli::PruneArgs;
use crate::input::read_node;
use crate::output::{OutputFormat, print_value};

/// Run the prune command
pub fn run(args: &PruneArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut node = read_node(&args.file)?;
    let before = node.len();

    node.prune(
        PruneOptions::default()
            .prune_zero(args.prune_zero)
            .prune_empty_seq(!args.keep_empty_lists),
    );
    tracing::debug!(before, after = node.len(), "pruned top-level keys");

    print_value(&Value::Node(node), format)?;
    Ok(())
}
