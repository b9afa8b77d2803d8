//! Get command - prints the value at a dotted path.

use autoviv::node::{NodeError, Path};

use crate::cli::GetArgs;
use crate::input::read_node;
use crate::output::{OutputFormat, print_value};

/// Run the get command. A missing path is an error, never an empty node.
pub fn run(args: &GetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let node = read_node(&args.file)?;
    let path = Path::parse(&args.path);

    let value = node
        .peek_path(&path)
        .ok_or_else(|| NodeError::KeyNotFound {
            key: path.to_string(),
        })?;

    print_value(value, format)?;
    Ok(())
}
