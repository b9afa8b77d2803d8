//! Update command - recursive merge into a base document.

use autoviv::node::Value;

use crate::cli::UpdateArgs;
use crate::input::read_node;
use crate::output::{OutputFormat, print_value};

/// Run the update command
pub fn run(args: &UpdateArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut base = read_node(&args.base)?;
    for file in &args.files {
        base.update(read_node(file)?);
    }

    print_value(&Value::Node(base), format)?;
    Ok(())
}
