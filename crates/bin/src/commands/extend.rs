//! Extend command - N-way merge of documents.

use autoviv::{Node, node::ExtendOptions};

use crate::cli::ExtendArgs;
use crate::input::read_values;
use crate::output::{OutputFormat, print_value};

/// Run the extend command
pub fn run(args: &ExtendArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let sources = read_values(&args.files)?;
    let options = ExtendOptions::default()
        .deep(args.deep)
        .list_action(args.list_action);

    tracing::info!(
        sources = sources.len(),
        deep = options.deep,
        list_action = %options.list_action,
        "extending documents"
    );
    let extended = Node::extend(sources, &options);

    print_value(&extended, format)?;
    Ok(())
}
