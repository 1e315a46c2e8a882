mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use prefixcss_core::{emitter, loader, prefixer, PrefixTables};
use std::fs;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            tables,
            json,
        } => {
            let tables = match tables {
                Some(path) => PrefixTables::load(&path).expect("Failed to load prefix tables"),
                None => PrefixTables::builtin(),
            };

            let tree = loader::load_tree(Path::new(&input)).expect("Failed to load stylesheet tree");

            // One pass only: re-running would duplicate selector siblings.
            let expanded = prefixer::expand(&tree, &tables);

            let rendered = if json {
                serde_json::to_string_pretty(&expanded).expect("Failed to serialize tree")
            } else {
                emitter::emit_css(&expanded)
            };

            match output {
                Some(path) => fs::write(&path, rendered).expect("Failed to write output"),
                None => print!("{}", rendered),
            }
        }
    }
}
