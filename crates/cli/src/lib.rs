mod ast;
mod functions;
mod language;

use astmill_core::config::{LogConfig, Normalization};
use astmill_core::storage::DatasetHoldout;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use language::SourceLanguage;

#[derive(Parser)]
#[command(
    name = "astmill",
    version,
    about = "Mines normalized syntax trees and function metadata from source code",
    long_about = "astmill parses source files into grammar trees, folds single-child chains into \
                  compound labels and writes the flattened trees as JSON lines, one file per \
                  dataset partition. It can also describe every function found in a parse-tree dump."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every supported source file under a path into a JSON-lines AST dataset
    Ast {
        /// File or directory to mine
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output directory; trees land in <DIR>/<holdout>/asts.jsonl
        #[arg(short, long, value_name = "DIR", default_value = "astmill-out")]
        output: PathBuf,

        /// Dataset partition: train, val, test or data
        #[arg(long, default_value = "data")]
        holdout: DatasetHoldout,

        /// Store the source path next to each tree
        #[arg(long)]
        with_paths: bool,

        /// Store source ranges on every node
        #[arg(long)]
        with_ranges: bool,

        /// compress, simplify or raw
        #[arg(long, default_value = "compress")]
        normalization: Normalization,
    },
    /// Print function metadata for a bracketed parse-tree dump, one JSON object per line
    Functions {
        /// File holding the dump, e.g. `(compilationUnit (typeDeclaration ...))`
        #[arg(value_name = "TREE_FILE")]
        tree: PathBuf,

        /// Grammar the dump was produced with
        #[arg(long, value_enum)]
        language: SourceLanguage,

        /// Source path to report instead of the dump's path
        #[arg(long)]
        path: Option<String>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_config = LogConfig {
        component: "cli".to_string(),
        to_stderr: true,
        ..LogConfig::default()
    };
    let _guard = astmill_core::logging::init_logging(&log_config);

    match cli.command {
        Commands::Ast {
            path,
            output,
            holdout,
            with_paths,
            with_ranges,
            normalization,
        } => {
            let config = astmill_core::config::MiningConfig {
                storage: astmill_core::config::StorageConfig {
                    output_dir: output,
                    with_paths,
                    with_ranges,
                },
                holdout,
                normalization,
            };
            ast::run(&path, &config)
        }
        Commands::Functions {
            tree,
            language,
            path,
        } => functions::run(&tree, language, path),
    }
}
