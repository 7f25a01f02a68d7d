//! CLI entry point for mergepath

use std::process;

use clap::{CommandFactory, Parser, error::ErrorKind};
use shelltools::{MergeAction, logging, merge};
use tracing::debug;

/// Placeholder that stands for the current `PATH` environment variable.
const ENV_PATH_PLACEHOLDER: &str = "$PATH";

#[derive(Parser, Debug)]
#[command(name = "mergepath")]
#[command(about = "Merge a directory into a PATH-like list, removing duplicates")]
#[command(after_help = "\
Examples:
  append work directory to existing path:   mergepath . \"$PATH\"
  prepend work directory to existing path:  mergepath -p . \"$PATH\"
  remove a directory from the path:         mergepath -c /opt/bin \"$PATH\"")]
#[command(version)]
struct Args {
    /// The directory to add to the path
    #[arg(value_name = "DIR")]
    dir: Option<String>,

    /// The path to merge with (default: $PATH)
    #[arg(value_name = "PATH")]
    path: Option<String>,

    /// The directory to add to the path
    #[arg(short = 'd', long = "directory", value_name = "DIR", conflicts_with = "dir")]
    directory: Option<String>,

    /// The path to merge with (default: $PATH)
    #[arg(short = 'e', long = "envpath", value_name = "PATH", conflicts_with = "path")]
    envpath: Option<String>,

    /// Append the directory to the path removing any duplication (the default
    /// action; given after -p it cancels it)
    #[arg(short = 'a', long = "append", overrides_with = "prepend")]
    append: bool,

    /// Prepend the directory to the path removing any duplication
    #[arg(short = 'p', long = "prepend", overrides_with = "append")]
    prepend: bool,

    /// Remove a directory from the path
    #[arg(short = 'c', long = "clip")]
    clip: bool,
}

/// Resolve the list to modify, reading `PATH` when none (or `$PATH`) was given.
fn resolve_path_list(given: Option<String>) -> String {
    match given {
        Some(p) if p != ENV_PATH_PLACEHOLDER => p,
        _ => std::env::var("PATH").unwrap_or_default(),
    }
}

fn main() {
    logging::init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });

    let dir = match args.dir.or(args.directory) {
        Some(d) if !d.is_empty() => d,
        _ => {
            let err = Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "missing directory to add to path",
            );
            let _ = err.print();
            process::exit(1);
        }
    };

    let path_list = resolve_path_list(args.path.or(args.envpath));
    let action = MergeAction::resolve(args.append, args.prepend, args.clip);
    debug!(?action, %dir, "merging");

    println!("{}", merge(&path_list, &dir, action));
}
