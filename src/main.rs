//! CLI entry point for finddir

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, error::ErrorKind};
use shelltools::{
    DirFinder, ErrorPolicy, FinderConfig, LineFormatter, MatchMode, OutputConfig,
    PathStyle, license::LICENSE_TEXT, logging,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "finddir")]
#[command(about = "Find directories whose path matches a target string")]
#[command(override_usage = "finddir [OPTIONS] [TARGET] [ROOT]...")]
#[command(disable_version_flag = true)]
struct Args {
    /// Target string, then the directories to search (default: .)
    /// With -a every argument is a directory to search
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Report every directory, no target needed
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Match paths starting with the target
    #[arg(short = 'p', long = "prefix")]
    prefix: bool,

    /// Match paths ending with the target
    #[arg(short = 's', long = "suffix")]
    suffix: bool,

    /// Match paths containing the target
    #[arg(short = 'c', long = "contains")]
    contains: bool,

    /// Limit depth of directories walked (0 = unlimited)
    #[arg(short = 'd', long = "depth", value_name = "N", default_value = "0")]
    depth: usize,

    /// Stop walking a directory on file system errors (e.g. permissions)
    #[arg(short = 'e', long = "stop-on-error")]
    stop_on_error: bool,

    /// List absolute paths for directories found
    #[arg(short = 'F', long = "full-path")]
    full_path: bool,

    /// Display modification time before the path
    #[arg(short = 'm', long = "mtime")]
    mtime: bool,

    /// Display version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Display license
    #[arg(short = 'l', long = "license")]
    license: bool,
}

/// Split positional arguments into the target and the roots to search.
///
/// Returns `None` when the mode needs a target and none was given.
fn split_target(mode: MatchMode, args: Vec<String>) -> Option<(String, Vec<PathBuf>)> {
    let mut args = args.into_iter();
    let target = if mode.needs_target() {
        args.next()?
    } else {
        String::new()
    };

    let mut roots: Vec<PathBuf> = args.map(PathBuf::from).collect();
    if roots.is_empty() {
        roots.push(PathBuf::from("."));
    }
    Some((target, roots))
}

fn main() {
    logging::init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help goes to stdout with status 0, everything else is a usage error
        if !e.use_stderr() {
            e.exit();
        }
        let _ = e.print();
        process::exit(1);
    });

    if args.version {
        println!("finddir {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.license {
        println!("{}", LICENSE_TEXT);
        process::exit(0);
    }

    let mode = MatchMode::resolve(args.prefix, args.suffix, args.contains, args.all);
    let (target, roots) = match split_target(mode, args.args) {
        Some(split) => split,
        None => {
            let err = Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "missing TARGET (use -a to list every directory)",
            );
            let _ = err.print();
            process::exit(1);
        }
    };

    let finder_config = FinderConfig {
        mode,
        target,
        max_depth: FinderConfig::depth_limit(args.depth),
        on_error: if args.stop_on_error {
            ErrorPolicy::Stop
        } else {
            ErrorPolicy::Skip
        },
        path_style: if args.full_path {
            PathStyle::Absolute
        } else {
            PathStyle::Relative
        },
    };
    let output_config = OutputConfig {
        show_mtime: args.mtime,
    };

    debug!(?finder_config, roots = roots.len(), "starting");

    let finder = DirFinder::new(finder_config);
    let mut formatter = LineFormatter::stdout(output_config);

    // Each root is walked on its own; a failed root does not stop the others
    let errors = finder.find_roots(&roots, &mut formatter);
    for e in &errors {
        eprintln!("finddir: {}", e);
    }
    let mut failed = !errors.is_empty();

    if let Err(e) = formatter.flush() {
        eprintln!("finddir: error writing output: {}", e);
        failed = true;
    }

    if failed {
        process::exit(1);
    }
}
