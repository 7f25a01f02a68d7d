//! CLI entry point for csvcols

use std::io;
use std::process;

use clap::{CommandFactory, Parser, error::ErrorKind};
use shelltools::csvcols::{filter_columns, parse_columns, row_fields, write_row};
use shelltools::{license::LICENSE_TEXT, logging};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "csvcols")]
#[command(about = "Write command line args as one CSV row, or filter CSV input by column number")]
#[command(after_help = "\
Examples:
  build a CSV file one row at a time:    csvcols one two three > 3col.csv
  split a pipe delimited string:         csvcols -d \"|\" \"one|two|three\"
  keep columns 0, 3 and 5 of stdin:      cat 10col.csv | csvcols -f 0 3 5")]
#[command(disable_version_flag = true)]
struct Args {
    /// Values to write as columns, or column numbers with -f (leftmost is 0)
    #[arg(value_name = "ARGS", allow_negative_numbers = true)]
    args: Vec<String>,

    /// Split a single argument on this delimiter
    #[arg(short = 'd', long = "delimiter", value_name = "DELIM")]
    delimiter: Option<String>,

    /// Filter CSV from stdin, keeping the listed column numbers
    #[arg(short = 'f', long = "filter-columns")]
    filter_columns: bool,

    /// Display version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Display license
    #[arg(short = 'l', long = "license")]
    license: bool,
}

fn usage_error(msg: &str) -> ! {
    let err = Args::command().error(ErrorKind::MissingRequiredArgument, msg);
    let _ = err.print();
    process::exit(1);
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

    if args.version {
        println!("csvcols {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.license {
        println!("{}", LICENSE_TEXT);
        process::exit(0);
    }

    if args.filter_columns {
        let columns = match parse_columns(&args.args) {
            Ok(columns) if columns.is_empty() => usage_error("missing column numbers to keep"),
            Ok(columns) => columns,
            Err(e) => {
                eprintln!("csvcols: {}", e);
                process::exit(1);
            }
        };
        debug!(?columns, "filtering stdin");

        match filter_columns(io::stdin().lock(), io::stdout().lock(), &columns) {
            Ok(rows) => debug!(rows, "filter finished"),
            Err(e) => {
                eprintln!("csvcols: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if args.args.is_empty() {
        usage_error("missing values to write as columns");
    }

    let fields = row_fields(&args.args, args.delimiter.as_deref());
    if let Err(e) = write_row(io::stdout().lock(), &fields) {
        eprintln!("csvcols: {}", e);
        process::exit(1);
    }
}
