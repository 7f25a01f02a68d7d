//! CLI entry point for urlparse

use std::process;

use clap::{CommandFactory, Parser, error::ErrorKind};
use shelltools::logging;
use shelltools::urlparse::{UrlField, render};
use tracing::debug;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "urlparse")]
#[command(about = "Display the parts of a URL as delimited fields on one line")]
#[command(after_help = "\
With no field options the protocol, host and path are shown.

Examples:
  http<TAB>example.com<TAB>/my/page.html:  urlparse http://example.com/my/page.html
  page.html:                               urlparse --base http://example.com/my/page.html
  .html:                                   urlparse -e http://example.com/my/page.html")]
#[command(version)]
struct Args {
    /// The URL to parse
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Output delimiter between fields
    #[arg(short = 'D', long = "delimiter", value_name = "DELIM", default_value = "\t")]
    delimiter: String,

    /// Display the protocol of the URL
    #[arg(short = 'P', long = "protocol")]
    protocol: bool,

    /// Display the hostname (and port if specified)
    #[arg(short = 'H', long = "host")]
    host: bool,

    /// Display the path after the hostname
    #[arg(short = 'p', long = "path")]
    path: bool,

    /// Display all but the last element of the path
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// Display the base filename at the end of the path
    #[arg(short = 'b', long = "base")]
    base: bool,

    /// Display the filename extension (e.g. .html)
    #[arg(short = 'e', long = "extension")]
    extension: bool,
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

    let raw = match args.url {
        Some(u) if !u.is_empty() => u,
        _ => {
            let err = Args::command().error(
                ErrorKind::MissingRequiredArgument,
                "missing URL to parse",
            );
            let _ = err.print();
            process::exit(1);
        }
    };

    let url = match Url::parse(&raw) {
        Ok(u) => u,
        Err(e) => {
            eprintln!("urlparse: can't parse {:?}: {}", raw, e);
            process::exit(1);
        }
    };

    let fields = UrlField::selected(
        args.protocol,
        args.host,
        args.path,
        args.base,
        args.directory,
        args.extension,
    );
    debug!(?fields, %url, "parsed");

    println!("{}", render(&url, &fields, &args.delimiter));
}
