//! Line-oriented match formatter
//!
//! `LineFormatter` writes one match per line as it arrives from
//! `DirFinder`, so output appears incrementally during long walks.

use std::io::{self, Write};

use crate::finder::{FoundDir, MatchOutput};

use super::config::OutputConfig;
use super::utils::format_mtime;

/// Plain-text formatter: `[MTIME ]PATH`, newline-terminated.
pub struct LineFormatter<W: Write> {
    config: OutputConfig,
    writer: W,
}

impl LineFormatter<io::StdoutLock<'static>> {
    /// Formatter writing to a locked stdout.
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(config, io::stdout().lock())
    }
}

impl<W: Write> LineFormatter<W> {
    pub fn new(config: OutputConfig, writer: W) -> Self {
        Self { config, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> MatchOutput for LineFormatter<W> {
    fn output_match(&mut self, found: &FoundDir<'_>) -> io::Result<()> {
        if self.config.show_mtime {
            write!(self.writer, "{} ", format_mtime(found.modified))?;
        }
        writeln!(self.writer, "{}", found.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::SystemTime;

    fn render(config: OutputConfig, found: &[FoundDir<'_>]) -> String {
        let mut formatter = LineFormatter::new(config, Vec::new());
        for f in found {
            formatter.output_match(f).unwrap();
        }
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_one_path_per_line() {
        let out = render(
            OutputConfig::default(),
            &[
                FoundDir {
                    path: Path::new("."),
                    modified: None,
                },
                FoundDir {
                    path: Path::new("b/c"),
                    modified: None,
                },
            ],
        );
        assert_eq!(out, ".\nb/c\n");
    }

    #[test]
    fn test_mtime_prefix() {
        let now = SystemTime::now();
        let out = render(
            OutputConfig { show_mtime: true },
            &[FoundDir {
                path: Path::new("a"),
                modified: Some(now),
            }],
        );
        let expected = format!("{} a\n", format_mtime(Some(now)));
        assert_eq!(out, expected);
    }
}
