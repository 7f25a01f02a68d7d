//! DirFinder - depth-first walk that streams matching directories

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use super::config::{ErrorPolicy, FinderConfig, PathStyle};
use super::utils::{
    absolute_display, child_path, clean_root, lexical_clean, relative_display, walk_depth,
};

/// A directory that matched, as handed to the output sink.
#[derive(Debug, Clone, Copy)]
pub struct FoundDir<'a> {
    /// Relative or absolute path, depending on `PathStyle`
    pub path: &'a Path,
    pub modified: Option<SystemTime>,
}

/// Callback for streaming output - receives each match as it is found.
pub trait MatchOutput {
    fn output_match(&mut self, found: &FoundDir<'_>) -> io::Result<()>;
}

/// Collect reported paths in memory.
impl MatchOutput for Vec<PathBuf> {
    fn output_match(&mut self, found: &FoundDir<'_>) -> io::Result<()> {
        self.push(found.path.to_path_buf());
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FindError {
    #[error("can't read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't resolve absolute path of {}: {source}", path.display())]
    Absolute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Per-root walk state.
struct RootWalk {
    absolute_root: Option<PathBuf>,
    matches: usize,
}

impl RootWalk {
    fn display_path(&self, rel: &Path) -> PathBuf {
        match &self.absolute_root {
            Some(abs) => absolute_display(abs, rel),
            None => relative_display(rel),
        }
    }
}

/// Directory finder. Walks one root at a time, depth-first and pre-order,
/// reporting directories whose walk path satisfies the configured match mode.
pub struct DirFinder {
    config: FinderConfig,
}

impl DirFinder {
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Walk `root` and stream matches to `output`. Returns the number of matches.
    ///
    /// Under `ErrorPolicy::Skip` unreadable entries are passed over and this
    /// only fails if the output sink does. Under `ErrorPolicy::Stop` the first
    /// file-system error ends the walk and is returned.
    pub fn find<O: MatchOutput>(&self, root: &Path, output: &mut O) -> Result<usize, FindError> {
        let walk_root = clean_root(root);
        let absolute_root = match self.config.path_style {
            PathStyle::Relative => None,
            PathStyle::Absolute => {
                let absolute = std::path::absolute(&walk_root).map_err(|source| {
                    FindError::Absolute {
                        path: walk_root.clone(),
                        source,
                    }
                })?;
                Some(lexical_clean(&absolute))
            }
        };

        debug!(root = %walk_root.display(), mode = ?self.config.mode, "walking");

        // The root is resolved through symlinks; entries below it are not
        let metadata = match fs::metadata(&walk_root) {
            Ok(m) => m,
            Err(e) => {
                self.recover(&walk_root, e)?;
                return Ok(0);
            }
        };
        if !metadata.is_dir() {
            debug!(root = %walk_root.display(), "root is not a directory");
            return Ok(0);
        }

        let mut walk = RootWalk {
            absolute_root,
            matches: 0,
        };
        self.visit_dir(&mut walk, &walk_root, Path::new(""), &metadata, output)?;

        debug!(root = %walk_root.display(), matches = walk.matches, "walk finished");
        Ok(walk.matches)
    }

    /// Walk each root in turn and return the errors of the roots that failed.
    ///
    /// A failed root does not stop the next one. Output errors end the run,
    /// since every later root would hit them too.
    pub fn find_roots<O: MatchOutput>(&self, roots: &[PathBuf], output: &mut O) -> Vec<FindError> {
        let mut errors = Vec::new();
        for root in roots {
            match self.find(root, output) {
                Ok(count) => debug!(root = %root.display(), count, "root done"),
                Err(e @ FindError::Output(_)) => {
                    errors.push(e);
                    break;
                }
                Err(e) => errors.push(e),
            }
        }
        errors
    }

    fn visit_dir<O: MatchOutput>(
        &self,
        walk: &mut RootWalk,
        path: &Path,
        rel: &Path,
        metadata: &Metadata,
        output: &mut O,
    ) -> Result<(), FindError> {
        // Past the limit: neither reported nor descended
        if self.config.exceeds_depth(walk_depth(path)) {
            return Ok(());
        }

        if self.config.is_match(&path.to_string_lossy()) {
            let shown = walk.display_path(rel);
            output.output_match(&FoundDir {
                path: &shown,
                modified: metadata.modified().ok(),
            })?;
            walk.matches += 1;
        }

        let read_dir = match fs::read_dir(path) {
            Ok(r) => r,
            Err(e) => return self.recover(path, e),
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) => self.recover(path, e)?,
            }
        }
        entries.sort_by_key(|a| a.file_name());

        for entry in entries {
            let name = entry.file_name();
            let child = child_path(path, &name);

            // DirEntry::metadata does not traverse symlinks
            let child_meta = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    self.recover(&child, e)?;
                    continue;
                }
            };
            if !child_meta.is_dir() {
                continue;
            }

            let child_rel = rel.join(&name);
            self.visit_dir(walk, &child, &child_rel, &child_meta, output)?;
        }

        Ok(())
    }

    /// Apply the error policy to a file-system error.
    fn recover(&self, path: &Path, source: io::Error) -> Result<(), FindError> {
        match self.config.on_error {
            ErrorPolicy::Skip => {
                debug!(path = %path.display(), error = %source, "skipping unreadable entry");
                Ok(())
            }
            ErrorPolicy::Stop => Err(FindError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
