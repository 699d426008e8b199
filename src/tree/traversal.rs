//! Directory listing and prefix arithmetic used by the walker.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;

/// Continuation token appended under a last sibling.
const BLANK_INDENT: &str = "    ";
/// Continuation token appended under a non-last sibling.
const BAR_INDENT: &str = "│   ";

/// A directory entry that survived exclusion filtering.
#[derive(Debug, Clone)]
pub struct VisibleEntry {
    pub name: OsString,
    pub path: PathBuf,
    /// True for directories, including symlinks that resolve to one.
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl VisibleEntry {
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Base traversal functionality for the walker.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Get the label for the root of a walk.
    ///
    /// Falls back to the full path when there is no final component (`/`).
    pub fn get_name(&self, path: &Path) -> String {
        path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Read, filter, and sort directory entries.
    ///
    /// Any failure while listing, including a single unreadable entry,
    /// is reported against `path`.
    pub fn read_and_filter_entries(&self, path: &Path) -> Result<Vec<VisibleEntry>> {
        let read_dir = fs::read_dir(path).map_err(|e| TreeError::unreadable(path, e))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| TreeError::unreadable(path, e))?;
            let name = entry.file_name();
            if self.config.exclude.is_excluded(&name) {
                continue;
            }
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| TreeError::unreadable(&path, e))?;
            let is_symlink = file_type.is_symlink();
            // Broken or looping links are listed as plain entries
            let is_dir = if is_symlink {
                fs::metadata(&path).is_ok_and(|m| m.is_dir())
            } else {
                file_type.is_dir()
            };
            entries.push(VisibleEntry {
                name,
                path,
                is_dir,
                is_symlink,
            });
        }

        // OsString ordering is byte-wise on unix
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Resolve the real location of a directory entry whose parent resolves
    /// to `parent_real`. Only symlinks need a filesystem lookup.
    pub fn resolve_dir(&self, entry: &VisibleEntry, parent_real: &Path) -> Result<PathBuf> {
        if entry.is_symlink {
            fs::canonicalize(&entry.path).map_err(|e| TreeError::unreadable(&entry.path, e))
        } else {
            Ok(parent_real.join(&entry.name))
        }
    }

    /// Calculate the prefix for child entries
    pub fn calculate_child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", current_prefix, BLANK_INDENT)
        } else {
            format!("{}{}", current_prefix, BAR_INDENT)
        }
    }
}
