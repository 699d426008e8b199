//! Entry-name exclusion for tree walking

use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Names excluded when no other set is given.
pub const DEFAULT_EXCLUDES: [&str; 3] = [".git", "node_modules", "public"];

/// Immutable set of entry names that are never shown or descended into.
///
/// Matching is exact on the entry's final path component, at every level of
/// the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet(BTreeSet<String>);

impl ExcludeSet {
    /// Create an exclusion set from a list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// An exclusion set that lets every entry through.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Check if an entry name is excluded.
    ///
    /// Names that are not valid UTF-8 can never match.
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.0.contains(n))
    }

}

impl Default for ExcludeSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES)
    }
}
