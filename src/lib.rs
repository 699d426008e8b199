//! dirtree - print a directory tree, skipping .git, node_modules and public

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, PlainWriter, StreamingFormatter, render_to_string};
pub use tree::{
    DEFAULT_EXCLUDES, ExcludeSet, StreamingOutput, TreeWalker, WalkSummary, WalkerConfig,
};
