//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory depth-first and hands each visible entry to
//! a `StreamingOutput` sink, which decides how the line is written.

mod config;
mod filter;
mod traversal;
mod walker;

pub use config::WalkerConfig;
pub use filter::{DEFAULT_EXCLUDES, ExcludeSet};
pub use walker::{StreamingOutput, TreeWalker, WalkSummary};
