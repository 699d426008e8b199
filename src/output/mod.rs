//! Output formatting for directory trees
//!
//! - `StreamingFormatter`: writes to stdout, optionally colored
//! - `PlainWriter`: writes uncolored lines to any `io::Write`

mod config;
mod plain;
mod streaming;
pub mod utils;

pub use config::OutputConfig;
pub use plain::{PlainWriter, render_to_string};
pub use streaming::StreamingFormatter;
