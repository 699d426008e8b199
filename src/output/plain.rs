//! Uncolored output over any writer

use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::tree::{StreamingOutput, TreeWalker, WalkSummary, WalkerConfig};

use super::utils::entry_line;

/// Writes tree lines with no color codes to an arbitrary `io::Write`.
pub struct PlainWriter<W: Write> {
    out: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for PlainWriter<W> {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "{}", name)
    }

    fn output_node(
        &mut self,
        name: &str,
        _is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", entry_line(prefix, name, is_last))
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}

/// Render the tree under `root`, root label included, into a string.
pub fn render_to_string(root: &Path, config: WalkerConfig) -> Result<String> {
    let walker = TreeWalker::new(config);
    let mut writer = PlainWriter::new(Vec::new());
    walker.walk_streaming(root, &mut writer)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
