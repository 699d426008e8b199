//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which outputs tree content
//! directly to stdout, for use with `TreeWalker`.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{StreamingOutput, WalkSummary};

use super::config::OutputConfig;
use super::utils::connector;

/// Streaming output formatter - writes to stdout as the walk proceeds.
/// Directory names are bold blue when color is enabled.
pub struct StreamingFormatter {
    stdout: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        // Environment detection already happened when building the config
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl StreamingOutput for StreamingFormatter {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_dir_name(name)
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.write_dir_name(name)
        } else {
            writeln!(self.stdout, "{}", name)
        }
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.stdout.flush()
    }
}
