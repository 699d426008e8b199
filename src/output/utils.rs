//! Shared utility functions for output formatting

const LAST_CONNECTOR: &str = "└── ";
const MID_CONNECTOR: &str = "├── ";

/// Connector glyph placed before an entry name.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_CONNECTOR } else { MID_CONNECTOR }
}

/// Format a complete entry line without a trailing newline.
pub fn entry_line(prefix: &str, name: &str, is_last: bool) -> String {
    format!("{}{}{}", prefix, connector(is_last), name)
}
