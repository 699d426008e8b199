//! TreeWalker - streams a pre-order listing of a directory tree

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::traversal::BaseTraversal;

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    /// Emit the label line for the root of the walk.
    fn output_root(&mut self, name: &str) -> std::io::Result<()>;

    /// Emit one entry line. `prefix` is the accumulated indentation for the
    /// entry's depth; the connector is chosen from `is_last`.
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> std::io::Result<()>;

    fn finish(&mut self, summary: &WalkSummary) -> std::io::Result<()>;
}

/// Counts of entries emitted by one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

impl WalkSummary {
    fn absorb(&mut self, other: WalkSummary) {
        self.directories += other.directories;
        self.files += other.files;
    }
}

/// Depth-first tree walker that writes each visible entry as it is found.
/// Uses O(depth) memory beyond the listing of the directory being visited.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Print the root label followed by the full tree below `root`.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let meta = fs::metadata(root).map_err(|e| TreeError::unreadable(root, e))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let traversal = BaseTraversal::new(&self.config);
        output.output_root(&traversal.get_name(root))?;

        let summary = self.render(root, "", output)?;
        output.finish(&summary)?;

        debug!(
            root = %root.display(),
            directories = summary.directories,
            files = summary.files,
            "walk complete"
        );
        Ok(summary)
    }

    /// Emit the entries below `root`, each line starting with `prefix`.
    ///
    /// Directories are emitted before their children. Symlinks to
    /// directories are followed unless the target is already on the current
    /// descent path. The first error aborts the walk; lines already emitted
    /// stay emitted.
    pub fn render<O: StreamingOutput>(
        &self,
        root: &Path,
        prefix: &str,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let real_root = fs::canonicalize(root).map_err(|e| TreeError::unreadable(root, e))?;
        let mut ancestors = vec![real_root];
        self.render_dir(root, prefix, &mut ancestors, output)
    }

    /// `ancestors` holds the resolved paths from the walk root down to
    /// `path`, with `path` itself last.
    fn render_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        ancestors: &mut Vec<PathBuf>,
        output: &mut O,
    ) -> Result<WalkSummary> {
        let traversal = BaseTraversal::new(&self.config);
        let entries = traversal.read_and_filter_entries(path)?;
        debug!(path = %path.display(), entries = entries.len(), "listed directory");

        let mut summary = WalkSummary::default();
        let count = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == count - 1;
            output.output_node(&entry.display_name(), entry.is_dir, is_last, prefix)?;

            if !entry.is_dir {
                summary.files += 1;
                continue;
            }
            summary.directories += 1;

            let parent_real = ancestors.last().cloned().unwrap_or_default();
            let real = traversal.resolve_dir(entry, &parent_real)?;
            if ancestors.contains(&real) {
                debug!(
                    path = %entry.path.display(),
                    target = %real.display(),
                    "not following cyclic link"
                );
                continue;
            }

            let child_prefix = traversal.calculate_child_prefix(prefix, is_last);
            ancestors.push(real);
            let child = self.render_dir(&entry.path, &child_prefix, ancestors, output);
            ancestors.pop();
            summary.absorb(child?);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDir;

    /// Records calls instead of formatting them.
    #[derive(Default)]
    struct Recorder {
        root: Option<String>,
        nodes: Vec<(String, bool, bool, String)>,
        finished: Option<WalkSummary>,
    }

    impl StreamingOutput for Recorder {
        fn output_root(&mut self, name: &str) -> std::io::Result<()> {
            self.root = Some(name.to_string());
            Ok(())
        }

        fn output_node(
            &mut self,
            name: &str,
            is_dir: bool,
            is_last: bool,
            prefix: &str,
        ) -> std::io::Result<()> {
            self.nodes
                .push((name.to_string(), is_dir, is_last, prefix.to_string()));
            Ok(())
        }

        fn finish(&mut self, summary: &WalkSummary) -> std::io::Result<()> {
            self.finished = Some(*summary);
            Ok(())
        }
    }

    #[test]
    fn test_preorder_with_prefixes() {
        let dir = TestDir::new();
        dir.add_file("a_file.txt", "");
        dir.add_file("b_dir/inner.txt", "");
        dir.add_file("b_dir/sub/deep.txt", "");
        dir.add_dir("node_modules/pkg");

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        let summary = walker.walk_streaming(dir.path(), &mut rec).unwrap();

        let got: Vec<_> = rec
            .nodes
            .iter()
            .map(|(n, d, l, p)| (n.as_str(), *d, *l, p.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("a_file.txt", false, false, ""),
                ("b_dir", true, true, ""),
                ("inner.txt", false, false, "    "),
                ("sub", true, true, "    "),
                ("deep.txt", false, true, "        "),
            ]
        );
        assert_eq!(
            summary,
            WalkSummary {
                directories: 2,
                files: 3
            }
        );
        assert_eq!(rec.finished, Some(summary));
        assert_eq!(rec.root, dir.path().file_name().map(|n| n.to_string_lossy().into_owned()));
    }

    #[test]
    fn test_render_uses_given_prefix() {
        let dir = TestDir::new();
        dir.add_file("x", "");

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        walker.render(dir.path(), "│   ", &mut rec).unwrap();

        assert_eq!(rec.nodes.len(), 1);
        assert_eq!(rec.nodes[0].3, "│   ");
        assert!(rec.root.is_none(), "render alone does not emit a root label");
    }

    #[test]
    fn test_only_excluded_entries() {
        let dir = TestDir::new();
        dir.add_dir(".git/objects");

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        let summary = walker.walk_streaming(dir.path(), &mut rec).unwrap();

        assert!(rec.nodes.is_empty());
        assert_eq!(summary, WalkSummary::default());
    }

    #[test]
    fn test_root_is_file() {
        let dir = TestDir::new();
        let file = dir.add_file("plain.txt", "");

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        let err = walker.walk_streaming(&file, &mut rec).unwrap_err();

        assert!(matches!(err, TreeError::NotADirectory(_)));
        assert!(rec.root.is_none());
    }

    #[test]
    fn test_missing_root() {
        let dir = TestDir::new();
        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        let err = walker
            .walk_streaming(&dir.path().join("nope"), &mut rec)
            .unwrap_err();

        assert!(matches!(err, TreeError::UnreadableDir { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_dir_followed() {
        let dir = TestDir::new();
        dir.add_file("real/file.txt", "");
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        let summary = walker.walk_streaming(dir.path(), &mut rec).unwrap();

        let names: Vec<_> = rec.nodes.iter().map(|n| n.0.as_str()).collect();
        assert_eq!(names, vec!["link", "file.txt", "real", "file.txt"]);
        assert!(rec.nodes[0].1, "link to a directory is reported as a directory");
        assert_eq!(rec.nodes[1].3, "│   ");
        assert_eq!(
            summary,
            WalkSummary {
                directories: 2,
                files: 2
            }
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_mutual_links_terminate() {
        use std::os::unix::fs::symlink;

        let dir = TestDir::new();
        let a = dir.add_dir("a");
        let b = dir.add_dir("b");
        symlink(&b, a.join("to_b")).unwrap();
        symlink(&a, b.join("to_a")).unwrap();

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut rec = Recorder::default();
        walker.walk_streaming(dir.path(), &mut rec).unwrap();

        let got: Vec<_> = rec
            .nodes
            .iter()
            .map(|(n, _, _, p)| format!("{}{}", p, n))
            .collect();
        // a/to_b/to_a points back at a, which is already being walked
        assert_eq!(
            got,
            vec![
                "a",
                "│   to_b",
                "│       to_a",
                "b",
                "    to_a",
                "        to_b",
            ]
        );
    }

    /// Deletes a directory as soon as its own line has been emitted, so the
    /// following descent finds it gone.
    struct VanishingSink {
        root: PathBuf,
        victim: &'static str,
        names: Vec<String>,
    }

    impl StreamingOutput for VanishingSink {
        fn output_root(&mut self, _name: &str) -> std::io::Result<()> {
            Ok(())
        }

        fn output_node(
            &mut self,
            name: &str,
            _is_dir: bool,
            _is_last: bool,
            _prefix: &str,
        ) -> std::io::Result<()> {
            self.names.push(name.to_string());
            if name == self.victim {
                fs::remove_dir_all(self.root.join(name))?;
            }
            Ok(())
        }

        fn finish(&mut self, _summary: &WalkSummary) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_vanished_subdirectory_stops_walk() {
        let dir = TestDir::new();
        dir.add_file("a.txt", "");
        dir.add_file("b_dir/inner.txt", "");
        dir.add_file("c.txt", "");

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut sink = VanishingSink {
            root: dir.path().to_path_buf(),
            victim: "b_dir",
            names: Vec::new(),
        };
        let err = walker.render(dir.path(), "", &mut sink).unwrap_err();

        match err {
            TreeError::UnreadableDir { path, .. } => assert_eq!(path, dir.path().join("b_dir")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(sink.names, vec!["a.txt", "b_dir"]);
    }
}
