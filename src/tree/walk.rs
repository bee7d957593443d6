use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::node::{Mode, Node};
use crate::state::Index;

/// How much of the filesystem [`load_tree`] reads.
#[derive(Debug, Clone, Default)]
pub struct LoadConfig {
    /// Folders shallower than this are expanded and added to the index.
    pub expand_depth: Option<usize>,
    /// Whether symlinked folders may be expanded.
    pub follow_symlinks: bool,
}

/// Load `root` and every expanded folder below it.
///
/// Folder contents are read for the root, for folders already in `index`,
/// and for folders within `config.expand_depth`. Everything else is left
/// with unset children.
pub fn load_tree(root: &Path, index: &mut Index, config: &LoadConfig) -> Result<Node> {
    let meta = fs::metadata(root).map_err(|source| Error::Io {
        path: root.to_path_buf(),
        source,
    })?;
    let path = root.to_string_lossy().into_owned();
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());

    if !meta.is_dir() {
        return Ok(Node::file(path, name));
    }
    index.insert(path.clone());
    let children = read_children(root, 0, index, config);
    Ok(Node::folder(path, name).with_children(children))
}

/// Load the entries of `dir`, which sits at `depth` below the root.
fn read_children(dir: &Path, depth: usize, index: &mut Index, config: &LoadConfig) -> Vec<Node> {
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false);
    let mut children = Vec::new();

    for entry_result in walker {
        match entry_result {
            Ok(entry) => children.push(load_entry(&entry, depth + 1, index, config)),
            Err(e) => {
                let at = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| dir.display().to_string());
                tracing::warn!(path = %at, "skipping unreadable entry: {}", e);
            }
        }
    }

    children
}

fn load_entry(entry: &DirEntry, depth: usize, index: &mut Index, config: &LoadConfig) -> Node {
    let path = entry.path();
    let path_str = path.to_string_lossy().into_owned();
    let name = entry.file_name().to_string_lossy().into_owned();
    let is_symlink = entry.path_is_symlink();

    // Follows the link, so a dangling link has no target metadata.
    let target = fs::metadata(path).ok();
    let mut mode = Mode::empty();
    if is_symlink {
        mode |= if target.is_some() {
            Mode::LINK
        } else {
            Mode::ORPHAN_LINK
        };
    }
    let is_dir = target.as_ref().is_some_and(|m| m.is_dir());

    if !is_dir {
        return Node::file(path_str, name).with_mode(mode);
    }

    let within_depth = config.expand_depth.is_some_and(|max| depth < max);
    let expandable = !is_symlink || config.follow_symlinks;
    let node = Node::folder(path_str, name).with_mode(mode);
    if !(expandable && (within_depth || index.contains(&node.path))) {
        return node;
    }
    if within_depth {
        index.insert(node.path.clone());
    }
    let children = read_children(path, depth, index, config);
    node.with_children(children)
}
