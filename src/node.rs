//! Filesystem entries as seen by the explorer panel.

use bitflags::bitflags;
use std::collections::BTreeMap;

bitflags! {
    /// Independent flags describing a node. A folder may also be a link.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mode: u8 {
        const FOLDER = 1 << 0;
        const LINK = 1 << 1;
        /// A symlink whose target does not exist.
        const ORPHAN_LINK = 1 << 2;
    }
}

/// One entry of the externally owned directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique absolute identifier.
    pub path: String,
    /// Display name (last path segment).
    pub name: String,
    /// File extension without the dot. Only set for files.
    pub ext: Option<String>,
    pub mode: Mode,
    /// `Some` (possibly empty) for expanded folders, `None` for files and
    /// folders whose contents were never loaded.
    pub children: Option<BTreeMap<String, Node>>,
}

impl Node {
    /// A file node. The extension is derived from the name.
    pub fn file(path: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let ext = extension_of(&name);
        Self {
            path: path.into(),
            name,
            ext,
            mode: Mode::empty(),
            children: None,
        }
    }

    /// A folder node with no loaded children.
    pub fn folder(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            ext: None,
            mode: Mode::FOLDER,
            children: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode |= mode;
        self
    }

    /// Attach children, marking the folder as loaded.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        let map = self.children.get_or_insert_with(BTreeMap::new);
        for child in children {
            map.insert(child.name.clone(), child);
        }
        self
    }

    pub fn is_folder(&self) -> bool {
        self.mode.contains(Mode::FOLDER)
    }

    pub fn is_link(&self) -> bool {
        self.mode.intersects(Mode::LINK | Mode::ORPHAN_LINK)
    }

    /// Loaded children in map order; empty when unset.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().flat_map(|map| map.values())
    }
}

/// Extension of a file name, ignoring leading dots (`.bashrc` has none).
pub fn extension_of(name: &str) -> Option<String> {
    let trimmed = name.trim_start_matches('.');
    match trimmed.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_string()),
        _ => None,
    }
}
