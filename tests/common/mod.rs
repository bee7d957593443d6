#![allow(dead_code)]

use paneltree::glob::PatternList;
use paneltree::settings::Icons;
use paneltree::{Mode, Node, Settings, ViewState};
use std::fs;
use tempfile::TempDir;

/// ASCII settings with no ignore rules.
pub fn ascii_settings() -> Settings {
    Settings::default()
}

/// Icon settings using the default icon tables.
pub fn icon_settings() -> Settings {
    Settings {
        use_icons: true,
        icons: Icons::default(),
        ..Settings::default()
    }
}

/// Settings with the given name and path ignore globs.
pub fn ignoring(names: &[&str], paths: &[&str]) -> Settings {
    Settings {
        name_ignore: PatternList::strict(names).unwrap(),
        path_ignore: PatternList::strict(paths).unwrap(),
        ..Settings::default()
    }
}

/// A view with only the given folders expanded.
pub fn view_with_index(open: &[&str]) -> ViewState {
    ViewState {
        index: open.iter().map(|p| p.to_string()).collect(),
        ..ViewState::default()
    }
}

/// `/project` containing `a.py` and an empty, closed folder `sub`.
pub fn small_project() -> Node {
    Node::folder("/project", "project").with_children([
        Node::file("/project/a.py", "a.py"),
        Node::folder("/project/sub", "sub").with_children(Vec::new()),
    ])
}

/// A deeper tree with mixed folders, files, dotfiles and links.
///
/// ```text
/// /repo
///   src/          (loaded)
///     lib.rs
///     main.rs
///     util/       (loaded)
///       mod.rs
///   target/       (loaded)
///     debug.log
///   docs/         (not loaded)
///   .gitignore
///   Cargo.toml
///   README.md
///   latest -> (link to folder, not loaded)
///   stale -> (broken link)
/// ```
pub fn repo_tree() -> Node {
    Node::folder("/repo", "repo").with_children([
        Node::folder("/repo/src", "src").with_children([
            Node::file("/repo/src/lib.rs", "lib.rs"),
            Node::file("/repo/src/main.rs", "main.rs"),
            Node::folder("/repo/src/util", "util")
                .with_children([Node::file("/repo/src/util/mod.rs", "mod.rs")]),
        ]),
        Node::folder("/repo/target", "target")
            .with_children([Node::file("/repo/target/debug.log", "debug.log")]),
        Node::folder("/repo/docs", "docs"),
        Node::file("/repo/.gitignore", ".gitignore"),
        Node::file("/repo/Cargo.toml", "Cargo.toml"),
        Node::file("/repo/README.md", "README.md"),
        Node::folder("/repo/latest", "latest").with_mode(Mode::LINK),
        Node::file("/repo/stale", "stale").with_mode(Mode::ORPHAN_LINK),
    ])
}

/// Names of rendered nodes in order.
pub fn names(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|n| n.name.clone()).collect()
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}
