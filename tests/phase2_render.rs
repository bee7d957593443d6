mod common;

use common::{ascii_settings, icon_settings, repo_tree, view_with_index};
use paneltree::render::{line_to_plain_text, row_line, Painter, Strategy};
use paneltree::settings::{GlobIcon, IconConfig, Icons};
use paneltree::tree::render_tree;
use paneltree::{Mode, Node, Settings, ViewState};
use std::path::MAIN_SEPARATOR as SEP;

fn paint(settings: &Settings, view: &ViewState, node: &Node, depth: usize) -> String {
    Painter::new(settings, view).paint(node, depth).line
}

/// Character at `col`, counting chars rather than bytes.
fn column(line: &str, col: usize) -> char {
    line.chars().nth(col).unwrap()
}

// --- ASCII strategy ---

#[test]
fn test_ascii_folder_open_and_closed() {
    let settings = ascii_settings();
    let view = view_with_index(&["/repo/src"]);
    let src = Node::folder("/repo/src", "src");
    let docs = Node::folder("/repo/docs", "docs");
    assert_eq!(paint(&settings, &view, &src, 1), format!("    - src{SEP}"));
    assert_eq!(paint(&settings, &view, &docs, 1), format!("    + docs{SEP}"));
}

#[test]
fn test_ascii_links() {
    let settings = ascii_settings();
    let view = ViewState::default();
    let file = Node::file("/repo/l", "l").with_mode(Mode::LINK);
    let folder = Node::folder("/repo/latest", "latest").with_mode(Mode::LINK);
    let broken = Node::file("/repo/stale", "stale").with_mode(Mode::ORPHAN_LINK);
    assert_eq!(paint(&settings, &view, &file, 1), "      l ->");
    assert_eq!(
        paint(&settings, &view, &folder, 1),
        format!("      + latest{SEP} ->")
    );
    assert_eq!(paint(&settings, &view, &broken, 1), "      stale ->");
}

#[test]
fn test_ascii_markers() {
    let settings = ascii_settings();
    let mut view = ViewState::default();
    view.current = Some("/repo/a".to_string());
    view.selection.insert("/repo/a".to_string());
    view.selection.insert("/repo/b".to_string());

    assert_eq!(paint(&settings, &view, &Node::file("/repo/a", "a"), 1), " *> a");
    assert_eq!(paint(&settings, &view, &Node::file("/repo/b", "b"), 1), " *  b");
    assert_eq!(paint(&settings, &view, &Node::file("/repo/c", "c"), 1), "    c");
}

#[test]
fn test_cursor_only_on_current_row() {
    let root = repo_tree();
    let mut view = ViewState::default();
    view.current = Some("/repo/src/lib.rs".to_string());
    let rendered = render_tree(&root, &ascii_settings(), &view);

    for (row, render) in rendered.renders.iter().enumerate() {
        let depth = row_depth(&rendered.nodes[row].path);
        let col = (depth * 2).saturating_sub(1) + 1;
        let expected = if rendered.nodes[row].path == "/repo/src/lib.rs" {
            '>'
        } else {
            ' '
        };
        assert_eq!(column(&render.line, col), expected, "row {row}: {:?}", render.line);
    }
}

#[test]
fn test_selection_only_on_selected_rows() {
    let root = repo_tree();
    let mut view = ViewState::default();
    view.selection.insert("/repo/Cargo.toml".to_string());
    let rendered = render_tree(&root, &icon_settings(), &view);

    for (node, render) in rendered.iter() {
        let depth = row_depth(&node.path);
        let col = (depth * 2).saturating_sub(1);
        let selected = node.path == "/repo/Cargo.toml";
        assert_eq!(column(&render.line, col) == '\u{2738}', selected, "{:?}", render.line);
    }
}

fn row_depth(path: &str) -> usize {
    path.matches('/').count() - 1
}

#[test]
fn test_name_line_breaks_are_escaped() {
    let settings = ascii_settings();
    let view = ViewState::default();
    let node = Node::file("/repo/bad\nname", "bad\nname");
    let line = paint(&settings, &view, &node, 1);
    assert_eq!(line, "    bad\\nname");
    assert!(!line.contains('\n'));
}

#[test]
fn test_badges() {
    let settings = ascii_settings();
    let mut view = ViewState::default();
    view.qf.locations.insert("/repo/a".to_string(), 4);
    view.vc.status.insert("/repo/a".to_string(), "M".to_string());
    view.vc.status.insert("/repo/b".to_string(), "??".to_string());
    let painter = Painter::new(&settings, &view);

    assert_eq!(painter.paint(&Node::file("/repo/a", "a"), 1).badge, "(4) [M]");
    assert_eq!(painter.paint(&Node::file("/repo/b", "b"), 1).badge, " [??]");
}

// --- Icon strategy ---

fn test_icons() -> Settings {
    let config = IconConfig {
        folder_open: "O".to_string(),
        folder_closed: "C".to_string(),
        link: "L".to_string(),
        link_broken: "X".to_string(),
        filetype: [("rs".to_string(), "R".to_string())].into_iter().collect(),
        filename_exact: Default::default(),
        filename_glob: vec![
            GlobIcon {
                pattern: ".git*".to_string(),
                icon: "G".to_string(),
            },
            GlobIcon {
                pattern: ".*".to_string(),
                icon: "D".to_string(),
            },
        ],
    };
    Settings {
        use_icons: true,
        icons: Icons::lenient(config),
        ..Settings::default()
    }
}

#[test]
fn test_strategy_follows_settings() {
    let view = ViewState::default();
    assert_eq!(Painter::new(&ascii_settings(), &view).strategy(), Strategy::Ascii);
    assert_eq!(Painter::new(&icon_settings(), &view).strategy(), Strategy::Icons);
}

#[test]
fn test_icon_folders() {
    let settings = test_icons();
    let view = view_with_index(&["/repo/src"]);
    assert_eq!(paint(&settings, &view, &Node::folder("/repo/src", "src"), 1), "    O src");
    assert_eq!(paint(&settings, &view, &Node::folder("/repo/docs", "docs"), 1), "    C docs");
}

#[test]
fn test_icon_file_lookup() {
    let settings = test_icons();
    let view = ViewState::default();
    assert_eq!(paint(&settings, &view, &Node::file("/r/lib.rs", "lib.rs"), 1), "    R lib.rs");
    // first glob in order wins
    assert_eq!(
        paint(&settings, &view, &Node::file("/r/.gitignore", ".gitignore"), 1),
        "    G .gitignore"
    );
    assert_eq!(paint(&settings, &view, &Node::file("/r/.env", ".env"), 1), "    D .env");
    // no icon: two blank columns keep names aligned
    assert_eq!(paint(&settings, &view, &Node::file("/r/notes", "notes"), 1), "      notes");
}

#[test]
fn test_icon_links() {
    let settings = test_icons();
    let view = ViewState::default();
    let link = Node::file("/r/lib.rs", "lib.rs").with_mode(Mode::LINK);
    let folder = Node::folder("/r/latest", "latest").with_mode(Mode::LINK);
    let broken = Node::file("/r/stale", "stale").with_mode(Mode::ORPHAN_LINK);
    assert_eq!(paint(&settings, &view, &link, 1), "    R lib.rs L");
    assert_eq!(paint(&settings, &view, &folder, 1), "    C latest L");
    assert_eq!(paint(&settings, &view, &broken, 1), "      stale X");
}

#[test]
fn test_icon_markers() {
    let settings = test_icons();
    let mut view = ViewState::default();
    view.current = Some("/r/a.rs".to_string());
    view.selection.insert("/r/a.rs".to_string());
    assert_eq!(
        paint(&settings, &view, &Node::file("/r/a.rs", "a.rs"), 0),
        "\u{2738}\u{25b6} R a.rs"
    );
}

#[test]
fn test_strategies_never_mix() {
    let root = repo_tree();
    let view = view_with_index(&["/repo"]);
    let rendered = render_tree(&root, &test_icons(), &view);
    assert!(rendered.renders.iter().all(|r| !r.line.ends_with(SEP)));
    assert_eq!(rendered.renders[0].line, "   O repo");
}

// --- Row composition ---

#[test]
fn test_rows_right_align_badges() {
    let root = repo_tree();
    let mut view = ViewState::default();
    view.qf.locations.insert("/repo/README.md".to_string(), 1);
    let rendered = render_tree(&root, &ascii_settings(), &view);
    let row = rendered.row_of("/repo/README.md").unwrap();
    let text = line_to_plain_text(&row_line(&rendered.renders[row], 30));
    assert!(text.starts_with("    README.md"));
    assert!(text.ends_with("(1)"));
    assert_eq!(text.chars().count(), 30);
}
