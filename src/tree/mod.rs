//! Flattening the tree into index-aligned panel rows.

mod filter;
mod sort;
pub(crate) mod walk;

use std::collections::HashMap;

use crate::node::Node;
use crate::render::{Painter, Render};
use crate::settings::Settings;
use crate::state::ViewState;

pub use filter::{Filter, Search};
pub use sort::{compare, CaseFoldCollator, Collator, OrdinalCollator, UnicodeCollator};
pub use walk::{load_tree, LoadConfig};

/// Output of a render pass: `renders[i]` describes `nodes[i]`.
#[derive(Debug, Clone)]
pub struct Rendered<'a> {
    pub nodes: Vec<&'a Node>,
    pub renders: Vec<Render>,
    rows: HashMap<&'a str, usize>,
}

impl<'a> Rendered<'a> {
    fn from_pairs(pairs: Vec<(&'a Node, Render)>) -> Self {
        let (nodes, renders): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        debug_assert_eq!(nodes.len(), renders.len());
        let rows = nodes
            .iter()
            .enumerate()
            .map(|(row, node)| (node.path.as_str(), row))
            .collect();
        Self {
            nodes,
            renders,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node shown on `row`, if any. Row 0 is the root and is returned too.
    pub fn node_at(&self, row: usize) -> Option<&'a Node> {
        self.nodes.get(row).copied()
    }

    /// Row on which `path` is shown, if visible.
    pub fn row_of(&self, path: &str) -> Option<usize> {
        self.rows.get(path).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a Node, &Render)> + '_ {
        self.nodes.iter().copied().zip(self.renders.iter())
    }
}

/// Per-pass context shared by every visited node.
struct Pass<'a> {
    filter: Filter<'a>,
    search: Search<'a>,
    painter: Painter<'a>,
    collator: &'a dyn Collator,
    root: &'a str,
}

impl<'a> Pass<'a> {
    /// Pre-order walk. A node is emitted when it is the root, when the search
    /// clears it or an ancestor, or when a descendant was emitted.
    fn visit<'t>(
        &self,
        node: &'t Node,
        depth: usize,
        cleared: bool,
        out: &mut Vec<(&'t Node, Render)>,
    ) {
        let clear = cleared || self.search.clears(node);
        let render = self.painter.paint(node, depth);

        let mut children: Vec<&Node> = node
            .children()
            .filter(|child| !self.filter.should_drop(child))
            .collect();
        sort::sort_siblings(self.collator, &mut children);

        let slot = out.len();
        out.push((node, render));
        for child in children {
            self.visit(child, depth + 1, clear, out);
        }
        let has_children = out.len() > slot + 1;
        if !(clear || has_children || node.path == self.root) {
            out.truncate(slot);
        }
    }
}

/// Render the visible part of `root`, ordering siblings by Unicode collation.
pub fn render_tree<'a>(root: &'a Node, settings: &Settings, view: &ViewState) -> Rendered<'a> {
    render_tree_with(root, settings, view, &UnicodeCollator::new())
}

/// Render the visible part of `root`, ordering siblings with `collator`.
pub fn render_tree_with<'a>(
    root: &'a Node,
    settings: &Settings,
    view: &ViewState,
    collator: &dyn Collator,
) -> Rendered<'a> {
    let _span = tracing::trace_span!("render_tree", root = %root.path).entered();
    let pass = Pass {
        filter: Filter::new(settings, &view.vc, view.show_hidden),
        search: Search::new(&view.filter),
        painter: Painter::new(settings, view),
        collator,
        root: &root.path,
    };

    let mut out = Vec::new();
    pass.visit(root, 0, false, &mut out);
    tracing::debug!(
        rows = out.len(),
        strategy = ?pass.painter.strategy(),
        "rendered tree"
    );
    Rendered::from_pairs(out)
}
