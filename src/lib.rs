#![forbid(unsafe_code)]
//! Paneltree — renders a lazily expanded directory tree into the rows of a
//! text-based file explorer panel.

pub mod cli;
pub mod error;
pub mod glob;
pub mod node;
pub mod render;
pub mod settings;
pub mod state;
pub mod tree;

pub use error::{Error, Result};
pub use node::{Mode, Node};
pub use render::{Painter, Render, Strategy};
pub use settings::{Settings, SettingsFile};
pub use state::{FilterPattern, Index, QuickFix, Selection, VcStatus, ViewState};
pub use tree::{render_tree, render_tree_with, Rendered};
