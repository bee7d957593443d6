//! UI state snapshots consumed by a render pass.

use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Paths of folders currently expanded in the panel.
pub type Index = HashSet<String>;

/// Paths currently selected in the panel.
pub type Selection = HashSet<String>;

/// Diagnostic or match counts per path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickFix {
    pub locations: HashMap<String, usize>,
}

impl QuickFix {
    /// Count quickfix entries per file and per ancestor folder.
    ///
    /// Relative names are joined onto `cwd`; absolute names are kept as is.
    pub fn from_files<I, S>(cwd: &Path, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locations: HashMap<String, usize> = HashMap::new();
        for file in files {
            let full = cwd.join(file.as_ref());
            for path in full.ancestors() {
                if path.as_os_str().is_empty() {
                    continue;
                }
                *locations
                    .entry(path.to_string_lossy().into_owned())
                    .or_default() += 1;
            }
        }
        Self { locations }
    }

    /// Number of locations recorded for `path`, zero when absent.
    pub fn count(&self, path: &str) -> usize {
        self.locations.get(path).copied().unwrap_or(0)
    }
}

/// Version-control information for the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VcStatus {
    /// Paths excluded from the traversal.
    pub ignored: HashSet<String>,
    /// Short status codes (`M`, `A`, `??`, ...) shown as a badge.
    pub status: HashMap<String, String>,
}

/// Interactive search narrowing the visible rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPattern {
    /// Glob matched against bare names.
    pub pattern: String,
    /// Explicit paths to keep when `pattern` is empty.
    pub search_set: HashSet<String>,
}

impl FilterPattern {
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty() && self.search_set.is_empty()
    }
}

/// Everything about the panel besides the tree and the settings.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub index: Index,
    pub selection: Selection,
    pub qf: QuickFix,
    pub vc: VcStatus,
    pub filter: FilterPattern,
    /// Disables every exclusion rule, including VCS ignores.
    pub show_hidden: bool,
    /// Path under the cursor.
    pub current: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn quickfix_counts_files_and_ancestors() {
        let qf = QuickFix::from_files(
            Path::new("/work"),
            ["src/a.rs", "src/a.rs", "src/b.rs", "README.md"],
        );
        assert_eq!(qf.count("/work/src/a.rs"), 2);
        assert_eq!(qf.count("/work/src/b.rs"), 1);
        assert_eq!(qf.count("/work/src"), 3);
        assert_eq!(qf.count("/work"), 4);
        assert_eq!(qf.count("/"), 4);
        assert_eq!(qf.count("/work/README.md"), 1);
        assert_eq!(qf.count("/work/missing"), 0);
    }

    #[test]
    #[cfg(unix)]
    fn quickfix_keeps_absolute_names() {
        let qf = QuickFix::from_files(Path::new("/work"), ["/elsewhere/x.py"]);
        assert_eq!(qf.count("/elsewhere/x.py"), 1);
        assert_eq!(qf.count("/work"), 0);
    }

    #[test]
    fn filter_pattern_empty_by_default() {
        assert!(FilterPattern::default().is_empty());
        let fp = FilterPattern {
            pattern: "*.rs".to_string(),
            ..Default::default()
        };
        assert!(!fp.is_empty());
    }
}
