//! Exclusion rules applied to children before they are visited.

use globset::GlobMatcher;

use crate::glob;
use crate::node::Node;
use crate::settings::Settings;
use crate::state::{FilterPattern, VcStatus};

/// Decides which children are dropped from the traversal.
pub enum Filter<'a> {
    /// Show-hidden: nothing is dropped, VCS ignores included.
    KeepAll,
    Rules {
        settings: &'a Settings,
        vc: &'a VcStatus,
    },
}

impl<'a> Filter<'a> {
    pub fn new(settings: &'a Settings, vc: &'a VcStatus, show_hidden: bool) -> Self {
        if show_hidden {
            Filter::KeepAll
        } else {
            Filter::Rules { settings, vc }
        }
    }

    pub fn should_drop(&self, node: &Node) -> bool {
        match self {
            Filter::KeepAll => false,
            Filter::Rules { settings, vc } => {
                vc.ignored.contains(&node.path)
                    || settings.name_ignore.is_match(&node.name)
                    || settings.path_ignore.is_match(&node.path)
            }
        }
    }
}

/// Compiled form of a [`FilterPattern`].
pub enum Search<'a> {
    /// Everything is shown.
    Off,
    /// Keep nodes whose name matches. An invalid glob matches nothing.
    Pattern(Option<GlobMatcher>),
    /// Keep nodes whose path is listed.
    Paths(&'a FilterPattern),
}

impl<'a> Search<'a> {
    pub fn new(filter: &'a FilterPattern) -> Self {
        if !filter.pattern.is_empty() {
            Search::Pattern(glob::matcher(&filter.pattern))
        } else if !filter.search_set.is_empty() {
            Search::Paths(filter)
        } else {
            Search::Off
        }
    }

    /// Whether `node` itself satisfies the search.
    pub fn clears(&self, node: &Node) -> bool {
        match self {
            Search::Off => true,
            Search::Pattern(matcher) => matcher.as_ref().is_some_and(|m| m.is_match(&node.name)),
            Search::Paths(filter) => filter.search_set.contains(&node.path),
        }
    }
}
