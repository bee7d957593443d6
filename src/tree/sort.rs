//! Sibling ordering: folders first, then extension, then name.

use std::cmp::Ordering;

use crate::node::Node;

/// String collation used for sort keys.
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Unicode Collation Algorithm order for the root locale, so `éclair` sorts
/// among the `e` names. Ties are broken by raw order.
///
/// Falls back to [`CaseFoldCollator`] when collation data cannot be loaded.
pub struct UnicodeCollator {
    inner: Option<icu_collator::Collator>,
}

impl UnicodeCollator {
    pub fn new() -> Self {
        let options = icu_collator::CollatorOptions::new();
        match icu_collator::Collator::try_new(&Default::default(), options) {
            Ok(collator) => Self {
                inner: Some(collator),
            },
            Err(e) => {
                tracing::warn!("unicode collation unavailable, folding case instead: {}", e);
                Self { inner: None }
            }
        }
    }
}

impl Default for UnicodeCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collator for UnicodeCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.inner {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => CaseFoldCollator.compare(a, b),
        }
    }
}

/// Case-insensitive order with ties broken by raw order, so `apple`
/// sorts before `Banana` but `Readme` and `readme` still have a fixed order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldCollator;

impl Collator for CaseFoldCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));
        folded.then_with(|| a.cmp(b))
    }
}

/// Raw code-point order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalCollator;

impl Collator for OrdinalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

fn category(node: &Node) -> u8 {
    if node.is_folder() {
        0
    } else {
        1
    }
}

/// Compare two siblings by (category, collated extension, collated name).
pub fn compare(collator: &dyn Collator, a: &Node, b: &Node) -> Ordering {
    category(a)
        .cmp(&category(b))
        .then_with(|| {
            collator.compare(a.ext.as_deref().unwrap_or(""), b.ext.as_deref().unwrap_or(""))
        })
        .then_with(|| collator.compare(&a.name, &b.name))
}

/// Stable sort of siblings.
pub(crate) fn sort_siblings(collator: &dyn Collator, nodes: &mut [&Node]) {
    nodes.sort_by(|a, b| compare(collator, a, b));
}
