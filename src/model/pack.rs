//! IconPack (tree node) type - the namespace model for generated accessors

use crate::codec;
use crate::render;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A node in the icon pack namespace tree.
///
/// An `IconPack` groups generated accessor declarations into nested
/// namespaces. Each node carries a name and an ordered list of children;
/// names are unique among the direct children of one node, and insertion
/// order (order of first appearance during parsing) is preserved because
/// both the canonical encoding and the tree diagram depend on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconPack {
    /// The namespace label; empty only for the empty tree sentinel
    pub name: String,

    /// Ordered child packs, keyed by name
    pub nested: Vec<IconPack>,
}

impl IconPack {
    /// Create a leaf pack with the given name
    pub fn new(name: impl Into<String>) -> Self {
        IconPack {
            name: name.into(),
            nested: Vec::new(),
        }
    }

    /// Create a pack with the given children
    pub fn with_nested(name: impl Into<String>, nested: Vec<IconPack>) -> Self {
        IconPack {
            name: name.into(),
            nested,
        }
    }

    /// The empty tree sentinel, representing "no pack configured"
    pub fn empty() -> Self {
        IconPack::new("")
    }

    /// Check if this is the empty tree sentinel
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.nested.is_empty()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.nested.is_empty()
    }

    /// Look up a direct child by name
    pub fn child(&self, name: &str) -> Option<&IconPack> {
        self.nested.iter().find(|c| c.name == name)
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.nested.len()
    }

    /// Number of leaves in the whole tree (the empty tree has none)
    pub fn leaf_count(&self) -> usize {
        if self.is_empty() {
            0
        } else if self.is_leaf() {
            1
        } else {
            self.nested.iter().map(IconPack::leaf_count).sum()
        }
    }

    /// Depth of the tree: 1 for a single node, 0 for the empty tree
    pub fn depth(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            1 + self
                .nested
                .iter()
                .map(IconPack::depth)
                .max()
                .unwrap_or_default()
        }
    }

    /// Encode this tree as its canonical comma/dot string
    pub fn to_raw_string(&self) -> String {
        codec::encode(self)
    }
}

impl Default for IconPack {
    fn default() -> Self {
        IconPack::empty()
    }
}

impl FromStr for IconPack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        codec::parse(s)
    }
}

impl fmt::Display for IconPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render::diagram(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let pack = IconPack::empty();
        assert!(pack.is_empty());
        assert!(pack.is_leaf());
        assert_eq!(pack.leaf_count(), 0);
        assert_eq!(pack.depth(), 0);
        assert_eq!(pack, IconPack::default());
    }

    #[test]
    fn test_leaf_pack() {
        let pack = IconPack::new("Root");
        assert!(!pack.is_empty());
        assert!(pack.is_leaf());
        assert_eq!(pack.leaf_count(), 1);
        assert_eq!(pack.depth(), 1);
    }

    #[test]
    fn test_child_lookup() {
        let pack = IconPack::with_nested(
            "Root",
            vec![IconPack::new("Filled"), IconPack::new("Outlined")],
        );
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.child("Filled"), Some(&IconPack::new("Filled")));
        assert!(pack.child("Rounded").is_none());
    }

    #[test]
    fn test_structural_equality() {
        let a = IconPack::with_nested("Root", vec![IconPack::new("A"), IconPack::new("B")]);
        let b = IconPack::with_nested("Root", vec![IconPack::new("A"), IconPack::new("B")]);
        let c = IconPack::with_nested("Root", vec![IconPack::new("B"), IconPack::new("A")]);

        assert_eq!(a, b);
        // Child order is semantically meaningful
        assert_ne!(a, c);
    }

    #[test]
    fn test_leaf_count_and_depth() {
        let pack = IconPack::with_nested(
            "Root",
            vec![
                IconPack::with_nested("A", vec![IconPack::new("X"), IconPack::new("Y")]),
                IconPack::new("B"),
            ],
        );
        assert_eq!(pack.leaf_count(), 3);
        assert_eq!(pack.depth(), 3);
    }
}
