//! Canonical string parser

use crate::model::IconPack;
use crate::{Error, Result};

/// Parse a canonical pack string into a tree.
///
/// The input is a comma-separated list of path expressions, each a
/// dot-separated sequence of labels. Labels are taken verbatim; whitespace
/// is not trimmed. All path expressions must start with the same label, the
/// root of the tree. Expressions merge into the tree in left-to-right order,
/// reusing an existing child at each level or appending a new one, so child
/// order is first-appearance order.
///
/// The empty string yields the empty tree sentinel. An empty label anywhere
/// (doubled, leading, or trailing separators) rejects the whole input.
pub fn parse(input: &str) -> Result<IconPack> {
    if input.is_empty() {
        return Ok(IconPack::empty());
    }

    let exprs: Vec<Vec<&str>> = input
        .split(',')
        .map(|expr| {
            let labels: Vec<&str> = expr.split('.').collect();
            if labels.iter().any(|label| label.is_empty()) {
                return Err(Error::EmptyLabel(expr.to_string()));
            }
            Ok(labels)
        })
        .collect::<Result<_>>()?;

    // Validate before constructing any node: the parse fails atomically.
    let root_name = exprs[0][0];
    for labels in &exprs {
        if labels[0] != root_name {
            return Err(Error::AmbiguousRoot {
                expected: root_name.to_string(),
                found: labels[0].to_string(),
            });
        }
    }

    let mut root = IconPack::new(root_name);
    for labels in &exprs {
        insert_path(&mut root, &labels[1..]);
    }
    Ok(root)
}

/// Descend from `node`, reusing or appending a child per label.
fn insert_path(node: &mut IconPack, labels: &[&str]) {
    let Some((head, rest)) = labels.split_first() else {
        return;
    };
    let idx = match node.nested.iter().position(|c| c.name == *head) {
        Some(idx) => idx,
        None => {
            node.nested.push(IconPack::new(*head));
            node.nested.len() - 1
        }
    };
    insert_path(&mut node.nested[idx], rest);
}
