//! Tree diagram rendering
//!
//! Produces the box-drawing view of a pack tree shown in logs and previews.
//! The output bytes are part of the display contract: branch glyphs, the
//! vertical-bar/tab continuation, and the leading and trailing line breaks
//! must all be reproduced exactly.

use crate::model::IconPack;

/// Render a pack tree as an indented box-drawing diagram.
///
/// The empty tree renders to the empty string. Otherwise the output is a
/// line break, the root name with a colon, then one line per descendant:
/// `├── ` marks a child with following siblings, `└── ` the last child, and
/// descendant lines inherit `│\t` through a non-last ancestor or a plain
/// `\t` through a last one, so vertical bars connect only through branches
/// that continue below.
pub fn diagram(pack: &IconPack) -> String {
    if pack.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    out.push('\n');
    out.push_str(&pack.name);
    out.push_str(":\n");
    render_nested(pack, "", &mut out);
    out
}

fn render_nested(node: &IconPack, prefix: &str, out: &mut String) {
    let count = node.nested.len();
    for (idx, child) in node.nested.iter().enumerate() {
        let last = idx + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&child.name);
        out.push('\n');

        let continuation = if last {
            format!("{prefix}\t")
        } else {
            format!("{prefix}│\t")
        };
        render_nested(child, &continuation, out);
    }
}
