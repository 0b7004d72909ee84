//! Canonical string serializer

use crate::model::IconPack;

/// Encode a tree as its canonical comma/dot string.
///
/// The encoding lists one dot-joined root-to-leaf path per leaf, joined by
/// commas in pre-order discovery order. Internal nodes never appear as
/// standalone expressions, so redundant prefix paths from the original input
/// are absorbed. The empty tree encodes to the empty string.
pub fn encode(pack: &IconPack) -> String {
    if pack.is_empty() {
        return String::new();
    }
    let mut paths = Vec::new();
    collect_leaf_paths(pack, &mut Vec::new(), &mut paths);
    paths.join(",")
}

fn collect_leaf_paths<'a>(node: &'a IconPack, trail: &mut Vec<&'a str>, out: &mut Vec<String>) {
    trail.push(&node.name);
    if node.is_leaf() {
        out.push(trail.join("."));
    } else {
        for child in &node.nested {
            collect_leaf_paths(child, trail, out);
        }
    }
    trail.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse;

    #[test]
    fn test_encode_empty_tree() {
        assert_eq!(encode(&IconPack::empty()), "");
    }

    #[test]
    fn test_encode_single_leaf() {
        assert_eq!(encode(&IconPack::new("Root")), "Root");
    }

    #[test]
    fn test_encode_flat_hierarchy() {
        let pack = IconPack::with_nested(
            "Root",
            vec![IconPack::new("Child1"), IconPack::new("Child2")],
        );
        assert_eq!(encode(&pack), "Root.Child1,Root.Child2");
    }

    #[test]
    fn test_encode_absorbs_internal_paths() {
        // "Root.Child1" was present verbatim in the input but Child1 is no
        // longer a leaf, so only the full chain is emitted.
        let pack = parse("Root.Child1,Root.Child1.GrandChild1,Root.Child2").unwrap();
        assert_eq!(encode(&pack), "Root.Child1.GrandChild1,Root.Child2");
    }

    #[test]
    fn test_encode_preserves_first_appearance_order() {
        let pack = parse("AAA.BB,AAA.CC,AAA.BB.FF,AAA.BB.FF.CC.AAA,AAA.CC.BB").unwrap();
        assert_eq!(encode(&pack), "AAA.BB.FF.CC.AAA,AAA.CC.BB");
    }

    #[test]
    fn test_encode_is_fixed_point_on_canonical_input() {
        let canonical = [
            "",
            "Root",
            "Root.Child1,Root.Child2",
            "Root.Child1.GrandChild1.GreatGrandChild1,Root.Child2",
            "Root.A.X,Root.A.Y,Root.B.Z,Root.B.W.V",
            "AAA.BB.FF.CC.AAA,AAA.CC.BB",
        ];
        for input in canonical {
            assert_eq!(encode(&parse(input).unwrap()), input);
        }
    }

    #[test]
    fn test_encode_then_parse_is_idempotent() {
        let inputs = [
            "Root.Child1,Root.Child1.GrandChild1,Root.Child2",
            "Root.Child1.GrandChild1.GreatGrandChild1,Root.Child2,Root.Child1",
            "AAA.BB,AAA.CC,AAA.BB.FF,AAA.BB.FF.CC.AAA,AAA.CC.BB",
        ];
        for input in inputs {
            let once = encode(&parse(input).unwrap());
            let twice = encode(&parse(&once).unwrap());
            assert_eq!(once, twice);
        }
    }
}
