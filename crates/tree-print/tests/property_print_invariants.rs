use proptest::prelude::*;
use tree_print::{print_tree, TreeValue};

fn arb_tree() -> impl Strategy<Value = TreeValue> {
    let leaf = prop_oneof![
        Just(TreeValue::Null),
        any::<bool>().prop_map(TreeValue::Bool),
        any::<i64>().prop_map(TreeValue::Int),
        any::<u64>().prop_map(TreeValue::UInt),
        "[a-z]{1,8}".prop_map(TreeValue::Str),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(TreeValue::List),
            prop::collection::vec(inner.clone(), 0..4).prop_map(TreeValue::Tuple),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4)
                .prop_map(|entries| TreeValue::map(entries)),
        ]
    })
}

/// Lines contributed by a value rendered as its own node.
fn lines_for_value(v: &TreeValue) -> usize {
    if v.is_container() {
        1 + child_lines(v)
    } else {
        1
    }
}

/// Lines contributed by a container's children. Map entries render the key
/// line themselves; a scalar entry value adds one more line, a container
/// entry value merges into the key line and contributes only its children.
fn child_lines(v: &TreeValue) -> usize {
    match v {
        TreeValue::Map(entries) => entries.values().map(|val| 1 + child_lines_under_key(val)).sum(),
        TreeValue::List(items) | TreeValue::Tuple(items) => {
            items.iter().map(lines_for_value).sum()
        }
        _ => 0,
    }
}

fn child_lines_under_key(val: &TreeValue) -> usize {
    if val.is_container() {
        child_lines(val)
    } else {
        1
    }
}

proptest! {
    #[test]
    fn output_is_deterministic(v in arb_tree()) {
        let first = print_tree(&v, false);
        prop_assert_eq!(print_tree(&v, false), first.clone());
        prop_assert_eq!(print_tree(&v.clone(), false), first);
    }

    #[test]
    fn one_line_per_node_with_trailing_newline(v in arb_tree()) {
        let out = print_tree(&v, false);
        prop_assert!(out.ends_with('\n'));
        prop_assert_eq!(out.lines().count(), lines_for_value(&v));
    }

    #[test]
    fn unicode_mode_is_a_glyph_substitution(v in arb_tree()) {
        let ascii = print_tree(&v, false);
        let unicode = print_tree(&v, true);
        prop_assert_eq!(ascii.lines().count(), unicode.lines().count());
        let mapped = unicode
            .replace("├─", "+-")
            .replace("└─", "+-")
            .replace('│', "|");
        prop_assert_eq!(mapped, ascii);
    }

    #[test]
    fn empty_containers_render_one_line(kind in 0..3usize) {
        let v = match kind {
            0 => TreeValue::map::<String, _>([]),
            1 => TreeValue::list([]),
            _ => TreeValue::tuple([]),
        };
        let out = print_tree(&v, false);
        prop_assert_eq!(out.lines().count(), 1);
    }
}
