//! Property-based tests over randomly shaped trees.
//!
//! Trees are built from a recipe: each entry attaches one new node to an
//! already existing node and gives it a number of `u32` attributes.

use dataset_show::{
    to_string, ColumnSpec, DataSet, FnVisitor, FormatSpec, Lookup, Value as DsValue,
};
use proptest::prelude::*;

type Recipe = Vec<(usize, u8)>;

fn recipe() -> impl Strategy<Value = Recipe> {
    prop::collection::vec((any::<usize>(), 0..4u8), 0..40)
}

/// Builds the tree and returns it with the child-index route to every node.
fn build(recipe: &[(usize, u8)]) -> (DataSet, Vec<Vec<usize>>) {
    let mut root = DataSet::new("n0");
    let mut routes: Vec<Vec<usize>> = vec![Vec::new()];

    for (i, &(pick, keys)) in recipe.iter().enumerate() {
        let mut route = routes[pick % routes.len()].clone();
        let mut parent = &mut root;
        for &step in &route {
            parent = parent.child_mut(step).unwrap();
        }
        route.push(parent.child_count());

        let child = parent.create_child(format!("n{}", i + 1));
        for k in 0..keys {
            child.set_u32(format!("k{}", k), u32::from(k));
        }
        routes.push(route);
    }
    (root, routes)
}

fn leaf_count(root: &DataSet) -> usize {
    let mut leaves = 0;
    let mut visitor = FnVisitor::new(
        |_: &str, node: &DataSet, _: &()| {
            if node.is_leaf() {
                leaves += 1;
            }
        },
        |_: &str, _: &DataSet, _: &()| {},
    );
    root.recurse(&mut visitor, (), false);
    drop(visitor);
    leaves
}

proptest! {
    #[test]
    fn prop_last_write_wins(key in "[A-Za-z]{1,12}", first in any::<u64>(), second in any::<bool>()) {
        let mut node = DataSet::new("n");
        node.set_u64(key.as_str(), first);
        node.set_bool(key.as_str(), second);

        prop_assert_eq!(node.key_count(), 1);
        prop_assert_eq!(node.value(&key), Some(&DsValue::Bool(second)));
        prop_assert!(node.get_u64(&key, 0).is_err());
    }

    #[test]
    fn prop_default_returned_for_unset_key(key in "[a-z]{1,8}", default in any::<i64>()) {
        let mut node = DataSet::new("n");
        node.set_i64("present", 1);
        prop_assume!(key != "present");

        prop_assert_eq!(node.get_i64(&key, default).unwrap(), Lookup::NotFound(default));
    }

    #[test]
    fn prop_traversal_sees_every_node_and_key(recipe in recipe()) {
        let (root, _) = build(&recipe);
        let expected_keys: usize = recipe.iter().map(|&(_, keys)| usize::from(keys)).sum();

        let mut nodes = 0;
        let mut keys = 0;
        let mut visitor = FnVisitor::new(
            |_: &str, node: &DataSet, _: &()| {
                nodes += 1;
                keys += node.key_count();
            },
            |_: &str, _: &DataSet, _: &()| {},
        );
        root.recurse(&mut visitor, (), false);
        drop(visitor);

        prop_assert_eq!(nodes, recipe.len() + 1);
        prop_assert_eq!(root.node_count(), recipe.len() + 1);
        prop_assert_eq!(keys, expected_keys);
    }

    #[test]
    fn prop_paths_resolve_to_their_node(recipe in recipe()) {
        let (root, routes) = build(&recipe);

        for route in routes.iter().skip(1) {
            let mut node = &root;
            let mut names = Vec::new();
            for &step in route {
                node = node.child(step).unwrap();
                names.push(node.name().to_string());
            }
            let path = format!("/{}", names.join("/"));
            let found = root.find(&path);
            prop_assert!(found.map_or(false, |f| std::ptr::eq(f, node)), "path {}", path);
        }
    }

    #[test]
    fn prop_squash_is_idempotent(recipe in recipe()) {
        let (mut once, _) = build(&recipe);
        let (pristine, _) = build(&recipe);
        let leaves = leaf_count(&pristine);

        let removed = once.squash();
        prop_assert_eq!(once.node_count() + removed, pristine.node_count());
        prop_assert_eq!(leaf_count(&once), leaves);

        let (mut twice, _) = build(&recipe);
        twice.squash();
        prop_assert_eq!(twice.squash(), 0);
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn prop_table_has_one_line_per_leaf(recipe in recipe()) {
        let (root, _) = build(&recipe);
        let spec = FormatSpec::table(vec![ColumnSpec::new("K0", 3, "k0")]);

        let text = to_string(&root, &spec).unwrap();
        prop_assert_eq!(text.lines().count(), 1 + leaf_count(&root));
    }

    #[test]
    fn prop_xml_opens_one_element_per_node(recipe in recipe()) {
        let (root, _) = build(&recipe);
        let text = to_string(&root, &FormatSpec::xml()).unwrap();

        let opened = text
            .lines()
            .map(str::trim_start)
            .filter(|line| line.starts_with('<') && !line.starts_with("</") && !line.starts_with("<?"))
            .filter(|line| !line.contains(" type=\""))
            .count();
        let closed = text.lines().filter(|line| line.trim_start().starts_with("</n")).count();
        prop_assert_eq!(opened, root.node_count());
        prop_assert_eq!(closed, root.node_count());
    }
}
