use super::*;
use crate::{ChildSide, DuplicateChildError, Order};

fn values<'a>(nodes: impl IntoIterator<Item = NodeRef<'a, u32, usize>>) -> Vec<u32> {
    nodes.into_iter().map(|node| *node.value()).collect()
}

#[test]
fn basic() {
    let mut tree: BinaryTree<u64> = BinaryTree::new(1987_u64);
    let root = *tree.root_key();
    tree.create_left_child(&root, 83).unwrap();
    tree.create_right_child(&root, 87).unwrap();

    let left_child_val = tree.root().left_child().map(|n| *n.value());
    let right_child_val = tree.root().right_child().map(|n| *n.value());
    assert_eq!(left_child_val, Some(83));
    assert_eq!(right_child_val, Some(87));
    assert_eq!(tree.len(), 3);
}

#[test]
fn root_only() {
    let tree = BinaryTree::<_>::new(42);
    let root = tree.root();
    assert_eq!(*root.value(), 42);
    assert!(root.is_root());
    assert!(root.is_leaf());
    assert_eq!(root.parent(), None);
    assert_eq!(root.side(), None);
    assert!(root.children().is_empty());
    assert_eq!(tree.len(), 1);
}

#[test]
fn default_tree_has_default_root() {
    let tree = BinaryTree::<String>::default();
    assert_eq!(tree.root().value(), "");
    assert_eq!(tree.len(), 1);
}

#[test_log::test]
fn duplicate_left_child_is_rejected() {
    let mut tree = BinaryTree::<_>::new(10);
    let root = *tree.root_key();
    let first = tree.create_left_child(&root, 5).unwrap();

    let error = tree.create_left_child(&root, 7).unwrap_err();
    assert_eq!(error, DuplicateChildError { side: ChildSide::Left, value: 7 });
    assert_eq!(error.into_value(), 7);

    // Nothing was allocated and the first child is untouched
    assert_eq!(tree.len(), 2);
    let left = tree.root().left_child().unwrap();
    assert_eq!(*left.raw_key(), first);
    assert_eq!(*left.value(), 5);
    assert!(left.is_leaf());
    assert_links(&tree);
}

#[test_log::test]
fn duplicate_right_child_is_rejected() {
    let mut tree = BinaryTree::<_>::new(10);
    let root = *tree.root_key();
    tree.create_right_child(&root, 15).unwrap();
    let error = tree.create_child(&root, ChildSide::Right, 20).unwrap_err();
    assert_eq!(error.side, ChildSide::Right);
    assert_eq!(error.value, 20);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.root().right_child().map(|n| *n.value()), Some(15));
    // The other slot is still free
    let left = tree.create_child(&root, error.side.opposite(), 5).unwrap();
    assert_eq!(tree.node(&left).unwrap().side(), Some(ChildSide::Left));
    assert_eq!(tree.len(), 3);
}

#[test]
fn child_sides() {
    assert_eq!(ChildSide::Left.opposite(), ChildSide::Right);
    assert_eq!(ChildSide::Right.opposite(), ChildSide::Left);
    assert_eq!(ChildSide::Left.to_string(), "left");
    assert_eq!(format!("[{:>6}]", ChildSide::Right), "[ right]");
}

#[test]
fn duplicate_child_error_message() {
    let error = DuplicateChildError { side: ChildSide::Left, value: () };
    assert_eq!(error.to_string(), "the left child slot is already occupied");
    let error = DuplicateChildError { side: ChildSide::Right, value: () };
    assert_eq!(error.to_string(), "the right child slot is already occupied");
}

#[test]
fn right_child_without_left_child() {
    let mut tree = BinaryTree::<_>::new(1);
    let root = *tree.root_key();
    let right = tree.create_right_child(&root, 2).unwrap();

    let root = tree.root();
    assert_eq!(root.left_child(), None);
    assert!(!root.is_leaf());
    let right = tree.node(&right).unwrap();
    assert_eq!(root.children().as_slice(), &[right]);
    assert_eq!(right.side(), Some(ChildSide::Right));
    assert_eq!(right.parent(), Some(root));
}

#[test]
fn links_are_consistent() {
    let tree = example_tree();
    assert_eq!(tree.len(), 11);
    assert_links(&tree);

    let four = find(&tree, 4);
    assert_eq!(four.side(), Some(ChildSide::Right));
    assert_eq!(four.parent().map(|n| *n.value()), Some(2));
    assert_eq!(values(four.children()), [3, 5]);
    assert_eq!(find(&tree, 90).side(), Some(ChildSide::Left));
}

#[test]
fn in_order_successors_of_example_tree() {
    let tree = example_tree();
    let next = |value| find(&tree, value).in_order_next().map(|n| *n.value());
    assert_eq!(next(90), Some(91));
    assert_eq!(next(50), Some(89));
    assert_eq!(next(1), Some(2));
    assert_eq!(next(91), Some(100));
    assert_eq!(next(101), None);
}

#[test]
fn whole_tree_iterators() {
    let tree = example_tree();
    assert_eq!(values(tree.in_order()), [1, 2, 3, 4, 5, 50, 89, 90, 91, 100, 101]);
    assert_eq!(values(tree.pre_order()), [50, 2, 1, 4, 3, 5, 100, 90, 89, 91, 101]);
    assert_eq!(values(tree.post_order()), [1, 3, 5, 4, 2, 89, 91, 90, 101, 100, 50]);
}

#[test]
fn nodes_iterator_can_be_resumed() {
    let tree = example_tree();
    let mut nodes = tree.post_order();
    assert_eq!(values(nodes.by_ref().take(4)), [1, 3, 5, 4]);
    let paused = nodes.peek().unwrap();
    assert_eq!(*paused.value(), 2);
    drop(nodes);

    let rest = Nodes::resume(paused, Order::PostOrder);
    assert_eq!(rest.order(), Order::PostOrder);
    assert_eq!(values(rest), [2, 89, 91, 90, 101, 100, 50]);
}

#[test]
fn node_lookup() {
    let tree = example_tree();
    assert!(tree.node(&0).is_some());
    assert!(tree.node(&10).is_some());
    assert!(tree.node(&11).is_none());
    assert_eq!(tree.node(tree.root_key()), Some(tree.root()));
}

#[test]
#[should_panic(expected = "invalid parent key")]
fn unknown_parent_key_panics() {
    let mut tree = BinaryTree::<_>::new(0);
    let _ = tree.create_left_child(&7, 1);
}

#[test]
fn node_refs_of_different_trees_are_not_equal() {
    let first = BinaryTree::<_>::new(1);
    let second = BinaryTree::<_>::new(1);
    assert_eq!(first.root().raw_key(), second.root().raw_key());
    assert_ne!(first.root(), second.root());
    assert_eq!(first.root(), first.root());
}

#[test]
fn array_backed_tree() {
    let mut tree: ArrayBinaryTree<u8, [Node<u8, usize>; 4]> = BinaryTree::new(2);
    assert_eq!(tree.capacity(), 4);
    let root = *tree.root_key();
    tree.create_left_child(&root, 1).unwrap();
    let three = tree.create_right_child(&root, 3).unwrap();
    tree.create_right_child(&three, 4).unwrap();
    assert_eq!(tree.len(), 4);

    let in_order: Vec<u8> = tree.in_order().map(|n| *n.value()).collect();
    assert_eq!(in_order, [1, 2, 3, 4]);
    assert_links(&tree);
}

#[test]
#[should_panic(expected = "ArrayVec storage is full")]
fn array_backed_tree_overflow_panics() {
    let mut tree: ArrayBinaryTree<u8, [Node<u8, usize>; 1]> = BinaryTree::new(0);
    let root = *tree.root_key();
    let _ = tree.create_left_child(&root, 1);
}

#[test]
fn with_capacity_preallocates() {
    let mut tree = VecBinaryTree::with_capacity(16, 0_u32);
    assert!(tree.capacity() >= 16);
    let root = *tree.root_key();
    tree.create_left_child(&root, 1).unwrap();
    tree.shrink_to_fit();
    assert!(tree.capacity() >= tree.len());
    assert_eq!(values(tree.in_order()), [1, 0]);
}

/// Runs `f` on a fresh thread and returns the file and line its panic was reported at.
#[cfg(feature = "std")]
fn panic_location(f: impl FnOnce() + Send + 'static) -> Option<(String, u32)> {
    use std::{
        panic,
        sync::{Arc, Mutex},
        thread,
    };
    const THREAD_NAME: &str = "cinder-panic-location";
    let recorded = Arc::new(Mutex::new(None));
    let previous = Arc::new(panic::take_hook());
    {
        let recorded = Arc::clone(&recorded);
        let previous = Arc::clone(&previous);
        panic::set_hook(Box::new(move |info| {
            if thread::current().name() == Some(THREAD_NAME) {
                *recorded.lock().unwrap() = info.location().map(|l| (l.file().to_owned(), l.line()));
            } else {
                (*previous)(info)
            }
        }));
    }
    let result = thread::Builder::new()
        .name(THREAD_NAME.to_owned())
        .spawn(f)
        .unwrap()
        .join();
    let _ = panic::take_hook();
    panic::set_hook(Box::new(move |info| (*previous)(info)));
    assert!(result.is_err(), "the closure did not panic");
    let location = recorded.lock().unwrap().take();
    location
}

#[cfg(feature = "std")]
#[test]
fn invalid_keys_are_reported_at_the_call_site() {
    use crate::Traversable;

    let call_line = line!() + 3;
    let location = panic_location(move || {
        let mut tree = BinaryTree::<_>::new(0_u32);
        let _ = tree.create_left_child(&7, 1);
    });
    assert_eq!(location, Some((file!().to_owned(), call_line)));

    let call_line = line!() + 3;
    let location = panic_location(move || {
        let tree = BinaryTree::<_>::new(0_u32);
        let _ = tree.parent_of(&7);
    });
    assert_eq!(location, Some((file!().to_owned(), call_line)));
}

/// Writer for `tracing-subscriber` which collects formatted events in memory.
#[cfg(feature = "std")]
#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);
#[cfg(feature = "std")]
impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}
#[cfg(feature = "std")]
impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "std")]
#[test]
fn child_creation_is_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut tree = BinaryTree::<_>::new(10);
        let root = *tree.root_key();
        tree.create_left_child(&root, 5).unwrap();
        assert!(tree.create_left_child(&root, 7).is_err());
    });

    let output = logs.contents();
    let created = output
        .lines()
        .find(|line| line.contains("created child node"))
        .unwrap_or_else(|| panic!("no creation event in {:?}", output));
    assert!(created.contains("TRACE"), "{}", created);
    assert!(created.contains("side=left"), "{}", created);
    let rejected = output
        .lines()
        .find(|line| line.contains("slot already occupied"))
        .unwrap_or_else(|| panic!("no rejection event in {:?}", output));
    assert!(rejected.contains("DEBUG"), "{}", rejected);
    assert!(rejected.contains("existing=1"), "{}", rejected);
}
