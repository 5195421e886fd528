use crate::traversal::Traversable;
use super::{leftmost, is_right_child_of};

/// Returns the first node of an in-order traversal: the left-most descendant of `root`.
///
/// Always returns `Some`.
#[inline]
pub fn in_order_start<T>(traversable: &T, root: T::Cursor) -> Option<T::Cursor>
where T: Traversable + ?Sized,
{
    Some(leftmost(traversable, root))
}

/// Returns the node following `cursor` in in-order sequence, or `None` if `cursor` is the last one.
///
/// If the node has a right subtree, the successor is the left-most node of that subtree. Otherwise, the successor is the closest ancestor whose left subtree contains the node, found by climbing for as long as the current node is a right child.
pub fn in_order_next<T>(traversable: &T, cursor: &T::Cursor) -> Option<T::Cursor>
where T: Traversable + ?Sized,
{
    if let Some(right_child) = traversable.right_child_of(cursor) {
        return Some(leftmost(traversable, right_child));
    }
    let mut current = cursor.clone();
    while let Some(parent) = traversable.parent_of(&current) {
        if !is_right_child_of(traversable, &current, &parent) {
            return Some(parent);
        }
        current = parent;
    }
    // Climbed out of the right spine of the tree
    None
}
