use crate::traversal::Traversable;
use super::{first_leaf, is_left_child_of};

/// Returns the first node of a post-order traversal: the leaf reached by descending from `root`, preferring left children over right ones.
///
/// Always returns `Some`.
#[inline]
pub fn post_order_start<T>(traversable: &T, root: T::Cursor) -> Option<T::Cursor>
where T: Traversable + ?Sized,
{
    Some(first_leaf(traversable, root))
}

/// Returns the node following `cursor` in post-order sequence, or `None` if `cursor` is the root, which is always visited last.
///
/// A right child, or a left child without a right sibling, is followed by its parent. A left child with a right sibling is followed by the first post-order node of the sibling's subtree.
pub fn post_order_next<T>(traversable: &T, cursor: &T::Cursor) -> Option<T::Cursor>
where T: Traversable + ?Sized,
{
    let parent = traversable.parent_of(cursor)?;
    if is_left_child_of(traversable, cursor, &parent) {
        if let Some(right_sibling) = traversable.right_child_of(&parent) {
            return Some(first_leaf(traversable, right_sibling));
        }
    }
    Some(parent)
}
