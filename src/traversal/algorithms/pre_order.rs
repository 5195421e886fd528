use crate::traversal::Traversable;
use super::is_left_child_of;

/// Returns the first node of a pre-order traversal, which is `root` itself.
///
/// Always returns `Some`.
#[inline(always)]
pub fn pre_order_start<T>(_traversable: &T, root: T::Cursor) -> Option<T::Cursor>
where T: Traversable + ?Sized,
{
    Some(root)
}

/// Returns the node following `cursor` in pre-order sequence, or `None` if `cursor` is the last one.
///
/// Children come first, left before right. A leaf is followed by the right child of the closest ancestor which has one and whose left subtree contains the leaf.
pub fn pre_order_next<T>(traversable: &T, cursor: &T::Cursor) -> Option<T::Cursor>
where T: Traversable + ?Sized,
{
    if let Some(left_child) = traversable.left_child_of(cursor) {
        return Some(left_child);
    }
    if let Some(right_child) = traversable.right_child_of(cursor) {
        return Some(right_child);
    }
    let mut current = cursor.clone();
    while let Some(parent) = traversable.parent_of(&current) {
        if is_left_child_of(traversable, &current, &parent) {
            if let Some(right_sibling) = traversable.right_child_of(&parent) {
                return Some(right_sibling);
            }
        }
        current = parent;
    }
    None
}
