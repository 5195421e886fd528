use core::fmt::Debug;
use crate::ChildSide;

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) parent: Option<K>,
    pub(super) left_child: Option<K>,
    pub(super) right_child: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a root node.
    ///
    /// # Safety
    /// The node should not be added into a tree if it already has a root node, as there can only be one.
    #[inline(always)]
    pub(super) unsafe fn root(value: T) -> Self {
        Self {
            value,
            parent: None,
            left_child: None,
            right_child: None,
        }
    }
    /// Creates a childless node linked to `parent`.
    ///
    /// # Safety
    /// The parent's matching child slot must be set to the key this node gets added at, in the same operation.
    #[inline(always)]
    pub(super) unsafe fn child(value: T, parent: K) -> Self {
        Self {
            value,
            parent: Some(parent),
            left_child: None,
            right_child: None,
        }
    }
    #[inline]
    pub(super) fn child_key(&self, side: ChildSide) -> Option<&K> {
        match side {
            ChildSide::Left => self.left_child.as_ref(),
            ChildSide::Right => self.right_child.as_ref(),
        }
    }
    #[inline]
    pub(super) fn child_slot_mut(&mut self, side: ChildSide) -> &mut Option<K> {
        match side {
            ChildSide::Left => &mut self.left_child,
            ChildSide::Right => &mut self.right_child,
        }
    }
    /// Finds out which child slot of this node holds `key`.
    #[inline]
    pub(super) fn side_of(&self, key: &K) -> Option<ChildSide> {
        if self.left_child.as_ref() == Some(key) {
            Some(ChildSide::Left)
        } else if self.right_child.as_ref() == Some(key) {
            Some(ChildSide::Right)
        } else {
            None
        }
    }
}
