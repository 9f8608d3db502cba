//! A point-storing k-d tree over labelled points whose dimensionality is a
//! runtime property, fixed at construction. [`f64`] or [`f32`] are supported
//! currently for co-ordinate values.

use crate::iter::TreeIter;
use crate::types::{Axis, Content};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A balanced, point-storing k-d tree.
///
/// Built once from a collection of `(point, label)` pairs via
/// [`build`](KdTree::build) and immutable from then on: always balanced,
/// never rebalanced, and safe to query concurrently from any number of
/// threads once construction has returned. A changed point set means
/// discarding the tree and building a new one.
///
/// # Examples
///
/// ```rust
/// use vicinity::KdTree;
///
/// let tree: KdTree<f64, u32> = KdTree::build([
///     ([1.0, 2.0, 5.0], 100),
///     ([2.0, 3.0, 6.0], 101),
/// ])?;
///
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.dims(), 3);
/// # Ok::<(), vicinity::Error>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct KdTree<A, T> {
    pub(crate) root: Option<Box<Node<A, T>>>,
    pub(crate) k: usize,
    pub(crate) size: usize,
}

/// A single tree vertex: the partitioning point stored at this depth, the
/// caller's label for it, the axis the children are split on, and the two
/// exclusively-owned subtrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Node<A, T> {
    pub(crate) point: Box<[A]>,
    pub(crate) item: T,
    pub(crate) axis: usize,
    pub(crate) left: Option<Box<Node<A, T>>>,
    pub(crate) right: Option<Box<Node<A, T>>>,
}

impl<A: Axis, T: Content> KdTree<A, T> {
    /// Returns the number of points stored in the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vicinity::KdTree;
    ///
    /// let tree: KdTree<f64, u32> = KdTree::build([
    ///     ([1.0, 2.0, 5.0], 100),
    ///     ([1.1, 2.1, 5.1], 101),
    /// ])?;
    ///
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), vicinity::Error>(())
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree was built from zero points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vicinity::KdTree;
    ///
    /// let points: Vec<([f64; 3], u32)> = vec![];
    /// let tree: KdTree<f64, u32> = KdTree::build(points)?;
    ///
    /// assert!(tree.is_empty());
    /// # Ok::<(), vicinity::Error>(())
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the dimensionality the tree was built with, or `0` for a tree
    /// built from zero points.
    #[inline]
    pub fn dims(&self) -> usize {
        self.k
    }

    /// Iterate over all `(label, point)` pairs in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vicinity::KdTree;
    ///
    /// let point = [1.0f64, 2.0, 3.0];
    /// let tree: KdTree<f64, u32> = KdTree::build([(point, 10)])?;
    ///
    /// let mut pairs: Vec<_> = tree.iter().collect();
    /// assert_eq!(pairs.pop(), Some((10, &point[..])));
    /// # Ok::<(), vicinity::Error>(())
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (T, &[A])> + '_ {
        TreeIter::new(self.root.as_deref())
    }
}
