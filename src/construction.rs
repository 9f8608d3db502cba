use ordered_float::OrderedFloat;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::error::Error;
use crate::kdtree::{KdTree, Node};
use crate::types::{Axis, Content};

impl<A: Axis, T: Content> KdTree<A, T> {
    /// Builds a balanced `KdTree`, populated with the `(point, label)` pairs
    /// yielded by `points`.
    ///
    /// The dimensionality of the tree is taken from the first point; labels
    /// are opaque to the tree and come back verbatim from queries. Given the
    /// same input sequence, construction always produces the same tree:
    /// points sharing a co-ordinate on the split axis keep their input order
    /// when partitioned, and an even-length partition is split at the entry
    /// just right of centre.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any point differs in
    /// dimensionality from the first. An empty input is not an error and
    /// produces an empty tree.
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
    /// # Ok::<(), vicinity::Error>(())
    /// ```
    pub fn build<I, P>(points: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (P, T)>,
        P: AsRef<[A]>,
    {
        let mut entries: Vec<(Box<[A]>, T)> = Vec::new();
        let mut k = 0;

        for (point, item) in points {
            let point = point.as_ref();
            if entries.is_empty() {
                k = point.len();
            } else if point.len() != k {
                return Err(Error::DimensionMismatch {
                    expected: k,
                    actual: point.len(),
                });
            }
            entries.push((point.into(), item));
        }

        if k == 0 && !entries.is_empty() {
            // a tree over zero-dimensional points has no axis to cycle on
            return Err(Error::DimensionMismatch {
                expected: 1,
                actual: 0,
            });
        }

        let size = entries.len();
        let root = Self::split(entries, 0, k);

        #[cfg(feature = "tracing")]
        event!(Level::DEBUG, size, dims = k, "k-d tree built");

        Ok(Self { root, k, size })
    }

    /// Stable-sorts `entries` on the axis for this depth, stores the median
    /// entry at the new node and recurses on the two remaining partitions.
    /// The left subtree holds co-ordinates `<= point[axis]` and the right
    /// subtree `>= point[axis]`; entries tied with the pivot keep their
    /// input order, so the same input sequence always yields the same tree.
    fn split(mut entries: Vec<(Box<[A]>, T)>, depth: usize, k: usize) -> Option<Box<Node<A, T>>> {
        if entries.is_empty() {
            return None;
        }

        let axis = depth % k;
        entries.sort_by_key(|(point, _)| OrderedFloat(point[axis]));

        let median = entries.len() / 2;
        let right = entries.split_off(median + 1);
        let (point, item) = entries.pop()?;

        Some(Box::new(Node {
            point,
            item,
            axis,
            left: Self::split(entries, depth + 1, k),
            right: Self::split(right, depth + 1, k),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::kdtree::{KdTree, Node};
    use crate::Error;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type AX = f64;

    /// Checks the partition invariant at every node: left descendants are at
    /// or below the pivot on the node's axis, right descendants at or above
    /// it. Ties can land on either side, split stably by input order.
    fn assert_partitioned(node: &Node<AX, usize>) {
        let pivot = node.point[node.axis];

        if let Some(left) = node.left.as_deref() {
            for_each_node(left, &mut |descendant| {
                assert!(
                    descendant.point[node.axis] <= pivot,
                    "left descendant {:?} above pivot {pivot} on axis {}",
                    descendant.point,
                    node.axis
                );
            });
            assert_partitioned(left);
        }
        if let Some(right) = node.right.as_deref() {
            for_each_node(right, &mut |descendant| {
                assert!(
                    descendant.point[node.axis] >= pivot,
                    "right descendant {:?} below pivot {pivot} on axis {}",
                    descendant.point,
                    node.axis
                );
            });
            assert_partitioned(right);
        }
    }

    fn for_each_node(node: &Node<AX, usize>, f: &mut impl FnMut(&Node<AX, usize>)) {
        f(node);
        if let Some(left) = node.left.as_deref() {
            for_each_node(left, f);
        }
        if let Some(right) = node.right.as_deref() {
            for_each_node(right, f);
        }
    }

    #[test]
    fn it_partitions_correctly_on_every_axis() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);
        let content: Vec<([AX; 3], usize)> = (0..500)
            .map(|idx| {
                (
                    [
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                        rng.random_range(-10.0..10.0),
                    ],
                    idx,
                )
            })
            .collect();

        let tree: KdTree<AX, usize> = KdTree::build(content).unwrap();

        assert_partitioned(tree.root.as_deref().unwrap());
    }

    #[test]
    fn it_partitions_correctly_with_duplicate_coordinates() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xD1CE);
        // co-ordinates drawn from a tiny set, so axis values collide a lot
        let content: Vec<([AX; 3], usize)> = (0..200)
            .map(|idx| {
                (
                    [
                        rng.random_range(0..3) as AX,
                        rng.random_range(0..3) as AX,
                        rng.random_range(0..3) as AX,
                    ],
                    idx,
                )
            })
            .collect();

        let tree: KdTree<AX, usize> = KdTree::build(content.clone()).unwrap();

        assert_eq!(tree.size(), content.len());
        assert_partitioned(tree.root.as_deref().unwrap());
    }

    #[test]
    fn it_retains_every_input_point() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xBEEF);
        let content: Vec<([AX; 3], usize)> = (0..137)
            .map(|idx| {
                (
                    [rng.random(), rng.random(), rng.random()],
                    idx,
                )
            })
            .collect();

        let tree: KdTree<AX, usize> = KdTree::build(content.clone()).unwrap();
        assert_eq!(tree.size(), content.len());

        let mut found: Vec<(usize, Vec<AX>)> = tree
            .iter()
            .map(|(item, point)| (item, point.to_vec()))
            .collect();
        found.sort_by_key(|(item, _)| *item);

        let expected: Vec<(usize, Vec<AX>)> = content
            .iter()
            .map(|(point, item)| (*item, point.to_vec()))
            .collect();

        assert_eq!(found, expected);
    }

    #[test]
    fn it_takes_the_right_of_centre_median_for_even_counts() {
        // four points along x; sorted order is their input order, so the
        // root must hold the third point (index len / 2 = 2)
        let content: Vec<([AX; 1], usize)> =
            vec![([1.0], 0), ([2.0], 1), ([3.0], 2), ([4.0], 3)];

        let tree: KdTree<AX, usize> = KdTree::build(content).unwrap();

        let root = tree.root.as_deref().unwrap();
        assert_eq!(root.item, 2);
        assert_eq!(&root.point[..], &[3.0]);
    }

    #[test]
    fn it_is_deterministic_for_a_fixed_input_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xFEED);
        let content: Vec<([AX; 3], usize)> = (0..100)
            .map(|idx| {
                (
                    [
                        rng.random_range(0..4) as AX,
                        rng.random_range(0..4) as AX,
                        rng.random_range(0..4) as AX,
                    ],
                    idx,
                )
            })
            .collect();

        let first: KdTree<AX, usize> = KdTree::build(content.clone()).unwrap();
        let second: KdTree<AX, usize> = KdTree::build(content).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn it_can_hold_a_single_point() {
        let tree: KdTree<AX, usize> = KdTree::build([([2.0, 2.0, 2.0], 7)]).unwrap();

        assert_eq!(tree.size(), 1);
        assert_eq!(tree.dims(), 3);

        let root = tree.root.as_deref().unwrap();
        assert_eq!(root.item, 7);
        assert!(root.left.is_none());
        assert!(root.right.is_none());
    }

    #[test]
    fn it_rejects_mixed_dimensionality() {
        let content: Vec<(Vec<AX>, usize)> = vec![
            (vec![0.0, 0.0, 0.0], 0),
            (vec![1.0, 0.0, 0.0], 1),
            (vec![1.0, 0.0], 2),
        ];

        let result: Result<KdTree<AX, usize>, _> = KdTree::build(content);

        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn it_rejects_zero_dimensional_points() {
        let content: Vec<(Vec<AX>, usize)> = vec![(vec![], 0), (vec![], 1)];

        let result: Result<KdTree<AX, usize>, _> = KdTree::build(content);

        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: 1,
                actual: 0
            })
        );
    }
}
