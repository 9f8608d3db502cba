use crate::distance_metric::DistanceMetric;
use crate::error::Error;
use crate::kdtree::{KdTree, Node};
use crate::nearest_neighbour::NearestNeighbour;
use crate::types::{Axis, Content};

impl<A: Axis, T: Content> KdTree<A, T> {
    /// Queries the tree to find the nearest point to `query`, using the
    /// specified distance metric.
    ///
    /// Exactly one best match comes back. Where several stored points are at
    /// equal distance from `query`, the winner is whichever the traversal
    /// visits first; that choice is deterministic for a tree built from a
    /// fixed input sequence but is otherwise unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree was built from zero points,
    /// and [`Error::DimensionMismatch`] if `query` differs in dimensionality
    /// from the points the tree was built with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vicinity::distance::SquaredEuclidean;
    /// use vicinity::KdTree;
    ///
    /// let tree: KdTree<f64, u32> = KdTree::build([
    ///     ([1.0, 2.0, 5.0], 100),
    ///     ([2.0, 3.0, 6.0], 101),
    /// ])?;
    ///
    /// let nearest = tree.nearest_one::<SquaredEuclidean>(&[1.0, 2.0, 5.1])?;
    ///
    /// assert!((nearest.distance - 0.01f64).abs() < f64::EPSILON);
    /// assert_eq!(nearest.item, 100);
    /// # Ok::<(), vicinity::Error>(())
    /// ```
    #[inline]
    pub fn nearest_one<D>(&self, query: &[A]) -> Result<NearestNeighbour<'_, A, T>, Error>
    where
        D: DistanceMetric<A>,
    {
        let root = self.root.as_deref().ok_or(Error::EmptyTree)?;
        if query.len() != self.k {
            return Err(Error::DimensionMismatch {
                expected: self.k,
                actual: query.len(),
            });
        }

        let mut best = NearestNeighbour {
            distance: A::infinity(),
            point: &root.point[..],
            item: root.item,
        };
        Self::nearest_one_recurse::<D>(root, query, &mut best);

        Ok(best)
    }

    fn nearest_one_recurse<'t, D>(
        node: &'t Node<A, T>,
        query: &[A],
        best: &mut NearestNeighbour<'t, A, T>,
    ) where
        D: DistanceMetric<A>,
    {
        let dist = D::dist(query, &node.point);
        if dist < best.distance {
            *best = NearestNeighbour {
                distance: dist,
                point: &node.point[..],
                item: node.item,
            };
        }

        let (closer_node, further_node) = if query[node.axis] < node.point[node.axis] {
            (node.left.as_deref(), node.right.as_deref())
        } else {
            (node.right.as_deref(), node.left.as_deref())
        };

        if let Some(closer_node) = closer_node {
            Self::nearest_one_recurse::<D>(closer_node, query, best);
        }

        // the far half-space can only hold a better match if the splitting
        // plane itself is nearer than the best match found so far
        if let Some(further_node) = further_node {
            if D::dist1(query[node.axis], node.point[node.axis]) < best.distance {
                Self::nearest_one_recurse::<D>(further_node, query, best);
            }
        }
    }
}
