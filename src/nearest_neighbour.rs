//! A result item returned by a query
use crate::types::Content;
use std::cmp::Ordering;

/// Represents the result of a nearest neighbour query, with `distance` being
/// the distance of the found point from the query point under the metric the
/// query ran with, `point` borrowing the found point's co-ordinates from the
/// tree, and `item` being the label that was stored against that point.
#[derive(Debug, Copy, Clone)]
pub struct NearestNeighbour<'t, A, T> {
    /// the distance of the found point from the query point according to the
    /// supplied distance metric
    pub distance: A,
    /// the co-ordinates of the found point, borrowed from the tree
    pub point: &'t [A],
    /// the label stored against the found point
    pub item: T,
}

impl<A: PartialOrd, T: Content> Ord for NearestNeighbour<'_, A, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: PartialOrd, T: Content> PartialOrd for NearestNeighbour<'_, A, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl<A: PartialEq, T: Content> Eq for NearestNeighbour<'_, A, T> {}

impl<A: PartialEq, T: Content> PartialEq for NearestNeighbour<'_, A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.item == other.item
    }
}

impl<'t, A, T: Content> From<NearestNeighbour<'t, A, T>> for (&'t [A], T) {
    fn from(elem: NearestNeighbour<'t, A, T>) -> Self {
        (elem.point, elem.item)
    }
}
