//! The trait that needs to be implemented by any distance metrics

/// Trait that needs to be implemented by any potential distance
/// metric to be used within queries
pub trait DistanceMetric<A> {
    /// returns the distance between two points of equal dimensionality, as
    /// measured by a particular distance metric
    fn dist(a: &[A], b: &[A]) -> A;

    /// returns the distance between two points along a single axis,
    /// as measured by a particular distance metric.
    ///
    /// (used by the NN query implementation as the lower bound on the
    /// distance to anything on the far side of a splitting plane when
    /// deciding whether that subtree can be pruned)
    fn dist1(a: A, b: A) -> A;
}
