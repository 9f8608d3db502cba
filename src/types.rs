//! Bounds aliases for the type parameters of [`KdTree`](crate::KdTree).

use num_traits::float::FloatCore;
use std::fmt::Debug;

/// Axis represents the traits that must be implemented by the type used for
/// point co-ordinates, the first generic parameter `A` on
/// [`KdTree`](crate::KdTree). This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}

/// Content represents the traits that must be implemented by the type used
/// for the labels stored against each point, the second generic parameter
/// `T` on [`KdTree`](crate::KdTree) — typically a vertex id or other small
/// index type. Labels are opaque to the tree and returned verbatim.
pub trait Content: PartialEq + Clone + Copy + Debug {}
impl<T: PartialEq + Clone + Copy + Debug> Content for T {}
