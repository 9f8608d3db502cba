//! Query implementations for [`KdTree`](crate::KdTree).

mod nearest_one;
