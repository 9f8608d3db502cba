#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::invalid_codeblock_attributes)]

//! # Vicinity
//!
//! A balanced k-d tree spatial index for nearest-neighbour lookups over
//! labelled point sets.
//!
//! A [`KdTree`] is built once from a finite collection of `(point, label)`
//! pairs and is immutable from then on: there is no insert or remove, and a
//! changed point set means building a new tree. In exchange the tree is
//! always balanced, construction is a pure function of its input, and a
//! finished tree can be queried concurrently from any number of threads.
//!
//! Dimensionality is a runtime property: it is fixed by the first point fed
//! to [`KdTree::build`] and every later point or query target is validated
//! against it, so coordinate vectors can come straight from sources whose
//! arity is only known at runtime (mesh vertices, imported point sets, user
//! data). Mismatches surface as [`Error::DimensionMismatch`], never as
//! silent truncation.
//!
//! The motivating workload is mapping vertices of one mesh onto the closest
//! vertices of another: index one mesh's world-space positions keyed by
//! vertex id, then look up each vertex of the other mesh. Nothing in the
//! crate knows about meshes, though; points and labels are plain data.
//!
//! ## Usage
//! ```rust
//! use vicinity::distance::SquaredEuclidean;
//! use vicinity::KdTree;
//!
//! let vertices = vec![
//!     (vec![0.0f64, 0.0, 0.0], 0u32),
//!     (vec![1.0, 0.0, 0.0], 1),
//!     (vec![0.0, 1.0, 0.0], 2),
//!     (vec![5.0, 5.0, 5.0], 3),
//! ];
//!
//! let tree: KdTree<f64, u32> = KdTree::build(vertices)?;
//! assert_eq!(tree.size(), 4);
//!
//! let nearest = tree.nearest_one::<SquaredEuclidean>(&[0.1, 0.1, 0.1])?;
//! assert_eq!(nearest.item, 0);
//! assert_eq!(nearest.point, &[0.0, 0.0, 0.0]);
//!
//! let nearest = tree.nearest_one::<SquaredEuclidean>(&[4.9, 4.9, 4.9])?;
//! assert_eq!(nearest.item, 3);
//! # Ok::<(), vicinity::Error>(())
//! ```

mod construction;
pub mod distance;
mod distance_metric;
mod error;
mod iter;
mod kdtree;
mod nearest_neighbour;
mod query;
pub mod types;

pub use crate::distance_metric::DistanceMetric;
pub use crate::error::Error;
pub use crate::kdtree::KdTree;
pub use crate::nearest_neighbour::NearestNeighbour;
