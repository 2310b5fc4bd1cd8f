// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

#![deny(missing_docs)]

//! Boolean operations (union, intersection, difference, xor) on polygons
//! with holes, computed with a single sweep over both operands.
//!
//! Operands are [`Polygon`]s or [`MultiPolygon`]s built from plain `f64`
//! rings; input winding direction does not matter. Results always come back
//! as a [`MultiPolygon`] whose exterior rings wind counter-clockwise and
//! whose holes wind clockwise.
//!
//! ```
//! use planar_booleanop::{union, Polygon, Ring};
//!
//! let a = Polygon::new(Ring::from_iter([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
//! let b = Polygon::new(Ring::from_iter([(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]));
//!
//! let result = union(&a, &b)?;
//! assert_eq!(result.len(), 1);
//! assert_eq!(result.area(), 7.0);
//! # Ok::<(), planar_booleanop::BooleanOpError>(())
//! ```

mod booleanop;
mod compare_segments;
mod compute_fields;
mod connect_edges;
mod error;
mod fill_queue;
mod geometry;
mod orientation;
mod possible_intersection;
mod scanline;
mod segment_intersection;
mod subdivide_segments;
mod sweep_event;

// API exports.
pub use booleanop::{boolean_op, difference, intersection, union, xor, BooleanOp, Operation};
pub use error::BooleanOpError;
pub use geometry::{MultiPolygon, Point, Polygon, Ring};
