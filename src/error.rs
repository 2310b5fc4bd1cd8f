// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error taxonomy of the engine.
//!
//! Input-validation errors are detected eagerly, before any sweep state is
//! allocated. Internal consistency failures indicate a correctness bug in the
//! sweep rather than bad input; they abort the operation and discard its
//! partial state. The algorithm is deterministic, so neither kind is worth
//! retrying.

/// Errors reported by a boolean operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BooleanOpError {
    /// An input ring has fewer than 3 distinct points once zero-length edges
    /// are dropped and therefore bounds no area.
    #[error("input ring has only {effective} distinct points after dropping zero-length edges, need at least 3")]
    DegenerateRing {
        /// Number of distinct points the ring is left with.
        effective: usize,
    },

    /// An input coordinate is NaN or infinite.
    #[error("input coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },

    /// The sweep reached a state that must not occur for valid input: a result
    /// contour that cannot be closed, or a scan line removal that missed.
    #[error("internal sweep inconsistency: {0}")]
    InternalInconsistency(&'static str),
}
