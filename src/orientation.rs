// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Robust orientation predicate.
//!
//! Every directional decision of the sweep (event ordering, scan line
//! ordering, side-of-segment tests, collinearity detection) goes through this
//! single predicate. It wraps the adaptive-precision `orient2d` of the
//! `robust` crate, so near-collinear configurations never flip sign due to
//! floating-point rounding. There are no epsilon comparisons anywhere in the
//! engine; point equality is exact coordinate equality.

use crate::geometry::Point;

/// Position of a point relative to a directed line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// The point lies to the right of the directed line (clockwise turn).
    Clockwise,
    /// The point lies exactly on the line.
    Collinear,
    /// The point lies to the left of the directed line (counter-clockwise turn).
    CounterClockwise,
}

/// Classify `c` relative to the directed line through `a` and `b`.
pub fn orient2d(a: Point, b: Point, c: Point) -> Orientation {
    let det = robust::orient2d(
        robust::Coord { x: a.x, y: a.y },
        robust::Coord { x: b.x, y: b.y },
        robust::Coord { x: c.x, y: c.y },
    );

    if det > 0. {
        Orientation::CounterClockwise
    } else if det < 0. {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// True if the three points lie on one line.
pub fn collinear(a: Point, b: Point, c: Point) -> bool {
    orient2d(a, b, c) == Orientation::Collinear
}
