// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Segment-segment intersection kernel.
//!
//! Classification (does an intersection exist, is it a point or an overlap,
//! is a shared point an endpoint) is decided exclusively by the robust
//! orientation predicate. Floating-point arithmetic only enters when a proper
//! crossing needs an interior point computed; endpoint touches return the
//! endpoint coordinates unchanged.

use crate::geometry::Point;
use crate::orientation::{orient2d, Orientation};

/// Intersection of two closed segments.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum SegmentIntersection {
    None,
    /// The segments meet in exactly one point.
    Point(Point),
    /// The segments are collinear and share a whole interval, given by its
    /// lexicographically first and last point.
    Overlap(Point, Point),
}

/// Intersect segment `(a1, a2)` with segment `(b1, b2)`.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> SegmentIntersection {
    let o_b1 = orient2d(a1, a2, b1);
    let o_b2 = orient2d(a1, a2, b2);

    if o_b1 == Orientation::Collinear && o_b2 == Orientation::Collinear {
        return collinear_intersection(a1, a2, b1, b2);
    }

    let o_a1 = orient2d(b1, b2, a1);
    let o_a2 = orient2d(b1, b2, a2);

    // An endpoint lying on the other segment is returned exactly, so touching
    // configurations never produce a perturbed point.
    if o_b1 == Orientation::Collinear {
        return point_touch(a1, a2, b1);
    }
    if o_b2 == Orientation::Collinear {
        return point_touch(a1, a2, b2);
    }
    if o_a1 == Orientation::Collinear {
        return point_touch(b1, b2, a1);
    }
    if o_a2 == Orientation::Collinear {
        return point_touch(b1, b2, a2);
    }

    // Proper crossing: the endpoints of each segment straddle the other's line.
    if o_b1 != o_b2 && o_a1 != o_a2 {
        return SegmentIntersection::Point(line_crossing(a1, a2, b1, b2));
    }

    SegmentIntersection::None
}

/// `p` is on the line through `a` and `b`; does it fall within the segment?
fn in_span(a: Point, b: Point, p: Point) -> bool {
    if a.x != b.x {
        a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x)
    } else {
        a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
    }
}

fn point_touch(a: Point, b: Point, p: Point) -> SegmentIntersection {
    if in_span(a, b, p) {
        SegmentIntersection::Point(p)
    } else {
        SegmentIntersection::None
    }
}

/// Interior crossing point of two non-parallel segments.
fn line_crossing(a1: Point, a2: Point, b1: Point, b2: Point) -> Point {
    let da = Point::new(a2.x - a1.x, a2.y - a1.y);
    let db = Point::new(b2.x - b1.x, b2.y - b1.y);

    // Non-zero, the caller established a proper crossing.
    let denom = da.x * db.y - da.y * db.x;
    let t = ((b1.x - a1.x) * db.y - (b1.y - a1.y) * db.x) / denom;

    Point::new(a1.x + t * da.x, a1.y + t * da.y)
}

/// Both segments lie on one line: intersect their lexicographic intervals.
fn collinear_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> SegmentIntersection {
    use std::cmp::Ordering;

    let sort = |p: Point, q: Point| {
        if p.lex_cmp(&q) == Ordering::Greater {
            (q, p)
        } else {
            (p, q)
        }
    };
    let (a_lo, a_hi) = sort(a1, a2);
    let (b_lo, b_hi) = sort(b1, b2);

    // Lexicographic order is monotone along any line, so interval arithmetic
    // on the endpoints is enough.
    let lo = if a_lo.lex_cmp(&b_lo) == Ordering::Less { b_lo } else { a_lo };
    let hi = if a_hi.lex_cmp(&b_hi) == Ordering::Less { a_hi } else { b_hi };

    match lo.lex_cmp(&hi) {
        Ordering::Less => SegmentIntersection::Overlap(lo, hi),
        Ordering::Equal => SegmentIntersection::Point(lo),
        Ordering::Greater => SegmentIntersection::None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_disjoint_segments() {
        assert_eq!(
            segment_intersection(p(0., 0.), p(1., 0.), p(0., 1.), p(1., 1.)),
            SegmentIntersection::None
        );
        // Collinear but separated.
        assert_eq!(
            segment_intersection(p(0., 0.), p(1., 0.), p(2., 0.), p(3., 0.)),
            SegmentIntersection::None
        );
        // On crossing lines, but the crossing is outside both segments.
        assert_eq!(
            segment_intersection(p(0., 0.), p(1., 1.), p(3., 0.), p(2., 1.)),
            SegmentIntersection::None
        );
    }

    #[test]
    fn test_proper_crossing() {
        assert_eq!(
            segment_intersection(p(0., 0.), p(2., 2.), p(0., 2.), p(2., 0.)),
            SegmentIntersection::Point(p(1., 1.))
        );
    }

    #[test]
    fn test_endpoint_touch_is_exact() {
        // b1 lies in the interior of segment a; the returned point is b1
        // itself, not a recomputed approximation.
        let b1 = p(0.3, 0.3);
        assert_eq!(
            segment_intersection(p(0., 0.), p(1., 1.), b1, p(1., 0.)),
            SegmentIntersection::Point(b1)
        );

        // Shared endpoint.
        assert_eq!(
            segment_intersection(p(0., 0.), p(1., 1.), p(1., 1.), p(2., 0.)),
            SegmentIntersection::Point(p(1., 1.))
        );
    }

    #[test]
    fn test_collinear_overlap() {
        assert_eq!(
            segment_intersection(p(0., 0.), p(2., 0.), p(1., 0.), p(3., 0.)),
            SegmentIntersection::Overlap(p(1., 0.), p(2., 0.))
        );
        // Touching endpoints of collinear segments degenerate to a point.
        assert_eq!(
            segment_intersection(p(0., 0.), p(1., 0.), p(1., 0.), p(2., 0.)),
            SegmentIntersection::Point(p(1., 0.))
        );
        // Full containment.
        assert_eq!(
            segment_intersection(p(0., 0.), p(3., 0.), p(1., 0.), p(2., 0.)),
            SegmentIntersection::Overlap(p(1., 0.), p(2., 0.))
        );
        // Vertical overlap.
        assert_eq!(
            segment_intersection(p(0., 0.), p(0., 2.), p(0., 1.), p(0., 3.)),
            SegmentIntersection::Overlap(p(0., 1.), p(0., 2.))
        );
    }
}
