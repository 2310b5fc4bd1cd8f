// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ordering among the segments currently crossing the sweep line.
//!
//! Both arguments must be left events whose segments overlap in their
//! x-range, otherwise they could not be in the scan line at the same time.
//! When used correctly the events are ordered by the ascending y-coordinate
//! of their segment's intersection with the sweep line.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::orientation::collinear;
use crate::sweep_event::{compare_events, SweepEvent};

/// Is the segment of `le1` below the segment of `le2` at the sweep line?
///
/// Non-collinear segments are ordered by side tests against the robust
/// predicate; collinear segments are ordered subject before clipping, then by
/// contour and edge id so that two segments sharing both endpoints still sort
/// consistently. This is a strict total order.
pub fn compare_events_by_segments(le1: &Rc<SweepEvent>, le2: &Rc<SweepEvent>) -> Ordering {
    if Rc::ptr_eq(le1, le2) {
        return Ordering::Equal;
    }

    debug_assert!(le1.is_left());
    debug_assert!(le2.is_left());

    let p1 = le1.point;
    let q1 = le1.other_point();
    let p2 = le2.point;
    let q2 = le2.other_point();

    if !collinear(p1, q1, p2) || !collinear(p1, q1, q2) {
        // Segments are not collinear.

        // If they share their left endpoint, use the right endpoint to sort.
        if p1 == p2 {
            return if le1.is_below(q2) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        // Different left endpoints on the same vertical: sort by y.
        if p1.x == p2.x {
            return if p1.y < p2.y {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        // The segment inserted later is tested against the one already
        // spanning the sweep line.
        return if compare_events(le1, le2) == Ordering::Greater {
            // le2 was inserted first.
            if le2.is_above(p1) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        } else if le1.is_below(p2) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // Collinear segments.
    if le1.polygon_type == le2.polygon_type {
        if p1 == p2 {
            return le1
                .contour_id
                .cmp(&le2.contour_id)
                .then_with(|| le1.edge_id.cmp(&le2.edge_id));
        }
    } else {
        // Collinear segments of separate operands: subject first.
        return le1.polygon_type.cmp(&le2.polygon_type);
    }

    compare_events(le1, le2)
}
