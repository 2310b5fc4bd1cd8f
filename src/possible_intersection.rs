// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Handle a possible intersection between two segments that became neighbors
//! in the scan line: subdivide them at the intersection point and classify
//! overlapping collinear edges.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::geometry::Point;
use crate::segment_intersection::{segment_intersection, SegmentIntersection};
use crate::sweep_event::{compare_events, EdgeType, SweepEvent};

/// Split the segment of the left event `se_l` at the interior point `inter`,
/// pushing the two new events onto the queue. Both halves keep the parent's
/// contour and edge id.
pub fn divide_segment(
    se_l: &Rc<SweepEvent>,
    inter: Point,
    queue: &mut BinaryHeap<Rc<SweepEvent>>,
) {
    debug_assert!(se_l.is_left());
    let se_r = match se_l.get_other_event() {
        Some(se) => se,
        None => return,
    };

    // Right event of the left half.
    let r = SweepEvent::new_rc(
        se_l.contour_id,
        se_l.edge_id,
        inter,
        false,
        Rc::downgrade(se_l),
        se_l.polygon_type,
    );
    // Left event of the right half.
    let l = SweepEvent::new_rc(
        se_l.contour_id,
        se_l.edge_id,
        inter,
        true,
        Rc::downgrade(&se_r),
        se_l.polygon_type,
    );

    if compare_events(&l, &se_r) == Ordering::Greater {
        // Rounding moved the intersection past the right endpoint; swap the
        // endpoint roles of the right half so the sweep order stays valid.
        se_r.set_left(true);
        l.set_left(false);
    }

    se_l.set_other_event(&r);
    se_r.set_other_event(&l);

    queue.push(l);
    queue.push(r);
}

/// Check the segments of two left events for an intersection and subdivide
/// them accordingly.
///
/// Returns the number of subdivision constellations found: 0 if the segments
/// do not interact (or only touch in a mutual endpoint), 1 for a single
/// dividing point, 2 for an overlap starting at a shared left endpoint (the
/// caller must recompute the fields of both events), 3 for the remaining
/// overlap configurations.
pub fn possible_intersection(
    se1: &Rc<SweepEvent>,
    se2: &Rc<SweepEvent>,
    queue: &mut BinaryHeap<Rc<SweepEvent>>,
) -> u8 {
    let (other1, other2) = match (se1.get_other_event(), se2.get_other_event()) {
        (Some(other1), Some(other2)) => (other1, other2),
        _ => return 0,
    };

    let inter = segment_intersection(se1.point, other1.point, se2.point, other2.point);

    match inter {
        SegmentIntersection::None => 0,
        SegmentIntersection::Point(p) => {
            // A shared endpoint is not an intersection to act on.
            if se1.point == se2.point || other1.point == other2.point {
                return 0;
            }
            if se1.point != p && other1.point != p {
                divide_segment(se1, p, queue);
            }
            if se2.point != p && other2.point != p {
                divide_segment(se2, p, queue);
            }
            1
        }
        SegmentIntersection::Overlap(_, _) => {
            // Overlapping edges of one and the same operand cancel within
            // that operand; they are left alone.
            if se1.polygon_type == se2.polygon_type {
                return 0;
            }
            handle_overlap(se1, se2, &other1, &other2, queue)
        }
    }
}

/// Collinear overlap of segments from different operands. Sorts the up to four
/// involved events, marks the edge types of the coinciding portion and
/// subdivides the non-coinciding remainders.
fn handle_overlap(
    se1: &Rc<SweepEvent>,
    se2: &Rc<SweepEvent>,
    other1: &Rc<SweepEvent>,
    other2: &Rc<SweepEvent>,
    queue: &mut BinaryHeap<Rc<SweepEvent>>,
) -> u8 {
    let mut events: Vec<Rc<SweepEvent>> = Vec::with_capacity(4);
    let left_coincide = se1.point == se2.point;
    let right_coincide = other1.point == other2.point;

    if !left_coincide {
        if compare_events(se1, se2) == Ordering::Greater {
            events.push(Rc::clone(se2));
            events.push(Rc::clone(se1));
        } else {
            events.push(Rc::clone(se1));
            events.push(Rc::clone(se2));
        }
    }
    if !right_coincide {
        if compare_events(other1, other2) == Ordering::Greater {
            events.push(Rc::clone(other2));
            events.push(Rc::clone(other1));
        } else {
            events.push(Rc::clone(other1));
            events.push(Rc::clone(other2));
        }
    }

    if left_coincide {
        // The coinciding portion starts at the shared left endpoint: one edge
        // carries the combined transition, the other is dropped.
        se2.set_edge_type(EdgeType::NonContributing);
        se1.set_edge_type(if se2.is_in_out() == se1.is_in_out() {
            EdgeType::SameTransition
        } else {
            EdgeType::DifferentTransition
        });

        if !right_coincide {
            // Split the longer segment at the shorter one's right endpoint.
            let longer_left = events[1]
                .get_other_event()
                .expect("sweep event must be paired");
            divide_segment(&longer_left, events[0].point, queue);
        }
        return 2;
    }

    if right_coincide {
        // Shared right endpoint: split the earlier segment at the later start.
        divide_segment(&events[0], events[1].point, queue);
        return 3;
    }

    let fully_contained = {
        let first_other = events[0]
            .get_other_event()
            .expect("sweep event must be paired");
        Rc::ptr_eq(&first_other, &events[3])
    };

    if fully_contained {
        // One segment contains the other: split the outer one twice.
        divide_segment(&events[0], events[1].point, queue);
        let outer_left = events[3]
            .get_other_event()
            .expect("sweep event must be paired");
        divide_segment(&outer_left, events[2].point, queue);
    } else {
        // Partial overlap: split each segment once.
        divide_segment(&events[0], events[1].point, queue);
        divide_segment(&events[1], events[2].point, queue);
    }
    3
}
