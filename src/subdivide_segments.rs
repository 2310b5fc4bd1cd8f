// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sweep itself: process the event queue left to right, keep the scan
//! line current, subdivide intersecting segments and classify every left
//! event against its lower neighbor.

use std::collections::BinaryHeap;
use std::rc::Rc;

use tracing::trace;

use crate::compute_fields::compute_fields;
use crate::error::BooleanOpError;
use crate::geometry::BoundingBox;
use crate::possible_intersection::possible_intersection;
use crate::scanline::ScanLine;
use crate::sweep_event::SweepEvent;
use crate::Operation;

/// Run the sweep over the filled queue. On success, returns all processed
/// events in sweep order; the result events among them carry their final
/// classification.
///
/// For intersection and difference the sweep stops early once the x
/// coordinate passes the last point that can still contribute to the result.
pub fn subdivide(
    event_queue: &mut BinaryHeap<Rc<SweepEvent>>,
    sbbox: &BoundingBox,
    cbbox: &BoundingBox,
    operation: Operation,
) -> Result<Vec<Rc<SweepEvent>>, BooleanOpError> {
    let mut scan_line = ScanLine::new();
    let mut sorted_events: Vec<Rc<SweepEvent>> = Vec::new();

    let rightbound = sbbox.max.x.min(cbbox.max.x);

    while let Some(event) = event_queue.pop() {
        trace!(
            x = event.point.x,
            y = event.point.y,
            is_left = event.is_left(),
            active = scan_line.len(),
            "sweep event"
        );
        sorted_events.push(Rc::clone(&event));

        if operation == Operation::Intersection && event.point.x > rightbound
            || operation == Operation::Difference && event.point.x > sbbox.max.x
        {
            // Nothing to the right can contribute to the result anymore.
            break;
        }

        if event.is_left() {
            scan_line.insert(Rc::clone(&event));

            let maybe_prev = scan_line.prev(&event).cloned();
            let maybe_next = scan_line.next(&event).cloned();

            compute_fields(&event, maybe_prev.as_ref(), operation);

            if let Some(next) = &maybe_next {
                if possible_intersection(&event, next, event_queue) == 2 {
                    // Overlap starting at the current point: the flags of
                    // both edges depend on each other and must be redone.
                    compute_fields(&event, maybe_prev.as_ref(), operation);
                    compute_fields(next, Some(&event), operation);
                }
            }

            if let Some(prev) = &maybe_prev {
                if possible_intersection(prev, &event, event_queue) == 2 {
                    let maybe_prev_prev = scan_line.prev(prev).cloned();
                    compute_fields(prev, maybe_prev_prev.as_ref(), operation);
                    compute_fields(&event, Some(prev), operation);
                }
            }
        } else if let Some(other_event) = event.get_other_event() {
            let maybe_prev = scan_line.prev(&other_event).cloned();
            let maybe_next = scan_line.next(&other_event).cloned();

            // Every left event was inserted exactly once; a miss here means
            // the scan line order went inconsistent, which would silently
            // corrupt the result.
            if !scan_line.remove(&other_event) {
                return Err(BooleanOpError::InternalInconsistency(
                    "scan line does not contain the segment to remove",
                ));
            }

            // The removed segment may have separated two segments that
            // intersect further right.
            if let (Some(prev), Some(next)) = (maybe_prev, maybe_next) {
                possible_intersection(&prev, &next, event_queue);
            }
        }
    }

    Ok(sorted_events)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fill_queue::fill_queue;
    use crate::geometry::{MultiPolygon, Point, Polygon, Ring};
    use std::cmp::Ordering;

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon {
        MultiPolygon::from_polygon(Polygon::new(Ring::from_iter([
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ])))
    }

    #[test]
    fn test_events_come_out_in_sweep_order() {
        let subject = square(0., 0., 2.);
        let clipping = square(1., 1., 2.);
        let mut filled = fill_queue(&subject, &clipping);

        let sorted = subdivide(
            &mut filled.queue,
            &filled.subject_bbox,
            &filled.clipping_bbox,
            Operation::Union,
        )
        .unwrap();

        for pair in sorted.windows(2) {
            assert_ne!(
                pair[0].point.lex_cmp(&pair[1].point),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_overlapping_squares_are_subdivided() {
        let subject = square(0., 0., 2.);
        let clipping = square(1., 1., 2.);
        let mut filled = fill_queue(&subject, &clipping);

        let sorted = subdivide(
            &mut filled.queue,
            &filled.subject_bbox,
            &filled.clipping_bbox,
            Operation::Union,
        )
        .unwrap();

        // The boundaries cross at (2, 1) and (1, 2); each crossing splits one
        // edge of each square, so the 16 original events grow by 8.
        assert_eq!(sorted.len(), 24);

        let result_points: Vec<Point> = sorted
            .iter()
            .filter(|e| e.is_left() && e.is_in_result())
            .map(|e| e.point)
            .collect();

        // Edges inside the other square must not be part of the union.
        assert!(!result_points.contains(&Point::new(1., 1.)));
        assert!(result_points.contains(&Point::new(0., 0.)));
    }

    #[test]
    fn test_intersection_sweep_stops_at_rightbound() {
        let subject = square(0., 0., 1.);
        let clipping = square(10., 0., 1.);
        let mut filled = fill_queue(&subject, &clipping);
        let total = filled.queue.len();

        let sorted = subdivide(
            &mut filled.queue,
            &filled.subject_bbox,
            &filled.clipping_bbox,
            Operation::Intersection,
        )
        .unwrap();

        // The sweep must bail out once it passes x = 1.
        assert!(sorted.len() < total);
    }
}
