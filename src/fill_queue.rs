// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Turn the rings of both operands into the initial event queue.
//!
//! Every edge contributes a linked pair of events. Zero-length edges, which
//! input validation allows (the ring may repeat its first point to close
//! itself, or carry consecutive duplicates), produce no events at all.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::{Rc, Weak};

use crate::geometry::{BoundingBox, MultiPolygon, Ring};
use crate::sweep_event::{PolygonType, SweepEvent};

/// The initial queue together with the operand bounding boxes, which the
/// driver uses for the trivial-case shortcut and early sweep termination.
pub struct FilledQueue {
    pub queue: BinaryHeap<Rc<SweepEvent>>,
    pub subject_bbox: BoundingBox,
    pub clipping_bbox: BoundingBox,
}

/// Create the event queue from the rings of both operands.
///
/// Contour and edge ids are assigned from counters scoped to this call; they
/// only serve as deterministic ordering tie-breaks.
pub fn fill_queue(subject: &MultiPolygon, clipping: &MultiPolygon) -> FilledQueue {
    let mut queue = BinaryHeap::new();
    let mut subject_bbox = BoundingBox::empty();
    let mut clipping_bbox = BoundingBox::empty();
    let mut contour_id = 0;
    let mut edge_id = 0;

    for polygon in &subject.polygons {
        for ring in polygon.rings() {
            process_ring(
                ring,
                PolygonType::Subject,
                contour_id,
                &mut edge_id,
                &mut queue,
                &mut subject_bbox,
            );
            contour_id += 1;
        }
    }
    for polygon in &clipping.polygons {
        for ring in polygon.rings() {
            process_ring(
                ring,
                PolygonType::Clipping,
                contour_id,
                &mut edge_id,
                &mut queue,
                &mut clipping_bbox,
            );
            contour_id += 1;
        }
    }

    FilledQueue {
        queue,
        subject_bbox,
        clipping_bbox,
    }
}

fn process_ring(
    ring: &Ring,
    polygon_type: PolygonType,
    contour_id: usize,
    edge_id: &mut usize,
    queue: &mut BinaryHeap<Rc<SweepEvent>>,
    bbox: &mut BoundingBox,
) {
    for (a, b) in ring.edges() {
        if a == b {
            // Zero-length edge, drop silently.
            continue;
        }

        let e1 = SweepEvent::new_rc(contour_id, *edge_id, a, false, Weak::new(), polygon_type);
        let e2 = SweepEvent::new_rc(
            contour_id,
            *edge_id,
            b,
            false,
            Rc::downgrade(&e1),
            polygon_type,
        );
        e1.set_other_event(&e2);
        *edge_id += 1;

        if a.lex_cmp(&b) == Ordering::Less {
            e1.set_left(true);
        } else {
            e2.set_left(true);
        }

        bbox.merge_point(a);
        bbox.merge_point(b);

        queue.push(e1);
        queue.push(e2);
    }
}
