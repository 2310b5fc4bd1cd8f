// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Connect the classified result edges into closed contours and establish the
//! exterior/hole hierarchy.
//!
//! Result events are re-sorted into a flat vector, linked to their partner by
//! index, and traversed point by point; the `prev_in_result` links decide for
//! each new contour whether it is an exterior boundary or a hole, and of what.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::trace;

use crate::error::BooleanOpError;
use crate::geometry::Point;
use crate::sweep_event::{compare_events, ResultTransition, SweepEvent};

/// One closed result contour. Whether it is an exterior boundary or a hole is
/// recorded in `hole_of`; an exterior contour lists its holes in `hole_ids`.
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vec<Point>,
    /// Indices of the holes of this (exterior) contour.
    pub hole_ids: Vec<usize>,
    /// Index of the exterior contour this hole belongs to.
    pub hole_of: Option<usize>,
    /// Nesting depth: 0 for outermost exteriors, odd for holes.
    pub depth: usize,
}

impl Contour {
    fn new() -> Contour {
        Contour {
            points: Vec::new(),
            hole_ids: Vec::new(),
            hole_of: None,
            depth: 0,
        }
    }

    pub fn is_exterior(&self) -> bool {
        self.hole_of.is_none()
    }
}

/// Collect the result events, sort them and cross-link each event with the
/// vector position of its partner.
fn order_events(sorted_events: &[Rc<SweepEvent>]) -> Vec<Rc<SweepEvent>> {
    let mut result_events: Vec<Rc<SweepEvent>> = sorted_events
        .iter()
        .filter(|event| {
            if event.is_left() {
                event.is_in_result()
            } else {
                event
                    .get_other_event()
                    .map(|other| other.is_in_result())
                    .unwrap_or(false)
            }
        })
        .cloned()
        .collect();

    // Events divided late in the sweep may be slightly out of order; the
    // sequence is almost sorted, so a bubble pass settles quickly.
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for i in 1..result_events.len() {
            if compare_events(&result_events[i - 1], &result_events[i]) == std::cmp::Ordering::Greater {
                result_events.swap(i - 1, i);
                sorted = false;
            }
        }
    }

    for (pos, event) in result_events.iter().enumerate() {
        event.set_other_pos(pos);
    }

    // Let each event know where its partner sits.
    for event in &result_events {
        if !event.is_left() {
            if let Some(other) = event.get_other_event() {
                let tmp = event.get_other_pos();
                event.set_other_pos(other.get_other_pos());
                other.set_other_pos(tmp);
            }
        }
    }

    result_events
}

/// Decide hierarchy and depth of a new contour from the nearest result edge
/// below its starting event.
fn initialize_contour_from_context(
    event: &Rc<SweepEvent>,
    contours: &mut [Contour],
    contour_id: usize,
) -> Contour {
    let mut contour = Contour::new();

    // The edge below was processed in an earlier iteration, so its output
    // contour id is already assigned.
    if let Some(prev_in_result) = event.get_prev_in_result() {
        if let Some(lower_contour_id) = prev_in_result.get_output_contour_id() {
            if prev_in_result.get_result_transition() == ResultTransition::OutIn {
                // Below is the interior of the result: this contour is a hole.
                if let Some(parent_id) = contours[lower_contour_id].hole_of {
                    // The lower contour is itself a hole: attach to the same
                    // exterior at the same depth.
                    contours[parent_id].hole_ids.push(contour_id);
                    contour.hole_of = Some(parent_id);
                    contour.depth = contours[lower_contour_id].depth;
                } else {
                    contours[lower_contour_id].hole_ids.push(contour_id);
                    contour.hole_of = Some(lower_contour_id);
                    contour.depth = contours[lower_contour_id].depth + 1;
                }
            } else {
                // Below is the exterior of the result: sibling contour.
                contour.depth = contours[lower_contour_id].depth;
            }
        }
    }

    contour
}

fn mark_as_processed(
    processed: &mut HashSet<usize>,
    result_events: &[Rc<SweepEvent>],
    pos: usize,
    contour_id: usize,
) {
    processed.insert(pos);
    result_events[pos].set_output_contour_id(contour_id);
}

/// Fix, for every run of result events sharing one point, the cyclic order in
/// which the traversal moves through them: right events by increasing index,
/// then left events by decreasing index, and back to the first right event.
///
/// That cycle is the rotational order of the edges around the vertex, so
/// walking it from the arrival event always continues on a neighboring edge.
/// A plain index scan does not guarantee that and can jump between contours
/// that merely touch at the point, stitching them into a self-crossing ring.
fn precompute_iteration_order(result_events: &[Rc<SweepEvent>]) -> Vec<usize> {
    let mut iteration_order = vec![0; result_events.len()];

    let mut i = 0;
    while i < result_events.len() {
        let point = result_events[i].point;

        // The event order puts right events before left events at the same
        // point, so each run splits into two contiguous blocks.
        let r_from = i;
        while i < result_events.len()
            && result_events[i].point == point
            && !result_events[i].is_left()
        {
            i += 1;
        }
        let r_upto = i;

        let l_from = i;
        while i < result_events.len() && result_events[i].point == point {
            i += 1;
        }
        let l_upto = i;

        let has_right = r_upto > r_from;
        let has_left = l_upto > l_from;

        if has_right {
            for j in r_from..r_upto - 1 {
                iteration_order[j] = j + 1;
            }
            iteration_order[r_upto - 1] = if has_left { l_upto - 1 } else { r_from };
        }
        if has_left {
            for j in l_from + 1..l_upto {
                iteration_order[j] = j - 1;
            }
            iteration_order[l_from] = if has_right { r_from } else { l_upto - 1 };
        }
    }

    iteration_order
}

/// Next unprocessed event at the current point, following the precomputed
/// cycle; `None` once every event at the point is used up, which closes the
/// contour.
fn next_pos(pos: usize, iteration_order: &[usize], processed: &HashSet<usize>) -> Option<usize> {
    let mut candidate = iteration_order[pos];
    while candidate != pos {
        if !processed.contains(&candidate) {
            return Some(candidate);
        }
        candidate = iteration_order[candidate];
    }
    None
}

/// Assemble the result contours from the swept events.
pub fn connect_edges(sorted_events: &[Rc<SweepEvent>]) -> Result<Vec<Contour>, BooleanOpError> {
    let result_events = order_events(sorted_events);
    let iteration_order = precompute_iteration_order(&result_events);

    let mut contours: Vec<Contour> = Vec::new();
    let mut processed: HashSet<usize> = HashSet::new();

    for i in 0..result_events.len() {
        if processed.contains(&i) {
            continue;
        }

        let contour_id = contours.len();
        let mut contour = initialize_contour_from_context(&result_events[i], &mut contours, contour_id);

        let mut pos = i;

        let initial = result_events[i].point;
        contour.points.push(initial);

        // Every iteration processes one edge, so a well-formed traversal
        // terminates within the number of result events.
        let mut remaining = result_events.len();
        loop {
            if remaining == 0 {
                return Err(BooleanOpError::InternalInconsistency(
                    "result contour does not close",
                ));
            }
            remaining -= 1;

            mark_as_processed(&mut processed, &result_events, pos, contour_id);

            pos = result_events[pos].get_other_pos();

            mark_as_processed(&mut processed, &result_events, pos, contour_id);
            contour.points.push(result_events[pos].point);

            match next_pos(pos, &iteration_order, &processed) {
                Some(next) => pos = next,
                None => break,
            }
        }

        // The traversal revisits the starting point; the closing edge of the
        // output ring stays implicit.
        if contour.points.last() == contour.points.first() && contour.points.len() > 1 {
            contour.points.pop();
        }

        trace!(
            contour_id,
            points = contour.points.len(),
            depth = contour.depth,
            "closed contour"
        );
        contours.push(contour);
    }

    Ok(contours)
}
