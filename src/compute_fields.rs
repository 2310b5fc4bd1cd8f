// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Classification of a left event relative to the segment directly below it
//! in the scan line: the in/out flags, membership in the result of the
//! requested operation, and the link to the nearest result edge below.

use std::rc::Rc;

use crate::sweep_event::{EdgeType, ResultTransition, SweepEvent};
use crate::Operation;

/// Derive the flags of `event` from the segment `maybe_prev` directly below
/// it, or from being the lowest segment at this x.
pub fn compute_fields(
    event: &Rc<SweepEvent>,
    maybe_prev: Option<&Rc<SweepEvent>>,
    operation: Operation,
) {
    if let Some(prev) = maybe_prev {
        if event.polygon_type == prev.polygon_type {
            // Previous segment belongs to the same operand: crossing this
            // edge toggles the own-polygon parity.
            event.set_in_out(!prev.is_in_out(), prev.is_other_in_out());
        } else {
            // Previous segment belongs to the other operand. A vertical
            // previous segment does not change the parity above it.
            let other_in_out = if prev.is_vertical() {
                !prev.is_in_out()
            } else {
                prev.is_in_out()
            };
            event.set_in_out(!prev.is_other_in_out(), other_in_out);
        }

        // Connect to the nearest previous segment that actually belongs to
        // the result, skipping vertical ones.
        let prev_in_result = if !in_result(prev, operation) || prev.is_vertical() {
            prev.get_prev_in_result()
        } else {
            Some(Rc::clone(prev))
        };
        event.set_prev_in_result(prev_in_result.as_ref());
    } else {
        // Lowest segment: outside of both operands.
        event.set_in_out(false, true);
        event.set_prev_in_result(None);
    }

    event.set_result_transition(if in_result(event, operation) {
        determine_result_transition(event, operation)
    } else {
        ResultTransition::None
    });
}

/// Does the edge of this left event belong to the result boundary of the
/// operation?
fn in_result(event: &SweepEvent, operation: Operation) -> bool {
    match event.get_edge_type() {
        EdgeType::Normal => match operation {
            Operation::Intersection => !event.is_other_in_out(),
            Operation::Union => event.is_other_in_out(),
            Operation::Difference => event.is_subject() == event.is_other_in_out(),
            Operation::Xor => true,
        },
        EdgeType::SameTransition => {
            operation == Operation::Intersection || operation == Operation::Union
        }
        EdgeType::DifferentTransition => operation == Operation::Difference,
        EdgeType::NonContributing => false,
    }
}

/// For a result edge, decide whether crossing it upward enters or leaves the
/// result region.
fn determine_result_transition(event: &SweepEvent, operation: Operation) -> ResultTransition {
    let this_in = !event.is_in_out();
    let that_in = !event.is_other_in_out();

    let is_in = match operation {
        Operation::Intersection => this_in && that_in,
        Operation::Union => this_in || that_in,
        Operation::Xor => this_in ^ that_in,
        Operation::Difference => {
            if event.is_subject() {
                this_in && !that_in
            } else {
                that_in && !this_in
            }
        }
    };

    if is_in {
        ResultTransition::OutIn
    } else {
        ResultTransition::InOut
    }
}
