// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sweep event: one endpoint of one segment, together with its
//! classification state. Every segment is modeled as two events linked through
//! `other_event`, forming a cyclic pair with shared ownership; the links are
//! `Rc`/`Weak` handles, mutated through a `RefCell`d interior.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::{Rc, Weak};

use crate::geometry::Point;
use crate::orientation::{collinear, orient2d, Orientation};

/// Distinguish between the left and right operand of the boolean operation.
/// This matters for the boolean difference, which is not symmetric.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Ord, PartialOrd)]
pub enum PolygonType {
    /// First operand.
    Subject,
    /// Second operand.
    Clipping,
}

/// Classification assigned when two segments turn out collinear and
/// overlapping, so that the overlapped interval is not counted twice.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum EdgeType {
    Normal,
    /// Overlapped edge that is dropped entirely.
    NonContributing,
    /// Overlapping edges of both operands transition in the same direction.
    SameTransition,
    /// Overlapping edges of both operands transition in opposite directions.
    DifferentTransition,
}

/// Signed result classification of an edge: whether crossing it upward enters
/// or leaves the result region, or the edge is not part of the result at all.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ResultTransition {
    /// Not part of the result.
    None,
    /// Crossing upward leaves the result region.
    InOut,
    /// Crossing upward enters the result region.
    OutIn,
}

/// Mutable part of a sweep event. Borrow checking happens at runtime.
#[derive(Debug)]
struct MutablePart {
    /// Event representing the other endpoint of the segment.
    other_event: Weak<SweepEvent>,
    /// Nearest edge below this one that is part of the result. Non-owning;
    /// used to attribute holes to their enclosing contour.
    prev_in_result: Weak<SweepEvent>,
    /// Is this the sweep-order-first endpoint of the segment? Mutable because
    /// segment division may swap the roles of a pair.
    is_left: bool,
    edge_type: EdgeType,
    /// Does crossing this edge upward transition from outside to inside of
    /// its own polygon?
    in_out: bool,
    /// Same question for the other polygon's boundary at this edge.
    other_in_out: bool,
    result_transition: ResultTransition,
    /// Index of the paired event in the vector of result events.
    other_pos: usize,
    /// Output contour this event was traced into.
    output_contour_id: Option<usize>,
}

/// One endpoint of one segment of one input ring.
#[derive(Debug)]
pub struct SweepEvent {
    mutable: RefCell<MutablePart>,
    /// Point associated with the event.
    pub point: Point,
    /// Operand the segment belongs to.
    pub polygon_type: PolygonType,
    /// Ring the segment was created from. Ids are scoped to one operation
    /// call; there is no cross-call state.
    pub contour_id: usize,
    /// Id of the originating edge, used as the final ordering tie-break.
    /// Both halves of a divided segment keep their parent's id.
    pub edge_id: usize,
}

impl SweepEvent {
    /// Create a new sweep event wrapped into an `Rc`.
    pub fn new_rc(
        contour_id: usize,
        edge_id: usize,
        point: Point,
        is_left: bool,
        other_event: Weak<SweepEvent>,
        polygon_type: PolygonType,
    ) -> Rc<SweepEvent> {
        Rc::new(SweepEvent {
            mutable: RefCell::new(MutablePart {
                other_event,
                prev_in_result: Weak::new(),
                is_left,
                edge_type: EdgeType::Normal,
                in_out: false,
                other_in_out: false,
                result_transition: ResultTransition::None,
                other_pos: 0,
                output_contour_id: None,
            }),
            point,
            polygon_type,
            contour_id,
            edge_id,
        })
    }

    pub fn is_left(&self) -> bool {
        self.mutable.borrow().is_left
    }

    pub fn set_left(&self, is_left: bool) {
        self.mutable.borrow_mut().is_left = is_left;
    }

    pub fn is_subject(&self) -> bool {
        self.polygon_type == PolygonType::Subject
    }

    /// Get the event that represents the other endpoint of this segment.
    pub fn get_other_event(&self) -> Option<Rc<SweepEvent>> {
        self.mutable.borrow().other_event.upgrade()
    }

    pub fn set_other_event(&self, other_event: &Rc<SweepEvent>) {
        self.mutable.borrow_mut().other_event = Rc::downgrade(other_event);
    }

    /// The other endpoint of the segment. Every event is paired immediately
    /// after construction, so the partner always exists.
    pub fn other_point(&self) -> Point {
        self.get_other_event()
            .expect("sweep event must be paired")
            .point
    }

    pub fn is_vertical(&self) -> bool {
        self.point.x == self.other_point().x
    }

    /// Is the segment of this event below the point `p`?
    pub fn is_below(&self, p: Point) -> bool {
        let other = self.other_point();
        if self.is_left() {
            orient2d(self.point, other, p) == Orientation::CounterClockwise
        } else {
            orient2d(other, self.point, p) == Orientation::CounterClockwise
        }
    }

    pub fn is_above(&self, p: Point) -> bool {
        !self.is_below(p)
    }

    pub fn get_edge_type(&self) -> EdgeType {
        self.mutable.borrow().edge_type
    }

    pub fn set_edge_type(&self, edge_type: EdgeType) {
        self.mutable.borrow_mut().edge_type = edge_type;
    }

    pub fn is_in_out(&self) -> bool {
        self.mutable.borrow().in_out
    }

    pub fn is_other_in_out(&self) -> bool {
        self.mutable.borrow().other_in_out
    }

    pub fn set_in_out(&self, in_out: bool, other_in_out: bool) {
        let mut m = self.mutable.borrow_mut();
        m.in_out = in_out;
        m.other_in_out = other_in_out;
    }

    pub fn get_result_transition(&self) -> ResultTransition {
        self.mutable.borrow().result_transition
    }

    pub fn set_result_transition(&self, transition: ResultTransition) {
        self.mutable.borrow_mut().result_transition = transition;
    }

    /// Whether the edge of this (left) event belongs to the result.
    pub fn is_in_result(&self) -> bool {
        self.get_result_transition() != ResultTransition::None
    }

    pub fn get_prev_in_result(&self) -> Option<Rc<SweepEvent>> {
        self.mutable.borrow().prev_in_result.upgrade()
    }

    pub fn set_prev_in_result(&self, prev: Option<&Rc<SweepEvent>>) {
        self.mutable.borrow_mut().prev_in_result = prev.map(Rc::downgrade).unwrap_or_default();
    }

    pub fn get_other_pos(&self) -> usize {
        self.mutable.borrow().other_pos
    }

    pub fn set_other_pos(&self, pos: usize) {
        self.mutable.borrow_mut().other_pos = pos;
    }

    pub fn get_output_contour_id(&self) -> Option<usize> {
        self.mutable.borrow().output_contour_id
    }

    pub fn set_output_contour_id(&self, id: usize) {
        self.mutable.borrow_mut().output_contour_id = Some(id);
    }
}

/// Total order in which the sweep processes events.
///
/// Compares by x, then y, then right endpoints before left endpoints (so that
/// removals at a shared point run before insertions), then — for two events of
/// the same kind sharing a point — by the vertical position of their other
/// endpoints, then subject before clipping, then contour and edge id. The
/// final id tie-breaks make this a strict total order.
pub fn compare_events(e1: &SweepEvent, e2: &SweepEvent) -> Ordering {
    if std::ptr::eq(e1, e2) {
        return Ordering::Equal;
    }

    let point_ordering = e1.point.lex_cmp(&e2.point);
    if point_ordering != Ordering::Equal {
        return point_ordering;
    }

    // Same point. Right events are processed first.
    if e1.is_left() != e2.is_left() {
        return e1.is_left().cmp(&e2.is_left());
    }

    // Same point and same endpoint kind: the event whose segment is below the
    // other one's far endpoint comes first.
    if !collinear(e1.point, e1.other_point(), e2.other_point()) {
        return if e1.is_below(e2.other_point()) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // Collinear segments sharing a point: subject before clipping, then break
    // remaining ties deterministically.
    e1.polygon_type
        .cmp(&e2.polygon_type)
        .then_with(|| e1.contour_id.cmp(&e2.contour_id))
        .then_with(|| e1.edge_id.cmp(&e2.edge_id))
}

impl PartialEq for SweepEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SweepEvent {}

impl PartialOrd for SweepEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SweepEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed because the event queue is a max-heap.
        compare_events(self, other).reverse()
    }
}

#[cfg(test)]
pub(crate) fn test_event_pair(
    left: (f64, f64),
    right: (f64, f64),
    polygon_type: PolygonType,
    edge_id: usize,
) -> (Rc<SweepEvent>, Rc<SweepEvent>) {
    let l = SweepEvent::new_rc(0, edge_id, left.into(), true, Weak::new(), polygon_type);
    let r = SweepEvent::new_rc(
        0,
        edge_id,
        right.into(),
        false,
        Rc::downgrade(&l),
        polygon_type,
    );
    l.set_other_event(&r);
    (l, r)
}
