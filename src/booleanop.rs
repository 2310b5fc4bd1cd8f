// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The public entry points: validate the operands, try the trivial
//! shortcuts, then run the sweep pipeline and assemble the result.

use tracing::debug;

use crate::connect_edges::{connect_edges, Contour};
use crate::error::BooleanOpError;
use crate::fill_queue::fill_queue;
use crate::geometry::{MultiPolygon, Polygon, Ring};
use crate::subdivide_segments::subdivide;

/// The boolean operation to perform.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Operation {
    /// Region covered by both operands.
    Intersection,
    /// Region covered by the subject but not the clipping operand.
    Difference,
    /// Region covered by at least one operand.
    Union,
    /// Region covered by exactly one operand.
    Xor,
}

/// Apply a boolean operation to two multi-polygons.
///
/// The result's exterior rings wind counter-clockwise and its holes
/// clockwise, without a repeated closing point. An empty result is the empty
/// multi-polygon.
pub fn boolean_op(
    subject: &MultiPolygon,
    clipping: &MultiPolygon,
    operation: Operation,
) -> Result<MultiPolygon, BooleanOpError> {
    subject.validate()?;
    clipping.validate()?;

    if subject.is_empty() || clipping.is_empty() {
        debug!(?operation, "empty operand, taking trivial result");
        return Ok(trivial_result(subject, clipping, operation));
    }

    let mut filled = fill_queue(subject, clipping);

    if filled.subject_bbox.is_disjoint(&filled.clipping_bbox) {
        // The operands cannot interact; no sweep needed.
        debug!(?operation, "disjoint bounding boxes, taking trivial result");
        return Ok(trivial_result(subject, clipping, operation));
    }

    debug!(events = filled.queue.len(), ?operation, "starting sweep");
    let sorted_events = subdivide(
        &mut filled.queue,
        &filled.subject_bbox,
        &filled.clipping_bbox,
        operation,
    )?;

    let contours = connect_edges(&sorted_events)?;
    debug!(contours = contours.len(), "sweep finished");

    Ok(contours_to_multi_polygon(&contours))
}

/// Result when the operands cannot interact (one is empty, or their bounding
/// boxes are disjoint). The input rings pass through unchanged.
fn trivial_result(
    subject: &MultiPolygon,
    clipping: &MultiPolygon,
    operation: Operation,
) -> MultiPolygon {
    match operation {
        Operation::Intersection => MultiPolygon::empty(),
        Operation::Difference => subject.clone(),
        Operation::Union | Operation::Xor => {
            let mut polygons = subject.polygons.clone();
            polygons.extend(clipping.polygons.iter().cloned());
            MultiPolygon::new(polygons)
        }
    }
}

/// Build polygons from the exterior contours and their holes, enforcing the
/// output winding convention. Contours that collapsed to fewer than 3 points
/// are dropped.
fn contours_to_multi_polygon(contours: &[Contour]) -> MultiPolygon {
    let polygons = contours
        .iter()
        .filter(|contour| contour.is_exterior() && contour.points.len() >= 3)
        .map(|contour| {
            let exterior = normalized_ring(contour, false);
            let interiors = contour
                .hole_ids
                .iter()
                .map(|&hole_id| &contours[hole_id])
                .filter(|hole| hole.points.len() >= 3)
                .map(|hole| normalized_ring(hole, true))
                .collect();
            Polygon::with_holes(exterior, interiors)
        })
        .collect();

    MultiPolygon::new(polygons)
}

/// Exterior rings counter-clockwise, holes clockwise.
fn normalized_ring(contour: &Contour, hole: bool) -> Ring {
    let mut ring = Ring::new(contour.points.clone());
    let area = ring.signed_area();
    if (!hole && area < 0.) || (hole && area > 0.) {
        ring.reverse();
    }
    ring
}

/// Boolean operations as methods on the operand types.
///
/// The `Rhs` parameter lets a `Polygon` combine directly with a
/// `MultiPolygon` and the other way around; single polygons are promoted to
/// one-element multi-polygons before the sweep.
pub trait BooleanOp<Rhs = Self> {
    /// Apply `operation` with `self` as the subject and `other` as the
    /// clipping operand.
    fn boolean(&self, other: &Rhs, operation: Operation) -> Result<MultiPolygon, BooleanOpError>;

    /// `self` OR `other`.
    fn union(&self, other: &Rhs) -> Result<MultiPolygon, BooleanOpError> {
        self.boolean(other, Operation::Union)
    }

    /// `self` AND `other`.
    fn intersection(&self, other: &Rhs) -> Result<MultiPolygon, BooleanOpError> {
        self.boolean(other, Operation::Intersection)
    }

    /// `self` AND NOT `other`.
    fn difference(&self, other: &Rhs) -> Result<MultiPolygon, BooleanOpError> {
        self.boolean(other, Operation::Difference)
    }

    /// `self` XOR `other`.
    fn xor(&self, other: &Rhs) -> Result<MultiPolygon, BooleanOpError> {
        self.boolean(other, Operation::Xor)
    }
}

impl BooleanOp for MultiPolygon {
    fn boolean(&self, other: &Self, operation: Operation) -> Result<MultiPolygon, BooleanOpError> {
        boolean_op(self, other, operation)
    }
}

impl BooleanOp<Polygon> for MultiPolygon {
    fn boolean(&self, other: &Polygon, operation: Operation) -> Result<MultiPolygon, BooleanOpError> {
        boolean_op(self, &MultiPolygon::from_polygon(other.clone()), operation)
    }
}

impl BooleanOp for Polygon {
    fn boolean(&self, other: &Self, operation: Operation) -> Result<MultiPolygon, BooleanOpError> {
        boolean_op(
            &MultiPolygon::from_polygon(self.clone()),
            &MultiPolygon::from_polygon(other.clone()),
            operation,
        )
    }
}

impl BooleanOp<MultiPolygon> for Polygon {
    fn boolean(
        &self,
        other: &MultiPolygon,
        operation: Operation,
    ) -> Result<MultiPolygon, BooleanOpError> {
        boolean_op(&MultiPolygon::from_polygon(self.clone()), other, operation)
    }
}

/// Union of two operands.
pub fn union<S: BooleanOp<C>, C>(subject: &S, clipping: &C) -> Result<MultiPolygon, BooleanOpError> {
    subject.union(clipping)
}

/// Intersection of two operands.
pub fn intersection<S: BooleanOp<C>, C>(
    subject: &S,
    clipping: &C,
) -> Result<MultiPolygon, BooleanOpError> {
    subject.intersection(clipping)
}

/// Difference of two operands, subject minus clipping.
pub fn difference<S: BooleanOp<C>, C>(
    subject: &S,
    clipping: &C,
) -> Result<MultiPolygon, BooleanOpError> {
    subject.difference(clipping)
}

/// Symmetric difference of two operands.
pub fn xor<S: BooleanOp<C>, C>(subject: &S, clipping: &C) -> Result<MultiPolygon, BooleanOpError> {
    subject.xor(clipping)
}
