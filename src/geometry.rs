// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Plain geometry types consumed and produced by the boolean operations:
//! points, rings, polygons with holes and multi-polygons.
//!
//! The engine makes no assumption about where these come from; callers convert
//! their own representation into rings of `Point`s and back.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::BooleanOpError;

/// A point in the plane. Coordinates must be finite for the engine to accept it.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Total lexicographic order (x, then y) used by the sweep.
    ///
    /// Based on `total_cmp` so the order stays total even for the non-finite
    /// values that validation rejects.
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// A closed boundary given as an ordered point sequence.
///
/// The closing edge from the last point back to the first is implicit; a ring
/// that physically repeats its first point is accepted as well. Winding
/// direction of the input is not meaningful, the engine normalizes orientation
/// internally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    /// The boundary points in order. The ring closes back to the first point.
    pub points: Vec<Point>,
}

impl Ring {
    /// Ring from its boundary points.
    pub fn new(points: Vec<Point>) -> Self {
        Ring { points }
    }

    /// Iterate over the edges of the closed ring, including the implicit
    /// closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().circular_tuple_windows()
    }

    /// Shoelace sum, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| (a.x * b.y) - (b.x * a.y)).sum::<f64>() / 2.0
    }

    /// Reverse the point order in place, flipping the winding direction.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Even-odd ray-casting containment test. Points exactly on the boundary
    /// are not reliably classified; tests skip probes on edges.
    pub fn contains_point(&self, p: Point) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Validate the ring for use as an operand boundary.
    ///
    /// All coordinates must be finite, and after collapsing consecutive
    /// duplicate points (including across the implicit closing edge) at least
    /// 3 distinct points must remain. A violation is reported to the caller
    /// instead of being logged and ignored.
    pub fn validate(&self) -> Result<(), BooleanOpError> {
        for p in &self.points {
            if !p.is_finite() {
                return Err(BooleanOpError::NonFiniteCoordinate { x: p.x, y: p.y });
            }
        }

        let effective = self
            .points
            .iter()
            .circular_tuple_windows()
            .filter(|(a, b)| a != b)
            .count();

        if effective < 3 {
            return Err(BooleanOpError::DegenerateRing { effective });
        }

        Ok(())
    }
}

impl<P> FromIterator<P> for Ring
where
    P: Into<Point>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Ring::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A polygon given by an exterior boundary and zero or more holes contained
/// within it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// The outer boundary.
    pub exterior: Ring,
    /// The holes, each expected to lie within the exterior.
    pub interiors: Vec<Ring>,
}

impl Polygon {
    /// Polygon without holes.
    pub fn new(exterior: Ring) -> Self {
        Polygon {
            exterior,
            interiors: Vec::new(),
        }
    }

    /// Polygon with holes.
    pub fn with_holes(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Polygon {
            exterior,
            interiors,
        }
    }

    /// All rings of the polygon: the exterior first, then the holes.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Area of the polygon, holes subtracted. Winding directions of the rings
    /// do not matter.
    pub fn area(&self) -> f64 {
        let outer = self.exterior.signed_area().abs();
        let holes: f64 = self.interiors.iter().map(|r| r.signed_area().abs()).sum();
        outer - holes
    }

    /// Is `p` inside the exterior but outside every hole?
    pub fn contains_point(&self, p: Point) -> bool {
        self.exterior.contains_point(p) && !self.interiors.iter().any(|h| h.contains_point(p))
    }
}

impl From<Ring> for Polygon {
    fn from(exterior: Ring) -> Self {
        Polygon::new(exterior)
    }
}

/// An ordered collection of independent polygons. The empty multi-polygon is
/// the engine's rendition of the empty result set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    /// The member polygons.
    pub polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Multi-polygon from its members.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        MultiPolygon { polygons }
    }

    /// The multi-polygon without any members.
    pub fn empty() -> Self {
        MultiPolygon::default()
    }

    /// Wrap a single polygon as a one-element multi-polygon.
    pub fn from_polygon(polygon: Polygon) -> Self {
        MultiPolygon {
            polygons: vec![polygon],
        }
    }

    /// The reverse convenience constructor: a one-element multi-polygon
    /// unwraps to its polygon.
    pub fn into_polygon(mut self) -> Option<Polygon> {
        if self.polygons.len() == 1 {
            self.polygons.pop()
        } else {
            None
        }
    }

    /// Number of member polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// True if there are no member polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Total area of all members, holes subtracted.
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    /// Is `p` inside any member polygon?
    pub fn contains_point(&self, p: Point) -> bool {
        self.polygons.iter().any(|poly| poly.contains_point(p))
    }

    /// Validate every ring of every polygon. Runs before any sweep state is
    /// allocated; cheap to check, cheap to fail.
    pub fn validate(&self) -> Result<(), BooleanOpError> {
        for polygon in &self.polygons {
            for ring in polygon.rings() {
                ring.validate()?;
            }
        }
        Ok(())
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        MultiPolygon::from_polygon(polygon)
    }
}

/// Axis-aligned bounding box, grown point by point while filling the event
/// queue and used for the trivial-case short-circuits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// The empty box: any merged point becomes both corners.
    pub fn empty() -> Self {
        BoundingBox {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn merge_point(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn is_disjoint(&self, other: &BoundingBox) -> bool {
        self.min.x > other.max.x
            || other.min.x > self.max.x
            || self.min.y > other.max.y
            || other.min.y > self.max.y
    }
}
