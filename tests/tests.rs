// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Tests for boolean operations.

#[cfg(test)]
mod test {
    extern crate rand;

    use planar_booleanop::*;

    use self::rand::distributions::{Distribution, Uniform};
    use self::rand::rngs::StdRng;
    use self::rand::SeedableRng;

    fn square(x0: f64, y0: f64, size: f64) -> Polygon {
        Polygon::new(Ring::from_iter([
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ]))
    }

    fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Polygon {
        Polygon::new(Ring::from_iter([a, b, c]))
    }

    /// Is `p` on an edge of the polygon? Sample points for which this holds
    /// have no defined containment and are skipped by the containment tests.
    /// Exact for small integer vertices and quarter-integer samples.
    fn on_boundary(polygon: &Polygon, p: Point) -> bool {
        std::iter::once(&polygon.exterior)
            .chain(polygon.interiors.iter())
            .any(|ring| {
                let points = &ring.points;
                (0..points.len()).any(|i| {
                    let a = points[i];
                    let b = points[(i + 1) % points.len()];
                    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
                    cross == 0.
                        && p.x >= a.x.min(b.x)
                        && p.x <= a.x.max(b.x)
                        && p.y >= a.y.min(b.y)
                        && p.y <= a.y.max(b.y)
                })
            })
    }

    #[test]
    fn test_boolean_op_simple() {
        // Two unit-offset squares of size 2: they overlap in a unit square.
        let a = square(0., 0., 2.);
        let b = square(1., 1., 2.);

        let i = a.intersection(&b).unwrap();
        assert_eq!(i.len(), 1);
        assert_eq!(i.area(), 1.);
        assert_eq!(i.polygons[0].exterior.points.len(), 4);

        let u = a.union(&b).unwrap();
        assert_eq!(u.len(), 1);
        assert_eq!(u.area(), 7.);
        // The union outline is an octagon.
        assert_eq!(u.polygons[0].exterior.points.len(), 8);

        let d = a.difference(&b).unwrap();
        assert_eq!(d.len(), 1);
        assert_eq!(d.area(), 3.);

        let x = a.xor(&b).unwrap();
        assert_eq!(x.area(), 6.);
    }

    #[test]
    fn test_union_exact_outline() {
        let a = square(0., 0., 2.);
        let b = square(1., 1., 2.);

        let expected = Ring::from_iter([
            (0., 0.),
            (2., 0.),
            (2., 1.),
            (3., 1.),
            (3., 3.),
            (1., 3.),
            (1., 2.),
            (0., 2.),
        ]);

        let u = a.union(&b).unwrap();
        assert_eq!(u.len(), 1);
        let exterior = &u.polygons[0].exterior;

        // Compare up to rotation; the traversal picks its own starting point.
        assert_eq!(exterior.points.len(), expected.points.len());
        assert_eq!(exterior.signed_area(), expected.signed_area());
        let start = exterior
            .points
            .iter()
            .position(|&p| p == expected.points[0])
            .unwrap();
        let rotated: Vec<Point> = exterior
            .points
            .iter()
            .cycle()
            .skip(start)
            .take(exterior.points.len())
            .copied()
            .collect();
        assert_eq!(rotated, expected.points);
    }

    #[test]
    fn test_commutative_operations() {
        let a = square(0., 0., 2.);
        let b = square(1., 1., 2.);

        assert_eq!(a.union(&b).unwrap().area(), b.union(&a).unwrap().area());
        assert_eq!(
            a.intersection(&b).unwrap().area(),
            b.intersection(&a).unwrap().area()
        );
        assert_eq!(a.xor(&b).unwrap().area(), b.xor(&a).unwrap().area());
    }

    #[test]
    fn test_difference_depends_on_operand_order() {
        let a = square(0., 0., 2.);
        let b = square(1., 1., 2.);

        let ab = a.difference(&b).unwrap();
        let ba = b.difference(&a).unwrap();
        assert_eq!(ab.area(), 3.);
        assert_eq!(ba.area(), 3.);

        assert!(ab.contains_point(Point::new(0.5, 0.5)));
        assert!(!ab.contains_point(Point::new(2.5, 2.5)));
        assert!(!ba.contains_point(Point::new(0.5, 0.5)));
        assert!(ba.contains_point(Point::new(2.5, 2.5)));
    }

    #[test]
    fn test_operations_on_identical_operands() {
        let a = square(0., 0., 2.);

        let u = a.union(&a).unwrap();
        assert_eq!(u.len(), 1);
        assert_eq!(u.area(), 4.);

        let i = a.intersection(&a).unwrap();
        assert_eq!(i.len(), 1);
        assert_eq!(i.area(), 4.);

        assert!(a.difference(&a).unwrap().is_empty());
        assert!(a.xor(&a).unwrap().is_empty());
    }

    #[test]
    fn test_partition_identities() {
        let a = square(0., 0., 3.);
        let b = square(2., 1., 3.);

        let union = a.union(&b).unwrap().area();
        let intersection = a.intersection(&b).unwrap().area();
        let difference = a.difference(&b).unwrap().area();
        let difference_rev = b.difference(&a).unwrap().area();
        let xor = a.xor(&b).unwrap().area();

        // The difference and the intersection partition the subject.
        assert_eq!(difference + intersection, 9.);
        // The xor and the intersection partition the union.
        assert_eq!(xor + intersection, union);
        // Both differences and the intersection partition the union.
        assert_eq!(difference + difference_rev + intersection, union);
    }

    #[test]
    fn test_edge_touching_squares() {
        // Sharing a full edge, no interior overlap.
        let a = square(0., 0., 1.);
        let b = square(1., 0., 1.);

        let u = a.union(&b).unwrap();
        assert_eq!(u.len(), 1);
        assert_eq!(u.area(), 2.);

        assert!(a.intersection(&b).unwrap().is_empty());
        assert_eq!(a.difference(&b).unwrap().area(), 1.);
        assert_eq!(a.xor(&b).unwrap().area(), 2.);
    }

    #[test]
    fn test_corner_kissing_squares() {
        let a = square(0., 0., 1.);
        let b = square(1., 1., 1.);

        let u = a.union(&b).unwrap();
        assert_eq!(u.area(), 2.);
        assert!(u.contains_point(Point::new(0.5, 0.5)));
        assert!(u.contains_point(Point::new(1.5, 1.5)));
        assert!(!u.contains_point(Point::new(0.5, 1.5)));

        assert!(a.intersection(&b).unwrap().is_empty());
    }

    #[test]
    fn test_holes() {
        // Hole attribution: the hole must be assigned to the polygon that
        // actually encloses it.
        let big_square = square(0., 0., 4.);
        let little_square_inside = square(2., 1., 1.);
        let little_square_outside = square(1., 5., 1.);

        let subject = MultiPolygon::from_polygon(big_square);
        let clipping = MultiPolygon::new(vec![little_square_inside, little_square_outside]);

        let result = boolean_op(&subject, &clipping, Operation::Xor).unwrap();

        assert!(result.polygons.iter().any(|p| p.interiors.len() == 1));
        assert!(result.polygons.iter().any(|p| p.interiors.is_empty()));

        assert!(result.contains_point(Point::new(0.1, 0.1)));
        assert!(!result.contains_point(Point::new(2.1, 1.1)));
        assert!(result.contains_point(Point::new(1.1, 5.1)));
        assert!(!result.contains_point(Point::new(100., 100.)));
    }

    #[test]
    fn test_operand_with_hole() {
        // The subject carries a hole; clipping against a square that covers
        // part of the hole.
        let subject = Polygon::with_holes(
            square(0., 0., 4.).exterior,
            vec![square(1., 1., 2.).exterior],
        );
        let clipping = square(2., 0., 4.);

        for operation in [
            Operation::Intersection,
            Operation::Union,
            Operation::Difference,
            Operation::Xor,
        ] {
            let result = subject.boolean(&clipping, operation).unwrap();

            for ix in 0..8 {
                for iy in 0..8 {
                    let p = Point::new(0.5 + f64::from(ix), 0.5 + f64::from(iy));
                    let in1 = subject.contains_point(p);
                    let in2 = clipping.contains_point(p);
                    let expected = match operation {
                        Operation::Intersection => in1 && in2,
                        Operation::Union => in1 || in2,
                        Operation::Difference => in1 && !in2,
                        Operation::Xor => in1 ^ in2,
                    };
                    assert_eq!(result.contains_point(p), expected, "{operation:?} at {p:?}");
                }
            }
        }
    }

    #[test]
    fn test_union_fills_hole() {
        let subject = Polygon::with_holes(
            square(0., 0., 4.).exterior,
            vec![square(1., 1., 2.).exterior],
        );
        // Covers the hole entirely.
        let clipping = square(1., 1., 2.);

        let result = subject.union(&clipping).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.polygons[0].interiors.is_empty());
        assert_eq!(result.area(), 16.);
    }

    #[test]
    fn test_multipolygon_intersection() {
        // Intersection of a vertical stripe with two horizontal stripes.
        // The two result pieces must both be exterior contours, not holes.
        let horizontal1 = Polygon::new(Ring::from_iter([(0., 0.), (10., 0.), (10., 1.), (0., 1.)]));
        let horizontal2 = Polygon::new(Ring::from_iter([(0., 4.), (10., 4.), (10., 5.), (0., 5.)]));
        let vertical = Polygon::new(Ring::from_iter([(0., -1.), (1., -1.), (1., 11.), (0., 11.)]));

        let subject = MultiPolygon::new(vec![horizontal1, horizontal2]);
        let clipping = MultiPolygon::from_polygon(vertical);

        let result = boolean_op(&subject, &clipping, Operation::Intersection).unwrap();

        assert_eq!(result.len(), 2);
        for p in &result.polygons {
            assert!(p.interiors.is_empty());
            assert_eq!(p.area(), 1.);
        }
    }

    #[test]
    fn test_input_winding_does_not_matter() {
        let a = square(0., 0., 2.);
        let mut a_cw = a.clone();
        a_cw.exterior.reverse();
        let b = square(1., 1., 2.);

        assert_eq!(a.union(&b).unwrap(), a_cw.union(&b).unwrap());
        assert_eq!(a.difference(&b).unwrap(), a_cw.difference(&b).unwrap());
    }

    #[test]
    fn test_degenerate_input_is_rejected() {
        let degenerate = Polygon::new(Ring::from_iter([(0., 0.), (1., 1.)]));
        let b = square(0., 0., 1.);

        assert_eq!(
            degenerate.union(&b),
            Err(BooleanOpError::DegenerateRing { effective: 2 })
        );
        assert!(matches!(
            Polygon::new(Ring::from_iter([(0., 0.), (f64::INFINITY, 0.), (1., 1.)])).union(&b),
            Err(BooleanOpError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_crossing_triangles() {
        // Slanted boundaries crossing each other; the overlap is a pentagon
        // of area 46/45. No edge is axis-aligned, so every result vertex is a
        // genuine line crossing.
        let a = triangle((3., 2.), (3., 4.), (0., 0.));
        let b = triangle((4., 1.), (4., 3.), (1., 2.));

        let intersection = a.intersection(&b).unwrap().area();
        let union = a.union(&b).unwrap().area();
        let difference = a.difference(&b).unwrap().area();
        let difference_rev = b.difference(&a).unwrap().area();
        let xor = a.xor(&b).unwrap().area();

        assert!((intersection - 46. / 45.).abs() < 1e-9);
        assert!((union - 224. / 45.).abs() < 1e-9);
        assert!((difference - 89. / 45.).abs() < 1e-9);
        assert!((difference_rev - 89. / 45.).abs() < 1e-9);
        // The symmetric difference consists of the lobes outside the overlap;
        // a traversal that strays into the wrong lobe at a touch point loses
        // area here.
        assert!((xor - 178. / 45.).abs() < 1e-9);
        assert!((xor + intersection - union).abs() < 1e-9);
    }

    #[test]
    fn test_crossing_triangles_containment() {
        let a = triangle((3., 2.), (3., 4.), (0., 0.));
        let b = triangle((4., 1.), (4., 3.), (1., 2.));

        let results = [
            a.intersection(&b).unwrap(),
            a.union(&b).unwrap(),
            a.difference(&b).unwrap(),
            a.xor(&b).unwrap(),
        ];

        for ix in 0..16 {
            for iy in 0..16 {
                let p = Point::new(0.25 * f64::from(ix), 0.25 * f64::from(iy));
                if on_boundary(&a, p) || on_boundary(&b, p) {
                    continue;
                }
                let in1 = a.contains_point(p);
                let in2 = b.contains_point(p);
                let expected = [in1 && in2, in1 || in2, in1 && !in2, in1 ^ in2];

                for (result, expected) in results.iter().zip(expected) {
                    assert_eq!(result.contains_point(p), expected, "at {p:?}");
                }
            }
        }
    }

    /// Boolean operations on random triangles with small integer corners,
    /// verified with the partition identities and with sample points against
    /// the operand containment tests. Samples on an operand boundary are
    /// skipped, everywhere else containment is well defined.
    #[test]
    fn test_random_triangles() {
        let mut rng = StdRng::from_seed([7u8; 32]);
        let between = Uniform::from(0..8i32);

        let mut rand_triangle = |rng: &mut StdRng| -> Polygon {
            loop {
                let v: Vec<f64> = (0..6).map(|_| f64::from(between.sample(rng))).collect();
                // Reject collinear corners; that also rejects repeated ones.
                let doubled_area = (v[2] - v[0]) * (v[5] - v[1]) - (v[3] - v[1]) * (v[4] - v[0]);
                if doubled_area != 0. {
                    return triangle((v[0], v[1]), (v[2], v[3]), (v[4], v[5]));
                }
            }
        };

        for _ in 0..200 {
            let a = rand_triangle(&mut rng);
            let b = rand_triangle(&mut rng);

            let intersection = a.intersection(&b).unwrap();
            let union = a.union(&b).unwrap();
            let difference = a.difference(&b).unwrap();
            let xor = a.xor(&b).unwrap();

            assert!((xor.area() + intersection.area() - union.area()).abs() < 1e-9);
            assert!((difference.area() + intersection.area() - a.area()).abs() < 1e-9);

            let results = [&intersection, &union, &difference, &xor];
            for ix in 0..16 {
                for iy in 0..16 {
                    let p = Point::new(0.25 + 0.5 * f64::from(ix), 0.25 + 0.5 * f64::from(iy));
                    if on_boundary(&a, p) || on_boundary(&b, p) {
                        continue;
                    }
                    let in1 = a.contains_point(p);
                    let in2 = b.contains_point(p);
                    let expected = [in1 && in2, in1 || in2, in1 && !in2, in1 ^ in2];

                    for (result, expected) in results.iter().zip(expected) {
                        assert_eq!(result.contains_point(p), expected);
                    }
                }
            }
        }
    }

    /// Boolean operations on random axis-aligned rectangles, verified with
    /// probe points against the operand containment tests. Rectangle corners
    /// sit on integers and probes on half-integers, so no probe ever lies on
    /// a boundary.
    #[test]
    fn test_random_rectangles() {
        let mut rng = StdRng::from_seed([3u8; 32]);
        let between = Uniform::from(0..8i32);

        let mut rand_rect = |rng: &mut StdRng| -> Polygon {
            loop {
                let x0 = between.sample(rng);
                let x1 = between.sample(rng);
                let y0 = between.sample(rng);
                let y1 = between.sample(rng);
                if x0 != x1 && y0 != y1 {
                    let (x0, x1) = (x0.min(x1), x0.max(x1));
                    let (y0, y1) = (y0.min(y1), y0.max(y1));
                    return Polygon::new(Ring::from_iter([
                        (f64::from(x0), f64::from(y0)),
                        (f64::from(x1), f64::from(y0)),
                        (f64::from(x1), f64::from(y1)),
                        (f64::from(x0), f64::from(y1)),
                    ]));
                }
            }
        };

        for _ in 0..100 {
            let a = rand_rect(&mut rng);
            let b = rand_rect(&mut rng);

            let results = [
                a.intersection(&b).unwrap(),
                a.union(&b).unwrap(),
                a.difference(&b).unwrap(),
                a.xor(&b).unwrap(),
            ];

            for ix in 0..8 {
                for iy in 0..8 {
                    let p = Point::new(0.5 + f64::from(ix), 0.5 + f64::from(iy));
                    let in1 = a.contains_point(p);
                    let in2 = b.contains_point(p);
                    let expected = [in1 && in2, in1 || in2, in1 && !in2, in1 ^ in2];

                    for (result, expected) in results.iter().zip(expected) {
                        assert_eq!(result.contains_point(p), expected);
                    }
                }
            }
        }
    }
}
