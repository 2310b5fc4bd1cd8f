// SPDX-FileCopyrightText: 2026 planar-booleanop contributors
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The status structure: the set of segments currently crossing the sweep
//! line, ordered by their vertical position at the sweep x-coordinate.
//!
//! Backed by the `BTreeSet` of the standard library, which gives the required
//! O(log n) insert, remove and neighbor queries on a balanced structure.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Bound;
use std::rc::Rc;

use crate::compare_segments::compare_events_by_segments;
use crate::sweep_event::SweepEvent;

/// Key wrapper carrying the segment ordering of `compare_events_by_segments`.
#[derive(Debug, Clone)]
struct SegmentKey(Rc<SweepEvent>);

impl PartialEq for SegmentKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SegmentKey {}

impl PartialOrd for SegmentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SegmentKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_events_by_segments(&self.0, &other.0)
    }
}

/// Ordered set of the active segments, represented by their left events.
#[derive(Default)]
pub struct ScanLine {
    content: BTreeSet<SegmentKey>,
}

impl ScanLine {
    pub fn new() -> ScanLine {
        ScanLine {
            content: BTreeSet::new(),
        }
    }

    /// Number of segments currently crossing the sweep line.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Insert the segment of a left event. Returns false if an equal key was
    /// already present.
    pub fn insert(&mut self, event: Rc<SweepEvent>) -> bool {
        debug_assert!(event.is_left());
        self.content.insert(SegmentKey(event))
    }

    /// Remove the segment of a left event. Returns false if no segment with
    /// this key was found; the sweep driver treats that as an internal
    /// consistency failure.
    pub fn remove(&mut self, event: &Rc<SweepEvent>) -> bool {
        self.content.remove(&SegmentKey(Rc::clone(event)))
    }

    /// The segment directly above the given one.
    pub fn next(&self, event: &Rc<SweepEvent>) -> Option<&Rc<SweepEvent>> {
        let key = SegmentKey(Rc::clone(event));
        self.content
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(|k| &k.0)
    }

    /// The segment directly below the given one.
    pub fn prev(&self, event: &Rc<SweepEvent>) -> Option<&Rc<SweepEvent>> {
        let key = SegmentKey(Rc::clone(event));
        self.content
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map(|k| &k.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sweep_event::{test_event_pair, PolygonType};

    #[test]
    fn test_neighbor_queries() {
        let (bottom, _o1) = test_event_pair((0., 0.), (4., 0.), PolygonType::Subject, 0);
        let (middle, _o2) = test_event_pair((0., 1.), (4., 1.), PolygonType::Subject, 1);
        let (top, _o3) = test_event_pair((0., 2.), (4., 2.), PolygonType::Subject, 2);

        let mut scan_line = ScanLine::new();
        assert!(scan_line.insert(middle.clone()));
        assert!(scan_line.insert(top.clone()));
        assert!(scan_line.insert(bottom.clone()));
        assert_eq!(scan_line.len(), 3);

        assert!(Rc::ptr_eq(scan_line.prev(&middle).unwrap(), &bottom));
        assert!(Rc::ptr_eq(scan_line.next(&middle).unwrap(), &top));
        assert!(scan_line.prev(&bottom).is_none());
        assert!(scan_line.next(&top).is_none());

        assert!(scan_line.remove(&middle));
        assert!(!scan_line.remove(&middle));
        assert!(Rc::ptr_eq(scan_line.next(&bottom).unwrap(), &top));
    }
}
