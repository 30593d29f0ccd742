//! Randomized checks of the range algebra against point membership.

use pg_ranged::{NumRange, errors::Error};
use rand::prelude::*;

const ITERATIONS: usize = 2000;

/// Builds a random range over a small integer grid, so that shared bounds
/// and touching ranges are frequent.
fn random_range(rng: &mut StdRng) -> NumRange {
    if rng.random_bool(0.1) {
        return NumRange::default();
    }
    let a = f64::from(rng.random_range(0..6_i32));
    let b = f64::from(rng.random_range(0..6_i32));
    let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
    let lower = if rng.random_bool(0.15) { f64::NEG_INFINITY } else { lower };
    let upper = if rng.random_bool(0.15) { f64::INFINITY } else { upper };
    let open = if lower.is_finite() && rng.random_bool(0.5) { '[' } else { '(' };
    let close = if upper.is_finite() && rng.random_bool(0.5) { ']' } else { ')' };
    let literal = format!("{open}{lower},{upper}{close}");
    literal.parse().unwrap_or_else(|err| panic!("cannot parse {literal}: {err}"))
}

/// Points on and between every grid coordinate, plus far-away values.
fn probe_points() -> Vec<f64> {
    let mut points: Vec<f64> = (0..=12).map(|i| f64::from(i) * 0.5 - 0.5).collect();
    points.extend([-1e300, 1e300]);
    points
}

fn pairs(seed: u64) -> impl Iterator<Item = (NumRange, NumRange)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ITERATIONS).map(move |_| (random_range(&mut rng), random_range(&mut rng)))
}

#[test]
fn test_reflexivity() {
    for (range, _) in pairs(1) {
        let copy = range;
        assert_eq!(copy, range);
        assert!(range.contains_range(&range));
        if !range.is_empty() {
            assert!(range.overlaps(&range), "{range} should overlap itself");
        }
    }
}

#[test]
fn test_empty_is_absorbing_and_neutral() -> Result<(), Error> {
    let empty = NumRange::default();
    for (range, _) in pairs(2) {
        assert!(range.intersection(&empty).is_empty());
        assert!(empty.intersection(&range).is_empty());
        assert_eq!(range.union(&empty)?, range);
        assert_eq!(empty.union(&range)?, range);
        assert_eq!(range.difference(&empty)?, range);
        assert!(range.contains_range(&empty));
    }
    Ok(())
}

#[test]
fn test_symmetry() {
    for (a, b) in pairs(3) {
        assert_eq!(a.overlaps(&b), b.overlaps(&a), "{a} and {b}");
        assert_eq!(a.adjacent_to(&b), b.adjacent_to(&a), "{a} and {b}");
        assert_eq!(a.strictly_left_of(&b), b.strictly_right_of(&a), "{a} and {b}");
        assert_eq!(a.intersection(&b), b.intersection(&a), "{a} and {b}");
        assert_eq!(a.union(&b), b.union(&a), "{a} and {b}");
        assert!(!(a.overlaps(&b) && a.adjacent_to(&b)), "{a} and {b}");
    }
}

#[test]
fn test_containment_antisymmetry() {
    for (a, b) in pairs(4) {
        if a.contains_range(&b) && b.contains_range(&a) {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_round_trip() -> Result<(), Error> {
    for (range, _) in pairs(5) {
        assert_eq!(range.to_string().parse::<NumRange>()?, range);
    }
    Ok(())
}

#[test]
fn test_algebra_matches_membership() {
    let points = probe_points();
    for (a, b) in pairs(6) {
        let intersection = a.intersection(&b);
        for point in &points {
            let (in_a, in_b) = (a.contains_point(point), b.contains_point(point));
            assert_eq!(intersection.contains_point(point), in_a && in_b, "{a} * {b} at {point}");
            if let Ok(union) = a.union(&b) {
                assert_eq!(union.contains_point(point), in_a || in_b, "{a} + {b} at {point}");
            }
            if let Ok(difference) = a.difference(&b) {
                assert_eq!(difference.contains_point(point), in_a && !in_b, "{a} - {b} at {point}");
            }
        }
        assert!(a.contains_range(&intersection) && b.contains_range(&intersection));
    }
}

#[test]
fn test_failures_are_justified() {
    let points = probe_points();
    for (a, b) in pairs(7) {
        if let Err(err) = a.union(&b) {
            assert_eq!(err, Error::DisjointRanges);
            assert!(!a.overlaps(&b) && !a.adjacent_to(&b), "{a} + {b}");
        }
        if let Err(err) = a.difference(&b) {
            assert_eq!(err, Error::NonContiguousDifference);
            // Some point of `a` outside `b` lies on each side of `b`.
            let outside: Vec<f64> =
                points.iter().copied().filter(|p| a.contains_point(p) && !b.contains_point(p)).collect();
            let below = outside.iter().any(|p| *p <= b.lower_coordinate());
            let above = outside.iter().any(|p| *p >= b.upper_coordinate());
            assert!(below && above, "{a} - {b}");
        }
    }
}
