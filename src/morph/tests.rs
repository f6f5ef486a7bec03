use approx::assert_relative_eq;
use nalgebra::Point3;

use crate::{
    curve::{Arc, Curve, Line},
    error::GeometryError,
};

use super::*;

fn bottom() -> Line<f64> {
    Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0))
}

fn top() -> Line<f64> {
    Line::new(Point3::new(0.0, 4.0, 0.0), Point3::new(1.0, 4.0, 0.0))
}

struct NeverReverse;

impl CurveAlignment<f64> for NeverReverse {
    fn should_reverse(&self, _first: &[Point3<f64>], _second: &[Point3<f64>]) -> bool {
        false
    }
}

#[test]
fn morph_between_parallel_lines() {
    let options = MorphOptions::default().with_count(3);
    let curves = bottom().try_morph_to(&top(), &options).unwrap();
    assert_eq!(curves.len(), 3);
    for (j, curve) in curves.iter().enumerate() {
        let y = (j + 1) as f64;
        assert_relative_eq!(curve.start_point(), Point3::new(0.0, y, 0.0), epsilon = 1e-10);
        assert_relative_eq!(curve.end_point(), Point3::new(1.0, y, 0.0), epsilon = 1e-10);
        assert_relative_eq!(curve.point_at(0.5), Point3::new(0.5, y, 0.0), epsilon = 1e-9);
    }
}

#[test]
fn zero_count_returns_nothing() {
    let options = MorphOptions::default().with_count(0);
    let curves = bottom().try_morph_to(&top(), &options).unwrap();
    assert!(curves.is_empty());
}

#[test]
fn zero_precision_is_rejected() {
    let options = MorphOptions::default().with_count(2).with_precision(0);
    let err = bottom().try_morph_to(&top(), &options).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GeometryError>(),
        Some(&GeometryError::InvalidDivision(0))
    );
}

#[test]
fn identical_curves_coincide() {
    let line = Line::new(Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 6.0, 3.0));
    let options = MorphOptions::default().with_count(4);
    let curves = line.try_morph_to(&line, &options).unwrap();
    assert_eq!(curves.len(), 4);
    for curve in curves.iter() {
        for t in [0.0, 0.3, 0.5, 1.0] {
            assert_relative_eq!(curve.point_at(t), line.point_at(t), epsilon = 1e-9);
        }
    }
}

#[test]
fn identical_arcs_share_samples() {
    let arc = Arc::try_from_three_points(
        &Point3::<f64>::new(-1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
        &Point3::new(1.0, 0.0, 0.0),
    )
    .unwrap();
    let options = MorphOptions::default().with_count(2).with_precision(8);
    let curves = arc.try_morph_to(&arc, &options).unwrap();
    assert_eq!(curves.len(), 2);
    for curve in curves.iter() {
        assert_relative_eq!(curve.start_point(), arc.start_point(), epsilon = 1e-10);
        assert_relative_eq!(curve.end_point(), arc.end_point(), epsilon = 1e-10);
        assert!((curve.length() - arc.length()).abs() < 1e-2);
    }
}

#[test]
fn reversed_target_is_aligned() {
    let reversed = Line::new(*top().end(), *top().start());
    let options = MorphOptions::default().with_count(3);
    let curves = bottom().try_morph_to(&reversed, &options).unwrap();
    assert_relative_eq!(curves[0].start_point(), Point3::new(0.0, 1.0, 0.0), epsilon = 1e-10);
    assert_relative_eq!(curves[2].end_point(), Point3::new(1.0, 3.0, 0.0), epsilon = 1e-10);

    let curves = try_morph_with(&bottom(), &reversed, &options, &TotalDistance).unwrap();
    assert_relative_eq!(curves[1].start_point(), Point3::new(0.0, 2.0, 0.0), epsilon = 1e-10);
}

#[test]
fn custom_alignment_is_respected() {
    let reversed = Line::new(*top().end(), *top().start());
    let options = MorphOptions::default().with_count(3);
    let curves = try_morph_with(&bottom(), &reversed, &options, &NeverReverse).unwrap();
    // every construction line crosses (0.5, 2, 0), so the middle column is dropped
    assert_eq!(curves.len(), 2);
    // quarter of the way from (0, 0, 0) to (1, 4, 0)
    assert_relative_eq!(curves[0].start_point(), Point3::new(0.25, 1.0, 0.0), epsilon = 1e-10);
    assert_relative_eq!(curves[1].start_point(), Point3::new(0.75, 3.0, 0.0), epsilon = 1e-10);
}

#[test]
fn offset_moves_along_loft_normal() {
    let options = MorphOptions::default().with_count(1).with_offset(0.5);
    let curves = bottom().try_morph_to(&top(), &options).unwrap();
    assert_eq!(curves.len(), 1);
    assert_relative_eq!(curves[0].start_point(), Point3::new(0.0, 2.0, 0.5), epsilon = 1e-9);
    assert_relative_eq!(curves[0].end_point(), Point3::new(1.0, 2.0, 0.5), epsilon = 1e-9);
}

#[test]
fn endpoint_alignment_decision() {
    let first = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
    let forward = [Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
    let backward = [Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
    assert!(!EndpointDistance.should_reverse(&first, &forward));
    assert!(EndpointDistance.should_reverse(&first, &backward));
    assert!(!TotalDistance.should_reverse(&first, &forward));
    assert!(TotalDistance.should_reverse(&first, &backward));
}
