use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::{
    curve::{AnyCurve, Arc, Curve, Line, NurbsCurve},
    misc::Plane,
};

use super::*;

fn plane_at_x(x: f64) -> Plane<f64> {
    Plane::try_from_origin_normal(&Point3::new(x, 0.0, 0.0), &Vector3::x()).unwrap()
}

fn bar() -> AnyCurve<f64> {
    Line::new(Point3::origin(), Point3::new(4.0, 0.0, 0.0)).into()
}

#[test]
fn crossing_parameter_of_line() {
    let crossings = find_plane_crossings(&bar(), &plane_at_x(1.0));
    assert_eq!(crossings.len(), 1);
    assert_relative_eq!(crossings[0], 0.25, epsilon = 1e-12);
}

#[test]
fn keeps_first_part() {
    let cut = cut_by_plane(&[bar()], &plane_at_x(1.0), CutSide::First);
    assert_eq!(cut.len(), 1);
    assert!(matches!(cut[0], AnyCurve::Line(_)));
    assert_relative_eq!(cut[0].start_point(), Point3::origin());
    assert_relative_eq!(cut[0].end_point(), Point3::new(1.0, 0.0, 0.0), epsilon = 1e-9);
}

#[test]
fn curves_not_crossing_are_kept() {
    let cut = cut_by_plane(&[bar()], &plane_at_x(5.0), CutSide::First);
    assert_eq!(cut, vec![bar()]);

    // crossing exactly at the end point
    let cut = cut_by_plane(&[bar()], &plane_at_x(4.0), CutSide::Last);
    assert_eq!(cut, vec![bar()]);
}

#[test]
fn curve_in_plane_is_kept() {
    let plane = Plane::try_from_origin_normal(&Point3::origin(), &Vector3::z()).unwrap();
    let cut = cut_by_plane(&[bar()], &plane, CutSide::First);
    assert_eq!(cut, vec![bar()]);
}

#[test]
fn arc_crossed_twice() {
    let arc: AnyCurve<f64> = Arc::try_from_three_points(
        &Point3::new(-1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
        &Point3::new(1.0, 0.0, 0.0),
    )
    .unwrap()
    .into();
    let plane = Plane::try_from_origin_normal(&Point3::new(0.0, 0.5, 0.0), &Vector3::y()).unwrap();
    let cut = cut_by_plane(&[arc.clone()], &plane, CutSide::First);
    assert_eq!(cut.len(), 2);
    for part in cut.iter() {
        assert!(matches!(part, AnyCurve::Arc(_)));
        assert_relative_eq!(part.start_point(), arc.start_point(), epsilon = 1e-9);
        assert_relative_eq!(part.end_point().y, 0.5, epsilon = 1e-9);
    }
    // crossings at 30 and 150 degrees
    assert_relative_eq!(cut[0].length(), std::f64::consts::PI / 6.0, epsilon = 1e-9);
    assert_relative_eq!(cut[1].length(), std::f64::consts::PI * 5.0 / 6.0, epsilon = 1e-9);
}

#[test]
fn nurbs_curve_is_trimmed() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(3.0, 1.0, 0.0),
    ];
    let curve: AnyCurve<f64> = NurbsCurve::try_interpolate(&points, 3).unwrap().into();
    let cut = cut_by_plane(&[curve.clone()], &plane_at_x(1.5), CutSide::Last);
    assert_eq!(cut.len(), 1);
    assert!(matches!(cut[0], AnyCurve::Trimmed(_)));
    assert_relative_eq!(cut[0].start_point().x, 1.5, epsilon = 1e-9);
    assert_relative_eq!(cut[0].end_point(), curve.end_point(), epsilon = 1e-9);
}
