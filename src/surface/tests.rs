use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::{
    curve::{AnyCurve, Arc, Curve, Line},
    misc::points_almost_equal,
};

use super::*;

fn assert_closed_loop(curves: &[AnyCurve<f64>]) {
    for (i, curve) in curves.iter().enumerate() {
        let next = &curves[(i + 1) % curves.len()];
        assert!(
            points_almost_equal(&curve.end_point(), &next.start_point()),
            "curve {i} does not meet the next one"
        );
    }
}

fn flat_ruled() -> RuledSurface<f64> {
    RuledSurface::new(
        Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)).into(),
        Line::new(Point3::new(0.0, 1.0, 0.0), Point3::new(2.0, 1.0, 0.0)).into(),
    )
}

#[test]
fn plane_perimeter_is_closed() {
    let plane = PlaneSurface::new(
        Point3::new(1.0, 1.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 3.0),
    );
    let perimeter = plane.perimeter_curves();
    assert_eq!(perimeter.len(), 4);
    assert_closed_loop(&perimeter);
    assert_relative_eq!(perimeter[0].length(), 2.0);
    assert_relative_eq!(perimeter[1].length(), 3.0);
}

#[test]
fn plane_offset_moves_along_normal() {
    let plane = PlaneSurface::new(Point3::origin(), Vector3::x(), Vector3::y());
    let offset = plane.try_offset(0.25).unwrap();
    assert_relative_eq!(offset.point_at(0.5, 0.5), Point3::new(0.5, 0.5, 0.25));
    assert_eq!(offset.normal_at(0.0, 0.0), plane.normal_at(0.0, 0.0));
}

#[test]
fn ruled_surface_evaluation() {
    let surface = flat_ruled();
    assert_relative_eq!(surface.point_at(0.5, 0.5), Point3::new(1.0, 0.5, 0.0));
    assert_relative_eq!(surface.normal_at(0.3, 0.7), Vector3::z(), epsilon = 1e-12);
    let (du, dv) = surface.derivatives_at(0.5, 0.5);
    assert_relative_eq!(du, Vector3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(dv, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn ruled_perimeter_is_closed() {
    let surface = RuledSurface::new(
        Arc::try_from_three_points(
            &Point3::new(-1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        )
        .unwrap()
        .into(),
        Arc::try_from_three_points(
            &Point3::new(-2.0, 0.0, 0.0),
            &Point3::new(0.0, 2.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        )
        .unwrap()
        .into(),
    );
    let perimeter = surface.perimeter_curves();
    assert_eq!(perimeter.len(), 4);
    assert_closed_loop(&perimeter);
    assert!(matches!(perimeter[2], AnyCurve::Arc(_)));
}

#[test]
fn ruled_offset_keeps_flat_shape() {
    let surface = flat_ruled();
    let offset = surface.try_offset(0.5).unwrap();
    assert_relative_eq!(
        offset.point_at(0.5, 0.0),
        Point3::new(1.0, 0.0, 0.5),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        offset.point_at(0.25, 1.0),
        Point3::new(0.5, 1.0, 0.5),
        epsilon = 1e-9
    );
}

#[test]
fn degenerate_corner_normal() {
    // both rails start at the same point
    let surface = RuledSurface::new(
        Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)).into(),
        Line::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)).into(),
    );
    let normal = surface.normal_at(0.0, 0.5);
    assert_relative_eq!(normal, Vector3::z(), epsilon = 1e-9);
}

#[test]
fn any_surface_dispatch() {
    let surface: AnySurface<f64> = flat_ruled().into();
    assert_eq!(surface.perimeter_curves().len(), 4);
    let line = Line::new(Point3::new(1.0, 0.5, -1.0), Point3::new(1.0, 0.5, 1.0));
    let hits = surface.intersect_line(&line);
    assert_eq!(hits.len(), 1);
    assert_relative_eq!(hits[0].parameter(), 0.5, epsilon = 1e-9);
}
