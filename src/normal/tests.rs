use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::{
    curve::{Curve, Line},
    error::GeometryError,
    surface::{AnySurface, PlaneSurface, RuledSurface},
};

use super::*;

fn slab() -> PlaneSurface<f64> {
    PlaneSurface::new(Point3::origin(), Vector3::x(), Vector3::y())
}

fn sheet_at(z: f64) -> PlaneSurface<f64> {
    PlaneSurface::new(
        Point3::new(-1.0, -1.0, z),
        Vector3::x() * 3.0,
        Vector3::y() * 3.0,
    )
}

#[test]
fn parallel_boundary_bounds_every_curve() {
    let options = NormalCurveOptions::default().with_count(4);
    let curves = try_normal_curves(&slab(), &[sheet_at(0.3)], &options).unwrap();
    assert_eq!(curves.len(), 4);
    for (i, curve) in curves.iter().enumerate() {
        let x = (i + 1) as f64 / 5.0;
        assert_relative_eq!(*curve.start(), Point3::new(x, 0.5, 0.0), epsilon = 1e-12);
        assert_relative_eq!(curve.length(), 0.3, epsilon = 1e-9);
    }
}

#[test]
fn boundary_behind_is_found_by_reversed_normal() {
    let options = NormalCurveOptions::default().with_count(2);
    let curves = try_normal_curves(&slab(), &[sheet_at(-0.5)], &options).unwrap();
    assert_eq!(curves.len(), 2);
    assert_relative_eq!(curves[0].end().z, -0.5, epsilon = 1e-9);
}

#[test]
fn reversed_normal_keeps_cover_inside() {
    let options = NormalCurveOptions::default()
        .with_count(1)
        .with_offset(0.05);
    let curves = try_normal_curves(&slab(), &[sheet_at(-0.3)], &options).unwrap();
    assert_eq!(curves.len(), 1);
    assert_relative_eq!(*curves[0].start(), Point3::new(0.5, 0.5, -0.05), epsilon = 1e-9);
    assert_relative_eq!(*curves[0].end(), Point3::new(0.5, 0.5, -0.25), epsilon = 1e-9);
    assert_relative_eq!(curves[0].length(), 0.2, epsilon = 1e-9);
}

#[test]
fn positions_without_boundary_are_skipped() {
    let narrow = PlaneSurface::new(
        Point3::new(0.0, 0.0, 0.3),
        Vector3::x() * 0.5,
        Vector3::y(),
    );
    let options = NormalCurveOptions::default().with_count(4);
    let curves = try_normal_curves(&slab(), &[narrow], &options).unwrap();
    assert_eq!(curves.len(), 2);
    assert_relative_eq!(curves[1].start().x, 0.4, epsilon = 1e-12);
}

#[test]
fn offset_is_applied_at_both_ends() {
    let options = NormalCurveOptions::default()
        .with_count(1)
        .with_offset(0.05);
    let curves = try_normal_curves(&slab(), &[sheet_at(0.3)], &options).unwrap();
    assert_eq!(curves.len(), 1);
    assert_relative_eq!(curves[0].start().z, 0.05, epsilon = 1e-9);
    assert_relative_eq!(curves[0].end().z, 0.25, epsilon = 1e-9);

    // cover larger than the gap leaves nothing
    let options = options.with_offset(0.2);
    let curves = try_normal_curves(&slab(), &[sheet_at(0.3)], &options).unwrap();
    assert!(curves.is_empty());
}

#[test]
fn gaps_between_boundaries_are_skipped() {
    let boundaries = [sheet_at(0.9), sheet_at(0.3), sheet_at(0.6)];
    let options = NormalCurveOptions::default().with_count(1);
    let curves = try_normal_curves(&slab(), &boundaries, &options).unwrap();
    assert_eq!(curves.len(), 2);
    assert_relative_eq!(curves[0].end().z, 0.3, epsilon = 1e-9);
    assert_relative_eq!(curves[1].start().z, 0.6, epsilon = 1e-9);
    assert_relative_eq!(curves[1].end().z, 0.9, epsilon = 1e-9);
}

#[test]
fn duplicated_hits_collapse() {
    let boundaries = [sheet_at(0.3), sheet_at(0.3)];
    let options = NormalCurveOptions::default().with_count(1);
    let curves = try_normal_curves(&slab(), &boundaries, &options).unwrap();
    assert_eq!(curves.len(), 1);
}

#[test]
fn vertical_sweep() {
    let options = NormalCurveOptions::default()
        .with_count(3)
        .with_height(0.2)
        .with_horizontal(false);
    let curves = try_normal_curves(&slab(), &[sheet_at(0.3)], &options).unwrap();
    assert_eq!(curves.len(), 3);
    for (i, curve) in curves.iter().enumerate() {
        assert_relative_eq!(curve.start().x, 0.2, epsilon = 1e-12);
        assert_relative_eq!(curve.start().y, (i + 1) as f64 / 4.0, epsilon = 1e-12);
    }
}

#[test]
fn sweep_follows_x_extent() {
    // u runs along y, so the horizontal sweep runs along v
    let rotated = PlaneSurface::new(Point3::origin(), Vector3::y(), Vector3::x());
    let options = NormalCurveOptions::default().with_count(1).with_height(0.25);
    let curves = try_normal_curves(&rotated, &[sheet_at(-0.3)], &options).unwrap();
    assert_eq!(curves.len(), 1);
    assert_relative_eq!(*curves[0].start(), Point3::new(0.5, 0.25, 0.0), epsilon = 1e-12);
}

#[test]
fn ruled_boundary() {
    let roof = RuledSurface::new(
        Line::new(Point3::new(-1.0, -1.0, 0.3), Point3::new(2.0, -1.0, 0.3)).into(),
        Line::new(Point3::new(-1.0, 2.0, 0.3), Point3::new(2.0, 2.0, 0.3)).into(),
    );
    let boundaries: Vec<AnySurface<f64>> = vec![roof.into()];
    let options = NormalCurveOptions::default().with_count(2);
    let curves = try_normal_curves(&slab(), &boundaries, &options).unwrap();
    assert_eq!(curves.len(), 2);
    assert_relative_eq!(curves[0].length(), 0.3, epsilon = 1e-6);
}

#[test]
fn invalid_inputs() {
    let options = NormalCurveOptions::default();
    let err = try_normal_curves::<f64, _, PlaneSurface<f64>>(&slab(), &[], &options).unwrap_err();
    assert_eq!(
        err.downcast_ref::<GeometryError>(),
        Some(&GeometryError::EmptyInput("boundaries"))
    );

    let options = options.with_height(1.5);
    let err = try_normal_curves(&slab(), &[sheet_at(0.3)], &options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<GeometryError>(),
        Some(GeometryError::OutOfDomain { name: "height", .. })
    ));
}
