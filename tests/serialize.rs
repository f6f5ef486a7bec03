#![cfg(feature = "serde")]

use nalgebra::{Point3, Vector3};
use rebar_curves::prelude::*;

#[test]
fn test_curve_serialization() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
    ];
    let curve: AnyCurve<f64> = NurbsCurve::try_interpolate(&points, 2).unwrap().into();
    let json = serde_json::to_string_pretty(&curve).unwrap();
    let restored: AnyCurve<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(curve, restored);
}

#[test]
fn test_options_serialization() {
    let options = FollowOptions::<f64>::default()
        .with_count(6)
        .with_mode(FollowMode::Perimeter)
        .with_include_last_edge(true);
    let json = serde_json::to_string(&options).unwrap();
    let restored: FollowOptions<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(options, restored);

    let options = NormalCurveOptions::<f64>::default().with_height(0.25);
    let json = serde_json::to_string(&options).unwrap();
    let restored: NormalCurveOptions<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(options, restored);
}

#[test]
fn test_surface_serialization() {
    let surface: AnySurface<f64> =
        PlaneSurface::new(Point3::origin(), Vector3::x(), Vector3::y()).into();
    let json = serde_json::to_string(&surface).unwrap();
    let restored: AnySurface<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(surface, restored);
}
