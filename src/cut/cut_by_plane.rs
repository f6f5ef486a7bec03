use crate::{
    curve::{AnyCurve, Curve},
    misc::{FloatingPoint, Plane},
};

use super::find_plane_crossings;

/// Which part of a curve split by a plane is kept
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CutSide {
    /// The part between the start of the curve and the crossing
    #[default]
    First,
    /// The part between the crossing and the end of the curve
    Last,
}

/// Cut curves by a plane.
///
/// Every curve crossing the plane is split at each crossing and the part on `side` of
/// that crossing is kept, one part per crossing. Curves that do not cross the plane are
/// kept unchanged.
///
/// # Example
/// ```
/// use rebar_curves::prelude::*;
/// use nalgebra::{Point3, Vector3};
/// use approx::assert_relative_eq;
///
/// let bar: AnyCurve<f64> = Line::new(Point3::origin(), Point3::new(4., 0., 0.)).into();
/// let plane = Plane::try_from_origin_normal(&Point3::new(1., 0., 0.), &Vector3::x()).unwrap();
/// let cut = cut_by_plane(&[bar], &plane, CutSide::Last);
/// assert_eq!(cut.len(), 1);
/// assert_relative_eq!(cut[0].start_point(), Point3::new(1., 0., 0.), epsilon = 1e-9);
/// assert_relative_eq!(cut[0].length(), 3., epsilon = 1e-9);
/// ```
pub fn cut_by_plane<T: FloatingPoint>(
    curves: &[AnyCurve<T>],
    plane: &Plane<T>,
    side: CutSide,
) -> Vec<AnyCurve<T>> {
    let tolerance = T::point_tolerance();
    curves
        .iter()
        .flat_map(|curve| {
            let crossings = find_plane_crossings(curve, plane)
                .into_iter()
                .filter(|t| {
                    // a crossing at an end point leaves nothing to split
                    curve.length_at(*t) > tolerance
                        && curve.length() - curve.length_at(*t) > tolerance
                })
                .collect::<Vec<_>>();

            if crossings.is_empty() {
                if lies_in_plane(curve, plane) {
                    log::warn!("curve lies in the cutting plane and is kept uncut");
                }
                return vec![curve.clone()];
            }

            crossings
                .into_iter()
                .map(|t| {
                    let (head, tail) = curve.split_at(t);
                    match side {
                        CutSide::First => head,
                        CutSide::Last => tail,
                    }
                })
                .collect()
        })
        .collect()
}

fn lies_in_plane<T: FloatingPoint>(curve: &AnyCurve<T>, plane: &Plane<T>) -> bool {
    let tolerance = T::point_tolerance();
    let half = T::from_f64(0.5).unwrap();
    [T::zero(), half, T::one()]
        .into_iter()
        .all(|t| plane.signed_distance(&curve.point_at(t)).abs() < tolerance)
}
