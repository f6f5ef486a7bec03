use itertools::Itertools;

use crate::{
    curve::Curve,
    misc::{FloatingPoint, Plane},
};

/// Number of signed distance samples used to bracket crossings
const CROSSING_SAMPLES: usize = 64;

/// Number of bisection steps used to refine each crossing
const CROSSING_BISECTION_STEPS: usize = 64;

/// Find the normalized parameters where a curve passes from one side of a plane to the other.
/// Crossings are bracketed by sampling the signed distance and refined by bisection.
/// A curve touching the plane without crossing it has no crossing.
pub fn find_plane_crossings<T: FloatingPoint, C: Curve<T> + ?Sized>(
    curve: &C,
    plane: &Plane<T>,
) -> Vec<T> {
    let n = T::from_usize(CROSSING_SAMPLES).unwrap();
    let side = |t: T| plane.signed_distance(&curve.point_at(t)) >= T::zero();

    (0..=CROSSING_SAMPLES)
        .map(|i| T::from_usize(i).unwrap() / n)
        .tuple_windows()
        .filter(|(a, b)| side(*a) != side(*b))
        .map(|(a, b)| bisect(a, b, &side))
        .coalesce(|x, y| {
            if (y - x).abs() < T::default_epsilon() * T::from_usize(CROSSING_SAMPLES).unwrap() {
                Ok(x)
            } else {
                Err((x, y))
            }
        })
        .collect()
}

fn bisect<T: FloatingPoint, F: Fn(T) -> bool>(mut low: T, mut high: T, side: &F) -> T {
    let two = T::from_f64(2.).unwrap();
    let low_side = side(low);
    for _ in 0..CROSSING_BISECTION_STEPS {
        let mid = (low + high) / two;
        if side(mid) == low_side {
            low = mid;
        } else {
            high = mid;
        }
    }
    (low + high) / two
}
