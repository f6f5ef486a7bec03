use crate::{
    curve::{AnyCurve, Curve},
    error::GeometryError,
    misc::FloatingPoint,
};

/// Trim `length` from both ends of a curve, measured along the curve.
/// Lines are extended at both ends by a negative `length`.
///
/// # Example
/// ```
/// use rebar_curves::prelude::*;
/// use nalgebra::Point3;
///
/// let bar: AnyCurve<f64> = Line::new(Point3::origin(), Point3::new(4., 0., 0.)).into();
/// let short = try_shorten(&bar, 0.5).unwrap();
/// assert_eq!(short.start_point(), Point3::new(0.5, 0., 0.));
/// assert_eq!(short.end_point(), Point3::new(3.5, 0., 0.));
///
/// let long = try_shorten(&bar, -1.).unwrap();
/// assert_eq!(long.length(), 6.);
/// ```
pub fn try_shorten<T: FloatingPoint>(curve: &AnyCurve<T>, length: T) -> anyhow::Result<AnyCurve<T>> {
    let total = curve.length();
    let two = T::from_f64(2.).unwrap();
    if length * two >= total {
        return Err(GeometryError::OverShortened {
            length: total.to_f64().unwrap_or(f64::NAN),
            amount: length.to_f64().unwrap_or(f64::NAN),
        }
        .into());
    }

    match curve {
        AnyCurve::Line(line) => Ok(line.extended(-length, -length)?.into()),
        _ if length < T::zero() => {
            anyhow::bail!("Only lines can be extended")
        }
        other => {
            let start = other.parameter_at_length(length);
            let end = other.parameter_at_length(total - length);
            Ok(other.sub_curve(start, end))
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use crate::curve::{Arc, Line, NurbsCurve};

    use super::*;

    fn semicircle() -> AnyCurve<f64> {
        Arc::try_from_three_points(
            &Point3::new(-1.0, 0.0, 0.0),
            &Point3::new(0.0, 1.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn shorten_line() {
        let bar: AnyCurve<f64> = Line::new(Point3::origin(), Point3::new(0.0, 0.0, 2.0)).into();
        let short = try_shorten(&bar, 0.25).unwrap();
        assert_relative_eq!(short.length(), 1.5);
        assert_relative_eq!(short.start_point(), Point3::new(0.0, 0.0, 0.25));
    }

    #[test]
    fn shorten_arc_keeps_arc() {
        let short = try_shorten(&semicircle(), std::f64::consts::FRAC_PI_4).unwrap();
        assert!(matches!(short, AnyCurve::Arc(_)));
        assert_relative_eq!(short.length(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(short.start_point(), Point3::new(-h, h, 0.0), epsilon = 1e-9);
        assert_relative_eq!(short.end_point(), Point3::new(h, h, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn shorten_nurbs_by_arc_length() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
        ];
        let curve: AnyCurve<f64> = NurbsCurve::try_interpolate(&points, 3).unwrap().into();
        let short = try_shorten(&curve, 0.5).unwrap();
        assert_relative_eq!(short.length(), curve.length() - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn over_shortening_is_rejected() {
        let bar: AnyCurve<f64> = Line::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)).into();
        let err = try_shorten(&bar, 0.5).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::OverShortened {
                length: 1.0,
                amount: 0.5
            })
        );
    }

    #[test]
    fn only_lines_extend() {
        assert!(try_shorten(&semicircle(), -0.1).is_err());
    }
}
