use nalgebra::{Point3, Translation3, Vector3};

use crate::misc::{FloatingPoint, Invertible, Transformable};

use super::Curve;

/// A circular arc, swept counter-clockwise around `x_axis × y_axis`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc<T: FloatingPoint> {
    center: Point3<T>,
    radius: T,
    /// unit vector from the center towards the start point
    x_axis: Vector3<T>,
    /// unit vector in the arc plane, perpendicular to `x_axis`
    y_axis: Vector3<T>,
    /// swept angle in radians
    sweep: T,
}

impl<T: FloatingPoint> Arc<T> {
    /// Create an arc which starts at `start`, passes through `through` and ends at `end`
    /// Fails if the three points are collinear or coincident.
    ///
    /// # Example
    /// ```
    /// use rebar_curves::prelude::*;
    /// use nalgebra::Point3;
    /// use approx::assert_relative_eq;
    ///
    /// let arc = Arc::try_from_three_points(
    ///     &Point3::new(1.0, 0.0, 0.0),
    ///     &Point3::new(0.0, 1.0, 0.0),
    ///     &Point3::new(-1.0, 0.0, 0.0),
    /// )
    /// .unwrap();
    /// assert_relative_eq!(arc.radius(), 1.0, epsilon = 1e-12);
    /// assert_relative_eq!(arc.length(), std::f64::consts::PI, epsilon = 1e-12);
    /// assert_relative_eq!(arc.point_at(0.5), Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    ///
    /// let collinear = Arc::try_from_three_points(
    ///     &Point3::new(0.0, 0.0, 0.0),
    ///     &Point3::new(1.0, 0.0, 0.0),
    ///     &Point3::new(2.0, 0.0, 0.0),
    /// );
    /// assert!(collinear.is_err());
    /// ```
    pub fn try_from_three_points(
        start: &Point3<T>,
        through: &Point3<T>,
        end: &Point3<T>,
    ) -> anyhow::Result<Self> {
        let ab = through - start;
        let ac = end - start;
        let n = ab.cross(&ac);
        let n2 = n.norm_squared();
        let scale = ab.norm_squared().max(ac.norm_squared());
        anyhow::ensure!(
            n2 > T::default_epsilon().sqrt() * scale * scale
                && scale > T::default_epsilon(),
            "Cannot create an arc from collinear points"
        );

        let two = T::from_f64(2.).unwrap();
        let offset = (n.cross(&ab) * ac.norm_squared() + ac.cross(&n) * ab.norm_squared())
            / (two * n2);
        let center = start + offset;
        let radius = offset.norm();

        let normal = n / n2.sqrt();
        let x_axis = (start - center) / radius;
        let y_axis = normal.cross(&x_axis);

        let to_end = end - center;
        let mut sweep = to_end.dot(&y_axis).atan2(to_end.dot(&x_axis));
        if sweep <= T::zero() {
            sweep += T::two_pi();
        }

        Ok(Self {
            center,
            radius,
            x_axis,
            y_axis,
            sweep,
        })
    }

    pub fn center(&self) -> &Point3<T> {
        &self.center
    }

    pub fn radius(&self) -> T {
        self.radius
    }

    pub fn sweep(&self) -> T {
        self.sweep
    }

    /// Normal of the arc plane
    pub fn normal(&self) -> Vector3<T> {
        self.x_axis.cross(&self.y_axis)
    }

    /// Split the arc into two at a normalized parameter
    pub fn split_at(&self, t: T) -> (Self, Self) {
        let angle = self.sweep * t;
        let (sin, cos) = angle.sin_cos();
        let x_axis = self.x_axis * cos + self.y_axis * sin;
        let y_axis = self.y_axis * cos - self.x_axis * sin;
        let head = Self {
            sweep: angle,
            ..self.clone()
        };
        let tail = Self {
            x_axis,
            y_axis,
            sweep: self.sweep - angle,
            ..self.clone()
        };
        (head, tail)
    }
}

impl<T: FloatingPoint> Curve<T> for Arc<T> {
    fn point_at(&self, t: T) -> Point3<T> {
        let (sin, cos) = (self.sweep * t).sin_cos();
        self.center + (self.x_axis * cos + self.y_axis * sin) * self.radius
    }

    fn tangent_at(&self, t: T) -> Vector3<T> {
        let (sin, cos) = (self.sweep * t).sin_cos();
        (self.y_axis * cos - self.x_axis * sin) * (self.radius * self.sweep)
    }

    fn length(&self) -> T {
        self.radius * self.sweep
    }

    fn length_at(&self, t: T) -> T {
        self.length() * t
    }

    fn parameter_at_length(&self, length: T) -> T {
        (length / self.length()).clamp(T::zero(), T::one())
    }

    fn is_straight(&self) -> bool {
        false
    }
}

impl<T: FloatingPoint> Invertible for Arc<T> {
    fn invert(&mut self) {
        let (sin, cos) = self.sweep.sin_cos();
        let x_axis = self.x_axis * cos + self.y_axis * sin;
        let y_axis = self.x_axis * sin - self.y_axis * cos;
        self.x_axis = x_axis;
        self.y_axis = y_axis;
    }
}

impl<'a, T: FloatingPoint> Transformable<&'a Translation3<T>> for Arc<T> {
    fn transform(&mut self, transform: &'a Translation3<T>) {
        self.center = transform.transform_point(&self.center);
    }
}
