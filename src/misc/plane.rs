use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// An infinite plane in 3D space, stored as `normal · p + constant = 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: FloatingPoint> {
    normal: Vector3<T>,
    constant: T,
}

impl<T: FloatingPoint> Plane<T> {
    pub fn new(normal: Vector3<T>, constant: T) -> Self {
        Self { normal, constant }
    }

    /// Create a plane through `origin` with the given normal.
    /// The normal is normalized so that signed distances are metric.
    pub fn try_from_origin_normal(origin: &Point3<T>, normal: &Vector3<T>) -> anyhow::Result<Self> {
        let normal = normal
            .try_normalize(T::default_epsilon())
            .ok_or(anyhow::anyhow!("Plane normal must not be zero"))?;
        Ok(Self {
            normal,
            constant: -normal.dot(&origin.coords),
        })
    }

    pub fn normal(&self) -> Vector3<T> {
        self.normal
    }

    pub fn constant(&self) -> T {
        self.constant
    }

    /// Calculate the signed distance from a point to the plane.
    pub fn signed_distance(&self, point: &Point3<T>) -> T {
        self.normal.dot(&point.coords) + self.constant
    }
}
