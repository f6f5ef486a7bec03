use crate::misc::FloatingPoint;

/// Options for the Newton solver that intersects a line with a surface
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineIntersectionSolverOptions<T: FloatingPoint> {
    /// Number of seed cells per parameter direction.
    /// The solver starts once from the center of every cell.
    pub seed_division: usize,
    /// Maximum number of Newton iterations per seed.
    pub max_iters: usize,
    /// Squared residual below which a seed is considered converged.
    pub cost_tolerance: T,
    /// Residual distance under which a converged seed is accepted,
    /// also the distance under which two results are merged.
    pub minimum_distance: T,
}

impl<T: FloatingPoint> Default for LineIntersectionSolverOptions<T> {
    fn default() -> Self {
        Self {
            seed_division: 8,
            max_iters: 32,
            cost_tolerance: T::from_f64(1e-18).unwrap(),
            minimum_distance: T::point_tolerance(),
        }
    }
}

impl<T: FloatingPoint> LineIntersectionSolverOptions<T> {
    pub fn with_seed_division(mut self, seed_division: usize) -> Self {
        self.seed_division = seed_division;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    pub fn with_cost_tolerance(mut self, cost_tolerance: T) -> Self {
        self.cost_tolerance = cost_tolerance;
        self
    }

    pub fn with_minimum_distance(mut self, minimum_distance: T) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }
}
