use crate::misc::FloatingPoint;

/// How the curves following a surface are built
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FollowMode {
    /// Parameter lines of the surface, treating it as an ideal rectangle in parameter space
    #[default]
    IsoParametric,
    /// Lines and arcs between opposite sides of the surface perimeter
    Perimeter,
}

/// Options for covering a surface with a family of curves
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowOptions<T> {
    /// Number of samples per parameter line in iso-parametric mode
    precision: usize,
    /// Distance the surface is moved along its normal before following it
    offset: T,
    /// Desired distance between curves, used instead of `count` when positive
    spacing: T,
    /// Number of divisions across the surface, producing `count - 1` interior curves
    count: usize,
    /// Run the curves across the other parameter direction
    flip: bool,
    mode: FollowMode,
    /// Angle tolerance in degrees for grouping perimeter curves in perimeter mode
    angle_tolerance: T,
    include_first_edge: bool,
    include_last_edge: bool,
}

impl<T: FloatingPoint> Default for FollowOptions<T> {
    fn default() -> Self {
        Self {
            precision: 50,
            offset: T::zero(),
            spacing: T::zero(),
            count: 2,
            flip: false,
            mode: FollowMode::default(),
            angle_tolerance: T::from_f64(60.).unwrap(),
            include_first_edge: false,
            include_last_edge: false,
        }
    }
}

impl<T: FloatingPoint> FollowOptions<T> {
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn offset(&self) -> T {
        self.offset
    }

    pub fn spacing(&self) -> T {
        self.spacing
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    pub fn mode(&self) -> FollowMode {
        self.mode
    }

    pub fn angle_tolerance(&self) -> T {
        self.angle_tolerance
    }

    pub fn include_first_edge(&self) -> bool {
        self.include_first_edge
    }

    pub fn include_last_edge(&self) -> bool {
        self.include_last_edge
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_offset(mut self, offset: T) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_spacing(mut self, spacing: T) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_flip(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_mode(mut self, mode: FollowMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_angle_tolerance(mut self, angle_tolerance: T) -> Self {
        self.angle_tolerance = angle_tolerance;
        self
    }

    pub fn with_include_first_edge(mut self, include: bool) -> Self {
        self.include_first_edge = include;
        self
    }

    pub fn with_include_last_edge(mut self, include: bool) -> Self {
        self.include_last_edge = include;
        self
    }
}
