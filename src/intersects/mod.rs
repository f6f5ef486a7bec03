pub mod line_intersection_solver_options;
pub mod surface_line;

pub use line_intersection_solver_options::*;
pub use surface_line::*;
