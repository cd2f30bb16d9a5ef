pub mod types;
pub mod factory;
pub mod measurement;

pub use factory::{build_constraint, build_constraints, BuiltSketch};
pub use measurement::{measure_line_angle, AngleMeasurement, VertexSource};
pub use types::*;

#[cfg(test)]
mod tests_factory;

#[cfg(test)]
mod tests_descriptor;
