//! Contract with the external geometric constraint solver.
//!
//! The harness never positions geometry itself. It builds entities and
//! constraints through [`SolverSession`], asks the session to converge, and
//! reads evaluated coordinates back. Any engine that implements these traits
//! can be compared under both strategies.

pub mod types;
pub mod variant;


pub use types::*;
pub use variant::{PerVariant, SolveStrategy, SolveVariant};

use crate::geometry::Position;
use thiserror::Error;

/// Errors reported by a solver session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    /// The system did not converge before the engine's iteration cap.
    #[error("solver did not converge after {steps} steps")]
    Divergence { steps: usize },

    /// Any other failure raised by the engine.
    #[error("solver failure: {0}")]
    Backend(String),
}

/// One independent solving session.
///
/// Entities live in the session's arena and are addressed by handles, which
/// are only meaningful for the session that issued them.
pub trait SolverSession {
    /// Create a point with its own free parameters.
    fn add_point(&mut self, name: &str, position: Position) -> PointHandle;

    /// Create a directed line between two existing points.
    fn add_line(&mut self, source: PointHandle, target: PointHandle) -> LineHandle;

    /// Create a circle around an existing center point.
    fn add_circle(&mut self, name: &str, center: PointHandle, radius: f64) -> CircleHandle;

    fn add_constraint(&mut self, constraint: SolverConstraint);

    /// Select how each solver step is computed.
    fn set_strategy(&mut self, strategy: SolveStrategy);

    /// Add a positional "drag to target" expression for `point`.
    fn add_drag(&mut self, point: PointHandle, target: Position);

    /// Run the solver until convergence and return the number of steps used.
    fn solve(&mut self) -> Result<usize, SolverError>;

    /// Current value of a point.
    fn evaluate(&self, point: PointHandle) -> Position;

    /// `[source, target]` of a line.
    fn line_endpoints(&self, line: LineHandle) -> [PointHandle; 2];

    /// Center point and current radius of a circle.
    fn circle(&self, circle: CircleHandle) -> (PointHandle, f64);
}

/// Factory for solver sessions.
pub trait SolverBackend {
    type Session: SolverSession;

    /// Open a fresh session that shares no state with any earlier one.
    fn open_session(&self) -> Self::Session;
}
