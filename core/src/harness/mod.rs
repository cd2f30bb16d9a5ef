//! Dual-solve orchestration and result capture.
//!
//! One sketch is solved twice from the same starting geometry, once per
//! [`SolveVariant`], and the two outcomes are scored against the original.

pub mod angles;
pub mod metrics;
pub mod orchestrator;


pub use angles::verify_angles;
pub use metrics::*;
pub use orchestrator::{run_and_persist, run_dual_solve, DualSolveRun, VariantRun};

use crate::record::RecordError;
use crate::sketch::SketchError;
use crate::solver::{SolveVariant, SolverError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid sketch: {0}")]
    Sketch(#[from] SketchError),

    #[error("{variant} solve failed: {source}")]
    Solver {
        variant: SolveVariant,
        #[source]
        source: SolverError,
    },

    #[error(transparent)]
    Record(#[from] RecordError),
}
