pub mod config;
pub mod geometry;
pub mod harness;
pub mod record;
pub mod sketch;
pub mod solver;
pub mod stats;

pub fn version() -> &'static str {
    "0.1.0"
}
