use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a solver step is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStrategy {
    /// Minimal L1 step found with a linear program.
    LinearProgram,
    /// The engine's default minimum-norm least-squares step.
    LeastSquares,
}

/// The two configurations every sketch is solved under.
///
/// Not to be confused with the l1/l2 norm metrics computed on their output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SolveVariant {
    L1,
    L2,
}

impl SolveVariant {
    /// Solve order of a dual run.
    pub const ALL: [SolveVariant; 2] = [SolveVariant::L1, SolveVariant::L2];

    pub fn strategy(&self) -> SolveStrategy {
        match self {
            Self::L1 => SolveStrategy::LinearProgram,
            Self::L2 => SolveStrategy::LeastSquares,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for SolveVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolveVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            other => Err(format!("unknown solve variant '{}'", other)),
        }
    }
}

/// One value per solve variant, persisted as `{ "L1": .., "L2": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerVariant<T> {
    #[serde(rename = "L1")]
    pub l1: T,
    #[serde(rename = "L2")]
    pub l2: T,
}

impl<T> PerVariant<T> {
    pub fn new(l1: T, l2: T) -> Self {
        Self { l1, l2 }
    }

    /// Build both entries from a function of the variant.
    pub fn from_fn(mut f: impl FnMut(SolveVariant) -> T) -> Self {
        Self { l1: f(SolveVariant::L1), l2: f(SolveVariant::L2) }
    }

    /// Like [`PerVariant::from_fn`], stopping at the first error. L1 runs first.
    pub fn try_from_fn<E>(mut f: impl FnMut(SolveVariant) -> Result<T, E>) -> Result<Self, E> {
        let l1 = f(SolveVariant::L1)?;
        let l2 = f(SolveVariant::L2)?;
        Ok(Self { l1, l2 })
    }

    pub fn get(&self, variant: SolveVariant) -> &T {
        match variant {
            SolveVariant::L1 => &self.l1,
            SolveVariant::L2 => &self.l2,
        }
    }

    pub fn get_mut(&mut self, variant: SolveVariant) -> &mut T {
        match variant {
            SolveVariant::L1 => &mut self.l1,
            SolveVariant::L2 => &mut self.l2,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerVariant<U> {
        PerVariant { l1: f(&self.l1), l2: f(&self.l2) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SolveVariant, &T)> {
        [(SolveVariant::L1, &self.l1), (SolveVariant::L2, &self.l2)].into_iter()
    }
}
