#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<OptimizationError> for GenericError {
    fn from(value: OptimizationError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies errors which terminate an optimization run. No ranked result is produced when any of
/// them is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationError {
    /// Less than two locations were supplied, so there is no order to optimize.
    InsufficientLocations {
        /// Actual amount of locations.
        actual: usize,
    },

    /// Optimization parameters or input data are not usable.
    InvalidConfiguration(String),

    /// Travel cost lookup has failed. Fitness values become incomparable, so the run is aborted.
    OracleUnavailable {
        /// Origin location id.
        origin: String,
        /// Destination location id.
        destination: String,
        /// A failure reason reported by travel cost service.
        reason: String,
        /// A generation at which lookup has failed, `None` when it happened outside of evolution.
        generation: Option<usize>,
    },

    /// A quota (user cancellation, time limit) was reached before evolution has converged.
    Interrupted {
        /// A generation at which run was interrupted.
        generation: usize,
    },
}

impl OptimizationError {
    /// Returns a short name of error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InsufficientLocations { .. } => "InsufficientLocations",
            Self::InvalidConfiguration(_) => "InvalidConfiguration",
            Self::OracleUnavailable { .. } => "OracleUnavailable",
            Self::Interrupted { .. } => "Interrupted",
        }
    }

    /// Returns a generation at which error has occurred, if it is known.
    pub fn generation(&self) -> Option<usize> {
        match self {
            Self::OracleUnavailable { generation, .. } => *generation,
            Self::Interrupted { generation } => Some(*generation),
            _ => None,
        }
    }

    /// Attaches generation to the error if it is not yet set.
    pub fn at_generation(self, at: usize) -> Self {
        match self {
            Self::OracleUnavailable { origin, destination, reason, generation: None } => {
                Self::OracleUnavailable { origin, destination, reason, generation: Some(at) }
            }
            other => other,
        }
    }
}

impl Display for OptimizationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientLocations { actual } => {
                write!(f, "{}: at least two locations are required, got {actual}", self.kind())
            }
            Self::InvalidConfiguration(msg) => write!(f, "{}: {msg}", self.kind()),
            Self::OracleUnavailable { origin, destination, reason, generation } => {
                write!(f, "{}: cannot get travel cost from '{origin}' to '{destination}': '{reason}'", self.kind())?;
                if let Some(generation) = generation {
                    write!(f, " at generation {generation}")?;
                }
                Ok(())
            }
            Self::Interrupted { generation } => write!(f, "{}: run stopped at generation {generation}", self.kind()),
        }
    }
}

impl std::error::Error for OptimizationError {}
