//! Error types for pattern modelling, analysis and their file collaborators

use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation and analysis operations
#[derive(Debug)]
pub enum SimulationError {
    /// Physical or numerical parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Normalization attempted on a signal with no positive maximum
    DegenerateInput {
        /// Description of what made the signal degenerate
        reason: String,
    },

    /// Compared sequences do not have the same number of samples
    LengthMismatch {
        /// Number of experimental samples
        experimental: usize,
        /// Number of theoretical samples
        theoretical: usize,
    },

    /// Comparison requested before any experimental sequence was available
    NoData,

    /// Failed to decode a measured pattern image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered pattern image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Report could not be encoded as JSON
    Serialization {
        /// Underlying encoder error
        source: serde_json::Error,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DegenerateInput { reason } => {
                write!(f, "Degenerate input signal: {reason}")
            }
            Self::LengthMismatch {
                experimental,
                theoretical,
            } => {
                write!(
                    f,
                    "Length mismatch: experimental has {experimental} samples, theoretical has {theoretical}"
                )
            }
            Self::NoData => write!(f, "No experimental data loaded"),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to encode report: {source}")
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate input error
pub fn degenerate_input(reason: &impl ToString) -> SimulationError {
    SimulationError::DegenerateInput {
        reason: reason.to_string(),
    }
}

/// Reject values that are not finite and strictly positive
///
/// # Errors
///
/// Returns `InvalidParameter` naming `parameter` when the check fails
pub fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite positive number",
        ))
    }
}
