//! Analysis of measured and simulated intensity sequences

/// Correlation and RMS scoring against theory
pub mod comparison;
/// Peak and minimum detection
pub mod extrema;
/// Fringe spacing predictions and measurement assessment
pub mod fringes;
