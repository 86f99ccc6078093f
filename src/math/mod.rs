//! Numerical helpers shared by the optical model and the analyzer

/// Guarded sinc-squared diffraction envelope
pub mod sinc;
/// Sample statistics for comparing intensity sequences
pub mod statistics;
