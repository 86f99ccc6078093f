//! Far-field optical model of single and double slit diffraction

/// Screen coordinate grids
pub mod grid;
/// Intensity evaluation and normalization
pub mod model;
/// Seeded measurement noise for synthetic experimental patterns
pub mod noise;
/// Validated slit geometry and light parameters
pub mod setup;
/// Monochromatic plane wave description
pub mod wave;

pub use grid::CoordinateGrid;
pub use model::{IntensityPattern, PatternModel, SlitMode};
pub use setup::OpticalSetup;
