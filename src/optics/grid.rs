//! Evenly spaced screen positions centred on the optical axis

use crate::io::configuration::MIN_RESOLUTION;
use crate::io::error::{Result, ensure_positive, invalid_parameter};
use ndarray::Array1;

/// Ordered screen positions in meters
///
/// Grids built by [`CoordinateGrid::symmetric`] run from `-width/2` to
/// `+width/2` inclusive, with both end points exact.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    positions: Array1<f64>,
}

impl CoordinateGrid {
    /// Build `resolution` evenly spaced positions across `screen_width`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `screen_width` is not a finite positive
    /// number or `resolution` is below 2
    pub fn symmetric(screen_width: f64, resolution: usize) -> Result<Self> {
        let screen_width = ensure_positive("screen_width", screen_width)?;
        if resolution < MIN_RESOLUTION {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &format!("must be at least {MIN_RESOLUTION}"),
            ));
        }

        let start = -screen_width / 2.0;
        let stop = screen_width / 2.0;
        let step = (stop - start) / (resolution - 1) as f64;

        // Unfused multiply then add reproduces the usual linspace rounding
        #[allow(clippy::suboptimal_flops)]
        let mut positions = Array1::from_shape_fn(resolution, |i| i as f64 * step + start);
        if let Some(last) = positions.get_mut(resolution - 1) {
            *last = stop;
        }

        Ok(Self { positions })
    }

    /// Wrap caller-supplied positions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if fewer than 2 positions are given, any
    /// position is not finite, or the positions are not strictly increasing
    pub fn from_positions(positions: Array1<f64>) -> Result<Self> {
        if positions.len() < MIN_RESOLUTION {
            return Err(invalid_parameter(
                "positions",
                &positions.len(),
                &format!("need at least {MIN_RESOLUTION} positions"),
            ));
        }
        if positions.iter().any(|y| !y.is_finite()) {
            return Err(invalid_parameter(
                "positions",
                &"non-finite",
                &"positions must be finite",
            ));
        }
        let increasing = positions
            .iter()
            .zip(positions.iter().skip(1))
            .all(|(a, b)| b > a);
        if !increasing {
            return Err(invalid_parameter(
                "positions",
                &"unordered",
                &"positions must be strictly increasing",
            ));
        }
        Ok(Self { positions })
    }

    /// Screen positions in meters
    pub const fn positions(&self) -> &Array1<f64> {
        &self.positions
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the grid holds no positions (never true for a validated grid)
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position at `index`, if in range
    pub fn get(&self, index: usize) -> Option<f64> {
        self.positions.get(index).copied()
    }

    /// Largest distance of any position from the optical axis
    pub fn half_width(&self) -> f64 {
        self.positions.iter().fold(0.0, |acc: f64, y| acc.max(y.abs()))
    }

    /// Largest angle subtended at the slits for a screen at `screen_distance`
    pub fn max_half_angle(&self, screen_distance: f64) -> f64 {
        (self.half_width() / screen_distance).atan()
    }

    /// Consume the grid, returning the positions
    pub fn into_inner(self) -> Array1<f64> {
        self.positions
    }
}
