//! Immutable description of the light source, slits and screen

use crate::io::configuration::{
    DEFAULT_SCREEN_DISTANCE, DEFAULT_SLIT_SEPARATION, DEFAULT_SLIT_WIDTH, DEFAULT_WAVELENGTH,
};
use crate::io::error::{Result, ensure_positive};
use serde::Serialize;
use tracing::warn;

/// Physical parameters that fully determine a diffraction pattern
///
/// All lengths are in meters. Values are validated once on construction and
/// never change afterwards; use the `with_*` methods to derive a variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpticalSetup {
    wavelength: f64,
    slit_width: f64,
    slit_separation: f64,
    screen_distance: f64,
}

impl Default for OpticalSetup {
    fn default() -> Self {
        Self {
            wavelength: DEFAULT_WAVELENGTH,
            slit_width: DEFAULT_SLIT_WIDTH,
            slit_separation: DEFAULT_SLIT_SEPARATION,
            screen_distance: DEFAULT_SCREEN_DISTANCE,
        }
    }
}

impl OpticalSetup {
    /// Create a validated setup
    ///
    /// A slit separation that does not exceed the slit width is accepted but
    /// logged, since the slits would overlap physically.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any value is not a finite positive number
    pub fn new(
        wavelength: f64,
        slit_width: f64,
        slit_separation: f64,
        screen_distance: f64,
    ) -> Result<Self> {
        let setup = Self {
            wavelength: ensure_positive("wavelength", wavelength)?,
            slit_width: ensure_positive("slit_width", slit_width)?,
            slit_separation: ensure_positive("slit_separation", slit_separation)?,
            screen_distance: ensure_positive("screen_distance", screen_distance)?,
        };

        if setup.slit_separation <= setup.slit_width {
            warn!(
                slit_width = setup.slit_width,
                slit_separation = setup.slit_separation,
                "slit separation does not exceed slit width"
            );
        }

        Ok(setup)
    }

    /// Light wavelength in meters
    pub const fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Width of each slit in meters
    pub const fn slit_width(&self) -> f64 {
        self.slit_width
    }

    /// Distance between slit centers in meters
    pub const fn slit_separation(&self) -> f64 {
        self.slit_separation
    }

    /// Distance from the slits to the screen in meters
    pub const fn screen_distance(&self) -> f64 {
        self.screen_distance
    }

    /// Same setup illuminated at another wavelength
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `wavelength` is not a finite positive number
    pub fn with_wavelength(&self, wavelength: f64) -> Result<Self> {
        Self::new(
            wavelength,
            self.slit_width,
            self.slit_separation,
            self.screen_distance,
        )
    }

    /// Same setup with a different slit separation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `slit_separation` is not a finite positive number
    pub fn with_slit_separation(&self, slit_separation: f64) -> Result<Self> {
        Self::new(
            self.wavelength,
            self.slit_width,
            slit_separation,
            self.screen_distance,
        )
    }
}
