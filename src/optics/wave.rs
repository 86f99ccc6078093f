//! Monochromatic plane wave

use crate::io::configuration::SPEED_OF_LIGHT;
use crate::io::error::{Result, ensure_positive, invalid_parameter};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Plane wave of a single wavelength
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    wavelength: f64,
    amplitude: f64,
}

impl Wave {
    /// Unit-amplitude wave
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `wavelength` is not a finite positive number
    pub fn new(wavelength: f64) -> Result<Self> {
        Self::with_amplitude(wavelength, 1.0)
    }

    /// Wave with an explicit real amplitude
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `wavelength` is not a finite positive
    /// number or `amplitude` is not finite
    pub fn with_amplitude(wavelength: f64, amplitude: f64) -> Result<Self> {
        let wavelength = ensure_positive("wavelength", wavelength)?;
        if !amplitude.is_finite() {
            return Err(invalid_parameter(
                "amplitude",
                &amplitude,
                &"must be finite",
            ));
        }
        Ok(Self {
            wavelength,
            amplitude,
        })
    }

    /// Wavelength in meters
    pub const fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Real amplitude
    pub const fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Frequency `c / λ` in hertz
    pub fn frequency(&self) -> f64 {
        SPEED_OF_LIGHT / self.wavelength
    }

    /// Wave number `2π / λ` in radians per meter
    pub fn wave_number(&self) -> f64 {
        2.0 * PI / self.wavelength
    }

    /// Phase accumulated over `distance` meters
    pub fn phase_at(&self, distance: f64) -> f64 {
        self.wave_number() * distance
    }

    /// Complex amplitude `A e^{ikr}` after `distance` meters
    pub fn amplitude_at(&self, distance: f64) -> Complex64 {
        Complex64::from_polar(self.amplitude, self.phase_at(distance))
    }
}
