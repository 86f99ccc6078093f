//! Grayscale image collaborators for measured and simulated patterns

use crate::io::configuration::PIXEL_FULL_SCALE;
use crate::io::error::{Result, SimulationError, degenerate_input, invalid_parameter};
use image::{GrayImage, Luma};
use std::path::Path;

/// Load an image and return its middle row as intensities in [0, 1]
///
/// The image is converted to 8-bit luma first; the central row is where a
/// photographed fringe pattern is usually clearest.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be decoded and `DegenerateInput` if
/// the image has no pixels
pub fn load_center_row(path: &Path) -> Result<Vec<f64>> {
    let gray = image::open(path)
        .map_err(|source| SimulationError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .to_luma8();

    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(degenerate_input(&format!(
            "image '{}' has no pixels",
            path.display()
        )));
    }

    let row = height / 2;
    Ok((0..width)
        .filter_map(|x| gray.get_pixel_checked(x, row))
        .map(|pixel| f64::from(pixel.0[0]) / PIXEL_FULL_SCALE)
        .collect())
}

/// Render a 1-D pattern as a grayscale PNG, repeating it over `rows` rows
///
/// Values are clipped to [0, 1] before scaling to 8 bits.
///
/// # Errors
///
/// Returns an error if:
/// - The pattern is empty or `rows` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_pattern_png(intensity: &[f64], rows: u32, path: &Path) -> Result<()> {
    if intensity.is_empty() {
        return Err(degenerate_input(&"pattern has no samples"));
    }
    if rows == 0 {
        return Err(invalid_parameter("rows", &rows, &"must be at least 1"));
    }
    let width = u32::try_from(intensity.len())
        .map_err(|_overflow| invalid_parameter("width", &intensity.len(), &"too wide for an image"))?;

    let column: Vec<u8> = intensity
        .iter()
        .map(|value| (value.clamp(0.0, 1.0) * PIXEL_FULL_SCALE).round() as u8)
        .collect();
    let img = GrayImage::from_fn(width, rows, |x, _| {
        Luma([column.get(x as usize).copied().unwrap_or(0)])
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| SimulationError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
