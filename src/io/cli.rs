//! Command-line interface for simulating, comparing and predicting slit patterns

use crate::analysis::comparison::{ComparisonResult, PatternAnalyzer};
use crate::analysis::extrema::{ExtremaSet, find_peaks};
use crate::analysis::fringes::{
    FringePrediction, SpacingAssessment, SpacingUncertainty, assess_spacing,
    estimate_slit_separation, fringe_spacing, measured_spacing, propagate_spacing_uncertainty,
};
use crate::io::configuration::{
    DEFAULT_MIN_PEAK_GAP, DEFAULT_NOISE_SIGMA, DEFAULT_RESOLUTION, DEFAULT_SCREEN_DISTANCE,
    DEFAULT_SCREEN_WIDTH, DEFAULT_SEED, DEFAULT_SLIT_SEPARATION, DEFAULT_SLIT_WIDTH,
    DEFAULT_SWEEP_END, DEFAULT_SWEEP_START, DEFAULT_SWEEP_STEPS, DEFAULT_WAVELENGTH,
    FRINGE_PEAK_HEIGHT, PATTERN_IMAGE_ROWS, PATTERN_SUFFIX,
};
use crate::io::error::{Result, ensure_positive, invalid_parameter};
use crate::io::image::{export_pattern_png, load_center_row};
use crate::io::progress::SweepProgress;
use crate::optics::grid::CoordinateGrid;
use crate::optics::model::{IntensityPattern, PatternModel, SlitMode, evaluate};
use crate::optics::noise::add_measurement_noise;
use crate::optics::setup::OpticalSetup;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

const METERS_TO_MM: f64 = 1e3;

#[derive(Parser, Debug)]
#[command(name = "doubleslit")]
#[command(
    author,
    version,
    about = "Simulate slit diffraction patterns and validate measurements against theory"
)]
/// Command-line arguments for the slit pattern tool
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Default log filter for the requested verbosity
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Light and slit geometry shared by every subcommand
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct SetupArgs {
    /// Light wavelength in meters
    #[arg(long, default_value_t = DEFAULT_WAVELENGTH)]
    pub wavelength: f64,

    /// Width of each slit in meters
    #[arg(long, default_value_t = DEFAULT_SLIT_WIDTH)]
    pub slit_width: f64,

    /// Distance between slit centers in meters
    #[arg(long, default_value_t = DEFAULT_SLIT_SEPARATION)]
    pub slit_separation: f64,

    /// Distance from the slits to the screen in meters
    #[arg(long, default_value_t = DEFAULT_SCREEN_DISTANCE)]
    pub screen_distance: f64,
}

impl SetupArgs {
    /// Validate the options into an optical setup
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any value is not a finite positive number
    pub fn to_setup(&self) -> Result<OpticalSetup> {
        OpticalSetup::new(
            self.wavelength,
            self.slit_width,
            self.slit_separation,
            self.screen_distance,
        )
    }
}

/// Screen sampling options
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct ScreenArgs {
    /// Observed screen width in meters
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
    pub screen_width: f64,

    /// Number of screen samples
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,
}

/// Slit geometry selectable on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeArg {
    /// One slit
    Single,
    /// Two slits
    #[default]
    Double,
}

impl From<ModeArg> for SlitMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => Self::Single,
            ModeArg::Double => Self::Double,
        }
    }
}

/// Available operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a pattern and report its fringes
    Simulate {
        /// Light and slit geometry
        #[command(flatten)]
        setup: SetupArgs,

        /// Screen sampling
        #[command(flatten)]
        screen: ScreenArgs,

        /// Slit geometry to evaluate
        #[arg(long, value_enum, default_value_t = ModeArg::Double)]
        mode: ModeArg,

        /// Render the pattern to this PNG file
        #[arg(long, value_name = "PNG")]
        png: Option<PathBuf>,
    },

    /// Compare a measured pattern with the double-slit prediction
    Compare {
        /// Light and slit geometry of the theoretical pattern
        #[command(flatten)]
        setup: SetupArgs,

        /// Photograph of the pattern; its middle row is the measurement
        #[arg(value_name = "IMAGE", required_unless_present = "synthetic")]
        image: Option<PathBuf>,

        /// Use a noisy simulated measurement instead of an image
        #[arg(long, conflicts_with = "image")]
        synthetic: bool,

        /// Screen width covered by the measurement in meters
        #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
        screen_width: f64,

        /// Samples in the synthetic measurement
        #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
        resolution: usize,

        /// Standard deviation of the synthetic measurement noise
        #[arg(long, default_value_t = DEFAULT_NOISE_SIGMA)]
        noise: f64,

        /// Seed for the synthetic measurement noise
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Save the theoretical pattern next to the image as <stem>_pattern.png
        #[arg(long, requires = "image", conflicts_with = "synthetic")]
        render: bool,
    },

    /// Predict fringe geometry and assess a measured spacing
    Predict {
        /// Light and slit geometry
        #[command(flatten)]
        setup: SetupArgs,

        /// Observed screen width in meters
        #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
        screen_width: f64,

        /// Measured bright fringe spacing in millimeters
        #[arg(long, value_name = "MM")]
        measured_spacing_mm: Option<f64>,

        /// Uncertainty of the screen distance in meters
        #[arg(long, default_value_t = 0.0)]
        distance_uncertainty: f64,

        /// Uncertainty of the slit separation in meters
        #[arg(long, default_value_t = 0.0)]
        separation_uncertainty: f64,
    },

    /// Measure simulated fringe spacing across a range of wavelengths
    Sweep {
        /// Light and slit geometry; the wavelength is replaced at each step
        #[command(flatten)]
        setup: SetupArgs,

        /// Screen sampling
        #[command(flatten)]
        screen: ScreenArgs,

        /// Shortest wavelength in meters
        #[arg(long, default_value_t = DEFAULT_SWEEP_START)]
        from: f64,

        /// Longest wavelength in meters
        #[arg(long, default_value_t = DEFAULT_SWEEP_END)]
        to: f64,

        /// Number of wavelengths to evaluate
        #[arg(long, default_value_t = DEFAULT_SWEEP_STEPS)]
        steps: usize,

        /// Suppress the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

/// Install the global log subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `default_level`. Installing twice is a no-op.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Output produced by a subcommand, printable as text or JSON
pub trait Report: Serialize {
    /// Write the human readable form
    ///
    /// # Errors
    ///
    /// Propagates write failures
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Result of the `simulate` subcommand
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Evaluated setup
    pub setup: OpticalSetup,
    /// Evaluated geometry
    pub mode: SlitMode,
    /// Screen width in meters
    pub screen_width: f64,
    /// Number of samples
    pub resolution: usize,
    /// Far-field predictions for the setup
    pub prediction: FringePrediction,
    /// Screen positions of detected peaks in meters
    pub peak_positions: Vec<f64>,
    /// Screen positions of detected minima in meters
    pub minimum_positions: Vec<f64>,
    /// Mean spacing of bright fringes in meters, if at least two were found
    pub measured_spacing: Option<f64>,
    /// Normalized intensity the report was derived from
    #[serde(skip)]
    pub pattern: IntensityPattern,
}

impl Report for SimulationReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "Simulated {:?} slit pattern: {} samples over {:.2} mm",
            self.mode,
            self.resolution,
            self.screen_width * METERS_TO_MM
        )?;
        writeln!(
            out,
            "Predicted fringe spacing: {:.3} mm",
            self.prediction.spacing * METERS_TO_MM
        )?;
        match self.measured_spacing {
            Some(spacing) => writeln!(
                out,
                "Simulated fringe spacing: {:.3} mm",
                spacing * METERS_TO_MM
            )?,
            None => writeln!(out, "Simulated fringe spacing: fewer than two bright fringes")?,
        }
        writeln!(out, "Peaks (mm): {}", format_mm(&self.peak_positions))?;
        writeln!(out, "Minima (mm): {}", format_mm(&self.minimum_positions))
    }
}

/// Result of the `compare` subcommand
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Where the measurement came from
    pub source: String,
    /// Setup of the theoretical pattern
    pub setup: OpticalSetup,
    /// Similarity metrics and extrema
    pub comparison: ComparisonResult,
}

impl Report for ComparisonReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let c = &self.comparison;
        writeln!(out, "Measurement: {}", self.source)?;
        writeln!(out, "Correlation coefficient: {:.3}", c.correlation)?;
        writeln!(out, "RMS error: {:.3}", c.rms_error)?;
        writeln!(
            out,
            "Peaks: {} experimental, {} theoretical",
            c.experimental_peaks.len(),
            c.theoretical_peaks.len()
        )?;
        writeln!(
            out,
            "Minima: {} experimental, {} theoretical",
            c.experimental_minima.len(),
            c.theoretical_minima.len()
        )
    }
}

/// Result of the `predict` subcommand
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    /// Setup the predictions are for
    pub setup: OpticalSetup,
    /// Far-field predictions
    pub prediction: FringePrediction,
    /// Grade of the measured spacing, when one was given
    pub assessment: Option<SpacingAssessment>,
    /// Slit separation implied by the measured spacing in meters
    pub estimated_separation: Option<f64>,
    /// Spacing uncertainty from the setup measurements
    pub uncertainty: SpacingUncertainty,
}

impl Report for PredictionReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let p = &self.prediction;
        writeln!(out, "Expected fringe spacing: {:.2} mm", p.spacing * METERS_TO_MM)?;
        writeln!(
            out,
            "Angular fringe spacing: {:.3} degrees",
            p.angular_spacing_degrees
        )?;
        writeln!(out, "Expected fringe count (one side): ~{}", p.fringes_per_side)?;
        writeln!(
            out,
            "Central fringe width: {:.2} mm",
            p.central_width * METERS_TO_MM
        )?;
        if let Some(a) = &self.assessment {
            writeln!(
                out,
                "Measured fringe spacing: {:.2} mm ({:.1}% off, {:?} agreement)",
                a.measured * METERS_TO_MM,
                a.relative_error * 100.0,
                a.agreement
            )?;
        }
        if let Some(separation) = self.estimated_separation {
            writeln!(
                out,
                "Estimated slit separation: {:.1} um (assumed {:.1} um)",
                separation * 1e6,
                self.setup.slit_separation() * 1e6
            )?;
        }
        writeln!(
            out,
            "Spacing uncertainty from setup: ±{:.2} mm ({:.1}%)",
            self.uncertainty.absolute * METERS_TO_MM,
            self.uncertainty.relative * 100.0
        )
    }
}

/// One wavelength of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRow {
    /// Wavelength in meters
    pub wavelength: f64,
    /// Predicted fringe spacing in meters
    pub theoretical_spacing: f64,
    /// Spacing of fringes detected in the simulated pattern in meters
    pub measured_spacing: Option<f64>,
}

/// Result of the `sweep` subcommand
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// One row per evaluated wavelength
    pub rows: Vec<SweepRow>,
}

impl Report for SweepReport {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{:>10} {:>14} {:>14}", "nm", "theory (mm)", "simulated (mm)")?;
        for row in &self.rows {
            let measured = row
                .measured_spacing
                .map_or_else(|| "-".to_string(), |s| format!("{:.3}", s * METERS_TO_MM));
            writeln!(
                out,
                "{:>10.0} {:>14.3} {:>14}",
                row.wavelength * 1e9,
                row.theoretical_spacing * METERS_TO_MM,
                measured
            )?;
        }
        Ok(())
    }
}

fn format_mm(positions: &[f64]) -> String {
    positions
        .iter()
        .map(|y| format!("{:.3}", y * METERS_TO_MM))
        .collect::<Vec<_>>()
        .join(", ")
}

fn positions_of(grid: &CoordinateGrid, indices: &[usize]) -> Vec<f64> {
    indices.iter().filter_map(|&i| grid.get(i)).collect()
}

/// Path of the rendered theoretical pattern for a measured image
///
/// `measured/run1.jpg` becomes `measured/run1_pattern.png`.
pub fn pattern_path(image: &Path) -> PathBuf {
    let stem = image.file_stem().unwrap_or_default();
    let name = format!("{}{PATTERN_SUFFIX}.png", stem.to_string_lossy());
    image
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

fn emit(report: &impl Report, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        report.write_text(out)?;
    }
    Ok(())
}

/// Execute the parsed command, writing its report to `out`
///
/// # Errors
///
/// Returns an error if parameters are invalid, an image cannot be read or
/// written, or the report cannot be written
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Simulate {
            setup,
            screen,
            mode,
            png,
        } => {
            let report = simulate(setup, screen, (*mode).into())?;
            if let Some(path) = png {
                export_pattern_png(report.pattern.as_slice(), PATTERN_IMAGE_ROWS, path)?;
                info!(path = %path.display(), "rendered pattern");
            }
            emit(&report, cli.json, out)
        }
        Command::Compare {
            setup,
            image,
            synthetic,
            screen_width,
            resolution,
            noise,
            seed,
            render,
        } => {
            let setup = setup.to_setup()?;
            let (source, measurement) = match image {
                Some(path) if !synthetic => (path.display().to_string(), load_center_row(path)?),
                _ => {
                    let (_, ideal) = evaluate(&setup, *screen_width, *resolution, SlitMode::Double)?;
                    let measured = add_measurement_noise(ideal.as_slice(), *noise, *seed)?;
                    (format!("synthetic (sigma {noise}, seed {seed})"), measured)
                }
            };

            let mut analyzer = PatternAnalyzer::new();
            analyzer.load_experimental(measurement);
            let comparison =
                analyzer.compare_with_theory(&PatternModel::new(setup), *screen_width)?;

            if let (true, Some(path), Some(theory)) = (*render, image, analyzer.theoretical()) {
                let target = pattern_path(path);
                export_pattern_png(theory.as_slice(), PATTERN_IMAGE_ROWS, &target)?;
                info!(path = %target.display(), "rendered theoretical pattern");
            }
            emit(
                &ComparisonReport {
                    source,
                    setup,
                    comparison,
                },
                cli.json,
                out,
            )
        }
        Command::Predict {
            setup,
            screen_width,
            measured_spacing_mm,
            distance_uncertainty,
            separation_uncertainty,
        } => {
            let report = predict(
                setup,
                *screen_width,
                *measured_spacing_mm,
                *distance_uncertainty,
                *separation_uncertainty,
            )?;
            emit(&report, cli.json, out)
        }
        Command::Sweep {
            setup,
            screen,
            from,
            to,
            steps,
            quiet,
        } => {
            let progress = if *quiet {
                SweepProgress::hidden(*steps)
            } else {
                SweepProgress::new(*steps)
            };
            let report = sweep(setup, screen, (*from, *to), *steps, &progress)?;
            progress.finish();
            emit(&report, cli.json, out)
        }
    }
}

/// Evaluate a pattern and collect its fringe report
///
/// # Errors
///
/// Returns an error if the setup or screen options are invalid
pub fn simulate(setup: &SetupArgs, screen: &ScreenArgs, mode: SlitMode) -> Result<SimulationReport> {
    let setup = setup.to_setup()?;
    let (grid, pattern) = evaluate(&setup, screen.screen_width, screen.resolution, mode)?;
    let extrema = ExtremaSet::detect(pattern.as_slice());
    let bright = find_peaks(pattern.as_slice(), FRINGE_PEAK_HEIGHT, DEFAULT_MIN_PEAK_GAP);

    Ok(SimulationReport {
        setup,
        mode,
        screen_width: screen.screen_width,
        resolution: screen.resolution,
        prediction: FringePrediction::for_setup(&setup, screen.screen_width)?,
        peak_positions: positions_of(&grid, &extrema.peaks),
        minimum_positions: positions_of(&grid, &extrema.minima),
        measured_spacing: measured_spacing(&grid, &bright),
        pattern,
    })
}

/// Collect predictions, and assess a measured spacing given in millimeters
///
/// # Errors
///
/// Returns an error if the setup, screen width, measured spacing or
/// uncertainties are invalid
pub fn predict(
    setup: &SetupArgs,
    screen_width: f64,
    measured_spacing_mm: Option<f64>,
    distance_uncertainty: f64,
    separation_uncertainty: f64,
) -> Result<PredictionReport> {
    let setup = setup.to_setup()?;
    let prediction = FringePrediction::for_setup(&setup, screen_width)?;
    let measured = measured_spacing_mm.map(|mm| mm / METERS_TO_MM);

    let assessment = measured
        .map(|m| assess_spacing(m, prediction.spacing))
        .transpose()?;
    let estimated_separation = measured
        .map(|m| estimate_slit_separation(setup.wavelength(), setup.screen_distance(), m))
        .transpose()?;
    let uncertainty =
        propagate_spacing_uncertainty(&setup, distance_uncertainty, separation_uncertainty)?;

    Ok(PredictionReport {
        setup,
        prediction,
        assessment,
        estimated_separation,
        uncertainty,
    })
}

/// Simulate each wavelength of an inclusive range and measure its fringes
///
/// # Errors
///
/// Returns `InvalidParameter` if `steps` is zero or a wavelength or screen
/// option is invalid
pub fn sweep(
    setup: &SetupArgs,
    screen: &ScreenArgs,
    (from, to): (f64, f64),
    steps: usize,
    progress: &SweepProgress,
) -> Result<SweepReport> {
    if steps == 0 {
        return Err(invalid_parameter("steps", &steps, &"must be at least 1"));
    }
    let from = ensure_positive("from", from)?;
    let to = ensure_positive("to", to)?;
    let base = setup.to_setup()?;
    let increment = if steps > 1 {
        (to - from) / (steps - 1) as f64
    } else {
        0.0
    };

    let mut rows = Vec::with_capacity(steps);
    for step in 0..steps {
        let wavelength = (step as f64).mul_add(increment, from);
        let stepped = base.with_wavelength(wavelength)?;
        let (grid, pattern) = evaluate(
            &stepped,
            screen.screen_width,
            screen.resolution,
            SlitMode::Double,
        )?;
        let bright = find_peaks(pattern.as_slice(), FRINGE_PEAK_HEIGHT, DEFAULT_MIN_PEAK_GAP);

        rows.push(SweepRow {
            wavelength,
            theoretical_spacing: fringe_spacing(&stepped),
            measured_spacing: measured_spacing(&grid, &bright),
        });
        progress.advance(wavelength);
    }

    Ok(SweepReport { rows })
}
