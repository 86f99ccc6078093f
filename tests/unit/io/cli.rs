//! Tests for command-line parsing and subcommand reports

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use doubleslit::io::cli::{
        Cli, Command, ScreenArgs, SetupArgs, pattern_path, predict, run, simulate, sweep,
    };
    use doubleslit::io::configuration::{DEFAULT_RESOLUTION, DEFAULT_SEED, DEFAULT_WAVELENGTH};
    use doubleslit::io::progress::SweepProgress;
    use doubleslit::{SimulationError, SlitMode};
    use std::path::{Path, PathBuf};

    fn run_to_string(args: &[&str]) -> String {
        let cli = Cli::parse_from(args.iter().copied());
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn default_setup() -> SetupArgs {
        let cli = Cli::parse_from(["program", "predict"]);
        match cli.command {
            Command::Predict { setup, .. } => setup,
            other => unreachable!("Expected predict, got {other:?}"),
        }
    }

    // Tests the argument definitions are internally consistent
    // Verified by referencing a missing argument in a conflict
    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    // Tests simulate defaults and verbosity mapping
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::parse_from(["program", "simulate"]);
        assert_eq!(cli.log_level(), "warn");
        assert!(!cli.json);
        match cli.command {
            Command::Simulate {
                setup,
                screen,
                png,
                ..
            } => {
                assert!((setup.wavelength - DEFAULT_WAVELENGTH).abs() < f64::EPSILON);
                assert_eq!(screen.resolution, DEFAULT_RESOLUTION);
                assert!(png.is_none());
            }
            other => unreachable!("Expected simulate, got {other:?}"),
        }

        assert_eq!(Cli::parse_from(["program", "-v", "simulate"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["program", "simulate", "-vv"]).log_level(), "debug");
    }

    // Tests compare needs exactly one measurement source
    // Verified by dropping the required_unless_present constraint
    #[test]
    fn test_compare_source_arguments() {
        assert!(Cli::try_parse_from(["program", "compare"]).is_err());
        assert!(
            Cli::try_parse_from(["program", "compare", "shot.png", "--synthetic"]).is_err()
        );
        assert!(Cli::try_parse_from(["program", "compare", "--synthetic", "--render"]).is_err());

        let cli = Cli::parse_from(["program", "compare", "--synthetic"]);
        match cli.command {
            Command::Compare {
                image,
                synthetic,
                seed,
                ..
            } => {
                assert!(image.is_none());
                assert!(synthetic);
                assert_eq!(seed, DEFAULT_SEED);
            }
            other => unreachable!("Expected compare, got {other:?}"),
        }
    }

    // Tests rendering needs a loaded image and is refused for synthetic data
    // Verified by dropping the conflicts_with constraint on render
    #[test]
    fn test_compare_render_requires_image() {
        for args in [
            vec!["program", "compare", "--synthetic", "--render"],
            vec!["program", "compare", "--render", "--synthetic", "--noise", "0.1"],
            vec!["program", "compare", "--render"],
        ] {
            assert!(Cli::try_parse_from(args).is_err());
        }

        let cli = Cli::parse_from(["program", "compare", "shot.png", "--render"]);
        match cli.command {
            Command::Compare {
                image,
                synthetic,
                render,
                ..
            } => {
                assert_eq!(image.as_deref(), Some(Path::new("shot.png")));
                assert!(!synthetic);
                assert!(render);
            }
            other => unreachable!("Expected compare, got {other:?}"),
        }
    }

    // Tests the text report of a default simulation
    // Verified by printing the spacing in meters
    #[test]
    fn test_run_simulate_text() {
        let text = run_to_string(&["program", "simulate"]);
        assert!(text.contains("Predicted fringe spacing: 3.250 mm"));
        assert!(text.contains("Peaks (mm):"));
    }

    // Tests the JSON report omits the raw pattern
    // Verified by removing the serde skip attribute
    #[test]
    fn test_run_simulate_json() {
        let text = run_to_string(&["program", "--json", "simulate", "--mode", "single"]);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["mode"], "single");
        assert!(json.get("pattern").is_none());
        assert!(json["prediction"]["spacing"].as_f64().is_some());
    }

    // Tests the simulated spacing lies close to the predicted spacing
    // Verified by measuring spacing between minima
    #[test]
    fn test_simulate_report() {
        let screen = ScreenArgs {
            screen_width: 0.02,
            resolution: 2000,
        };
        let report = simulate(&default_setup(), &screen, SlitMode::Double).unwrap();
        let measured = report.measured_spacing.unwrap();
        let relative = (measured - report.prediction.spacing).abs() / report.prediction.spacing;
        assert!(relative < 0.05, "relative error {relative}");
        assert_eq!(report.pattern.len(), 2000);
        assert!(!report.peak_positions.is_empty());
    }

    // Tests a measured spacing is assessed and inverted
    // Verified by skipping the millimeter conversion
    #[test]
    fn test_predict_with_measurement() {
        let report = predict(&default_setup(), 0.01, Some(3.3), 0.005, 1e-6).unwrap();
        let assessment = report.assessment.unwrap();
        assert!((assessment.measured - 3.3e-3).abs() < 1e-12);
        let separation = report.estimated_separation.unwrap();
        assert!((separation - 650e-9 / 3.3e-3).abs() < 1e-12);
        assert!(report.uncertainty.relative > 0.0);

        let text = run_to_string(&["program", "predict", "--measured-spacing-mm", "3.3"]);
        assert!(text.contains("Excellent"));
        assert!(text.contains("Expected fringe spacing: 3.25 mm"));
    }

    // Tests invalid setup values surface as parameter errors
    // Verified by skipping setup validation
    #[test]
    fn test_invalid_setup() {
        let cli = Cli::parse_from(["program", "predict", "--wavelength=-1"]);
        let mut out = Vec::new();
        assert!(matches!(
            run(&cli, &mut out),
            Err(SimulationError::InvalidParameter {
                parameter: "wavelength",
                ..
            })
        ));
        assert!(predict(&default_setup(), 0.01, Some(0.0), 0.0, 0.0).is_err());
    }

    // Tests a sweep evaluates every wavelength in order and advances progress
    // Verified by excluding the end of the range
    #[test]
    fn test_sweep_rows() {
        let screen = ScreenArgs {
            screen_width: 0.02,
            resolution: 1000,
        };
        let progress = SweepProgress::hidden(3);
        let report = sweep(&default_setup(), &screen, (500e-9, 700e-9), 3, &progress).unwrap();

        assert_eq!(report.rows.len(), 3);
        assert_eq!(progress.position(), 3);
        let wavelengths: Vec<f64> = report.rows.iter().map(|row| row.wavelength).collect();
        for (actual, expected) in wavelengths.iter().zip([500e-9, 600e-9, 700e-9]) {
            assert!((actual - expected).abs() < 1e-15);
        }
        assert!(
            report
                .rows
                .windows(2)
                .all(|pair| pair[1].theoretical_spacing > pair[0].theoretical_spacing)
        );
        assert!(report.rows.iter().all(|row| row.measured_spacing.is_some()));
    }

    // Tests degenerate sweeps are rejected
    // Verified by dividing by steps - 1 without a guard
    #[test]
    fn test_sweep_edge_cases() {
        let screen = ScreenArgs {
            screen_width: 0.01,
            resolution: 200,
        };
        let progress = SweepProgress::hidden(0);
        assert!(sweep(&default_setup(), &screen, (500e-9, 700e-9), 0, &progress).is_err());
        assert!(sweep(&default_setup(), &screen, (0.0, 700e-9), 2, &progress).is_err());

        let single = sweep(&default_setup(), &screen, (532e-9, 700e-9), 1, &progress).unwrap();
        assert_eq!(single.rows.len(), 1);
        assert!((single.rows[0].wavelength - 532e-9).abs() < f64::EPSILON);
    }

    // Tests a synthetic comparison reports a strong correlation
    // Verified by comparing against the single-slit pattern
    #[test]
    fn test_run_compare_synthetic() {
        let text = run_to_string(&["program", "--json", "compare", "--synthetic", "-r", "300"]);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        let correlation = json["comparison"]["correlation"].as_f64().unwrap();
        assert!(correlation > 0.9, "correlation {correlation}");
        assert!(json["source"].as_str().unwrap().starts_with("synthetic"));
    }

    // Tests comparing an image and rendering the theoretical pattern beside it
    // Verified by writing the rendering to the working directory
    #[test]
    fn test_run_compare_image() {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.png");
        let pattern = simulate(
            &default_setup(),
            &ScreenArgs {
                screen_width: 0.01,
                resolution: 240,
            },
            SlitMode::Double,
        )
        .unwrap()
        .pattern;
        doubleslit::io::image::export_pattern_png(pattern.as_slice(), 9, &shot).unwrap();

        let shot_arg = shot.to_string_lossy().to_string();
        let text = run_to_string(&["program", "compare", &shot_arg, "--render"]);
        assert!(text.contains("Correlation coefficient: 1.000"));
        assert!(dir.path().join("shot_pattern.png").exists());
    }

    // Tests the rendered pattern path keeps the directory and stem
    // Verified by keeping the input extension
    #[test]
    fn test_pattern_path() {
        assert_eq!(
            pattern_path(Path::new("measured/run1.jpg")),
            PathBuf::from("measured/run1_pattern.png")
        );
        assert_eq!(
            pattern_path(Path::new("shot.png")),
            PathBuf::from("shot_pattern.png")
        );
    }

    // Tests simulate can render its pattern to a PNG file
    // Verified by ignoring the png option
    #[test]
    fn test_run_simulate_png() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("pattern.png");
        let target_arg = target.to_string_lossy().to_string();
        run_to_string(&["program", "simulate", "-r", "300", "--png", &target_arg]);
        assert!(target.exists());
    }
}
