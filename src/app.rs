//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - runs the fits (embedded dataset or synthetic sample)
//! - prints reports and charts

use clap::Parser;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::chart::{Backend, render_terminal, resolve_backend, stdout_is_tty};
use crate::cli::{Cli, Command, FitArgs, SynthArgs};
use crate::domain::{AnalysisConfig, RelationshipId, SynthConfig};
use crate::error::AppError;
use crate::fit::{MIN_SAMPLES, power_fit};
use crate::models::{curve_span, sample_curve};
use crate::plot::{render_ascii_plot, render_loglog};
use crate::report::{
    format_json, format_run_summary, format_synth_json, format_synth_summary,
};

pub mod pipeline;

/// Samples along the synthetic fit line.
const SYNTH_CURVE_POINTS: usize = 200;

/// Entry point for the `allo` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry RUST_LOG, so it is read before logging starts.
    dotenvy::dotenv().ok();

    // `allo` and `allo -r C` behave like `allo fit ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = Cli::parse_from(argv);
    init_tracing(cli.verbose);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Synth(args) => handle_synth(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy())
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args)?;

    if config.json {
        let run = pipeline::run_analysis(&config)?;
        println!("{}", format_json(&run.fits)?);
        return Ok(());
    }

    println!("--- Running Power-Law Fit Analysis ---");
    let run = pipeline::run_analysis(&config)?;
    println!("{}", format_run_summary(&run.fits, run.flyers.len()));

    match resolve_backend(config.chart, stdout_is_tty()) {
        Backend::Terminal => {
            println!("Displaying plots...");
            render_terminal(&run.fits, config.chart_height)?;
        }
        Backend::Ascii => {
            println!("Displaying plots...");
            for fit in &run.fits {
                println!("{}", render_ascii_plot(fit, config.plot_width, config.plot_height));
            }
        }
        Backend::None => debug!("charts disabled"),
    }

    println!("--- Analysis Complete ---");
    Ok(())
}

fn handle_synth(args: SynthArgs) -> Result<(), AppError> {
    let config = synth_config_from_args(&args);
    let points = crate::data::generate_power_law(&config)?;

    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    let fit = power_fit(&x, &y).map_err(|e| e.context("synthetic sample"))?;
    info!(
        a = fit.a,
        b = fit.b,
        r2 = fit.r2,
        true_a = config.a,
        true_b = config.b,
        "fitted synthetic sample"
    );

    if args.plot.json {
        println!("{}", format_synth_json(&config, &fit)?);
        return Ok(());
    }

    println!("{}", format_synth_summary(&config, &fit));

    let (x_lo, x_hi) = curve_span(&x)
        .ok_or_else(|| AppError::fit("synthetic sample: no plottable x values"))?;
    let curve = sample_curve(&fit, x_lo, x_hi, SYNTH_CURVE_POINTS);
    println!("{}", render_loglog(&points, &curve, args.plot.width, args.plot.height));

    Ok(())
}

/// Convert `allo fit` flags into the pipeline's config.
///
/// Repeated relationships are fitted once, in first-mention order; no
/// `--relationship` at all means every relationship.
pub fn analysis_config_from_args(args: &FitArgs) -> Result<AnalysisConfig, AppError> {
    if args.curve_points < MIN_SAMPLES {
        return Err(AppError::config(format!(
            "--curve-points must be at least {MIN_SAMPLES} (got {})",
            args.curve_points
        )));
    }
    if args.chart_height == 0 {
        return Err(AppError::config("--chart-height must be positive"));
    }
    if args.plot.width < 2 || args.plot.height < 2 {
        return Err(AppError::config("--width and --height must be at least 2"));
    }

    let mut relationships: Vec<RelationshipId> = Vec::new();
    for id in &args.relationships {
        if !relationships.contains(id) {
            relationships.push(*id);
        }
    }
    if relationships.is_empty() {
        relationships = RelationshipId::ALL.to_vec();
    }

    Ok(AnalysisConfig {
        relationships,
        chart: args.chart,
        plot_width: args.plot.width,
        plot_height: args.plot.height,
        chart_height: args.chart_height,
        json: args.plot.json,
        curve_points: args.curve_points,
    })
}

pub fn synth_config_from_args(args: &SynthArgs) -> SynthConfig {
    SynthConfig {
        a: args.a,
        b: args.b,
        n: args.n,
        x_min: args.x_min,
        x_max: args.x_max,
        noise: args.noise,
        seed: args.seed,
    }
}

/// Rewrite argv so `allo` defaults to `allo fit`.
///
/// Rules:
/// - `allo`                        -> `allo fit`
/// - `allo -r C ...`               -> `allo fit -r C ...`
/// - `allo -v synth ...`           -> unchanged (subcommand already present)
/// - `allo --help/--version/-h`    -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let has_subcommand = argv[1..]
        .iter()
        .any(|a| matches!(a.as_str(), "fit" | "synth" | "help"));
    if has_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "fit flags".
    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
    }
    argv
}
