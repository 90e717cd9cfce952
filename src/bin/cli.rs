// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Footprint CLI

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use footprint::cli::Reporter;
use footprint::{io, Config, DivisionScheme, Grid, GridConfig, Line};
use std::path::Path;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "footprint")]
#[command(about = "Footprint - building outline reconstruction and grid subdivision", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to footprint.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild level outlines from a line record file
    Outline {
        /// Line record file (levelName, elevation, lineType, sx, sy, sz, ex, ey, ez)
        input: String,

        /// Line category to assemble
        #[arg(long)]
        category: Option<String>,

        /// Endpoint matching tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Output JSON file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Subdivide a footprint into a grid of cells
    Grid(GridArgs),

    /// Show version information
    Version,
}

#[derive(Args)]
struct GridArgs {
    /// Bottom guide line
    #[arg(
        long,
        num_args = 4,
        value_names = ["X0", "Y0", "X1", "Y1"],
        allow_negative_numbers = true,
        requires = "top",
        conflicts_with = "footprint"
    )]
    bottom: Option<Vec<f64>>,

    /// Top guide line
    #[arg(
        long,
        num_args = 4,
        value_names = ["X0", "Y0", "X1", "Y1"],
        allow_negative_numbers = true,
        requires = "bottom"
    )]
    top: Option<Vec<f64>>,

    /// Line record file whose quadrilateral outline is subdivided
    #[arg(long, value_name = "FILE")]
    footprint: Option<String>,

    /// Level to subdivide (defaults to the lowest one)
    #[arg(long, requires = "footprint")]
    level: Option<String>,

    /// Equal division count along the curves
    #[arg(long, group = "u_scheme")]
    u_count: Option<usize>,

    /// Division spacing along the curves
    #[arg(long, group = "u_scheme")]
    u_spacing: Option<f64>,

    /// Explicit interval lengths along the curves, comma separated
    #[arg(long, group = "u_scheme", value_delimiter = ',')]
    u_distances: Option<Vec<f64>>,

    /// Equal division count across the curves
    #[arg(long, group = "v_scheme")]
    v_count: Option<usize>,

    /// Division spacing across the curves
    #[arg(long, group = "v_scheme")]
    v_spacing: Option<f64>,

    /// Explicit interval lengths across the curves, comma separated
    #[arg(long, group = "v_scheme", value_delimiter = ',')]
    v_distances: Option<Vec<f64>>,

    /// Output JSON file
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    let result = match &cli.command {
        Commands::Outline {
            input,
            category,
            tolerance,
            output,
        } => outline_command(
            input,
            category.as_deref(),
            *tolerance,
            output.as_deref(),
            config,
        ),
        Commands::Grid(args) => grid_command(args, config),
        Commands::Version => {
            println!("Footprint v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn outline_command(
    input: &str,
    category: Option<&str>,
    tolerance: Option<f64>,
    output: Option<&str>,
    mut config: Config,
) -> Result<()> {
    if !Path::new(input).exists() {
        bail!("Input file not found: {}", input);
    }

    if let Some(category) = category {
        config.category = category.to_string();
    }
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    config.validate()?;

    let records = io::import_line_file(input)?;
    tracing::info!(records = records.len(), category = %config.category, "Assembling outlines");

    let start = Instant::now();
    let outlines = config
        .assembler()
        .level_outlines(&records, &config.category);
    let duration = start.elapsed();

    Reporter::report_outlines(input, &config.category, &outlines, duration);

    for outline in &outlines {
        let modules = outline.module_points(config.module_length)?;
        let count = modules.iter().map(|edge| edge.len().saturating_sub(1)).sum();
        Reporter::report_modules(&outline.level.name, config.module_length, count);
    }

    if outlines.is_empty() {
        Reporter::report_warning(&format!(
            "No `{}` segment closed into a loop",
            config.category
        ));
    }

    if let Some(output) = output {
        io::export_json(&outlines, output)?;
        Reporter::success(&format!("Outlines written to {}", output));
    }

    Ok(())
}

fn grid_command(args: &GridArgs, config: Config) -> Result<()> {
    let grid_config = GridConfig::new(
        division_scheme(
            args.u_count,
            args.u_spacing,
            args.u_distances.as_deref(),
            &config.grid.u,
        ),
        division_scheme(
            args.v_count,
            args.v_spacing,
            args.v_distances.as_deref(),
            &config.grid.v,
        ),
    );

    let start = Instant::now();
    let grid = match (&args.bottom, &args.top, &args.footprint) {
        (Some(bottom), Some(top), _) => {
            let bottom = line_from_args(bottom)?;
            let top = line_from_args(top)?;
            Grid::from_config(&bottom, &top, &grid_config)?
        }
        (_, _, Some(footprint)) => {
            let records = io::import_line_file(footprint)?;
            let outlines = config
                .assembler()
                .level_outlines(&records, &config.category);
            let outline = match &args.level {
                Some(name) => outlines
                    .iter()
                    .find(|o| &o.level.name == name)
                    .ok_or_else(|| anyhow!("Level not found: {}", name))?,
                None => outlines
                    .first()
                    .ok_or_else(|| anyhow!("No closed outline in {}", footprint))?,
            };
            Grid::from_quadrilateral(&outline.perimeter, &grid_config)
                .with_context(|| format!("Cannot subdivide level {}", outline.level.name))?
        }
        _ => bail!("Either --bottom/--top or --footprint is required"),
    };
    let duration = start.elapsed();

    Reporter::report_grid(&grid, duration);

    if let Some(output) = &args.output {
        io::export_json(&grid, output)?;
        Reporter::success(&format!("Grid written to {}", output));
    }

    Ok(())
}

fn division_scheme(
    count: Option<usize>,
    spacing: Option<f64>,
    distances: Option<&[f64]>,
    fallback: &DivisionScheme,
) -> DivisionScheme {
    match (count, spacing, distances) {
        (Some(count), _, _) => DivisionScheme::Count(count),
        (_, Some(spacing), _) => DivisionScheme::Spacing(spacing),
        (_, _, Some(distances)) => DivisionScheme::Distances(distances.to_vec()),
        _ => fallback.clone(),
    }
}

fn line_from_args(values: &[f64]) -> Result<Line> {
    match values {
        [x0, y0, x1, y1] => Ok(Line::from_xy(*x0, *y0, *x1, *y1)),
        _ => bail!("Expected 4 coordinates, got {}", values.len()),
    }
}
