//! Offline floodplain distance precompute.
//!
//! Loads facility points and floodplain polygons, measures each facility's
//! distance to the nearest 100-year floodplain boundary, and writes the
//! annotated points and the connector lines as GeoJSON.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use floodline::config::Config;
use floodline::io::{read_feature_collection, write_feature_collection};
use floodline::{compute_distances_geojson, ZoneFilter};

const DEFAULT_CONFIG: &str = "floodline.toml";

#[derive(Parser, Debug)]
#[command(name = "precompute")]
#[command(about = "Precompute distances from facilities to the nearest floodplain boundary")]
struct Args {
    /// Facility points (GeoJSON FeatureCollection, WGS84)
    #[arg(short, long)]
    points: PathBuf,

    /// Floodplain polygons (GeoJSON FeatureCollection, WGS84)
    #[arg(short, long)]
    zones: PathBuf,

    /// Output path for the annotated points
    #[arg(long, default_value = "houston-texas-community-centers-with-distances.geojson")]
    points_out: PathBuf,

    /// Output path for the connector lines
    #[arg(long, default_value = "houston-texas-community-centers-distance-lines.geojson")]
    lines_out: PathBuf,

    /// TOML config file (defaults to ./floodline.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Allowed zone class; repeat to allow several. Overrides the config.
    #[arg(long = "allow")]
    allow: Vec<String>,

    /// Property holding the zone class. Overrides the config.
    #[arg(long)]
    zone_field: Option<String>,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Floodline Precompute");

    let config = if let Some(path) = &args.config {
        Config::load_from_file(path)?
    } else if Path::new(DEFAULT_CONFIG).exists() {
        Config::load_from_file(DEFAULT_CONFIG)?
    } else {
        Config::default()
    };

    let mut options = config.options();
    if !args.allow.is_empty() {
        options.filter = ZoneFilter::new(args.allow.iter().cloned());
    }
    if let Some(field) = args.zone_field {
        options.zone_field = field;
    }
    if options.filter.is_empty() {
        warn!("No zone classes allowed; every facility will get an empty distance");
    }

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    info!(
        "Zone field '{}', allowed classes {:?}",
        options.zone_field,
        options.filter.classes()
    );

    let points = read_feature_collection(&args.points)
        .with_context(|| format!("Failed to load points from {}", args.points.display()))?;
    let zones = read_feature_collection(&args.zones)
        .with_context(|| format!("Failed to load zones from {}", args.zones.display()))?;

    let output = compute_distances_geojson(&points, &zones, &options);

    let stats = output.report.stats;
    info!(
        "{} points, {} zones ({} allowed, {} usable), {} connector lines",
        stats.points, stats.zones, stats.zones_allowed, stats.boundaries, stats.lines
    );
    if !output.report.issues.is_empty() {
        warn!("{} features were skipped", output.report.issues.len());
    }

    write_feature_collection(&args.points_out, &output.points)
        .context("Failed to write annotated points")?;
    write_feature_collection(&args.lines_out, &output.lines)
        .context("Failed to write connector lines")?;

    info!("Distances written to {}", args.points_out.display());
    info!("Distance lines written to {}", args.lines_out.display());

    Ok(())
}
