use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use octsphere::{prelude::*, Point};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octsphere")]
#[command(about = "Subdivides a cube into octants and keeps the octant centers inside its sphere", long_about = None)]
struct Cli {
    /// TOML file describing the boundary (`center = [x, y, z]`, `size = s`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Center of the boundary, overrides the config file
    #[arg(long, value_parser = parse_center, allow_hyphen_values = true, value_name = "X,Y,Z")]
    center: Option<Point>,

    /// Edge length of the boundary, overrides the config file
    #[arg(short, long)]
    size: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Subdivide sibling octants on multiple threads
    #[cfg(feature = "parallel")]
    #[arg(long)]
    parallel: bool,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Valid points and tree statistics
    Summary,
    /// One point per line
    Points,
    /// Points, spheres and extent as JSON, for renderers
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let boundary = boundary(&cli)?;
    tracing::info!(?boundary, "building octree");

    let mut octree = Octree::new(boundary).context("invalid boundary")?;

    #[cfg(feature = "parallel")]
    let outcome = if cli.parallel {
        octree.subdivide_with(&parallel::DepthFirst)
    } else {
        octree.subdivide()
    };
    #[cfg(not(feature = "parallel"))]
    let outcome = octree.subdivide();

    tracing::info!(?outcome, "subdivision done");

    match cli.format {
        Format::Summary => summary(&octree, outcome),
        Format::Points => {
            for Point { x, y, z } in octree.points() {
                println!("{x} {y} {z}");
            }
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&octree.render_data())
                .context("failed to serialize render data")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Parses a point given as three comma separated coordinates.
fn parse_center(input: &str) -> std::result::Result<Point, String> {
    let coordinates = input
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid coordinate in `{input}`: {e}"))?;

    match coordinates[..] {
        [x, y, z] => Ok(Point::new(x, y, z)),
        _ => Err(format!(
            "expected 3 coordinates `x,y,z`, got {}",
            coordinates.len()
        )),
    }
}

/// Reads the config file if any, then applies the command line overrides.
fn boundary(cli: &Cli) -> Result<Boundary> {
    let mut boundary = match &cli.config {
        Some(path) => Boundary::load(path)
            .with_context(|| format!("failed to load boundary from {}", path.display()))?,
        None => Boundary::default(),
    };

    if let Some(center) = cli.center {
        boundary.center = center;
    }
    if let Some(size) = cli.size {
        boundary.size = size;
    }

    Ok(boundary)
}

fn summary(octree: &Octree, outcome: Subdivision) {
    let root = octree.root();
    let points = octree.points();

    println!(
        "Boundary: center {}, size {}",
        root.center(),
        root.size()
    );
    println!("Subdivision: {outcome:?}");
    println!(
        "Nodes: {}, depth: {}",
        root.iter().count(),
        root.depth()
    );
    println!("Valid points inside the sphere ({}):", points.len());
    for point in points {
        println!("  {point}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> clap::error::Result<Cli> {
        Cli::try_parse_from(std::iter::once("octsphere").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]).unwrap();

        assert_eq!(boundary(&cli).unwrap(), Boundary::default());
        assert!(matches!(cli.format, Format::Summary));
    }

    #[test]
    fn center_comma_separated() {
        let cli = parse(&["--center", "1,2,3", "-f", "points"]).unwrap();

        assert_eq!(cli.center, Some(Point::new(1.0, 2.0, 3.0)));
        assert!(matches!(cli.format, Format::Points));
    }

    #[test]
    fn center_negative() {
        let cli = parse(&["--center", "-1,0,-0.5"]).unwrap();
        assert_eq!(cli.center, Some(Point::new(-1.0, 0.0, -0.5)));

        let cli = parse(&["--center=-1,0,0", "--size", "4"]).unwrap();
        assert_eq!(
            boundary(&cli).unwrap(),
            Boundary::new(Point::new(-1.0, 0.0, 0.0), 4.0)
        );
    }

    #[test]
    fn center_wrong_count() {
        assert!(parse(&["--center", "1,2"]).is_err());
        assert!(parse(&["--center", "1,2,3,4"]).is_err());
        assert!(parse(&["--center", "1,a,3"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let path = std::env::temp_dir().join(format!("octsphere-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "center = [5.0, 5.0, 5.0]\nsize = 2.0").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--size", "8"]).unwrap();
        let boundary = boundary(&cli);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(boundary.unwrap(), Boundary::new(Point::splat(5.0), 8.0));
    }

    #[test]
    fn missing_config() {
        let cli = parse(&["--config", "/nonexistent/octsphere/boundary.toml"]).unwrap();

        assert!(boundary(&cli).is_err());
    }
}
