// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a quadtree from Gaussian-clustered points and prints its shape.
//!
//! Set `RUST_LOG=understory_quadtree=trace` to watch subdivisions as they happen.

use std::f64::consts::TAU;

use anyhow::Context as _;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Boundary, DEFAULT_MAX_DEPTH, Point, QuadTree, QuadTreeOptions};

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of points to generate.
    #[arg(long, default_value_t = 300)]
    points: usize,
    /// Side length of the square world; points cluster around its center.
    #[arg(long, default_value_t = 600.0)]
    size: f64,
    /// Leaf capacity; leaves hold at most `capacity - 1` points.
    #[arg(long, default_value_t = 4)]
    capacity: usize,
    /// Stop subdividing below this depth.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
    /// Seed for the point generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Range query window as `x,y,w,h`.
    #[arg(long, value_parser = parse_window)]
    query: Option<Window>,
}

#[derive(Copy, Clone, Debug)]
struct Window {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

fn parse_window(s: &str) -> Result<Window, String> {
    let parts = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, w, h] => Ok(Window { x, y, w, h }),
        _ => Err(format!("expected 4 comma-separated numbers, got {}", parts.len())),
    }
}

/// Normal sample via Box-Muller.
fn gaussian(rng: &mut impl Rng, mean: f64, sd: f64) -> f64 {
    // `1 - u` keeps the log argument in (0, 1].
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    mean + sd * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let world = Boundary::from_xywh(0.0, 0.0, cli.size, cli.size).context("invalid --size")?;
    let options = QuadTreeOptions {
        capacity: cli.capacity,
        max_depth: cli.max_depth,
    };
    let mut tree = QuadTree::with_options(world, options).context("invalid tree options")?;

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let (mean, sd) = (cli.size / 2.0, cli.size / 8.0);
    let accepted = tree.extend((0..cli.points).map(|_| {
        Point::new(gaussian(&mut rng, mean, sd), gaussian(&mut rng, mean, sd))
    }));
    info!(
        generated = cli.points,
        accepted,
        rejected = cli.points - accepted,
        "inserted points"
    );

    let stats = tree.stats();
    println!("points:    {}", stats.points);
    println!(
        "nodes:     {} ({} internal, {} leaves)",
        stats.nodes, stats.internal, stats.leaves
    );
    println!("max depth: {}", stats.max_depth);

    println!();
    println!("leaf occupancy:");
    let hist = tree.occupancy_histogram();
    let tallest = hist.iter().copied().max().unwrap_or(0).max(1);
    for (k, &count) in hist.iter().enumerate() {
        let bar = "#".repeat(count * BAR_WIDTH / tallest);
        println!("{k:>4} | {count:>6} {bar}");
    }

    if let Some(Window { x, y, w, h }) = cli.query {
        let range = Boundary::from_xywh(x, y, w, h).context("invalid --query window")?;
        let found = tree.query(&range);
        println!();
        println!("query {x},{y} {w}x{h}: {} points", found.len());
        for p in &found {
            println!("  ({:.2}, {:.2})", p.x, p.y);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_window;

    #[test]
    fn window_parsing() {
        let w = parse_window("1, 2.5,3,4").unwrap();
        assert_eq!((w.x, w.y, w.w, w.h), (1.0, 2.5, 3.0, 4.0));
        assert!(parse_window("1,2,3").is_err());
        assert!(parse_window("1,2,x,4").is_err());
    }
}
