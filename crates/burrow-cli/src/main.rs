//! `burrow` — carve hallways between rooms and print the result.
//!
//! Run: cargo run --bin burrow -- --rooms 8 --seed 7
//!      cargo run --bin burrow -- --layout map.txt --merge

mod scatter;

use std::path::PathBuf;

use burrow_core::Grid;
use burrow_gen::{HallwayConfig, Layout, Markers, RoomConnectionPlanner, render};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

/// Connect rooms on a grid with greedy hallways.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hand-drawn layout to carve (`.` empty, `#` room, `@` room center).
    #[arg(long)]
    layout: Option<PathBuf>,

    /// JSON file with hallway options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid height when scattering rooms
    #[arg(long, default_value_t = 24)]
    rows: i32,

    /// Grid width when scattering rooms
    #[arg(long, default_value_t = 60)]
    cols: i32,

    /// Number of rooms to scatter
    #[arg(long, default_value_t = 8)]
    rooms: usize,

    /// Random seed for scattering
    #[arg(long)]
    seed: Option<u64>,

    /// Stop hallways when they touch an existing corridor
    #[arg(long)]
    merge: bool,

    /// Marker value for plain corridor cells (doors use the next value)
    #[arg(long)]
    hallway_marker: Option<i32>,

    /// Values above this are room interior
    #[arg(long)]
    room_threshold: Option<i32>,

    /// No-progress steps tolerated before a hallway is abandoned
    #[arg(long)]
    stall_limit: Option<u32>,
}

impl Args {
    fn hallway_config(&self) -> Result<HallwayConfig, Box<dyn std::error::Error>> {
        let mut cfg: HallwayConfig = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => HallwayConfig::default(),
        };
        if self.merge {
            cfg.allow_merge = true;
        }
        if let Some(limit) = self.stall_limit {
            cfg.stall_limit = limit;
        }
        if self.hallway_marker.is_some() || self.room_threshold.is_some() {
            let hallway = self.hallway_marker.unwrap_or(cfg.markers.hallway);
            let room_threshold = self
                .room_threshold
                .or_else(|| hallway.checked_add(1))
                .unwrap_or(cfg.markers.room_threshold);
            cfg.markers = Markers::new(hallway, room_threshold)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = args.hallway_config()?;

    let (mut grid, centers) = match &args.layout {
        Some(path) => {
            let layout = Layout::parse(&std::fs::read_to_string(path)?, &cfg.markers)?;
            (layout.grid, layout.centers)
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut grid = Grid::new(args.rows, args.cols);
            let centers = scatter::scatter_rooms(&mut grid, args.rooms, &cfg.markers, &mut rng);
            (grid, centers)
        }
    };
    log::info!("{} rooms on a {}x{} grid", centers.len(), grid.rows(), grid.cols());

    let mut planner = RoomConnectionPlanner::new(&cfg);
    let links = planner.connect(&mut grid, &centers);
    let connected = links.iter().filter(|l| l.outcome.is_connected()).count();
    log::info!("{connected}/{} hallways connected", links.len());

    println!("{}", render(&grid, &cfg.markers));
    Ok(())
}
