//! trundle — minimum traversal cost of a digit grid under run limits.
//!
//! Reads a grid file (one row of digits per line), solves it with the
//! relaxation engine (or the exhaustive reference solver on request), and
//! prints the minimal cost from the top-left to the bottom-right cell.

use std::error::Error;
use std::fs;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};

use trundle_core::Grid;
use trundle_paths::{UNREACHABLE, minimal_cost, minimal_cost_exhaustive};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("trundle")
        .about("Minimum traversal cost of a weighted grid, for carts that cannot reverse and cannot hold a straight line for more than three steps")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .required(true)
                .help("Grid file: one row per line, one decimal digit per cell"),
        )
        .arg(
            Arg::new("exhaustive")
                .long("exhaustive")
                .action(ArgAction::SetTrue)
                .help("Use the exhaustive depth-first solver instead of the relaxation engine"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .conflicts_with("exhaustive")
                .help("Run both solvers and fail if they disagree"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("input")
        .ok_or("missing input file")?;
    let text = fs::read_to_string(path)?;
    let grid = Grid::parse(&text)?;
    if grid.is_empty() {
        return Err("input contains no grid rows".into());
    }
    println!("grid: {} x {}", grid.width(), grid.height());

    let started = Instant::now();
    let cost = if matches.get_flag("check") {
        let relaxed = minimal_cost(&grid);
        let enumerated = minimal_cost_exhaustive(&grid);
        if relaxed != enumerated {
            return Err(format!("solvers disagree: {relaxed} vs {enumerated}").into());
        }
        relaxed
    } else if matches.get_flag("exhaustive") {
        minimal_cost_exhaustive(&grid)
    } else {
        minimal_cost(&grid)
    };
    log::info!("solver finished in {:?}", started.elapsed());

    if cost == UNREACHABLE {
        return Err("destination is unreachable under the movement rules".into());
    }
    println!("minimal cost: {cost}");
    Ok(())
}
