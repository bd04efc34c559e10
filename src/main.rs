use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexgen::ascii;
use hexgen::biomes::BiomeTable;
use hexgen::config::{GridConfig, IslandConfig};
use hexgen::coords::HexCoord;
use hexgen::grid::HexGrid;
use hexgen::islands::{self, ISLAND_NOISE_SCALE};
use hexgen::noise_field::NoiseField;
use hexgen::pathfinding::{find_path, PassabilityPolicy};
use hexgen::seeds;

#[derive(Parser, Debug)]
#[command(name = "hexgen")]
#[command(about = "Generate procedural hex-tile terrain and paths across it")]
struct Args {
    /// Grid width in tiles
    #[arg(short = 'W', long, default_value = "48")]
    width: i32,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value = "24")]
    height: i32,

    /// Noise scale; larger values stretch terrain features
    #[arg(long, default_value = "8.0")]
    scale: f64,

    /// Seed string (random if not specified)
    #[arg(short, long)]
    seed: Option<String>,

    /// Multiplier applied to raw noise heights
    #[arg(long, default_value = "1.0")]
    height_multiplier: f64,

    /// Skip the island elevation pass
    #[arg(long)]
    no_islands: bool,

    /// Path start as "col,row"
    #[arg(long)]
    from: Option<String>,

    /// Path goal as "col,row"
    #[arg(long)]
    to: Option<String>,

    /// Treat cells without tiles as impassable
    #[arg(long)]
    require_tiles: bool,
}

fn main() {
    let args = Args::parse();

    let seed = args
        .seed
        .clone()
        .unwrap_or_else(|| format!("{:016x}", rand::random::<u64>()));

    let mut config = GridConfig::new(
        args.width,
        args.height,
        args.scale,
        &seed,
        BiomeTable::standard(),
    );
    config.height_multiplier = args.height_multiplier;
    if !args.no_islands {
        config.islands = Some(IslandConfig::default());
    }

    println!(
        "Generating {}x{} hex grid with seed {:?}",
        args.width, args.height, seed
    );
    let mut grid = match HexGrid::generate(&config) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("generation failed: {err}");
            std::process::exit(1);
        }
    };
    let total_cells = (args.width * args.height) as usize;
    println!(
        "Placed {} tiles ({} cells excluded)",
        grid.tile_count(),
        total_cells - grid.tile_count()
    );

    if let Some(island_config) = &config.islands {
        let blend = match NoiseField::new(ISLAND_NOISE_SCALE, &seed) {
            Ok(blend) => blend,
            Err(err) => {
                eprintln!("island pass failed: {err}");
                std::process::exit(1);
            }
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seeds::derive_seed(&seed, "islands"));
        let raised = islands::generate_islands(&mut grid, island_config, &blend, &mut rng);
        println!("Raised {} islands", raised);
    }

    let route = match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let start = parse_coord(from);
            let goal = parse_coord(to);
            match (start, goal) {
                (Some(start), Some(goal)) => Some((start, goal)),
                _ => {
                    eprintln!("coordinates must look like \"col,row\"");
                    std::process::exit(1);
                }
            }
        }
        (None, None) => None,
        _ => {
            eprintln!("--from and --to must be given together");
            std::process::exit(1);
        }
    };

    match route {
        Some((start, goal)) => {
            let policy = if args.require_tiles {
                PassabilityPolicy::RequireTile
            } else {
                PassabilityPolicy::CoordinateBounds
            };
            match find_path(&grid, start, goal, policy) {
                Some(path) => {
                    println!("Path {} -> {}: {} steps", start, goal, path.len() - 1);
                    print!("{}", ascii::render_with_path(&grid, &path));
                }
                None => {
                    println!("No path from {} to {}", start, goal);
                    print!("{}", ascii::render_map(&grid));
                }
            }
        }
        None => print!("{}", ascii::render_map(&grid)),
    }
}

/// Parse a "col,row" pair.
fn parse_coord(text: &str) -> Option<HexCoord> {
    let (col, row) = text.split_once(',')?;
    Some(HexCoord::new(
        col.trim().parse().ok()?,
        row.trim().parse().ok()?,
    ))
}
