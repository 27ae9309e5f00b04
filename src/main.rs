//! # Towerforge Command Line
//!
//! Generates tower-defense maps as JSON, lists the generation catalogs, and
//! reads or appends to JSON map stores.

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use towerforge::{
    generation::utils::create_rng, GenerationConfig, JsonFileMapStore, MapGenerator, MapRequest,
    MapStore, ThemeCatalog, TowerforgeError, TowerforgeResult,
};

/// Command line arguments for Towerforge.
#[derive(Parser, Debug)]
#[command(name = "towerforge")]
#[command(about = "Procedural tower-defense map generator")]
#[command(version)]
struct Args {
    /// Random seed for map generation (overrides the config file)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// JSON file with generation settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a map and print it as JSON
    Generate {
        /// Difficulty key (easy, medium, hard, nightmare)
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Theme key (forest, desert, snow, lava)
        #[arg(short, long, default_value = "forest")]
        theme: String,

        /// Size key (small, medium, large)
        #[arg(long, default_value = "medium")]
        size: String,

        /// Path strategy (linear, curved, maze, spiral)
        #[arg(long, default_value = "curved")]
        complexity: String,

        /// Custom map name
        #[arg(short, long)]
        name: Option<String>,

        /// Append the map to this JSON map store, creating it if needed
        #[arg(long)]
        store: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List themes with their display names and colors
    Themes,

    /// List difficulty keys
    Difficulties,

    /// List path strategy keys
    Complexities,

    /// List the maps in a JSON map store
    Maps {
        #[arg(long)]
        store: PathBuf,
    },

    /// Show one stored map
    Show {
        #[arg(long)]
        store: PathBuf,

        #[arg(long)]
        id: u32,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(error) = initialize_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {error}");
    }

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> TowerforgeResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| TowerforgeError::InvalidConfig(error.to_string()))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .map_err(|error| TowerforgeError::InvalidConfig(error.to_string()))?;
    }

    Ok(())
}

/// Loads the generation config and applies command line overrides.
fn load_config(args: &Args) -> TowerforgeResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> TowerforgeResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn run(args: Args) -> TowerforgeResult<()> {
    let config = load_config(&args)?;

    match args.command {
        Command::Generate {
            difficulty,
            theme,
            size,
            complexity,
            name,
            store,
            pretty,
        } => {
            let request =
                MapRequest::from_keys(&difficulty, &theme, &size, &complexity, name.as_deref())?;
            let mut rng = create_rng(&config);
            let generator = MapGenerator::with_config(config);

            let map = generator.generate_map(&request, &mut rng)?;

            if let Some(path) = store {
                let mut store = JsonFileMapStore::open_or_create(path)?;
                store.append(map.clone())?;
                info!("Stored map {} in {}", map.id, store.path().display());
            }

            print_json(&map, pretty)
        }
        Command::Themes => print_json(&ThemeCatalog::builtin().list_themes(), true),
        Command::Difficulties => print_json(&towerforge::list_difficulties(), false),
        Command::Complexities => print_json(&towerforge::list_complexities(), false),
        Command::Maps { store } => {
            let store = JsonFileMapStore::open(store)?;
            print_json(&store.list()?, true)
        }
        Command::Show { store, id } => {
            let store = JsonFileMapStore::open(store)?;
            match store.get_by_id(id)? {
                Some(map) => print_json(&map, true),
                None => Err(TowerforgeError::MapNotFound(id)),
            }
        }
    }
}
