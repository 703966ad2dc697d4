use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for somgeo-cli
#[derive(Debug, Parser)]
#[command(
    name = "somgeo",
    version,
    about = "Query Somali regions and districts, and work with SOM location codes"
)]
pub struct CliArgs {
    /// Dataset to load (.json, .json.gz or a .bin snapshot). Defaults to the bundled somalia.json
    #[arg(short = 'i', long = "input", env = "SOMGEO_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// JSON file with region bounding boxes, replacing the built-in table
    #[arg(long = "region-table", global = true)]
    pub region_table: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// List regions
    Regions {
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Show one region by id
    Region { id: u32 },

    /// List districts, optionally only those of one region (exact name)
    Districts {
        #[arg(short, long)]
        region: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Show one district by id
    District { id: u32 },

    /// List roads
    Roads {
        /// primary or secondary
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Substring of the road name (e.g. Mogadishu)
        #[arg(short, long)]
        district: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// List airports
    Airports {
        /// international or domestic
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// List seaports
    Ports {
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// List checkpoints
    Checkpoints {
        #[arg(long, default_value_t = 0)]
        skip: usize,
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Search districts and regions by name or alias
    Search {
        /// Substring to search (case- and accent-insensitive)
        name: String,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Generate a location code for a coordinate
    Generate {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Region prefix to embed verbatim instead of inferring one (e.g. SOM-HIR)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Decode a location code, with or without a SOM- region prefix
    Resolve { code: String },

    /// Shorten a full plus code relative to a nearby point
    Shorten {
        code: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Recover a full plus code from a short one and a nearby point
    Recover {
        code: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Write the loaded dataset as a binary snapshot
    Build { output: PathBuf },
}
