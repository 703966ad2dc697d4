//! somgeo-cli: Command-line interface for somgeo-core
//!
//! Inspect the bundled Somalia dataset and work with location codes from the
//! terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ somgeo stats
//!
//! - Districts of one region, as JSON
//!   $ somgeo districts --region Hiiraan --json
//!
//! - Search by name or alias
//!   $ somgeo search xamar
//!
//! - Location codes
//!   $ somgeo generate 2.0469 45.3182
//!   $ somgeo resolve SOM-BNR:6HJ728W9+Q7
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `somalia.json` bundled with `somgeo-core` and
//! caches a binary snapshot next to it. `--input <path>` (or `SOMGEO_DATA`)
//! selects another `.json`, `.json.gz` or `.bin` file.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use once_cell::sync::OnceCell;
use serde::Serialize;
use somgeo_core::{
    olc, DefaultBackend, DefaultGeoDb, GeoApi, LocationCodeComposer, LocationCodeResponse, Page,
    RegionLocator, RegionTable,
};
use std::fmt::Display;
use tracing_subscriber::EnvFilter;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    LOGGER_INIT.get_or_try_init(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok::<(), anyhow::Error>(())
    })?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_page<T: Serialize + Display>(json: bool, page: &Page<T>) -> anyhow::Result<()> {
    if json {
        return print_json(page);
    }
    for row in &page.data {
        println!("{row}");
    }
    println!("({} of {})", page.data.len(), page.count);
    Ok(())
}

/// Runs `generate` and `resolve`; `None` for every other command.
fn location_code(
    api: &GeoApi<DefaultBackend>,
    command: &Commands,
) -> somgeo_core::Result<Option<LocationCodeResponse>> {
    match command {
        Commands::Generate { lat, lon, region } => api
            .generate_location_code_in(*lat, *lon, region.as_deref())
            .map(Some),
        Commands::Resolve { code } => api.resolve_location_code(code).map(Some),
        _ => Ok(None),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    let input_path = args.input.clone().unwrap_or_else(|| {
        DefaultGeoDb::default_data_dir().join(DefaultGeoDb::default_dataset_filename())
    });
    tracing::debug!(path = %input_path.display(), "loading dataset");

    let composer = match &args.region_table {
        Some(path) => {
            let table = RegionTable::from_json_path(path)
                .with_context(|| format!("reading region table {}", path.display()))?;
            LocationCodeComposer::new(RegionLocator::new(table))
        }
        None => LocationCodeComposer::default(),
    };

    // Code-only commands never touch the dataset.
    let code_api = GeoApi::new(DefaultGeoDb::empty()).with_composer(composer);
    if let Some(resp) = location_code(&code_api, &args.command)? {
        if args.json {
            return print_json(&resp);
        }
        if matches!(args.command, Commands::Generate { .. }) {
            println!("{}", resp.code);
            return Ok(());
        }
        println!("Code: {}", resp.code);
        println!("Region: {}", resp.region_code.as_deref().unwrap_or("-"));
        println!("Center: {:.6}, {:.6}", resp.latitude_center, resp.longitude_center);
        return Ok(());
    }
    match &args.command {
        Commands::Shorten { code, lat, lon } => {
            println!("{}", olc::shorten(code, *lat, *lon)?);
            return Ok(());
        }
        Commands::Recover { code, lat, lon } => {
            println!("{}", olc::recover_nearest(code, *lat, *lon)?);
            return Ok(());
        }
        _ => {}
    }

    let db = DefaultGeoDb::load_from_path(&input_path)
        .with_context(|| format!("loading {}", input_path.display()))?;
    let api = GeoApi::new(db).with_composer(code_api.composer().clone());
    let db = api.db();

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            if args.json {
                return print_json(&stats);
            }
            println!("Database statistics:");
            println!("  Regions: {}", stats.regions);
            println!("  Districts: {}", stats.districts);
            println!("  Roads: {}", stats.roads);
            println!("  Airports: {}", stats.airports);
            println!("  Ports: {}", stats.ports);
            println!("  Checkpoints: {}", stats.checkpoints);
        }

        Commands::Regions { skip, limit } => print_page(args.json, &db.list_regions(skip, limit))?,

        Commands::Region { id } => {
            let region = db.get_region(id)?;
            if args.json {
                return print_json(region);
            }
            println!("Region: {}", region.name());
            println!("Code: {}", region.code());
            println!("Population: {:?}", region.population);
            println!("Area (km2): {:?}", region.area_km2());
            println!("Districts: {}", db.districts_in_region(region).count());
        }

        Commands::Districts {
            region,
            skip,
            limit,
        } => print_page(args.json, &db.list_districts(region.as_deref(), skip, limit))?,

        Commands::District { id } => {
            let district = db.get_district(id)?;
            if args.json {
                return print_json(district);
            }
            println!("District: {}", district.name());
            println!("Id: {}", district.search_id());
            println!("Region: {}", district.region_name());
            println!("Aliases: {}", district.aliases().join(", "));
            if let Some(c) = district.centroid() {
                println!("Centroid: {:.4}, {:.4}", c.lat, c.lon);
                println!("Location code: {}", api.composer().compose(c.lat, c.lon, None)?);
            }
        }

        Commands::Roads {
            kind,
            district,
            skip,
            limit,
        } => print_page(
            args.json,
            &db.list_roads(kind.as_deref(), district.as_deref(), skip, limit)?,
        )?,

        Commands::Airports { kind, skip, limit } => {
            print_page(args.json, &db.list_airports(kind.as_deref(), skip, limit)?)?
        }

        Commands::Ports { skip, limit } => print_page(args.json, &db.list_ports(skip, limit))?,

        Commands::Checkpoints { skip, limit } => {
            print_page(args.json, &db.list_checkpoints(skip, limit))?
        }

        Commands::Search { name, limit } => {
            let res = api.search_places(&name, limit)?;
            if args.json {
                return print_json(&res);
            }
            if res.data.is_empty() {
                println!("No places found matching: {name}");
            }
            for hit in &res.data {
                println!("{} [{}] {} ({})", hit.id, hit.kind, hit.name, hit.region);
            }
        }

        Commands::Build { output } => {
            #[cfg(feature = "builder")]
            {
                db.save_as(&output)?;
                println!("Wrote {}", output.display());
            }
            #[cfg(not(feature = "builder"))]
            {
                anyhow::bail!(
                    "cannot write {}: built without the 'builder' feature",
                    output.display()
                );
            }
        }

        // handled before loading
        Commands::Generate { .. }
        | Commands::Resolve { .. }
        | Commands::Shorten { .. }
        | Commands::Recover { .. } => {}
    }

    Ok(())
}
