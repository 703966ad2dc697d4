//! Basic usage example for somgeo-rs
//!
//! This example demonstrates how to:
//! - Load the bundled Somalia dataset (cached after the first run)
//! - Page through regions and districts
//! - Search places by name or alias

use somgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== somgeo-rs Basic Usage Example ===\n");

    let db = GeoDb::<StandardBackend>::load()?;
    let stats = db.stats();
    println!(
        "Loaded {} regions, {} districts, {} airports\n",
        stats.regions, stats.districts, stats.airports
    );

    println!("--- Example 1: First five regions ---");
    let page = db.list_regions(0, 5);
    for region in &page.data {
        println!("- {} ({})", region.name(), region.code());
    }
    println!("... {} in total\n", page.count);

    println!("--- Example 2: Districts of Hiiraan ---");
    for d in db.list_districts(Some("Hiiraan"), 0, 100).data {
        println!("- {} a.k.a. {}", d.name(), d.aliases().join(", "));
    }
    println!();

    println!("--- Example 3: Search ---");
    let api = GeoApi::new(db);
    for query in ["xamar", "shabelle", "kismaayo"] {
        let res = api.search_places(query, 5)?;
        println!("'{query}': {} hit(s)", res.count);
        for hit in res.data {
            println!("  {} [{}] {}", hit.id, hit.kind, hit.name);
        }
    }

    Ok(())
}
