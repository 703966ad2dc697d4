//! Location code example for somgeo-rs
//!
//! Generates `SOM-<REGION>:<plus code>` codes, resolves them again, and
//! shows how to plug in a custom region table.

use somgeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== somgeo-rs Location Codes Example ===\n");

    let composer = LocationCodeComposer::default();

    println!("--- Example 1: Inferred region ---");
    let code = composer.compose(2.0469, 45.3182, None)?;
    let parsed = composer.parse(&code)?;
    println!("Mogadishu -> {code}");
    println!(
        "  center {:.6}, {:.6}, region {:?}\n",
        parsed.latitude_center(),
        parsed.longitude_center(),
        parsed.region_code
    );

    println!("--- Example 2: Short codes ---");
    let full = olc::encode(2.0469, 45.3182)?;
    let short = olc::shorten(&full, 2.05, 45.32)?;
    println!("{full} near the city centre is {short}");
    println!("recovered: {}\n", olc::recover_nearest(&short, 2.05, 45.32)?);

    println!("--- Example 3: Custom region table ---");
    let table = RegionTable::new(vec![
        RegionBox::new("WOG", (9.0, 10.5), (43.5, 45.5)).named("Woqooyi Galbeed"),
        RegionBox::new("BNR", (1.8, 2.2), (45.0, 45.6)).named("Banadir"),
    ]);
    let composer = LocationCodeComposer::new(RegionLocator::new(table));
    println!("Hargeisa -> {}", composer.compose(9.56, 44.065, None)?);

    println!("\n--- Example 4: Invalid input ---");
    match composer.compose(91.0, 0.0, None) {
        Ok(code) => println!("unexpected: {code}"),
        Err(e) => println!("rejected ({}): {e}", e.status_code()),
    }

    Ok(())
}
