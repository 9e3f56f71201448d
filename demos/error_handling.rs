//! Error handling example for turkiyedb
//!
//! This example demonstrates the fallible loaders and how lookup misses
//! surface as plain `None` rather than errors

use turkiyedb::prelude::*;

fn main() -> Result<()> {
    println!("=== turkiyedb Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading the dataset with error handling ---");
    let db = match TurkiyeDb::try_load() {
        Ok(db) => {
            println!("✓ Dataset loaded successfully");
            println!("  Cities: {}", db.city_count());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 2: Loading from a path that does not exist
    println!("--- Example 2: Loading from a missing path ---");
    match TurkiyeDb::load_from_path("does/not/exist.json") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  Expected failure: {e}"),
    }
    println!();

    // Example 3: Handling missing cities
    println!("--- Example 3: Searching for non-existent city IDs ---");
    for id in [0, 82, 100] {
        match db.find_city_by_id(id) {
            Some(city) => println!("  Found: {} ({})", city.name(), city.id),
            None => println!("  Not found: city {id}"),
        }
    }
    println!();

    // Example 4: A broken ID path stops at the first missing segment
    println!("--- Example 4: Partial ID paths ---");
    println!(
        "  Town 1 of city 1: {:?}",
        db.find_town_by_id(1, 1).map(|t| t.name())
    );
    println!(
        "  Town 999 of city 1: {:?}",
        db.find_town_by_id(1, 999).map(|t| t.name())
    );
    println!(
        "  Quarter under a missing city: {:?}",
        db.find_quarter_by_id(999, 1, 1, 1).map(|q| q.name())
    );

    Ok(())
}
