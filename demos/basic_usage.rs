//! Basic usage example for turkiyedb
//!
//! This example demonstrates how to:
//! - Load the bundled dataset
//! - List cities and walk the division tree
//! - Look up entities by ID path
//! - Read country metadata and statistics

use turkiyedb::prelude::*;

fn main() {
    println!("=== turkiyedb Basic Usage Example ===\n");

    // Load the database
    println!("Loading dataset...");
    let db = TurkiyeDb::load();
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Get all cities
    println!("--- Example 1: List all cities ---");
    let cities = db.cities();
    println!("Total cities: {}", cities.len());
    for city in cities.iter().take(5) {
        println!("{:2}. {}", city.id, city.name());
    }
    println!("... and {} more\n", cities.len() - 5);

    // Example 2: Find a specific city
    println!("--- Example 2: Find city by license-plate ID ---");
    if let Some(city) = db.find_city_by_id(34) {
        println!("Found: {}", city.name());
        if let Some(location) = &city.location {
            println!("Latitude: {:?}", location.latitude);
            println!("Longitude: {:?}", location.longitude);
        }
        println!("Number of towns: {}", city.towns().len());
    }
    println!();

    // Example 3: Get towns for a city
    println!("--- Example 3: List towns for a city ---");
    if let Some(city) = db.find_city_by_id(6) {
        let towns = city.towns();
        println!("Towns in {}: {}", city.name(), towns.len());
        for (i, town) in towns.iter().take(5).enumerate() {
            println!("{}. {}", i + 1, town.name());
        }
        println!("... and {} more", towns.len() - 5);
    }
    println!();

    // Example 4: Walk a full ID path
    println!("--- Example 4: Look up a quarter by ID path ---");
    if let Some(district) = db.find_district_by_id(1, 1, 1) {
        println!(
            "District 1/1/1: {} ({} quarters)",
            district.name(),
            district.quarters().len()
        );
    }
    if let Some(quarter) = db.find_quarter_by_id(1, 1, 1, 1) {
        println!("Quarter 1/1/1/1: {}", quarter.name());
    }
    println!();

    // Example 5: Country metadata
    println!("--- Example 5: Country metadata ---");
    let country = db.country();
    println!("Name: {}", country.name());
    println!("Phone code: {}", country.phone_code());
    println!("Alpha-2: {}", country.alpha2_code());
    println!("Alpha-3: {}", country.alpha3_code());
    println!();

    // Example 6: Database statistics
    println!("--- Example 6: Database statistics ---");
    let stats = db.stats();
    println!("Total cities: {}", stats.cities);
    println!("Total towns: {}", stats.towns);
    println!("Total districts: {}", stats.districts);
    println!("Total quarters: {}", stats.quarters);

    println!("\n=== Example completed successfully ===");
}
