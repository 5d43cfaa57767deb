//! Pattern 2: Registry-Driven Selection
//! Example: Picking a Trip Creator by Name at Runtime
//!
//! Run with: cargo run --example p2_trip_registry

use factory_method_patterns::trip_creators;

fn main() {
    // Usage: wiring lives in trip_creators(); the client only knows names.
    let creators = trip_creators();

    println!("=== Available Trips ===");
    println!("{:?}", creators.names());

    println!("\n=== Start Each Trip ===");
    for name in creators.names() {
        let creator = creators.create(name).expect("listed by the registry");
        println!("{name}: {}", creator.start_trip());
    }

    println!("\n=== Asking for a Boat ===");
    match creators.create("boat") {
        Ok(_) => println!("unexpected"),
        Err(e) => println!("error: {e}"),
    }
}
