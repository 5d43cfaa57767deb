//! Pattern 1: Creator Hierarchies
//! Example: Choosing a Means of Travel
//!
//! Run with: cargo run --example p1_trip

use factory_method_patterns::{
    CarTripCreator, MetroTripCreator, TaxiTripCreator, TripCreator,
};

fn client_code(creator: &dyn TripCreator) {
    println!("{}", creator.start_trip());
}

fn main() {
    // Usage: three creators, one client, zero branching.
    println!("Start trip by taxi");
    client_code(&TaxiTripCreator);

    println!("\nStart trip by car");
    client_code(&CarTripCreator);

    println!("\nStart trip by metro");
    client_code(&MetroTripCreator);
}
