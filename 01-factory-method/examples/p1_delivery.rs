//! Pattern 1: Creator Hierarchies
//! Example: Delivery Processing Behind a Factory Method
//!
//! Run with: cargo run --example p1_delivery

use factory_method_patterns::{CourierDeliveryCreator, DeliveryCreator, PostDeliveryCreator};

fn client_code(creator: &dyn DeliveryCreator) {
    println!("{}", creator.process_delivery());
}

fn main() {
    // Usage: the client works with any creator through the template alone.
    println!("Client: Order with courier delivery.");
    client_code(&CourierDeliveryCreator);

    println!("\nClient: Order with post delivery.");
    client_code(&PostDeliveryCreator);

    println!("\n=== Key Points ===");
    println!("- process_delivery() is fixed; create() varies per creator");
    println!("- The client never names CourierDelivery or PostDelivery");
}
