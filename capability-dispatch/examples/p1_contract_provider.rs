//! Pattern 1: Contracts and Providers
//! Example: Narrow Contracts Dispatched Polymorphically
//!
//! Run with: cargo run --example p1_contract_provider

use capability_dispatch::Provider;

// One capability axis per trait, nothing bundled
trait Announce {
    fn announce(&self) -> String;
}

struct Bell;

impl Announce for Bell {
    fn announce(&self) -> String {
        "ding".to_string()
    }
}

impl Provider for Bell {
    fn provider_name(&self) -> &'static str {
        "Bell"
    }
}

struct Horn;

impl Announce for Horn {
    fn announce(&self) -> String {
        "honk".to_string()
    }
}

impl Provider for Horn {
    fn provider_name(&self) -> &'static str {
        "Horn"
    }
}

// Client holds the contract, never a concrete type
fn announce_all(devices: &[Box<dyn Announce>]) -> String {
    devices
        .iter()
        .map(|d| d.announce())
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() {
    // Usage: one client function serves every provider of the contract.
    let devices: Vec<Box<dyn Announce>> = vec![Box::new(Bell), Box::new(Horn)];

    println!("=== Polymorphic Dispatch ===");
    println!("{}", announce_all(&devices));

    println!("\n=== Provider Identity ===");
    let named: Vec<Box<dyn Provider>> = vec![Box::new(Bell), Box::new(Horn)];
    for provider in &named {
        println!("provider: {}", provider.provider_name());
    }

    println!("\n=== Key Points ===");
    println!("- A contract is a trait with no implementation of its own");
    println!("- Providers are substitutable: the client never branches on type");
    println!("- Keep each contract to one capability axis");
}
