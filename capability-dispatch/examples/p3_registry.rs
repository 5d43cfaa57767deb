//! Pattern 3: Named Provider Registry
//! Example: Runtime Selection Without Client Branching
//!
//! Run with: cargo run --example p3_registry

use capability_dispatch::ProviderRegistry;

trait Compressor {
    fn compress(&self, input: &str) -> String;
}

struct Upper;

impl Compressor for Upper {
    fn compress(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

struct Reverse;

impl Compressor for Reverse {
    fn compress(&self, input: &str) -> String {
        input.chars().rev().collect()
    }
}

fn main() {
    // Usage: wiring code registers variants; the client only knows names.
    let mut registry: ProviderRegistry<dyn Compressor> = ProviderRegistry::new();
    registry.register("upper", || Box::new(Upper) as Box<dyn Compressor>);
    registry.register("reverse", || Box::new(Reverse) as Box<dyn Compressor>);

    println!("=== Registered Providers ===");
    println!("{:?}", registry.names());

    println!("\n=== Dispatch by Name ===");
    for name in ["upper", "reverse"] {
        let compressor = registry.create(name).expect("registered above");
        println!("{name}: {}", compressor.compress("hello registry"));
    }

    println!("\n=== Unknown Name ===");
    match registry.create("zip") {
        Ok(_) => println!("unexpected"),
        Err(e) => println!("error: {e}"),
    }
}
