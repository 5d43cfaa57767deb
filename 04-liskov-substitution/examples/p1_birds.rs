//! Pattern 1: Capability Split Instead of a Throwing Override
//! Example: Sparrows Fly, Penguins Honk
//!
//! Run with: cargo run --example p1_birds

use liskov_substitution_patterns::{bird_chorus, make_bird_fly, Bird, Penguin, Sparrow};

fn main() {
    // Usage: flight is a separate contract; no bird ever throws from fly().
    println!("=== Flying ===");
    println!("{}", make_bird_fly(&Sparrow));

    println!("\n=== Chorus ===");
    let birds: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow), Box::new(Penguin)];
    println!("{}", bird_chorus(&birds));

    // make_bird_fly(&Penguin) is a compile error, which is the point:
    // the violating call cannot be expressed at all.

    println!("\n=== Key Points ===");
    println!("- A subtype that weakens a promise breaks every caller");
    println!("- Model the smaller capability as the base contract");
    println!("- The compiler enforces what the exception used to report");
}
