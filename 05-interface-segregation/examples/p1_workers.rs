//! Pattern 1: Narrow Contracts
//! Example: Humans Eat, Robots Only Work
//!
//! Run with: cargo run --example p1_workers

use interface_segregation_patterns::{let_eat, let_work, Human, Robot};

fn main() {
    // Usage: each type claims exactly the capabilities it has.
    println!("=== Work ===");
    println!("human: {}", let_work(&Human));
    println!("robot: {}", let_work(&Robot));

    println!("\n=== Eat ===");
    println!("human: {}", let_eat(&Human));
    // let_eat(&Robot) is a compile error: Robot never claims Eatable,
    // so there is no eat() to stub and nothing to throw.

    println!("\n=== Key Points ===");
    println!("- Split wide contracts along capability axes");
    println!("- No implementer stubs an operation it cannot honor");
}
