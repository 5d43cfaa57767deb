//! Pattern 2: Optional Capabilities on a Roster
//! Example: Lunch Break for a Mixed Staff
//!
//! Run with: cargo run --example p2_lunch_break

use interface_segregation_patterns::{lunch_break, Human, Robot, StaffMember};

fn main() {
    // Usage: the roster is heterogeneous; eating is probed, never stubbed.
    let staff: Vec<Box<dyn StaffMember>> = vec![Box::new(Human), Box::new(Robot)];

    println!("=== Everyone Works ===");
    for member in &staff {
        println!("{}: {}", member.provider_name(), member.work());
    }

    println!("\n=== Lunch Break ===");
    for member in &staff {
        match lunch_break(member.as_ref()) {
            Ok(line) => println!("{}: {line}", member.provider_name()),
            Err(e) => println!("{}: {e}", member.provider_name()),
        }
    }
}
