//! Pattern 1: One Reason to Change
//! Example: Car Delegates Running State to Engine
//!
//! Run with: cargo run --example p1_engine_car

use single_responsibility_patterns::Car;

fn main() {
    // Usage: the car describes itself; the engine runs.
    let mut car = Car::new("Volvo", "V60", "blue", 2021);

    println!("=== The Car ===");
    println!("{}", car.description());
    println!("running: {}", car.is_running());

    println!("\n=== Start and Stop ===");
    car.start_engine();
    println!("after start: {}", car.is_running());

    car.stop_engine();
    println!("after stop: {}", car.is_running());

    println!("\n=== Key Points ===");
    println!("- Engine changes never touch Car's identity fields");
    println!("- A monolithic Car would mix both reasons to change");
}
