//! Pattern 1: Extension Without Modification
//! Example: Collecting Animal Sounds
//!
//! Run with: cargo run --example p1_animal_sounds

use open_closed_patterns::{get_animal_sound, Animal, Cat, Dog, Lion};

// The shape to avoid: every new animal forces an edit here.
fn sound_by_inspection(animal_name: &str) -> Option<&'static str> {
    match animal_name {
        "lion" => Some("roar"),
        "cat" => Some("meow"),
        _ => None, // adding "dog" means modifying this function
    }
}

fn main() {
    // Usage: new animals extend the trait; the collector stays untouched.
    println!("=== Closed for Modification ===");
    let animals: Vec<Box<dyn Animal>> = vec![Box::new(Lion), Box::new(Cat), Box::new(Dog)];
    println!("{}", get_animal_sound(&animals));

    println!("\n=== The Violation, for Contrast ===");
    for name in ["lion", "cat", "dog"] {
        match sound_by_inspection(name) {
            Some(sound) => println!("{name}: {sound}"),
            None => println!("{name}: not handled without editing the function"),
        }
    }

    println!("\n=== Open for Extension ===");
    struct Parrot;

    impl Animal for Parrot {
        fn make_sound(&self) -> String {
            "squawk".to_string()
        }
    }

    let more: Vec<Box<dyn Animal>> = vec![Box::new(Lion), Box::new(Parrot)];
    println!("{}", get_animal_sound(&more));
}
