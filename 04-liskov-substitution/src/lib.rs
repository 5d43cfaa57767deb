//! # Liskov Substitution
//!
//! A penguin is a bird that cannot fly. Instead of a `fly()` that
//! panics for some birds, flight is its own contract: [`FlyingBird`]
//! refines [`Bird`], and only honest fliers implement it. Every caller
//! of `make_bird_fly` is now safe by construction; a penguin cannot
//! reach it.
//!
//! Run examples with: `cargo run --example p1_birds`

/// What every bird can do.
pub trait Bird {
    fn make_sound(&self) -> String;
}

/// The narrower contract for birds that actually fly.
pub trait FlyingBird: Bird {
    fn fly(&self) -> String;
}

pub struct Sparrow;

impl Bird for Sparrow {
    fn make_sound(&self) -> String {
        "Chirp chirp!".to_string()
    }
}

impl FlyingBird for Sparrow {
    fn fly(&self) -> String {
        "I can fly!".to_string()
    }
}

pub struct Penguin;

impl Bird for Penguin {
    fn make_sound(&self) -> String {
        "Honk honk!".to_string()
    }
}

/// Any flying bird will do; a penguin is rejected at compile time.
pub fn make_bird_fly(bird: &impl FlyingBird) -> String {
    bird.fly()
}

/// Works for every bird, flying or not.
pub fn bird_chorus(birds: &[Box<dyn Bird>]) -> String {
    birds
        .iter()
        .map(|bird| bird.make_sound())
        .collect::<Vec<_>>()
        .join("\n")
}
