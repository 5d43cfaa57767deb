//! # Open/Closed
//!
//! `get_animal_sound` never changes when the menagerie grows. Each new
//! animal is a new type implementing [`Animal`]; the collector is
//! closed for modification, open for extension.
//!
//! Run examples with: `cargo run --example p1_animal_sounds`

/// Contract for anything that makes a sound.
pub trait Animal {
    fn make_sound(&self) -> String;
}

pub struct Lion;

impl Animal for Lion {
    fn make_sound(&self) -> String {
        "roar".to_string()
    }
}

pub struct Cat;

impl Animal for Cat {
    fn make_sound(&self) -> String {
        "meow".to_string()
    }
}

pub struct Dog;

impl Animal for Dog {
    fn make_sound(&self) -> String {
        "bark".to_string()
    }
}

/// One sound per line, in the order given.
pub fn get_animal_sound(animals: &[Box<dyn Animal>]) -> String {
    animals
        .iter()
        .map(|animal| animal.make_sound())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_one_sound_per_animal() {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Lion), Box::new(Cat), Box::new(Dog)];

        assert_eq!(get_animal_sound(&animals), "roar\nmeow\nbark");
    }

    #[test]
    fn empty_menagerie_is_silent() {
        assert_eq!(get_animal_sound(&[]), "");
    }

    #[test]
    fn new_animals_need_no_changes_to_the_collector() {
        struct Cow;

        impl Animal for Cow {
            fn make_sound(&self) -> String {
                "moo".to_string()
            }
        }

        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Lion), Box::new(Cow)];

        assert_eq!(get_animal_sound(&animals), "roar\nmoo");
    }

    #[test]
    fn order_of_animals_is_preserved() {
        let animals: Vec<Box<dyn Animal>> = vec![Box::new(Dog), Box::new(Lion)];

        assert_eq!(get_animal_sound(&animals), "bark\nroar");
    }
}
