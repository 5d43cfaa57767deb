//! # Single Responsibility
//!
//! A `Car` describes a vehicle; an `Engine` runs. Splitting the two
//! gives each type one reason to change: engine behavior evolves in
//! `Engine` without touching how a car is described, and vice versa.
//!
//! Run examples with: `cargo run --example p1_engine_car`

/// Owns the running state and nothing else.
#[derive(Debug, Default)]
pub struct Engine {
    running: bool,
}

impl Engine {
    pub fn new() -> Self {
        Engine { running: false }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Describes the vehicle and delegates engine work to its engine.
#[derive(Debug)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: u16,
    engine: Engine,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        year: u16,
    ) -> Self {
        Car {
            brand: brand.into(),
            model: model.into(),
            color: color.into(),
            year,
            engine: Engine::new(),
        }
    }

    pub fn start_engine(&mut self) {
        self.engine.start();
    }

    pub fn stop_engine(&mut self) {
        self.engine.stop();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn description(&self) -> String {
        format!("{} {} {} ({})", self.color, self.brand, self.model, self.year)
    }
}
