//! # Factory Method
//!
//! Two creator hierarchies built on the capability-dispatch core:
//!
//! ## Pattern 1: Creator Hierarchies
//! - Deliveries: the template adds fixed post-processing around the product
//! - Trips: the template returns the product output unchanged
//!
//! ## Pattern 2: Registry-Driven Selection
//! - Trip creators selected by name through `ProviderRegistry`
//!
//! Adding a variant to either hierarchy means adding one provider type
//! and one creator type; nothing existing changes.
//!
//! Run examples with: `cargo run --example <name>`

pub mod delivery;
pub mod trip;

pub use delivery::{
    CourierDelivery, CourierDeliveryCreator, Delivery, DeliveryCreator, PostDelivery,
    PostDeliveryCreator,
};
pub use trip::{
    trip_creators, CarTrip, CarTripCreator, MetroTrip, MetroTripCreator, TaxiTrip,
    TaxiTripCreator, Trip, TripCreator,
};
