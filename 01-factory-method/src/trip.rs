use capability_dispatch::{ProviderFactory, ProviderRegistry};

/// Contract for one way of getting somewhere.
pub trait Trip {
    fn trip(&self) -> String;
}

pub struct TaxiTrip;

impl Trip for TaxiTrip {
    fn trip(&self) -> String {
        "Our trip will be made by taxy.".to_string()
    }
}

pub struct CarTrip;

impl Trip for CarTrip {
    fn trip(&self) -> String {
        "Our trip will by made our car.".to_string()
    }
}

pub struct MetroTrip;

impl Trip for MetroTrip {
    fn trip(&self) -> String {
        "Our trip will by metro.".to_string()
    }
}

/// Template for starting a trip. Unlike deliveries, the product output
/// is returned as-is; the fixed half is only the create-then-run shape.
pub trait TripCreator: ProviderFactory<Provider = Box<dyn Trip>> + std::fmt::Debug {
    fn start_trip(&self) -> String {
        let trip = self.create();
        trip.trip()
    }
}

impl<T: ProviderFactory<Provider = Box<dyn Trip>> + std::fmt::Debug> TripCreator for T {}

#[derive(Debug)]
pub struct TaxiTripCreator;

impl ProviderFactory for TaxiTripCreator {
    type Provider = Box<dyn Trip>;

    fn create(&self) -> Self::Provider {
        Box::new(TaxiTrip)
    }
}

#[derive(Debug)]
pub struct CarTripCreator;

impl ProviderFactory for CarTripCreator {
    type Provider = Box<dyn Trip>;

    fn create(&self) -> Self::Provider {
        Box::new(CarTrip)
    }
}

#[derive(Debug)]
pub struct MetroTripCreator;

impl ProviderFactory for MetroTripCreator {
    type Provider = Box<dyn Trip>;

    fn create(&self) -> Self::Provider {
        Box::new(MetroTrip)
    }
}

/// Registry wiring every trip creator by name, for clients that pick
/// the means of travel at runtime.
pub fn trip_creators() -> ProviderRegistry<dyn TripCreator> {
    let mut registry = ProviderRegistry::new();
    registry.register("taxi", || Box::new(TaxiTripCreator) as Box<dyn TripCreator>);
    registry.register("car", || Box::new(CarTripCreator) as Box<dyn TripCreator>);
    registry.register("metro", || Box::new(MetroTripCreator) as Box<dyn TripCreator>);
    registry
}
