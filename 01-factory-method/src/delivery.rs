use capability_dispatch::ProviderFactory;

/// Contract for anything that can carry a package to a customer.
pub trait Delivery {
    fn deliver(&self) -> String;
}

pub struct CourierDelivery;

impl Delivery for CourierDelivery {
    fn deliver(&self) -> String {
        "Courier delivery: Your package will be delivered by a courier.".to_string()
    }
}

pub struct PostDelivery;

impl Delivery for PostDelivery {
    fn deliver(&self) -> String {
        "Post delivery: Your package will be delivered through the postal service.".to_string()
    }
}

/// Fixed half of the factory-method pair: every delivery creator wraps
/// its product's output the same way. Concrete creators override only
/// the creation step.
pub trait DeliveryCreator: ProviderFactory<Provider = Box<dyn Delivery>> {
    fn process_delivery(&self) -> String {
        let delivery = self.create();
        format!("Delivery processed with {}", delivery.deliver())
    }
}

impl<T: ProviderFactory<Provider = Box<dyn Delivery>>> DeliveryCreator for T {}

pub struct CourierDeliveryCreator;

impl ProviderFactory for CourierDeliveryCreator {
    type Provider = Box<dyn Delivery>;

    fn create(&self) -> Self::Provider {
        Box::new(CourierDelivery)
    }
}

pub struct PostDeliveryCreator;

impl ProviderFactory for PostDeliveryCreator {
    type Provider = Box<dyn Delivery>;

    fn create(&self) -> Self::Provider {
        Box::new(PostDelivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_creator_processes_a_courier_delivery() {
        assert_eq!(
            CourierDeliveryCreator.process_delivery(),
            "Delivery processed with Courier delivery: \
             Your package will be delivered by a courier."
        );
    }

    #[test]
    fn post_creator_processes_a_post_delivery() {
        assert_eq!(
            PostDeliveryCreator.process_delivery(),
            "Delivery processed with Post delivery: \
             Your package will be delivered through the postal service."
        );
    }

    #[test]
    fn template_embeds_product_output_unchanged() {
        let product = CourierDeliveryCreator.create().deliver();
        let processed = CourierDeliveryCreator.process_delivery();

        assert!(processed.ends_with(&product));
    }

    #[test]
    fn client_code_never_names_a_concrete_creator() {
        fn client(creator: &dyn DeliveryCreator) -> String {
            creator.process_delivery()
        }

        // Both creators flow through the same client unchanged.
        assert!(client(&CourierDeliveryCreator).contains("courier"));
        assert!(client(&PostDeliveryCreator).contains("postal"));
    }

    #[test]
    fn new_variants_extend_the_hierarchy_without_edits() {
        struct DroneDelivery;

        impl Delivery for DroneDelivery {
            fn deliver(&self) -> String {
                "Drone delivery: Your package will arrive by air.".to_string()
            }
        }

        struct DroneDeliveryCreator;

        impl ProviderFactory for DroneDeliveryCreator {
            type Provider = Box<dyn Delivery>;

            fn create(&self) -> Self::Provider {
                Box::new(DroneDelivery)
            }
        }

        assert_eq!(
            DroneDeliveryCreator.process_delivery(),
            "Delivery processed with Drone delivery: Your package will arrive by air."
        );
    }
}
