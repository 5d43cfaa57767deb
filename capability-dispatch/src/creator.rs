/// The overridable creation step of a factory-method pair.
///
/// A domain defines the fixed half as a default method on its own
/// creator trait and ties the two together with a blanket impl, so the
/// template depends only on the contract type and can never be
/// overridden per variant:
///
/// ```
/// use capability_dispatch::ProviderFactory;
///
/// trait Greeting {
///     fn text(&self) -> String;
/// }
///
/// struct Casual;
///
/// impl Greeting for Casual {
///     fn text(&self) -> String {
///         "hi".to_string()
///     }
/// }
///
/// struct CasualCreator;
///
/// impl ProviderFactory for CasualCreator {
///     type Provider = Box<dyn Greeting>;
///
///     fn create(&self) -> Self::Provider {
///         Box::new(Casual)
///     }
/// }
///
/// // The fixed template: create, then post-process.
/// trait GreetingCreator: ProviderFactory<Provider = Box<dyn Greeting>> {
///     fn greet(&self) -> String {
///         let greeting = self.create();
///         format!("greeting: {}", greeting.text())
///     }
/// }
///
/// impl<T: ProviderFactory<Provider = Box<dyn Greeting>>> GreetingCreator for T {}
///
/// assert_eq!(CasualCreator.greet(), "greeting: hi");
/// ```
pub trait ProviderFactory {
    /// The product type, usually a boxed contract.
    type Provider;

    /// Construct one fresh provider. Every call returns a new instance;
    /// factories hold no state between calls.
    fn create(&self) -> Self::Provider;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    trait Signal {
        fn emit(&self) -> String;
    }

    struct Ping;

    impl Signal for Ping {
        fn emit(&self) -> String {
            "ping".to_string()
        }
    }

    trait SignalCreator: ProviderFactory<Provider = Box<dyn Signal>> {
        fn broadcast(&self) -> String {
            let signal = self.create();
            format!("broadcast: {}", signal.emit())
        }
    }

    impl<T: ProviderFactory<Provider = Box<dyn Signal>>> SignalCreator for T {}

    struct CountingCreator {
        created: Cell<usize>,
    }

    impl ProviderFactory for CountingCreator {
        type Provider = Box<dyn Signal>;

        fn create(&self) -> Self::Provider {
            self.created.set(self.created.get() + 1);
            Box::new(Ping)
        }
    }

    #[test]
    fn template_creates_exactly_one_provider_per_call() {
        let creator = CountingCreator {
            created: Cell::new(0),
        };

        let result = creator.broadcast();

        assert_eq!(creator.created.get(), 1);
        assert_eq!(result, "broadcast: ping");
    }

    #[test]
    fn template_embeds_provider_output_unchanged() {
        struct Pong;

        impl Signal for Pong {
            fn emit(&self) -> String {
                "pong".to_string()
            }
        }

        struct PongCreator;

        impl ProviderFactory for PongCreator {
            type Provider = Box<dyn Signal>;

            fn create(&self) -> Self::Provider {
                Box::new(Pong)
            }
        }

        // A new factory/provider pair reuses the template untouched.
        assert_eq!(PongCreator.broadcast(), "broadcast: pong");
    }
}
