use std::collections::HashMap;

use crate::error::DispatchError;

type Constructor<P> = Box<dyn Fn() -> Box<P> + Send + Sync>;

/// Named constructors for providers of one contract.
///
/// Clients that pick a provider variant at runtime go through the
/// registry so selection lives in wiring code, outside the client. The
/// registry hands out a fresh instance per [`create`](Self::create);
/// nothing is pooled or cached.
pub struct ProviderRegistry<P: ?Sized> {
    constructors: HashMap<&'static str, Constructor<P>>,
}

impl<P: ?Sized> ProviderRegistry<P> {
    pub fn new() -> Self {
        ProviderRegistry {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor under `name`. Re-registering a name
    /// replaces the previous constructor.
    pub fn register<F>(&mut self, name: &'static str, constructor: F)
    where
        F: Fn() -> Box<P> + Send + Sync + 'static,
    {
        log::debug!("registering provider `{name}`");
        self.constructors.insert(name, Box::new(constructor));
    }

    /// Construct a fresh provider by name.
    pub fn create(&self, name: &str) -> Result<Box<P>, DispatchError> {
        match self.constructors.get(name) {
            Some(constructor) => {
                log::debug!("creating provider `{name}`");
                Ok(constructor())
            }
            None => Err(DispatchError::UnknownProvider {
                requested: name.to_string(),
                known: self.names(),
            }),
        }
    }

    /// Registered names, sorted for stable diagnostics.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.constructors.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<P: ?Sized> Default for ProviderRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
