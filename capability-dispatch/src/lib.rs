//! # Capability-Contract Dispatch
//!
//! The one structural idea shared by every chapter in this collection,
//! extracted into reusable form. Client code holds a contract, never a
//! concrete type; concrete providers are selected behind a factory
//! method or a named registry.
//!
//! ## Pattern 1: Contracts and Providers
//! - A contract is a narrow trait: one capability axis, no implementation
//! - A provider implements every operation of each contract it claims
//! - [`Provider`] adds the diagnostic identity errors and registries need
//!
//! ## Pattern 2: Factory Method
//! - [`ProviderFactory`] is the overridable creation step
//! - The fixed template operation is a default method on a domain trait,
//!   tied to every factory by a blanket impl
//!
//! ## Pattern 3: Named Provider Registry
//! - [`ProviderRegistry`] constructs providers by name, keeping variant
//!   selection in wiring code instead of inside clients
//!
//! Run examples with: `cargo run --example <name>`

mod creator;
mod error;
mod provider;
mod registry;

pub use creator::ProviderFactory;
pub use error::DispatchError;
pub use provider::Provider;
pub use registry::ProviderRegistry;
