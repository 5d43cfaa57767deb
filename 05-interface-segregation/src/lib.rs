//! # Interface Segregation
//!
//! One wide `Worker` contract would force a robot to stub out `eat()`.
//! Two narrow contracts let each implementer claim exactly what it can
//! honestly do:
//!
//! ## Pattern 1: Narrow Contracts
//! - [`Workable`] and [`Eatable`] are separate capability axes
//! - `Human` claims both, `Robot` claims only [`Workable`]
//! - `let_eat(&Robot)` is a compile error, not a runtime surprise
//!
//! ## Pattern 2: Optional Capabilities on a Roster
//! - A heterogeneous staff roster probes for the optional capability
//!   through an explicit narrow view and gets a typed error when it is
//!   absent, naming the provider and the missing operation
//!
//! Run examples with: `cargo run --example <name>`

use capability_dispatch::{DispatchError, Provider};

/// Capability axis: can perform work.
pub trait Workable {
    fn work(&self) -> String;
}

/// Capability axis: needs to eat. Kept apart from [`Workable`] so no
/// implementer is forced to stub it.
pub trait Eatable {
    fn eat(&self) -> String;
}

pub struct Human;

impl Workable for Human {
    fn work(&self) -> String {
        "I am working!".to_string()
    }
}

impl Eatable for Human {
    fn eat(&self) -> String {
        "I am eating!".to_string()
    }
}

impl Provider for Human {
    fn provider_name(&self) -> &'static str {
        "Human"
    }
}

pub struct Robot;

impl Workable for Robot {
    fn work(&self) -> String {
        "I am working!".to_string()
    }
}

impl Provider for Robot {
    fn provider_name(&self) -> &'static str {
        "Robot"
    }
}

pub fn let_work(worker: &impl Workable) -> String {
    worker.work()
}

pub fn let_eat(eater: &impl Eatable) -> String {
    eater.eat()
}

/// Roster entry. Working is mandatory; eating is optional and exposed
/// through a narrow view instead of a stubbed method.
pub trait StaffMember: Workable + Provider {
    fn eatable(&self) -> Option<&dyn Eatable> {
        None
    }
}

impl StaffMember for Human {
    fn eatable(&self) -> Option<&dyn Eatable> {
        Some(self)
    }
}

impl StaffMember for Robot {}

/// Send one roster member to lunch. Members without the eating
/// capability surface a contract error naming the missing operation.
pub fn lunch_break(member: &dyn StaffMember) -> Result<String, DispatchError> {
    match member.eatable() {
        Some(eater) => Ok(eater.eat()),
        None => Err(DispatchError::NotImplemented {
            provider: member.provider_name(),
            operation: "eat",
        }),
    }
}
