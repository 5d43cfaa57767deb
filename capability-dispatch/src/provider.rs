/// Base contract every concrete provider satisfies.
///
/// Contracts themselves are ordinary Rust traits, one per capability
/// axis, so "satisfies the contract" is checked by the compiler. This
/// trait only adds the diagnostic identity that error reporting needs;
/// it carries no behavior.
///
/// Where a capability is genuinely optional for members of a roster,
/// the roster trait declares an explicit narrow view returning
/// `Option<&dyn Axis>` (defaulting to `None`) instead of forcing a
/// stub implementation onto every member.
pub trait Provider {
    /// Stable name used in error messages and logs.
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    impl Provider for Stub {
        fn provider_name(&self) -> &'static str {
            "Stub"
        }
    }

    #[test]
    fn name_is_usable_through_a_trait_object() {
        let provider: &dyn Provider = &Stub;
        assert_eq!(provider.provider_name(), "Stub");
    }
}
