use thiserror::Error;

/// Failures surfaced by dispatch over capability contracts.
///
/// Both variants signal programmer error, not a recoverable runtime
/// condition. There is nothing to retry: either a provider was enrolled
/// somewhere that probes a capability it does not supply, or a caller
/// asked for a provider nobody registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A provider was probed for an operation it does not implement.
    #[error("provider `{provider}` does not implement `{operation}`")]
    NotImplemented {
        provider: &'static str,
        operation: &'static str,
    },

    /// A registry lookup named a provider that was never registered.
    #[error("unknown provider `{requested}` (known: {})", .known.join(", "))]
    UnknownProvider {
        requested: String,
        known: Vec<&'static str>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_implemented_names_provider_and_operation() {
        let err = DispatchError::NotImplemented {
            provider: "Robot",
            operation: "eat",
        };
        assert_eq!(err.to_string(), "provider `Robot` does not implement `eat`");
    }

    #[test]
    fn unknown_provider_lists_known_names() {
        let err = DispatchError::UnknownProvider {
            requested: "boat".to_string(),
            known: vec!["car", "taxi"],
        };
        assert_eq!(err.to_string(), "unknown provider `boat` (known: car, taxi)");
    }
}
