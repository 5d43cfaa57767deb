//! # Dependency Inversion
//!
//! `UserService` is the high-level module; email and SMS are details.
//! The service holds only the [`MessageService`] contract, supplied at
//! construction time. Swapping channels is a change to wiring code,
//! never to the service.
//!
//! Run examples with: `cargo run --example p1_notifications`

use capability_dispatch::Provider;
use thiserror::Error;

/// A channel may fail to deliver; registration propagates the failure.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotifyError {
    #[error("could not reach `{recipient}` via {channel}")]
    Unreachable {
        channel: &'static str,
        recipient: String,
    },
}

/// The abstraction both sides depend on.
pub trait MessageService: Provider {
    fn send_message(&self, recipient: &str, message: &str) -> Result<(), NotifyError>;
}

pub struct EmailService;

impl Provider for EmailService {
    fn provider_name(&self) -> &'static str {
        "email"
    }
}

impl MessageService for EmailService {
    fn send_message(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        println!("Sending email to {recipient}: {message}");
        Ok(())
    }
}

pub struct SMSService;

impl Provider for SMSService {
    fn provider_name(&self) -> &'static str {
        "sms"
    }
}

impl MessageService for SMSService {
    fn send_message(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        println!("Sending SMS to {recipient}: {message}");
        Ok(())
    }
}

/// High-level orchestrator. Never constructs or names a concrete
/// channel; behavior is invariant under substitution.
pub struct UserService<M: MessageService> {
    messenger: M,
}

impl<M: MessageService> UserService<M> {
    pub fn new(messenger: M) -> Self {
        UserService { messenger }
    }

    pub fn register_user(&self, username: &str, email: &str) -> Result<(), NotifyError> {
        self.messenger
            .send_message(email, &format!("Welcome, {username}!"))?;
        log::info!(
            "registered {username} via {}",
            self.messenger.provider_name()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Recording double for the channel, in place of a real transport.
    struct RecordingService {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl RecordingService {
        fn new() -> Self {
            RecordingService {
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Provider for RecordingService {
        fn provider_name(&self) -> &'static str {
            "recording"
        }
    }

    impl MessageService for RecordingService {
        fn send_message(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_string(), message.to_string()));
            Ok(())
        }
    }

    struct DeadService;

    impl Provider for DeadService {
        fn provider_name(&self) -> &'static str {
            "dead"
        }
    }

    impl MessageService for DeadService {
        fn send_message(&self, recipient: &str, _message: &str) -> Result<(), NotifyError> {
            Err(NotifyError::Unreachable {
                channel: "dead",
                recipient: recipient.to_string(),
            })
        }
    }

    #[test]
    fn registration_sends_exactly_one_welcome() {
        let service = UserService::new(RecordingService::new());

        service
            .register_user("John Doe", "johndoe@mail.com")
            .unwrap();

        let sent = service.messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "johndoe@mail.com");
        assert_eq!(sent[0].1, "Welcome, John Doe!");
    }

    #[test]
    fn any_channel_satisfies_the_orchestrator() {
        // Same orchestrator code, different providers, no branching.
        UserService::new(EmailService)
            .register_user("John Connor", "johnconnor@mail.com")
            .unwrap();
        UserService::new(SMSService)
            .register_user("John Doe", "johndoe@mail.com")
            .unwrap();
    }

    #[test]
    fn channel_failure_propagates_to_the_caller() {
        let service = UserService::new(DeadService);

        let err = service
            .register_user("John Doe", "johndoe@mail.com")
            .unwrap_err();

        assert_eq!(
            err,
            NotifyError::Unreachable {
                channel: "dead",
                recipient: "johndoe@mail.com".to_string(),
            }
        );
    }
}
