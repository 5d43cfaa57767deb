//! Pattern 1: Constructor Injection
//! Example: Swapping Notification Channels Without Touching the Service
//!
//! Run with: cargo run --example p1_notifications

use dependency_inversion_patterns::{EmailService, SMSService, UserService};

fn main() {
    // Usage: only this wiring code knows which channel is in play.
    println!("=== Email Channel ===");
    let service = UserService::new(EmailService);
    if let Err(e) = service.register_user("John Connor", "johnconnor@mail.com") {
        println!("registration failed: {e}");
    }

    println!("\n=== SMS Channel ===");
    let service = UserService::new(SMSService);
    if let Err(e) = service.register_user("John Doe", "johndoe@mail.com") {
        println!("registration failed: {e}");
    }

    println!("\n=== Key Points ===");
    println!("- UserService names only the MessageService contract");
    println!("- Swapping channels edits this file, not the service");
}
