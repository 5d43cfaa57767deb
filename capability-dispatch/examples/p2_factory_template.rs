//! Pattern 2: Factory Method Template
//! Example: Fixed Template Around an Overridable Creation Step
//!
//! Run with: cargo run --example p2_factory_template

use capability_dispatch::ProviderFactory;

trait Report {
    fn body(&self) -> String;
}

struct DailyReport;

impl Report for DailyReport {
    fn body(&self) -> String {
        "daily numbers".to_string()
    }
}

struct WeeklyReport;

impl Report for WeeklyReport {
    fn body(&self) -> String {
        "weekly summary".to_string()
    }
}

// The fixed half: every report creator publishes the same way.
// Only the creation step varies per concrete creator.
trait ReportCreator: ProviderFactory<Provider = Box<dyn Report>> {
    fn publish(&self) -> String {
        let report = self.create();
        format!("published: {}", report.body())
    }
}

impl<T: ProviderFactory<Provider = Box<dyn Report>>> ReportCreator for T {}

struct DailyReportCreator;

impl ProviderFactory for DailyReportCreator {
    type Provider = Box<dyn Report>;

    fn create(&self) -> Self::Provider {
        Box::new(DailyReport)
    }
}

struct WeeklyReportCreator;

impl ProviderFactory for WeeklyReportCreator {
    type Provider = Box<dyn Report>;

    fn create(&self) -> Self::Provider {
        Box::new(WeeklyReport)
    }
}

fn client_code(creator: &dyn ReportCreator) {
    println!("{}", creator.publish());
}

fn main() {
    // Usage: adding a report variant adds two types and edits nothing.
    println!("=== Daily ===");
    client_code(&DailyReportCreator);

    println!("\n=== Weekly ===");
    client_code(&WeeklyReportCreator);

    println!("\n=== Key Points ===");
    println!("- publish() is never overridden; create() always is");
    println!("- The template sees only the contract, never the concrete report");
}
