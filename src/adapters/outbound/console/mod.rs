/// Console adapters for terminal interaction
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
