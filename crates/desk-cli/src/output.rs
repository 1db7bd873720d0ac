//! Console output formatting

use clap::ValueEnum;
use desk_report::{summary_report, Analytics};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Executive text summary
    Text,
    /// Full analytics as JSON
    Json,
}

impl OutputFormat {
    pub fn print(&self, analytics: &Analytics) {
        match self {
            OutputFormat::Text => print!("{}", summary_report(analytics)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(analytics).unwrap_or_default()
                );
            }
        }
    }
}
