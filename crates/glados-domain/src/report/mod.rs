mod aggregator;
mod render;

pub use aggregator::{missing_credentials_message, ReportAggregator, RunSummary};
pub use render::{render_body, render_block};
