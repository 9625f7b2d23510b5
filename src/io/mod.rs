/// CSV export for production summaries.
pub mod export;
