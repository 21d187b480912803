// Handler modules
pub mod analyze;
pub mod tool;

// Re-export all handler functions
pub use analyze::{AnalyzeOutcome, handle_analyze, read_input};
pub use tool::handle_tool;
