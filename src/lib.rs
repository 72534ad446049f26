pub mod git;
pub mod process;

// Re-export commonly used types
pub use process::{ProcessExecutor, ProcessFailure, SystemExecutor};
