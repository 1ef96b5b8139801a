// Presentation layer - Text output for the status display
pub mod output;
