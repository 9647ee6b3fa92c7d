/// Scan command handlers
pub mod scan;
