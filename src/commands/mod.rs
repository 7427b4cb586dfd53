//! CLI commands for waypath

pub mod dispatch;
pub mod search;
