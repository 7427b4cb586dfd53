//! Waypath Core Library
//!
//! Graph model, dataset loading and route search for the waypath tool.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;
