//! Shortcut Core Library
//!
//! Graph model and weighted shortest-path solvers for the shortcut CLI.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
