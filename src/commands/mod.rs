//! Command handlers for the shortcut CLI

pub mod all_pairs;
pub mod cycle;
pub mod dispatch;
pub mod graph_file;
pub mod path;
pub mod show;
