//! Memory puzzle (workspace facade crate).
//!
//! Re-exports the workspace crates as `memory_puzzle::{core,input,term,types}`
//! and hosts the binary's command-line configuration and per-frame glue.

pub mod config;
pub mod frame;

pub use memory_puzzle_core as core;
pub use memory_puzzle_input as input;
pub use memory_puzzle_term as term;
pub use memory_puzzle_types as types;
