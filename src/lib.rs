//! shardwalk (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and hosts the pieces that
//! only the binary needs: environment configuration and the event journal.

pub mod config;
pub mod journal;

pub use shardwalk_core as core;
pub use shardwalk_input as input;
pub use shardwalk_term as term;
pub use shardwalk_types as types;
