//! Property tests for buildprep.
//!
//! Randomized inputs guard invariants like "never panics" and
//! "install always precedes collect".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/env_file.rs"]
mod env_file;

#[path = "properties/plan_order.rs"]
mod plan_order;

#[path = "properties/shell_quote.rs"]
mod shell_quote;
