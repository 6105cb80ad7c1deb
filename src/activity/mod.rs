// src/activity/mod.rs
// =============================================================================
// This module turns decoded events into what the user reads.
//
// Submodules:
// - format: One event -> one sentence
// - print: The whole feed -> header + bullet list on stdout
// =============================================================================

mod format;
mod print;

pub use print::print_activity;
