//! Core types shared across prettylog crates
//!
//! This crate provides the foundational constants used by the log facility
//! and its command-line front end:
//!
//! - **ANSI codes**: foreground, background and text-format escape sequences
//! - **Tags**: the fixed-width severity tags printed inside the brackets
//! - **Schema constants**: canonical field keys and event names for the
//!   facility's own diagnostics

pub mod ansi;
pub mod schema;
pub mod tags;

pub use ansi::RESET;
pub use tags::TAG_WIDTH;
