//! # Gamedev Tools
//!
//! Two small, unrelated command-line utilities for game project
//! housekeeping, sharing a Cargo manifest and nothing else:
//!
//! | Binary | Module | Role |
//! |--------|--------|------|
//! | `sprite-cutter` | [`sheet`] | Slice a sprite sheet into evenly-spaced frames |
//! | `copyright-updater` | [`header`] | Rewrite the copyright header line across a source tree |
//!
//! # Design Decisions
//!
//! ## Library-First Binaries
//!
//! Each tool is a library module with a clap-derive `Cli` and a `run()`
//! entry point; the binaries under `src/bin/` only parse arguments and
//! render errors. Tests construct `Cli` values directly and drive `run()`
//! without spawning processes.
//!
//! ## Quiet Tools
//!
//! Success prints nothing. The only stdout either tool produces is a
//! one-line usage string when invoked with missing or unusable operands,
//! and that path exits 0. Non-zero exits are reserved for real failures
//! (unreadable images, undecodable files, I/O errors).
//!
//! ## Pure Cores, Thin I/O
//!
//! The slicing plan ([`sheet::plan`]) and the header rewrite rule
//! ([`header::rewrite`]) are pure functions, unit-tested without touching
//! the filesystem; the I/O wrappers around them stay small enough to be
//! exercised end-to-end against temp directories.

pub mod header;
pub mod sheet;
