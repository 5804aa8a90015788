//! # Weekplan CLI Library
//!
//! Command definitions and collaborator wiring for the `weekplan` binary.

pub mod cli;
pub mod clients;
