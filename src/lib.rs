// lib.rs - Root module for the pg_constraint_tests library
//
// This file defines the structure of our test library.
// In Rust, when you have a lib.rs, you can organize code into modules
// and then use those modules in your test binaries.

/// Database connection settings read from the environment
pub mod config;

/// Error types: fixture failures and constraint-violation classification
pub mod error;

/// The fixtures module contains reusable table definitions and schema setup
pub mod fixtures;
