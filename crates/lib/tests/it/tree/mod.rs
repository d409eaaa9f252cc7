//! Tree integration tests
//!
//! Tests are organized by concern: path access, structural mutation, view
//! modes and storage sharing, and hashing/serialization.

mod mutation_tests;
mod view_tests;
