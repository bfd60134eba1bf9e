//! Integration test suite for recipe-cost
//!
//! End-to-end tests that build sites from YAML recipe documents through the
//! public API: assembly, propagation, presentation and the audit summary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **assembly**: scale expansion, grocery matching, recipe quantities,
//!   reference checks
//! - **propagation**: the cost/nutrition fixed point and cycle detection
//! - **output**: presentation values and the grocery audit
//! - **config**: site configuration loaded from disk

#[path = "../common/mod.rs"]
mod common;

mod assembly;
mod config;
mod output;
mod propagation;
