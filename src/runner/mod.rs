//! Loop runner module - drives the per-element execution loop.
//!
//! This module provides the core loop execution logic, including:
//! - Runner, the configurable loop driver
//! - fault isolation and warning capture around each step
//! - live progress and milestone output

mod loop_runner;

pub use loop_runner::Runner;
