//! Consolidated test utilities for the REN Data Hub CSV exporter.
//!
//! This module provides canned configurations, upstream payload fixtures,
//! mock Data Hub servers, and a log capture writer used throughout the
//! test suite.

#![cfg(test)]

pub mod fixtures;
pub mod logging;
