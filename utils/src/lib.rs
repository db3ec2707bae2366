//! Shared utilities for the CampusDesk project.
//!
//! This crate contains utility functions and types that are shared
//! across multiple crates in the workspace.

pub mod version_info;
