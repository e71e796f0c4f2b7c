//! Shared domain types for Hookshot.
//!
//! This crate contains the types used across the hookshot workspace:
//! the delivery record, endpoint configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, thiserror, and anyhow.

pub mod config;
pub mod delivery;
pub mod error;
