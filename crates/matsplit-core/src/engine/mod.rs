//! # Engine Module
//!
//! This module implements the split machinery of matsplit: everything between
//! a loaded table and the final train/validation row assignment.
//!
//! ## Overview
//!
//! The engine turns a configured split request into a deterministic
//! partition. It prunes rows through threshold filters, decides how the
//! stratification column should be read (categorical values or equal-width
//! buckets over a continuous range), derives a grouping key per record, and
//! draws the validation subset per group with a seeded RNG.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Split parameters, defaults, and the
//!   validating builder
//! - **Filters** ([`filters`]) - Upper-bound threshold filters over numeric
//!   columns
//! - **Stratification** ([`stratify`]) - Column-kind inference, bucket-count
//!   selection, and grouping-key derivation
//! - **Partitioning** ([`splitter`]) - The seeded per-category split and
//!   degenerate-category set-aside
//! - **Progress Monitoring** ([`progress`]) - Progress events and
//!   non-fatal warnings surfaced to the caller
//! - **Error Handling** ([`error`]) - Engine-level error types

pub mod config;
pub mod error;
pub mod filters;
pub mod progress;
pub mod splitter;
pub mod stratify;
