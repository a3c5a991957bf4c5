//! # Workflows Module
//!
//! This module provides the high-level entry points of matsplit.
//!
//! ## Overview
//!
//! Workflows tie the `core` and `engine` layers together into complete
//! procedures. They own resource loading, validation order, progress
//! reporting, and output writing, so callers get a single function with a
//! structured result instead of wiring the pieces themselves.
//!
//! - **Split Workflow** ([`split`]) - Load a dataset, apply threshold
//!   filters, stratify, split, and write the train/validation partitions.

pub mod split;
