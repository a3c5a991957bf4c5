//! # matsplit Core Library
//!
//! A library for stratified train/validation splitting of tabular
//! materials-science datasets, built for high-throughput screening corpora
//! where per-category balance between partitions matters more than raw
//! sampling speed.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless data model
//!   ([`core::models::table::DataTable`], [`core::models::value::Value`]) and
//!   format-aware table I/O for JSON Lines and delimited text.
//!
//! - **[`engine`]: The Logic Core.** This layer holds the split machinery:
//!   threshold filters, stratification-key derivation (categorical values or
//!   equal-width buckets over a continuous column), and the seeded
//!   partitioner that assigns every record to train or validation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. [`workflows::split::run`] ties the `engine` and
//!   `core` together to execute the complete load/filter/stratify/split/write
//!   procedure and returns a structured report of what happened.

pub mod core;
pub mod engine;
pub mod workflows;
