//! # Core Module
//!
//! This module provides the fundamental building blocks for representing and
//! exchanging tabular datasets in matsplit, serving as the foundation the
//! split engine operates on.
//!
//! ## Overview
//!
//! Datasets arrive as flat files (JSON Lines or delimited text), are held in
//! memory as schema-uniform tables, and leave as flat files again. The core
//! module owns that whole surface: the cell and table data model, format
//! detection, and the codecs for each supported format.
//!
//! ## Architecture
//!
//! - **Tabular Representation** ([`models`]) - Cell values and the
//!   schema-uniform [`models::table::DataTable`]
//! - **File I/O** ([`io`]) - Extension-based format detection and the
//!   JSON Lines / delimited-text codecs behind a common trait

pub mod io;
pub mod models;
