//! # Core Models Module
//!
//! This module contains the data structures used to represent tabular
//! datasets in matsplit.
//!
//! ## Overview
//!
//! A dataset is modeled as a [`table::DataTable`]: an ordered column schema
//! plus rows of [`value::Value`] cells, with every row exactly as wide as the
//! schema. The model is deliberately small and format-agnostic so that the
//! same filtering and stratification code runs unchanged on JSON Lines and
//! delimited-text inputs.
//!
//! ## Key Components
//!
//! - [`value`] - The scalar cell value, with numeric coercion and
//!   missing-value semantics
//! - [`table`] - The schema-uniform table, plus a builder that unions
//!   heterogeneous record schemas in first-appearance order

pub mod table;
pub mod value;
