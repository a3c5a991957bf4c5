//! Implements the end-to-end stratified split workflow.
//!
//! This module orchestrates the full pipeline: load the dataset, apply the
//! configured threshold filters, classify the stratification column, draw a
//! seeded stratified split, and write the train/validation partitions in the
//! format of the input file. Validation failures surface before any output
//! is written.

use crate::core::io::{self, TableFormat};
use crate::core::models::table::DataTable;
use crate::engine::config::SplitConfig;
use crate::engine::error::SplitError;
use crate::engine::filters::{FilterOutcome, ThresholdFilter};
use crate::engine::progress::{Progress, ProgressReporter, SplitWarning};
use crate::engine::splitter;
use crate::engine::stratify::{StratifyMode, StratifyPlan};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Summarizes how one threshold filter affected the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSummary {
    /// The filter that was applied.
    pub filter: ThresholdFilter,
    /// Whether the filter ran, and how many rows it removed.
    pub outcome: FilterOutcome,
}

/// The structured result of a completed split workflow.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// The detected table format, shared by the input and both outputs.
    pub format: TableFormat,
    /// How the stratification column was interpreted.
    pub mode: StratifyMode,
    /// Number of records in the input file.
    pub input_rows: usize,
    /// Number of records remaining after threshold filters.
    pub rows_after_filters: usize,
    /// Number of records written to the training partition.
    pub train_rows: usize,
    /// Number of records written to the validation partition.
    pub val_rows: usize,
    /// Records routed to training because their category could not be split.
    pub set_aside_rows: usize,
    /// Outcome of each configured threshold filter, in application order.
    pub filters: Vec<FilterSummary>,
    /// Non-fatal warnings raised during the run.
    pub warnings: Vec<SplitWarning>,
    /// Path of the written training partition.
    pub train_path: PathBuf,
    /// Path of the written validation partition.
    pub val_path: PathBuf,
}

/// Executes the stratified split workflow described by `config`.
///
/// # Arguments
///
/// * `config` - Validated parameters for the run.
/// * `reporter` - Sink for progress events and warnings.
///
/// # Return
///
/// Returns a [`SplitReport`] describing the written partitions.
///
/// # Errors
///
/// Returns a [`SplitError`] if the input format is unsupported, the dataset
/// cannot be read, the stratification column is absent, no rows survive the
/// filters, or a partition cannot be written.
#[instrument(skip_all, name = "split_workflow")]
pub fn run(config: &SplitConfig, reporter: &ProgressReporter) -> Result<SplitReport, SplitError> {
    // === Phase 1: Load the dataset ===
    reporter.report(Progress::PhaseStart { name: "Loading" });
    info!(input = %config.input_path.display(), "Loading dataset.");
    let format = TableFormat::from_path(&config.input_path)?;
    let mut table =
        io::read_table(format, &config.input_path).map_err(|source| SplitError::Read {
            path: config.input_path.clone(),
            source,
        })?;
    let input_rows = table.len();
    info!(
        rows = input_rows,
        columns = table.columns().len(),
        "Dataset loaded."
    );
    reporter.report(Progress::Message(format!("Loaded {input_rows} records.")));
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Apply threshold filters ===
    reporter.report(Progress::PhaseStart { name: "Filtering" });
    let mut warnings = Vec::new();
    let mut filters = Vec::new();
    for filter in config.threshold_filters() {
        let outcome = filter.apply(&mut table);
        match outcome {
            FilterOutcome::Applied { removed } => {
                info!(
                    column = %filter.column,
                    max = filter.max_value,
                    removed,
                    "Applied threshold filter."
                );
                reporter.report(Progress::Message(format!(
                    "Filter {} <= {}: removed {} records.",
                    filter.column, filter.max_value, removed
                )));
            }
            FilterOutcome::ColumnMissing => {
                let warning = SplitWarning::FilterColumnMissing {
                    column: filter.column.clone(),
                };
                warn!("{}", warning);
                reporter.report(Progress::Warning(warning.clone()));
                warnings.push(warning);
            }
        }
        filters.push(FilterSummary { filter, outcome });
    }
    let rows_after_filters = table.len();
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Classify the stratification column ===
    reporter.report(Progress::PhaseStart {
        name: "Stratifying",
    });
    let column_index =
        table
            .column_index(&config.stratify_by)
            .ok_or_else(|| SplitError::MissingColumn {
                column: config.stratify_by.clone(),
            })?;
    if table.is_empty() {
        return Err(SplitError::EmptyDataset);
    }
    let plan = StratifyPlan::prepare(&table, column_index);
    match plan.mode() {
        StratifyMode::Categorical => {
            info!(column = %config.stratify_by, "Stratifying on a categorical column.");
        }
        StratifyMode::Continuous { buckets } => {
            info!(
                column = %config.stratify_by,
                buckets,
                "Stratifying on a continuous column."
            );
            reporter.report(Progress::Message(format!(
                "Continuous column '{}': binned into {} buckets.",
                config.stratify_by, buckets
            )));
        }
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 4: Draw the seeded split ===
    reporter.report(Progress::PhaseStart { name: "Splitting" });
    let outcome = splitter::split(&table, &plan, config.val_size, config.seed, reporter);
    if outcome.set_aside_rows > 0 {
        let warning = SplitWarning::DegenerateCategories {
            categories: outcome.degenerate_categories,
            rows: outcome.set_aside_rows,
        };
        warn!("{}", warning);
        reporter.report(Progress::Warning(warning.clone()));
        warnings.push(warning);
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 5: Write the partitions ===
    reporter.report(Progress::PhaseStart { name: "Writing" });
    fs::create_dir_all(&config.output_dir)?;
    let train_path = partition_path(&config.output_dir, "train", format);
    let val_path = partition_path(&config.output_dir, "val", format);
    write_partition(&table, &outcome.train_indices, format, &train_path)?;
    write_partition(&table, &outcome.val_indices, format, &val_path)?;
    reporter.report(Progress::Message(format!(
        "train: {} records -> {}",
        outcome.train_indices.len(),
        train_path.display()
    )));
    reporter.report(Progress::Message(format!(
        "val: {} records -> {}",
        outcome.val_indices.len(),
        val_path.display()
    )));
    reporter.report(Progress::PhaseFinish);

    info!(
        train = outcome.train_indices.len(),
        val = outcome.val_indices.len(),
        set_aside = outcome.set_aside_rows,
        "Split complete."
    );

    Ok(SplitReport {
        format,
        mode: plan.mode(),
        input_rows,
        rows_after_filters,
        train_rows: outcome.train_indices.len(),
        val_rows: outcome.val_indices.len(),
        set_aside_rows: outcome.set_aside_rows,
        filters,
        warnings,
        train_path,
        val_path,
    })
}

fn partition_path(dir: &Path, stem: &str, format: TableFormat) -> PathBuf {
    dir.join(format!("{}.{}", stem, format.extension()))
}

fn write_partition(
    table: &DataTable,
    indices: &[usize],
    format: TableFormat,
    path: &Path,
) -> Result<(), SplitError> {
    let partition = table.select_rows(indices);
    io::write_table(&partition, format, path).map_err(|source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(rows = partition.len(), path = %path.display(), "Partition written.");
    Ok(())
}
