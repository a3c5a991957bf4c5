use super::progress::{Progress, ProgressReporter};
use super::stratify::{StratKey, StratifyPlan};
use crate::core::models::table::DataTable;
use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};
use std::collections::BTreeMap;
use tracing::debug;

/// Row assignment produced by [`split`].
///
/// Indices refer to rows of the input table. Within each partition the
/// stratified rows appear in input order; rows that were set aside
/// (degenerate categories and missing stratification values) are appended to
/// the end of the training partition, also in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub train_indices: Vec<usize>,
    pub val_indices: Vec<usize>,
    /// Rows routed to train because they could not be stratified.
    pub set_aside_rows: usize,
    /// Distinct groups those rows came from. Rows with a missing
    /// stratification value count as one group here.
    pub degenerate_categories: usize,
}

/// Performs the seeded stratified split.
///
/// Records are grouped by stratification key. Groups with fewer than two
/// members cannot appear in both partitions and are set aside to train,
/// together with records that have no key. Every remaining group is visited
/// in key order, shuffled with an RNG seeded from `seed`, and contributes
/// `round(len * val_size)` records to validation, clamped so both partitions
/// receive at least one record per group. The whole assignment is a pure
/// function of the table, the plan, `val_size`, and `seed`.
pub fn split(
    table: &DataTable,
    plan: &StratifyPlan,
    val_size: f64,
    seed: u64,
    reporter: &ProgressReporter,
) -> SplitOutcome {
    let mut groups: BTreeMap<StratKey, Vec<usize>> = BTreeMap::new();
    let mut set_aside: Vec<usize> = Vec::new();
    for (row_index, value) in table.column_values(plan.column_index()).enumerate() {
        match plan.key_for(value) {
            Some(key) => groups.entry(key).or_default().push(row_index),
            None => set_aside.push(row_index),
        }
    }

    let missing_rows = set_aside.len();
    let mut degenerate_categories = usize::from(missing_rows > 0);
    let mut eligible: Vec<Vec<usize>> = Vec::new();
    for members in groups.into_values() {
        if members.len() < 2 {
            degenerate_categories += 1;
            set_aside.extend(members);
        } else {
            eligible.push(members);
        }
    }
    debug!(
        eligible_categories = eligible.len(),
        set_aside = set_aside.len(),
        "Grouped records by stratification key."
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::new();
    let mut val_indices = Vec::new();
    reporter.report(Progress::TaskStart {
        total_steps: eligible.len() as u64,
    });
    for mut members in eligible {
        members.shuffle(&mut rng);
        let group_size = members.len();
        let val_count =
            ((group_size as f64 * val_size).round() as usize).clamp(1, group_size - 1);
        val_indices.extend(members.drain(..val_count));
        train_indices.extend(members);
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    train_indices.sort_unstable();
    val_indices.sort_unstable();
    set_aside.sort_unstable();
    let set_aside_rows = set_aside.len();
    train_indices.extend(set_aside);

    SplitOutcome {
        train_indices,
        val_indices,
        set_aside_rows,
        degenerate_categories,
    }
}
