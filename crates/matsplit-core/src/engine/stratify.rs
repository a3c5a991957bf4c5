use crate::core::models::table::DataTable;
use crate::core::models::value::Value;
use ordered_float::OrderedFloat;
use std::collections::BTreeSet;
use tracing::debug;

/// A numeric column with more distinct values than this is treated as
/// continuous and bucketed instead of being used as categories directly.
pub const CONTINUOUS_UNIQUE_THRESHOLD: usize = 100;

/// Upper bound on the number of equal-width buckets for continuous columns.
pub const MAX_BUCKETS: usize = 50;

/// How the stratification column is read when grouping records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StratifyMode {
    /// Each distinct value is its own category.
    Categorical,
    /// Values are mapped to equal-width buckets over the column's range.
    Continuous { buckets: usize },
}

/// The grouping key derived from one record's stratification cell.
///
/// Keys are totally ordered so that category traversal is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StratKey {
    Bucket(usize),
    Bool(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

/// The classification of a stratification column, fixed once per split.
///
/// [`StratifyPlan::prepare`] scans the column a single time to decide the
/// mode; [`StratifyPlan::key_for`] then derives keys without re-inspecting
/// the table.
#[derive(Debug, Clone, PartialEq)]
pub struct StratifyPlan {
    mode: StratifyMode,
    column_index: usize,
    numeric: bool,
    range: Option<(f64, f64)>,
}

impl StratifyPlan {
    /// Classifies the column at `column_index`.
    ///
    /// A column is numeric when every non-missing cell is an integer or a
    /// float. Numeric columns with more than [`CONTINUOUS_UNIQUE_THRESHOLD`]
    /// distinct values are continuous; everything else is categorical. The
    /// bucket count for continuous columns follows Sturges' rule over the
    /// current row count, capped at [`MAX_BUCKETS`].
    pub fn prepare(table: &DataTable, column_index: usize) -> Self {
        let mut numeric = true;
        let mut distinct = BTreeSet::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for value in table.column_values(column_index) {
            if value.is_missing() {
                continue;
            }
            match value.as_f64() {
                Some(v) => {
                    distinct.insert(OrderedFloat(v));
                    min = min.min(v);
                    max = max.max(v);
                }
                None => {
                    numeric = false;
                    break;
                }
            }
        }

        let mode = if numeric && distinct.len() > CONTINUOUS_UNIQUE_THRESHOLD {
            StratifyMode::Continuous {
                buckets: sturges_bucket_count(table.len()),
            }
        } else {
            StratifyMode::Categorical
        };
        let range = match mode {
            StratifyMode::Continuous { .. } => Some((min, max)),
            StratifyMode::Categorical => None,
        };

        match mode {
            StratifyMode::Continuous { buckets } => debug!(
                distinct = distinct.len(),
                buckets, "Stratification column classified as continuous."
            ),
            StratifyMode::Categorical => {
                debug!(numeric, "Stratification column classified as categorical.")
            }
        }

        Self {
            mode,
            column_index,
            numeric,
            range,
        }
    }

    pub fn mode(&self) -> StratifyMode {
        self.mode
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    /// Derives the grouping key for one cell, or `None` when the cell cannot
    /// be stratified (missing value).
    ///
    /// In numeric columns, integer and float spellings of the same number
    /// canonicalize to the same key.
    pub fn key_for(&self, value: &Value) -> Option<StratKey> {
        if value.is_missing() {
            return None;
        }
        match self.mode {
            StratifyMode::Continuous { buckets } => {
                let v = value.as_f64()?;
                let (min, max) = self.range?;
                Some(StratKey::Bucket(bucket_index(v, min, max, buckets)))
            }
            StratifyMode::Categorical => {
                if self.numeric {
                    value.as_f64().map(|v| StratKey::Float(OrderedFloat(v)))
                } else {
                    match value {
                        Value::Bool(b) => Some(StratKey::Bool(*b)),
                        Value::Integer(i) => Some(StratKey::Integer(*i)),
                        Value::Float(f) => Some(StratKey::Float(OrderedFloat(*f))),
                        Value::Text(s) => Some(StratKey::Text(s.clone())),
                        Value::Nested(v) => Some(StratKey::Text(v.to_string())),
                        Value::Null => None,
                    }
                }
            }
        }
    }
}

/// Sturges' rule: `ceil(1 + 3.322 * ln(n))`, clamped to `[1, MAX_BUCKETS]`.
pub fn sturges_bucket_count(row_count: usize) -> usize {
    let raw = (1.0 + 3.322 * (row_count as f64).ln()).ceil();
    (raw as usize).clamp(1, MAX_BUCKETS)
}

/// Maps a value into one of `buckets` equal-width bins over `[min, max]`.
/// The final bin is closed so that `max` itself lands inside it.
fn bucket_index(value: f64, min: f64, max: f64, buckets: usize) -> usize {
    if buckets <= 1 || !(max > min) {
        return 0;
    }
    let width = (max - min) / buckets as f64;
    let index = ((value - min) / width) as usize;
    index.min(buckets - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_for(values: Vec<Value>) -> StratifyPlan {
        let mut table = DataTable::new(vec!["k".into()]);
        for v in values {
            table.push_row(vec![v]);
        }
        StratifyPlan::prepare(&table, 0)
    }

    #[test]
    fn sturges_matches_the_formula() {
        assert_eq!(sturges_bucket_count(1), 1);
        assert_eq!(sturges_bucket_count(2), 4);
        assert_eq!(sturges_bucket_count(10), 9);
        assert_eq!(sturges_bucket_count(101), 17);
    }

    #[test]
    fn sturges_is_capped_at_fifty_buckets() {
        assert_eq!(sturges_bucket_count(3_000_000), MAX_BUCKETS);
        assert_eq!(sturges_bucket_count(usize::MAX / 2), MAX_BUCKETS);
    }

    #[test]
    fn text_columns_are_categorical() {
        let plan = plan_for(vec![
            Value::Text("Fe-O".into()),
            Value::Text("Na-Cl".into()),
        ]);
        assert_eq!(plan.mode(), StratifyMode::Categorical);
        assert_eq!(
            plan.key_for(&Value::Text("Fe-O".into())),
            Some(StratKey::Text("Fe-O".into()))
        );
    }

    #[test]
    fn numeric_columns_go_continuous_only_above_the_distinct_threshold() {
        let hundred = (0..100).map(Value::Integer).collect::<Vec<_>>();
        assert_eq!(plan_for(hundred).mode(), StratifyMode::Categorical);

        let hundred_one = (0..101).map(Value::Integer).collect::<Vec<_>>();
        assert_eq!(
            plan_for(hundred_one).mode(),
            StratifyMode::Continuous { buckets: 17 }
        );
    }

    #[test]
    fn distinct_values_decide_the_mode_not_row_count() {
        let repeated = (0..150)
            .map(|i| Value::Integer(i % 3))
            .collect::<Vec<_>>();
        assert_eq!(plan_for(repeated).mode(), StratifyMode::Categorical);
    }

    #[test]
    fn mixed_columns_fall_back_to_categorical() {
        let mut values: Vec<Value> = (0..150).map(Value::Integer).collect();
        values.push(Value::Text("unknown".into()));
        assert_eq!(plan_for(values).mode(), StratifyMode::Categorical);
    }

    #[test]
    fn integer_and_float_spellings_share_a_key_in_numeric_columns() {
        let plan = plan_for(vec![
            Value::Integer(1),
            Value::Float(1.0),
            Value::Integer(2),
        ]);
        assert_eq!(
            plan.key_for(&Value::Integer(1)),
            plan.key_for(&Value::Float(1.0))
        );
        assert_ne!(
            plan.key_for(&Value::Integer(1)),
            plan.key_for(&Value::Integer(2))
        );
    }

    #[test]
    fn missing_cells_have_no_key() {
        let plan = plan_for(vec![Value::Integer(1), Value::Null]);
        assert_eq!(plan.key_for(&Value::Null), None);
        assert_eq!(plan.key_for(&Value::Float(f64::NAN)), None);
    }

    #[test]
    fn continuous_keys_cover_the_range_inclusively() {
        let values = (0..150).map(|i| Value::Float(i as f64)).collect::<Vec<_>>();
        let plan = plan_for(values);
        let StratifyMode::Continuous { buckets } = plan.mode() else {
            panic!("expected a continuous plan");
        };

        assert_eq!(plan.key_for(&Value::Float(0.0)), Some(StratKey::Bucket(0)));
        assert_eq!(
            plan.key_for(&Value::Float(149.0)),
            Some(StratKey::Bucket(buckets - 1))
        );
        for i in 0..150 {
            let Some(StratKey::Bucket(b)) = plan.key_for(&Value::Float(i as f64)) else {
                panic!("expected a bucket key");
            };
            assert!(b < buckets);
        }
    }

    #[test]
    fn bucket_index_handles_degenerate_ranges() {
        assert_eq!(bucket_index(7.0, 7.0, 7.0, 10), 0);
        assert_eq!(bucket_index(3.0, 0.0, 10.0, 1), 0);
        assert_eq!(bucket_index(5.0, 0.0, 10.0, 2), 1);
    }
}
