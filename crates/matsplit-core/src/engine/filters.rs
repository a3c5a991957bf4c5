use crate::core::models::table::DataTable;
use crate::core::models::value::Value;

/// Drops every record whose value in `column` exceeds `max_value`.
///
/// Records whose cell is missing or not numeric fail the comparison and are
/// dropped too: a record only survives an active filter when its value is
/// known to be within the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdFilter {
    pub column: String,
    pub max_value: f64,
}

/// What applying a filter to a table did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The filter ran and removed this many records.
    Applied { removed: usize },
    /// The table has no such column; nothing was removed.
    ColumnMissing,
}

impl ThresholdFilter {
    pub fn new(column: impl Into<String>, max_value: f64) -> Self {
        Self {
            column: column.into(),
            max_value,
        }
    }

    pub fn apply(&self, table: &mut DataTable) -> FilterOutcome {
        let Some(index) = table.column_index(&self.column) else {
            return FilterOutcome::ColumnMissing;
        };
        let max = self.max_value;
        let removed = table.retain_rows(|row| passes(&row[index], max));
        FilterOutcome::Applied { removed }
    }
}

fn passes(value: &Value, max: f64) -> bool {
    // NaN compares false here, so NaN cells are dropped like nulls.
    value.as_f64().is_some_and(|v| v <= max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_sites(values: Vec<Value>) -> DataTable {
        let mut table = DataTable::new(vec!["id".into(), "num_sites".into()]);
        for (i, value) in values.into_iter().enumerate() {
            table.push_row(vec![Value::Integer(i as i64), value]);
        }
        table
    }

    #[test]
    fn removes_records_above_the_threshold_and_keeps_equal_ones() {
        let mut table = table_with_sites(vec![
            Value::Integer(4),
            Value::Integer(64),
            Value::Integer(65),
            Value::Float(63.5),
        ]);
        let outcome = ThresholdFilter::new("num_sites", 64.0).apply(&mut table);

        assert_eq!(outcome, FilterOutcome::Applied { removed: 1 });
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn missing_column_leaves_the_table_untouched() {
        let mut table = table_with_sites(vec![Value::Integer(4)]);
        let outcome = ThresholdFilter::new("energy_above_hull", 0.1).apply(&mut table);

        assert_eq!(outcome, FilterOutcome::ColumnMissing);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn non_numeric_and_missing_cells_are_dropped() {
        let mut table = table_with_sites(vec![
            Value::Integer(10),
            Value::Null,
            Value::Float(f64::NAN),
            Value::Text("many".into()),
        ]);
        let outcome = ThresholdFilter::new("num_sites", 64.0).apply(&mut table);

        assert_eq!(outcome, FilterOutcome::Applied { removed: 3 });
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0][1], Value::Integer(10));
    }
}
