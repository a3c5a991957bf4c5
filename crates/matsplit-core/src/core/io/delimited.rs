use super::traits::TabularFile;
use crate::core::models::table::DataTable;
use crate::core::models::value::Value;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DelimitedError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}

/// The delimited-text table codec (comma-separated, first row is the header).
///
/// CSV carries no type information, so cell types are guessed on read:
/// integer first, then float, then boolean, otherwise text. Empty fields and
/// missing values map to each other in both directions.
pub struct DelimitedFile;

impl TabularFile for DelimitedFile {
    type Error = DelimitedError;

    fn read_from(reader: &mut impl BufRead) -> Result<DataTable, Self::Error> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let columns: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut table = DataTable::new(columns);
        for result in csv_reader.records() {
            let record = result?;
            table.push_row(record.iter().map(guess_value).collect());
        }
        Ok(table)
    }

    fn write_to(table: &DataTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(table.columns())?;
        for row in table.rows() {
            let fields: Vec<String> = row.iter().map(format_field).collect();
            csv_writer.write_record(&fields)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

fn guess_value(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = field.parse::<i64>() {
        return Value::Integer(int);
    }
    if let Ok(float) = field.parse::<f64>() {
        return Value::Float(float);
    }
    if let Ok(boolean) = field.parse::<bool>() {
        return Value::Bool(boolean);
    }
    Value::Text(field.to_string())
}

fn format_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        // NaN is the missing-value marker in numeric columns.
        Value::Float(f) if f.is_nan() => String::new(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Nested(v) => v.to_string(),
    }
}
