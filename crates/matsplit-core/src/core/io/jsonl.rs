use super::traits::TabularFile;
use crate::core::models::table::{DataTable, DataTableBuilder};
use crate::core::models::value::Value;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonlError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One parsed JSON Lines record with its fields in source order.
///
/// A plain `serde_json` map would re-sort the keys, so the record is
/// deserialized through a visitor that keeps them in the order the line
/// spelled them. Schema union across records then happens by first
/// appearance.
struct RawRecord(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RawRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = RawRecord;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object, one record per line")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    fields.push(entry);
                }
                Ok(RawRecord(fields))
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Borrowed view of one table row, serialized as an object in schema order.
struct RecordRef<'a> {
    columns: &'a [String],
    row: &'a [Value],
}

impl Serialize for RecordRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.columns.iter().zip(self.row) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The JSON Lines table codec: one JSON object per line.
pub struct JsonlFile;

impl TabularFile for JsonlFile {
    type Error = JsonlError;

    fn read_from(reader: &mut impl BufRead) -> Result<DataTable, Self::Error> {
        let mut builder = DataTableBuilder::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record: RawRecord =
                serde_json::from_str(&line).map_err(|source| JsonlError::Parse {
                    line: number + 1,
                    source,
                })?;
            builder.push_record(record.0);
        }
        Ok(builder.build())
    }

    fn write_to(table: &DataTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        for row in table.rows() {
            let record = RecordRef {
                columns: table.columns(),
                row,
            };
            serde_json::to_writer(&mut *writer, &record)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
