use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::property_dictionary;
use crate::errors::Result;

/// Rows of values under named columns, built from a slice of structs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl DataTable {
    /// One column per serialized field and one row per item.
    ///
    /// Columns appear in field order, with fields first seen in later items
    /// appended. Cells for fields an item does not have are `null`.
    pub fn from_items<T: Serialize>(name: &str, items: &[T]) -> Result<Self> {
        let records = items
            .iter()
            .map(|item| property_dictionary(item))
            .collect::<Result<Vec<_>>>()?;

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column called `name`, compared case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    /// Value in `row` under the column called `column`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|cells| cells.get(index))
    }

    /// Rebuilds one `T` per row. `null` cells are left out, so the target's
    /// defaults apply to them.
    pub fn to_list<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.rows
            .iter()
            .map(|cells| {
                let record: Map<String, Value> = self
                    .columns
                    .iter()
                    .zip(cells)
                    .filter(|(_, value)| !value.is_null())
                    .map(|(column, value)| (column.clone(), value.clone()))
                    .collect();
                Ok(serde_json::from_value(Value::Object(record))?)
            })
            .collect()
    }
}
