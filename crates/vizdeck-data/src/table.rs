//! Column-named, row-ordered tables.

use std::io;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::value::Datum;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Datum>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Datum>>) -> Result<Self> {
        if let Some(bad) = rows.iter().position(|r| r.len() != columns.len()) {
            return Err(DataError::Malformed {
                path: "<memory>".into(),
                reason: format!("row {bad} has {} fields, expected {}", rows[bad].len(), columns.len()),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Load a CSV file whose first column is an index.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| DataError::Csv {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let table = Self::from_reader(file, path)?;
        debug!("Loaded {:?}: {} rows, columns {:?}", path, table.len(), table.columns);
        Ok(table)
    }

    /// Parse CSV from any reader; `origin` is only used in error messages.
    pub fn from_reader<R: io::Read>(reader: R, origin: &Path) -> Result<Self> {
        let csv_err = |source| DataError::Csv { path: origin.to_path_buf(), source };
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr.headers().map_err(csv_err)?.clone();
        if headers.len() < 2 {
            return Err(DataError::Malformed {
                path: origin.to_path_buf(),
                reason: "expected an index column and at least one data column".into(),
            });
        }
        let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(csv_err)?;
            rows.push(record.iter().skip(1).map(Datum::parse).collect());
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Datum>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            self.column_index(name)?;
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> Result<Vec<&Datum>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Column as JSON values, ready to drop into a trace.
    pub fn values(&self, name: &str) -> Result<Vec<Value>> {
        Ok(self.column(name)?.into_iter().map(Datum::to_value).collect())
    }

    /// Rows satisfying `keep`, in their original order.
    pub fn filter(&self, keep: impl Fn(&[Datum]) -> bool) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Exact-match equality filter on one column.
    pub fn filter_eq(&self, column: &str, value: &Value) -> Result<Table> {
        let idx = self.column_index(column)?;
        Ok(self.filter(|row| row[idx].matches(value)))
    }

    /// Keep rows whose column matches any of `values`.
    pub fn filter_in(&self, column: &str, values: &[Value]) -> Result<Table> {
        let idx = self.column_index(column)?;
        Ok(self.filter(|row| values.iter().any(|v| row[idx].matches(v))))
    }

    /// Drop rows whose text column is one of `labels`.
    pub fn exclude_text(&self, column: &str, labels: &[&str]) -> Result<Table> {
        let idx = self.column_index(column)?;
        Ok(self.filter(|row| !row[idx].as_str().is_some_and(|s| labels.contains(&s))))
    }

    /// Distinct values of a column in order of first appearance.
    pub fn unique(&self, column: &str) -> Result<Vec<Datum>> {
        let idx = self.column_index(column)?;
        let mut seen: Vec<Datum> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row[idx]) {
                seen.push(row[idx].clone());
            }
        }
        Ok(seen)
    }

    /// Group by `by`, summing `value`. Groups keep first-appearance order;
    /// non-numeric values count as zero.
    pub fn group_sum(&self, by: &str, value: &str) -> Result<Vec<(Datum, f64)>> {
        let key_idx = self.column_index(by)?;
        let val_idx = self.column_index(value)?;
        let mut groups: Vec<(Datum, f64)> = Vec::new();
        for row in &self.rows {
            let amount = row[val_idx].as_f64().unwrap_or(0.0);
            match groups.iter_mut().find(|(k, _)| *k == row[key_idx]) {
                Some((_, total)) => *total += amount,
                None => groups.push((row[key_idx].clone(), amount)),
            }
        }
        Ok(groups)
    }

    pub fn mean(&self, column: &str) -> Result<Option<f64>> {
        let nums: Vec<f64> = self.column(column)?.into_iter().filter_map(Datum::as_f64).collect();
        if nums.is_empty() {
            return Ok(None);
        }
        Ok(Some(nums.iter().sum::<f64>() / nums.len() as f64))
    }

    /// Rows as `{column: value}` objects, for data tables.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(Datum::to_value))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const CSV: &str = "\
,country,year,value
0,A,2019,10
1,B,2019,30
2,A,2019,5
3,C,2018,7
";

    fn table() -> Table {
        Table::from_reader(CSV.as_bytes(), Path::new("test.csv")).unwrap()
    }

    #[test]
    fn test_index_column_is_dropped() {
        let t = table();
        assert_eq!(t.columns(), &["country", "year", "value"]);
        assert_eq!(t.len(), 4);
        assert_eq!(t.rows()[0][0], Datum::Text("A".into()));
    }

    #[test]
    fn test_ragged_rows_fail() {
        let bad = ",a,b\n0,1\n";
        assert!(matches!(
            Table::from_reader(bad.as_bytes(), Path::new("bad.csv")),
            Err(DataError::Csv { .. })
        ));
    }

    #[test]
    fn test_header_without_data_column_fails() {
        let bad = "index\n0\n";
        assert!(matches!(
            Table::from_reader(bad.as_bytes(), Path::new("bad.csv")),
            Err(DataError::Malformed { .. })
        ));
    }

    #[test]
    fn test_filter_eq_and_group_sum() {
        let t = table().filter_eq("year", &json!(2019)).unwrap();
        assert_eq!(t.len(), 3);
        let groups = t.group_sum("country", "value").unwrap();
        assert_eq!(groups, vec![(Datum::Text("A".into()), 15.0), (Datum::Text("B".into()), 30.0)]);
    }

    #[test]
    fn test_filter_in_keeps_row_order() {
        let t = table().filter_in("country", &[json!("C"), json!("A")]).unwrap();
        let countries: Vec<String> = t.column("country").unwrap().iter().map(|d| d.to_string()).collect();
        assert_eq!(countries, vec!["A", "A", "C"]);
    }

    #[test]
    fn test_unique_and_records() {
        let t = table();
        assert_eq!(t.unique("year").unwrap(), vec![Datum::Int(2019), Datum::Int(2018)]);
        assert_eq!(t.records()[1]["value"], json!(30));
        assert!(matches!(t.column("missing"), Err(DataError::MissingColumn(_))));
    }

    #[test]
    fn test_exclude_text_and_mean() {
        let t = table().exclude_text("country", &["A"]).unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.mean("value").unwrap(), Some(18.5));
    }
}
