//! Temperature-vs-time table.

use std::path::Path;

use crate::{ResultsError, ResultsResult};

/// One recorded run: a time column plus one temperature column per node, in
/// network insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureTable {
    node_names: Vec<String>,
    times_s: Vec<f64>,
    /// One row per time point, one entry per node.
    rows: Vec<Vec<f64>>,
}

impl TemperatureTable {
    pub fn new(
        node_names: Vec<String>,
        times_s: Vec<f64>,
        rows: Vec<Vec<f64>>,
    ) -> ResultsResult<Self> {
        if times_s.len() != rows.len() {
            return Err(ResultsError::ShapeMismatch {
                what: format!("{} time points but {} rows", times_s.len(), rows.len()),
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != node_names.len() {
                return Err(ResultsError::ShapeMismatch {
                    what: format!(
                        "row {} has {} values for {} nodes",
                        i,
                        row.len(),
                        node_names.len()
                    ),
                });
            }
        }
        Ok(Self {
            node_names,
            times_s,
            rows,
        })
    }

    pub fn node_names(&self) -> &[String] {
        &self.node_names
    }

    pub fn times_s(&self) -> &[f64] {
        &self.times_s
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Render as CSV with header `time_s,<node names...>`.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("time_s");
        for name in &self.node_names {
            csv.push(',');
            csv.push_str(name);
        }
        csv.push('\n');
        for (t, row) in self.times_s.iter().zip(&self.rows) {
            csv.push_str(&format!("{}", t));
            for temp in row {
                csv.push_str(&format!(",{}", temp));
            }
            csv.push('\n');
        }
        csv
    }

    pub fn write_csv(&self, path: &Path) -> ResultsResult<()> {
        std::fs::write(path, self.to_csv())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout_matches_header_and_rows() {
        let table = TemperatureTable::new(
            vec!["0_4K".to_string(), "1_4K".to_string()],
            vec![0.0, 20.0],
            vec![vec![300.0, 300.0], vec![299.5, 299.75]],
        )
        .unwrap();

        let csv = table.to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("time_s,0_4K,1_4K"));
        assert_eq!(lines.next(), Some("0,300,300"));
        assert_eq!(lines.next(), Some("20,299.5,299.75"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let err = TemperatureTable::new(
            vec!["a".to_string()],
            vec![0.0, 1.0],
            vec![vec![300.0]],
        );
        assert!(err.is_err());

        let err = TemperatureTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![0.0],
            vec![vec![300.0]],
        );
        assert!(err.is_err());
    }

    #[test]
    fn write_csv_roundtrip() {
        let table = TemperatureTable::new(
            vec!["n".to_string()],
            vec![0.0],
            vec![vec![300.0]],
        )
        .unwrap();
        let path = std::env::temp_dir().join("cryo_results_table.csv");
        table.write_csv(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, table.to_csv());
    }
}
