//! Load curve table parsing.

use std::path::Path;

use crate::error::{PtcError, PtcResult};

/// One sampled operating point of the cooler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadSample {
    pub t1_k: f64,
    pub t2_k: f64,
    pub load_1_w: f64,
    pub load_2_w: f64,
}

/// The full sampled load curve, in file row order.
#[derive(Debug, Clone)]
pub struct LoadCurveTable {
    samples: Vec<LoadSample>,
}

const HEADER: [&str; 4] = ["T1", "T2", "load_1", "load_2"];

impl LoadCurveTable {
    pub fn from_csv_path(path: &Path) -> PtcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_csv_str(&text)
    }

    /// Parse `T1,T2,load_1,load_2` rows under the mandatory header line.
    pub fn from_csv_str(text: &str) -> PtcResult<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());

        let (_, header) = lines.next().ok_or(PtcError::Empty)?;
        let fields: Vec<&str> = header.split(',').map(str::trim).collect();
        if fields != HEADER {
            return Err(PtcError::BadHeader {
                found: header.trim().to_string(),
            });
        }

        let mut samples = Vec::new();
        for (i, raw) in lines {
            let line = i + 1;
            let cols: Vec<&str> = raw.split(',').map(str::trim).collect();
            if cols.len() != 4 {
                return Err(PtcError::MalformedRow {
                    line,
                    reason: format!("expected 4 columns, found {}", cols.len()),
                });
            }
            let mut vals = [0.0_f64; 4];
            for (v, col) in vals.iter_mut().zip(&cols) {
                *v = col.parse().map_err(|_| PtcError::MalformedRow {
                    line,
                    reason: format!("bad number {col:?}"),
                })?;
            }
            samples.push(LoadSample {
                t1_k: vals[0],
                t2_k: vals[1],
                load_1_w: vals[2],
                load_2_w: vals[3],
            });
        }

        if samples.len() < 3 {
            return Err(PtcError::TooFewSamples {
                count: samples.len(),
            });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[LoadSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
