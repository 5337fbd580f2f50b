//! Answer and display types

use crate::config::MAX_DISPLAY_PRECISION;
use girasol_index::FittedModel;
use serde::Serialize;

/// Confidence classification of the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Low,
}

impl Confidence {
    /// High only when `score` is strictly above `threshold`.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Confidence::High
        } else {
            Confidence::Low
        }
    }
}

/// Document-term weights labelled for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    pub row_labels: Vec<String>,
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl WeightTable {
    pub fn from_model(model: &FittedModel) -> Self {
        Self {
            row_labels: (1..=model.n_docs()).map(|i| format!("Doc {i}")).collect(),
            columns: model.vocabulary().to_vec(),
            values: model.matrix().to_vec(),
        }
    }

    /// Copy with every value rounded to `precision` decimals, capped at
    /// `MAX_DISPLAY_PRECISION`.
    pub fn rounded(&self, precision: usize) -> Self {
        let factor = 10f64.powi(precision.min(MAX_DISPLAY_PRECISION) as i32);
        Self {
            row_labels: self.row_labels.clone(),
            columns: self.columns.clone(),
            values: self
                .values
                .iter()
                .map(|row| row.iter().map(|v| (v * factor).round() / factor).collect())
                .collect(),
        }
    }

    /// Plain-text grid: one header line with the terms, one line per document.
    pub fn render(&self, precision: usize) -> String {
        let label_width = self.row_labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.chars().count().max(precision + 2))
            .collect();

        let mut out = format!("{:label_width$}", "");
        for (col, &w) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("  {col:>w$}"));
        }
        out.push('\n');

        for (label, row) in self.row_labels.iter().zip(&self.values) {
            out.push_str(&format!("{label:label_width$}"));
            for (v, &w) in row.iter().zip(&widths) {
                out.push_str(&format!("  {v:>w$.precision$}"));
            }
            out.push('\n');
        }
        out
    }
}

/// Best match for one question over one corpus
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub question: String,
    pub best_index: usize,
    pub best_document: String,
    pub score: f64,
    pub confidence: Confidence,
    pub scores: Vec<f64>,
    pub table: WeightTable,
}

impl Answer {
    /// False when nothing in the question overlapped the corpus vocabulary.
    pub fn usable_match(&self) -> bool {
        self.score > 0.0
    }
}
