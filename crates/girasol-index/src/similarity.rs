//! Cosine similarity ranking

use tracing::debug;

/// Outcome of scoring one query against every document row.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub best_index: usize,
    pub best_score: f64,
    pub scores: Vec<f64>,
}

/// Cosine of the angle between `a` and `b`. Zero when either side has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

/// Score `query` against every row of `matrix`; ties go to the lowest index.
pub fn rank(query: &[f64], matrix: &[Vec<f64>]) -> Ranking {
    let scores: Vec<f64> = matrix
        .iter()
        .map(|row| cosine_similarity(query, row))
        .collect();

    let mut best_index = 0;
    let mut best_score = scores.first().copied().unwrap_or(0.0);
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > best_score {
            best_index = i;
            best_score = score;
        }
    }

    debug!(best_index, best_score, candidates = scores.len(), "ranked documents");
    Ranking {
        best_index,
        best_score,
        scores,
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
