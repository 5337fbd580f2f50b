//! TF-IDF vocabulary and weighting
//!
//! Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`, raw counts as TF,
//! every row L2-normalized.

use crate::tokenizer::Tokenizer;
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
}

impl TfidfVectorizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Build vocabulary, IDF and the document-term matrix from scratch.
    pub fn fit<S: AsRef<str>>(&self, documents: &[S]) -> FittedModel {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.tokenizer.tokenize(d.as_ref()))
            .collect();

        // Build vocabulary
        let mut vocab_set = HashSet::new();
        for tokens in &tokenized {
            vocab_set.extend(tokens.iter().cloned());
        }
        let mut vocabulary: Vec<String> = vocab_set.into_iter().collect();
        vocabulary.sort();
        let columns: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        // Compute IDF
        let doc_count = tokenized.len();
        let mut doc_freq = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: HashSet<_> = tokens.iter().collect();
            for token in unique {
                doc_freq[columns[token.as_str()]] += 1;
            }
        }
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| ((doc_count + 1) as f64 / (df + 1) as f64).ln() + 1.0)
            .collect();

        let mut model = FittedModel {
            vocabulary,
            columns,
            idf,
            matrix: Vec::with_capacity(doc_count),
        };

        // Build TF-IDF rows
        for tokens in &tokenized {
            let row = model.weigh(tokens);
            model.matrix.push(row);
        }

        debug!(
            documents = model.n_docs(),
            terms = model.n_terms(),
            "fitted tf-idf model"
        );
        model
    }

    /// Project `text` into the vector space of `model`.
    pub fn transform(&self, model: &FittedModel, text: &str) -> Vec<f64> {
        model.transform(&self.tokenizer, text)
    }
}

/// Vocabulary, IDF and weight matrix frozen at fit time.
#[derive(Debug, Clone)]
pub struct FittedModel {
    vocabulary: Vec<String>,
    columns: HashMap<String, usize>,
    idf: Vec<f64>,
    matrix: Vec<Vec<f64>>,
}

impl FittedModel {
    /// Terms in column order (lexicographic).
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Row `i` is the weight vector of document `i`.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn n_docs(&self) -> usize {
        self.matrix.len()
    }

    pub fn n_terms(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.column_of(term).map(|i| self.idf[i])
    }

    /// Weight vector for `text`. Terms outside the vocabulary are dropped,
    /// so the result may be all zeros.
    pub fn transform(&self, tokenizer: &Tokenizer, text: &str) -> Vec<f64> {
        self.weigh(&tokenizer.tokenize(text))
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut vec = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&idx) = self.columns.get(token) {
                vec[idx] += 1.0;
            }
        }
        for (w, idf) in vec.iter_mut().zip(&self.idf) {
            *w *= idf;
        }
        l2_normalize(&mut vec);
        vec
    }
}

/// Scale `v` to unit Euclidean norm. All-zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
