//! One-shot pipeline: documents + question -> answer

use crate::config::Config;
use crate::error::QaError;
use crate::types::{Answer, Confidence, WeightTable};
use girasol_index::{rank, FittedModel, TfidfVectorizer, Tokenizer};
use tracing::{info, warn};

/// Split raw multi-line input into trimmed, non-blank documents.
pub fn split_documents(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reject inputs the retrieval core must never see.
pub fn validate(documents: &[String], question: &str) -> Result<(), QaError> {
    if documents.iter().all(|d| d.trim().is_empty()) {
        return Err(QaError::EmptyCorpus);
    }
    if question.trim().is_empty() {
        return Err(QaError::EmptyQuery);
    }
    Ok(())
}

pub struct Pipeline {
    config: Config,
    vectorizer: TfidfVectorizer,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let tokenizer = Tokenizer::new(config.locale).min_token_len(config.min_token_len);
        Self {
            config,
            vectorizer: TfidfVectorizer::new(tokenizer),
        }
    }

    /// Fit the corpus without asking anything, for matrix display.
    pub fn fit(&self, documents: &[String]) -> Result<FittedModel, QaError> {
        if documents.iter().all(|d| d.trim().is_empty()) {
            return Err(QaError::EmptyCorpus);
        }
        Ok(self.vectorizer.fit(documents))
    }

    /// Refit `documents` from scratch and return the best match for `question`.
    pub fn answer(&self, documents: &[String], question: &str) -> Result<Answer, QaError> {
        validate(documents, question)?;
        let question = question.trim();

        let model = self.vectorizer.fit(documents);
        let query = self.vectorizer.transform(&model, question);
        if query.iter().all(|&w| w == 0.0) {
            warn!(question, "question shares no terms with the corpus");
        }

        let ranking = rank(&query, model.matrix());
        let confidence =
            Confidence::from_score(ranking.best_score, self.config.low_confidence_threshold);
        info!(
            best_index = ranking.best_index,
            score = ranking.best_score,
            ?confidence,
            "answered question"
        );

        Ok(Answer {
            question: question.to_string(),
            best_index: ranking.best_index,
            best_document: documents[ranking.best_index].clone(),
            score: ranking.best_score,
            confidence,
            scores: ranking.scores,
            table: WeightTable::from_model(&model),
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
