//! TF-IDF retrieval core: tokenization, weighting and cosine ranking

mod similarity;
mod tfidf;
mod tokenizer;

pub use similarity::{cosine_similarity, rank, Ranking};
pub use tfidf::{l2_normalize, FittedModel, TfidfVectorizer};
pub use tokenizer::{normalize_and_stem, Locale, Stem, Tokenizer};
