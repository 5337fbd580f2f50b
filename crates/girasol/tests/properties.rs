mod common;

use common::{sample_documents, sample_pipeline};
use girasol_index::{normalize_and_stem, rank, TfidfVectorizer, Tokenizer};
use std::collections::HashSet;

const QUESTIONS: &[&str] = &[
    "¿Dónde juegan el perro y el gato?",
    "¿Qué hacen los niños en el parque?",
    "la la la",
    "xyz123",
];

#[test]
fn test_determinism() {
    let pipeline = sample_pipeline();
    let docs = sample_documents();
    for q in QUESTIONS {
        let a = pipeline.answer(&docs, q).unwrap();
        let b = pipeline.answer(&docs, q).unwrap();
        assert_eq!(a.best_index, b.best_index);
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.table, b.table);
    }
}

#[test]
fn test_vocabulary_completeness() {
    let docs = sample_documents();
    let model = TfidfVectorizer::new(Tokenizer::default()).fit(&docs);

    let stems: HashSet<String> = docs.iter().flat_map(|d| normalize_and_stem(d)).collect();
    let columns: HashSet<&String> = model.vocabulary().iter().collect();
    assert_eq!(columns.len(), model.n_terms());
    assert_eq!(stems.len(), model.n_terms());
    assert!(stems.iter().all(|s| model.column_of(s).is_some()));
}

#[test]
fn test_row_normalization() {
    let mut docs = sample_documents();
    docs.push("¿¿ 42 !!".to_string());
    let model = TfidfVectorizer::new(Tokenizer::default()).fit(&docs);

    let (last, rows) = model.matrix().split_last().unwrap();
    for row in rows {
        let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }
    assert!(last.iter().all(|&w| w == 0.0));
}

#[test]
fn test_score_bounds_and_argmax() {
    let vectorizer = TfidfVectorizer::new(Tokenizer::default());
    let model = vectorizer.fit(&sample_documents());

    for q in QUESTIONS {
        let query = vectorizer.transform(&model, q);
        let ranking = rank(&query, model.matrix());

        assert!(ranking.scores.iter().all(|&s| (0.0..=1.0 + 1e-9).contains(&s)));

        let max = ranking.scores.iter().cloned().fold(f64::MIN, f64::max);
        let first = ranking.scores.iter().position(|&s| s == max).unwrap();
        assert_eq!(ranking.best_index, first);
        assert_eq!(ranking.best_score, max);
    }
}

#[test]
fn test_document_order_preserved() {
    let docs = sample_documents();
    let mut reversed = docs.clone();
    reversed.reverse();

    let vectorizer = TfidfVectorizer::new(Tokenizer::default());
    let forward = vectorizer.fit(&docs);
    let backward = vectorizer.fit(&reversed);

    assert_eq!(forward.vocabulary(), backward.vocabulary());
    let n = docs.len();
    for i in 0..n {
        for (a, b) in forward.matrix()[i].iter().zip(&backward.matrix()[n - 1 - i]) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
