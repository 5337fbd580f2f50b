use anyhow::bail;
use girasol_core::{Answer, Confidence, Pipeline, SUGGESTED_QUESTIONS};

use super::{load_config, load_documents};
use crate::cli::AskArgs;

pub fn run(args: &AskArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(threshold) = args.threshold {
        config.low_confidence_threshold = threshold;
        config.validate()?;
    }
    let precision = config.display_precision;

    let documents = load_documents(args.docs.as_deref())?;
    let question = resolve_question(args.question.as_deref(), args.suggested)?;

    let answer = Pipeline::new(config).answer(&documents, &question)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print_answer(&answer, precision);
    }
    Ok(())
}

fn resolve_question(question: Option<&str>, suggested: Option<usize>) -> anyhow::Result<String> {
    if let Some(n) = suggested {
        if n == 0 || n > SUGGESTED_QUESTIONS.len() {
            bail!(
                "suggested question must be between 1 and {}",
                SUGGESTED_QUESTIONS.len()
            );
        }
        return Ok(SUGGESTED_QUESTIONS[n - 1].to_string());
    }
    Ok(question.unwrap_or(SUGGESTED_QUESTIONS[0]).to_string())
}

fn print_answer(answer: &Answer, precision: usize) {
    println!("TF-IDF matrix");
    println!("=============");
    print!("{}", answer.table.rounded(precision).render(precision));
    println!();

    println!("Question: {}", answer.question);
    match answer.confidence {
        Confidence::High => println!("Answer: {}", answer.best_document),
        Confidence::Low => println!("Low-confidence answer: {}", answer.best_document),
    }
    println!("Similarity: {:.precision$}", answer.score);
}
