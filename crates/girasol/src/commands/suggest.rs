use girasol_core::SUGGESTED_QUESTIONS;

pub fn run() -> anyhow::Result<()> {
    println!("Suggested questions");
    println!("===================");
    for (i, q) in SUGGESTED_QUESTIONS.iter().enumerate() {
        println!("  {}. {}", i + 1, q);
    }
    println!("\nUse: girasol ask --suggested N");
    Ok(())
}
