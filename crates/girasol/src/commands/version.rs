pub fn run() -> anyhow::Result<()> {
    println!("girasol {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF question answering over small corpora");
    Ok(())
}
