use girasol_core::{Pipeline, WeightTable};

use super::{load_config, load_documents};

pub fn run(docs: Option<&str>, config: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let documents = load_documents(docs)?;
    let precision = config.display_precision;

    let model = Pipeline::new(config).fit(&documents)?;
    let table = WeightTable::from_model(&model);

    println!("TF-IDF matrix: {} documents x {} terms", model.n_docs(), model.n_terms());
    println!();
    print!("{}", table.rounded(precision).render(precision));
    Ok(())
}
