use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "girasol")]
#[command(version)]
#[command(about = "Answer questions over a small corpus with TF-IDF and cosine similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the document that best answers a question
    Ask(AskArgs),

    /// Print the TF-IDF weight matrix of the corpus
    Matrix {
        /// Documents file, one per line (demo corpus if omitted)
        #[arg(short, long)]
        docs: Option<String>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List the suggested questions
    Suggest,

    /// Print version information
    Version,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Question to answer (default suggestion if omitted)
    pub question: Option<String>,

    /// Documents file, one per line (demo corpus if omitted)
    #[arg(short, long)]
    pub docs: Option<String>,

    /// Use suggested question N (see `girasol suggest`)
    #[arg(short, long, conflicts_with = "question")]
    pub suggested: Option<usize>,

    /// Print the answer as JSON
    #[arg(long)]
    pub json: bool,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Low-confidence threshold, overrides the config file
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["girasol", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_ask() {
        let cli = Cli::try_parse_from([
            "girasol",
            "ask",
            "¿Dónde juegan?",
            "--docs",
            "docs.txt",
            "--threshold",
            "0.2",
            "--json",
        ]);
        assert!(cli.is_ok());
        if let Commands::Ask(args) = cli.unwrap().command {
            assert_eq!(args.question.as_deref(), Some("¿Dónde juegan?"));
            assert_eq!(args.docs.as_deref(), Some("docs.txt"));
            assert_eq!(args.threshold, Some(0.2));
            assert!(args.json);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_suggested_conflicts_with_question() {
        let cli = Cli::try_parse_from(["girasol", "ask", "hola", "--suggested", "2"]);
        assert!(cli.is_err());

        let cli = Cli::try_parse_from(["girasol", "ask", "--suggested", "2"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parse_matrix() {
        let cli = Cli::try_parse_from(["girasol", "matrix", "-d", "docs.txt"]);
        assert!(cli.is_ok());
        if let Commands::Matrix { docs, config } = cli.unwrap().command {
            assert_eq!(docs, Some("docs.txt".to_string()));
            assert_eq!(config, None);
        } else {
            panic!("Expected Matrix command");
        }
    }
}
