use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emotext-demo")]
#[command(author, version, about = "Detect emotions in text with a pre-trained classifier")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "./emotext.yaml")]
    pub config: PathBuf,

    /// Classifier artifact path (overrides the config file)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI
    Serve {
        #[command(flatten)]
        common: CommonArgs,

        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen address
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Classify a single text and print the result
    Predict {
        #[command(flatten)]
        common: CommonArgs,

        /// Text to classify
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the model's classes and which ones have a glyph
    Inspect {
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Self::Serve { common, .. } | Self::Predict { common, .. } | Self::Inspect { common } => {
                common
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "emotext-demo",
            "serve",
            "--port",
            "9000",
            "--model",
            "other.json",
            "-v",
        ])
        .unwrap();

        match &cli.command {
            Commands::Serve { common, port, address } => {
                assert_eq!(*port, Some(9000));
                assert!(address.is_none());
                assert_eq!(common.model.as_deref(), Some(std::path::Path::new("other.json")));
                assert!(common.verbose);
                assert_eq!(common.config, PathBuf::from("./emotext.yaml"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from(["emotext-demo", "predict", "I am so happy", "--json"]).unwrap();
        match &cli.command {
            Commands::Predict { text, json, .. } => {
                assert_eq!(text, "I am so happy");
                assert!(*json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.command.common().verbose);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
