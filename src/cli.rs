use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

pub mod commands;

use commands::{ask, chat, render};

use crate::config::load_config;

#[derive(Parser)]
#[command(name = "finchat")]
#[command(about = "Terminal client for the financial Q&A assistant")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    ///
    /// Values from FINCHAT_* environment variables override the file.
    #[arg(short, long, env = "FINCHAT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the query service, overrides configuration
    ///
    /// Examples:
    ///   http://localhost:8000/
    ///   http://10.0.0.5/
    #[arg(short, long, global = true)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask one question and print the answer
    Ask {
        /// Question text; words are joined with single spaces
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Interactive session reading one question per line
    ///
    /// Type `exit` or `quit`, or send EOF, to leave.
    Chat,
    /// Render a saved response payload without contacting the backend
    Render {
        /// Path to a JSON file holding a query response
        path: PathBuf,

        /// Print the Plotly figure JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Load `.env` into the environment, then parse arguments, so `.env` can
    /// set `FINCHAT_CONFIG` and other env-backed flags.
    pub fn from_env_and_args() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub async fn run(self) -> Result<()> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(backend_url) = self.backend_url {
            config = config.with_backend_url(backend_url);
        }
        debug!("Query URL: {}", config.query_url());

        match self.command {
            Commands::Ask { question } => {
                ask(&config, &question.join(" ")).await?;
            }
            Commands::Chat => {
                chat(&config).await?;
            }
            Commands::Render { path, json } => {
                render(&config, &path, json).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotenv_file_selects_config_path() {
        let dir = std::env::temp_dir();
        let env_file = dir.join(format!("finchat-test-{}.env", std::process::id()));
        let config_path = dir.join("finchat-from-dotenv.toml");
        std::fs::write(&env_file, format!("FINCHAT_CONFIG={}\n", config_path.display())).unwrap();

        dotenvy::from_path(&env_file).unwrap();
        std::fs::remove_file(&env_file).ok();

        let cli = Cli::try_parse_from(["finchat", "chat"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(config_path.as_path()));
        assert!(matches!(cli.command, Commands::Chat));
    }
}
