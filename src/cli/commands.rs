//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// EIA daily fuel-type data extractor
#[derive(Parser, Debug)]
#[command(name = "eia-extract")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download every page of the dataset for one day
    Run {
        /// Output destination (local directory or s3://bucket/prefix).
        /// Defaults to the configured S3 bucket, else the local data directory
        #[arg(short, long)]
        output: Option<String>,

        /// ISO date to download (defaults to yesterday)
        #[arg(long)]
        date: Option<String>,

        /// Respondent facet filter; an empty string disables the filter
        #[arg(long, default_value = "NY")]
        respondent: String,
    },

    /// Probe the API endpoint and report the HTTP status
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["eia-extract", "run"]);
        match cli.command {
            Commands::Run {
                output,
                date,
                respondent,
            } => {
                assert!(output.is_none());
                assert!(date.is_none());
                assert_eq!(respondent, "NY");
            }
            Commands::Check => panic!("expected run"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::parse_from([
            "eia-extract",
            "run",
            "--output",
            "s3://grid-archive/raw",
            "--date",
            "2025-08-28",
            "--respondent",
            "",
            "--verbose",
        ]);
        match cli.command {
            Commands::Run {
                output,
                date,
                respondent,
            } => {
                assert_eq!(output.as_deref(), Some("s3://grid-archive/raw"));
                assert_eq!(date.as_deref(), Some("2025-08-28"));
                assert_eq!(respondent, "");
            }
            Commands::Check => panic!("expected run"),
        }
        assert!(cli.verbose);
    }
}
