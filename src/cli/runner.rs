//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::extract::{default_client, Extractor, ExtractorConfig};
use crate::sink::{Destination, StoreSink};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
    session: String,
}

impl Runner {
    /// Create a runner for one session
    pub fn new(cli: Cli, session: impl Into<String>) -> Self {
        Self {
            cli,
            session: session.into(),
        }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run {
                output,
                date,
                respondent,
            } => {
                self.extract(output.as_deref(), date.as_deref(), respondent)
                    .await
            }
            Commands::Check => self.check().await,
        }
    }

    /// Download every page into the chosen sink
    async fn extract(
        &self,
        output: Option<&str>,
        date: Option<&str>,
        respondent: &str,
    ) -> Result<()> {
        let settings = Settings::from_env()?;

        let destination_url = output
            .map(str::to_string)
            .unwrap_or_else(|| settings.default_destination());
        let destination = Destination::parse(&destination_url)?;

        let date = date
            .map(str::to_string)
            .unwrap_or_else(crate::config::yesterday);
        let respondent = (!respondent.is_empty()).then(|| respondent.to_string());

        let config = ExtractorConfig {
            start: Some(date.clone()),
            end: Some(date.clone()),
            respondent,
            ..Default::default()
        };
        let extractor = Extractor::new(default_client(&settings.api_key), config);
        let sink = StoreSink::new(destination, self.session.clone(), crate::config::PAGE_SIZE);

        info!("Starting downloads for {date} into {destination_url}");
        let summary = extractor.run(&sink).await?;
        info!(
            "All results downloaded ({} pages, {} records)",
            summary.pages, summary.total_records
        );
        Ok(())
    }

    /// Probe the endpoint and print the HTTP status
    async fn check(&self) -> Result<()> {
        let settings = Settings::from_env()?;
        let extractor = Extractor::new(
            default_client(&settings.api_key),
            ExtractorConfig::default(),
        );

        let status = extractor.check().await?;
        println!("HTTP {status}");
        Ok(())
    }
}
