use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use review_dashboard::cli::commands::{Cli, Commands};
use review_dashboard::cli::render::JsonLineRenderer;
use review_dashboard::client::http::HttpReviewMetricsClient;
use review_dashboard::config::{self, ConfigError, DashboardConfig};
use review_dashboard::dashboard::render_dashboard;
use review_dashboard::errors::Error;
use review_dashboard::models::granularity::Granularity;
use review_dashboard::models::panel::PanelKind;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Cli {
        config,
        base_url,
        command,
    } = Cli::parse();

    match command {
        Commands::Panels => {
            for kind in PanelKind::ALL {
                println!("{:<36} {}", kind.title(), kind.path());
            }
        }
        Commands::Render { freq } => {
            let config = resolve_config(config.as_deref(), base_url)?;
            let freq = match freq {
                Some(code) => code.parse::<Granularity>().map_err(ConfigError::from)?,
                None => config.freq,
            };

            let client = HttpReviewMetricsClient::from_config(&config)?;
            let report = render_dashboard(&client, &JsonLineRenderer, freq).await;

            // Panel failures are diagnostics, not process failures.
            info!(
                rendered = report.rendered(),
                failed = report.outcomes.len() - report.rendered(),
                "render cycle complete"
            );
        }
    }

    Ok(())
}

fn resolve_config(path: Option<&str>, base_url: Option<String>) -> Result<DashboardConfig, Error> {
    let config = match (path, base_url) {
        (Some(path), base_url) => {
            let mut config = config::load_config_path(path)?;
            if let Some(url) = base_url {
                config.base_url = url;
            }
            config
        }
        (None, Some(url)) => DashboardConfig {
            base_url: url,
            freq: Granularity::default(),
        },
        (None, None) => DashboardConfig::from_env()?,
    };
    Ok(config)
}
