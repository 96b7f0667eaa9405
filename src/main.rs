use medalboard::config::{Config, OutputFormat};
use medalboard::error::{MedalError, Result};
use medalboard::logging::init_logger;
use medalboard::presentation::{render_json, render_table};
use medalboard::services::scraping::ScrapingService;
use medalboard::services::standings_service::{PageSource, StandingsService};
use std::process::ExitCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

async fn show(service: &mut StandingsService, config: &Config) -> Result<()> {
    let t = config.translations();

    match service.refresh().await {
        Ok(standings) => {
            let rendered = match config.args.format {
                OutputFormat::Table => render_table(&standings, t, service.last_updated()),
                OutputFormat::Json => {
                    render_json(&standings, config.args.lang, service.last_updated())?
                }
            };
            println!("{rendered}");
            Ok(())
        }
        Err(MedalError::Fetch { status }) => {
            eprintln!("{} {}", t.failed_retrieve, status);
            Err(MedalError::Fetch { status })
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::new()?;
    init_logger(&config.args.log_level);

    let source = match &config.args.input {
        Some(path) => PageSource::File(path.clone()),
        None => PageSource::Url(config.data_url().to_string()),
    };
    let scraping = ScrapingService::new(config.http_client.clone(), &config.selectors)?;
    let mut service = StandingsService::new(scraping, source);

    let Some(every) = config.args.refresh else {
        // The localized failure line has already been printed by `show`.
        return match show(&mut service, &config).await {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(MedalError::Fetch { .. }) => Ok(ExitCode::FAILURE),
            Err(e) => Err(e),
        };
    };

    info!("Refreshing standings every {every}s");
    loop {
        if let Err(e) = show(&mut service, &config).await {
            error!("Refresh failed: {e}");
        }
        sleep(Duration::from_secs(every)).await;
    }
}
