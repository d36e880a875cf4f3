use anyhow::Result;
use tman::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if let Some(path) = logger::init(&config.logging)? {
        log::debug!("Logging to {}", path.display());
    }

    log::debug!("Starting UI");
    ui::run_app(config).await?;

    log::info!("Finished successfully.");
    Ok(())
}
