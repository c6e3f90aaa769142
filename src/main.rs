use std::{net::TcpListener, time::Duration};

use anyhow::Context;
use course_extractor::{
    configuration::get_configuration, domain::site_profile::SiteProfile,
    services::PageFetcher, startup::run,
};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;

    let page_fetcher = PageFetcher::new(
        &configuration.extractor.user_agent,
        Duration::from_secs(configuration.extractor.timeout_secs),
    )
    .context("Failed to build HTTP client.")?;
    let site_profile = SiteProfile::dutch(&configuration.extractor.organization)
        .context("Failed to compile site profile patterns.")?;

    log::info!("Listening on {}", address);
    run(listener, page_fetcher, site_profile)?.await?;

    Ok(())
}
