use anyhow::{Context, Result};
use chatfront::{Config, RouteTable, SiteOptions, generate_site};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chatfront=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    config.validate()?;

    let routes = RouteTable::app();
    let report = generate_site(&SiteOptions {
        output: &config.output,
        site_name: &config.name,
        api_base: config.api_base(),
        layout: config.layout,
        notice: config.notice.as_deref(),
        routes: &routes,
    })
    .context("Failed to generate site")?;

    tracing::info!(
        pages = report.pages.len(),
        output = %config.output.display(),
        "Site generated"
    );

    if !config.no_open
        && let Some(entry) = report.entry
    {
        let entry = config.output.join(entry);
        tracing::info!("Opening {}", entry.display());
        if let Err(e) = open::that(&entry) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    Ok(())
}
