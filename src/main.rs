use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use donation_tracker::adapters::credentials::CredentialResolver;
use donation_tracker::adapters::sheets::DonationSheet;
use donation_tracker::adapters::web::{configure_routes, AppState};
use donation_tracker::application::DonationAggregator;
use donation_tracker::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_tracing();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(report) => {
            error!("configuration error: {report:?}");
            std::process::exit(1);
        }
    };

    let resolver = CredentialResolver::standard(&config.sheets);
    let sheet = DonationSheet::new(config.sheets.clone());
    let state = web::Data::new(AppState {
        aggregator: DonationAggregator::new(resolver, Box::new(sheet)),
        target_amount: config.campaign.target_amount,
    });

    let (host, port) = (config.server.host.clone(), config.server.port);
    info!(%host, port, document = %config.sheets.document_name, "donation tracker listening");

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure_routes))
        .bind((host.as_str(), port))?
        .run()
        .await
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
