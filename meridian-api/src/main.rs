use meridian_api::{app, AppState};
use meridian_offer::OfferService;
use meridian_store::{
    InMemoryCampaignStore, InMemoryCatalogStore, InMemoryDisplayOfferStore, InMemoryProfileStore,
    SeedData,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meridian_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = meridian_store::app_config::Config::load().expect("Failed to load config");
    let seed = SeedData::from_file(&config.seed.data_file).expect("Failed to load seed data");
    tracing::info!(
        campaigns = seed.campaigns.len(),
        products = seed.products.len(),
        profiles = seed.profiles.len(),
        "seeded in-memory stores"
    );

    let offer_service = Arc::new(OfferService::new(
        Arc::new(InMemoryCampaignStore::new(seed.campaigns)),
        Arc::new(InMemoryProfileStore::new(seed.profiles)),
        Arc::new(InMemoryCatalogStore::new(seed.products)),
        Arc::new(InMemoryDisplayOfferStore::new()),
    ));

    let app = app(AppState { offer_service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");
    axum::serve(listener, app).await.expect("Server error");
}
