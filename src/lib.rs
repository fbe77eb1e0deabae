pub mod client;
pub mod config;
pub mod controllers;
pub mod database;
pub mod models;
pub mod services;
pub mod sort;
pub mod store;

use std::sync::Arc;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub events: services::EventService,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let db = database::Database::new(&config.database.url, config.database.pool_size).await?;

        db.run_migrations().await?;

        let events = services::EventService::new(store::EventStore::new(db.pool.clone()));

        Ok(Arc::new(Self { db, events, config }))
    }
}
