pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers::{AppContext, AppState};
pub use api::routes::{create_router, with_normalized_paths, NormalizedRouter};

pub use error::{Result, RosterError};

// Export logic types
pub use logic::{
    decode, DepartmentOperations, EmployeeOperations, RequestShape, RequiredFieldTable,
    Validator, WriteOperation,
};

// Export all model types
pub use model::*;

// Export seed module
pub use seed::*;

// Export store types
pub use store::{DepartmentStore, EmployeeStore, MemoryStore, Store};

use std::sync::Arc;

/// Build the shared state: an in-memory store (seeded when configured) and the validator.
pub fn build_state(config: &crate::config::AppConfig) -> anyhow::Result<AppState<MemoryStore>> {
    let store = MemoryStore::new();
    if config.seed.enabled {
        seed::load_seed_data(&store)?;
    }

    let validator = Validator::new(RequiredFieldTable::from_config(&config.validation));
    Ok(Arc::new(AppContext::new(store, validator)))
}

/// The complete HTTP application for the given state.
pub fn build_app<S: Store + 'static>(state: AppState<S>) -> NormalizedRouter {
    with_normalized_paths(create_router::<S>().with_state(state))
}

/// Serve the application until the listener fails.
pub async fn run_server(config: &crate::config::AppConfig) -> anyhow::Result<()> {
    use axum::{extract::Request, ServiceExt};
    use tokio::net::TcpListener;

    let app = build_app(build_state(config)?);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Roster server listening on http://{}", bind_address);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
