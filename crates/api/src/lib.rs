//! HTTP API layer with Axum routes and extractors.
//!
//! This crate provides:
//! - REST API routes
//! - The acting-account extractor
//! - Response types

pub mod extractors;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use stridebank_core::account::AccountService;
use stridebank_core::admin::AdminService;
use stridebank_core::loan::LoanService;
use stridebank_core::reward::RewardEngine;
use stridebank_core::store::Store;
use stridebank_core::subscription::SubscriptionService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The backing account and ledger store.
    pub store: Arc<dyn Store>,
    /// Account opening service.
    pub accounts: AccountService,
    /// Activity-to-savings reward engine.
    pub reward: RewardEngine,
    /// Loan application service.
    pub loans: LoanService,
    /// Self-service tier switching.
    pub subscriptions: SubscriptionService,
    /// Administrative terminal service.
    pub admin: AdminService,
}

impl AppState {
    /// Wires every service onto the given store.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, sync_delay: Duration) -> Self {
        Self {
            accounts: AccountService::new(Arc::clone(&store)),
            reward: RewardEngine::new(Arc::clone(&store), sync_delay),
            loans: LoanService::new(Arc::clone(&store)),
            subscriptions: SubscriptionService::new(Arc::clone(&store)),
            admin: AdminService::new(Arc::clone(&store)),
            store,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
