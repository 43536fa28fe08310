use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::{http::Method, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{graphql, health};
use crate::data_source::FoodBankSource;
use crate::graphql::{build_schema, GraphQLSchema};

#[derive(Clone)]
pub struct AppState {
    pub schema: GraphQLSchema,
    pub source: Arc<dyn FoodBankSource>,
}

/// Router options that come from configuration.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub cors_origin: Option<String>,
    pub playground: bool,
}

pub fn create_app(source: Arc<dyn FoodBankSource>, options: &AppOptions) -> Result<Router> {
    let state = AppState {
        schema: build_schema(),
        source,
    };

    let cors = cors_layer(options.cors_origin.as_deref())?;

    let mut app = Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/graphql",
            get(graphql::graphql_handler).post(graphql::graphql_handler),
        );

    if options.playground {
        app = app.route("/", get(graphql::graphql_playground));
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn cors_layer(cors_origin: Option<&str>) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    Ok(match cors_origin {
        Some(origin) => layer.allow_origin(
            origin
                .parse::<axum::http::HeaderValue>()
                .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
        ),
        None => layer.allow_origin(Any),
    })
}
