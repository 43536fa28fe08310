use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::graphql::GraphQLContext;
use crate::server::app::AppState;

pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let request = req
        .into_inner()
        .data(GraphQLContext::new(state.source.clone()));
    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!("GraphQL request completed with {} errors", response.errors.len());
    }
    response.into()
}

pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}
