//! HTTP routes.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::{ServerError, ServerResult};
use crate::rank::RankCache;
use crate::store::LoginKeyStore;

/// Shared state of the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LoginKeyStore>,
    pub cache: Arc<RankCache>,
    pub login_key_ttl: Duration,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login/header", get(login_header))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct LoginHeaderQuery {
    user_id: Option<String>,
}

/// `GET /login/header?user_id=ID` answers `"{key},{retrievalId}"`.
async fn login_header(
    State(state): State<AppState>,
    Query(query): Query<LoginHeaderQuery>,
) -> ServerResult<String> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(ServerError::MissingUserId)?;
    let key: u32 = rand::random();
    state.store.assign(&user_id, key, state.login_key_ttl)?;
    Ok(format!("{key},{}", state.cache.retrieval_id()))
}
