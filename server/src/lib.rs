//! Companion service for galaxy leaderboard snapshots.
//!
//! # Endpoints
//!
//! - `GET /login/header?user_id=ID` - Issue a login key and return it with
//!   the latest snapshot retrieval id as `"{key},{retrievalId}"`
//!
//! Login keys are kept in a [`LoginKeyStore`] under `login-{ID}` with a
//! fixed lifetime. The retrieval id lives in a [`RankCache`] refreshed by a
//! [`RankRefresher`] task that the service starts and stops explicitly.

mod config;
mod error;
mod rank;
mod routes;
mod store;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use rank::{format_retrieval_id, refresh_tick, RankCache, RankRefresher, RETRIEVAL_ID_FORMAT};
pub use routes::{router, AppState};
pub use store::{login_key_name, LoginKeyStore, MemoryKeyStore, StoreError, StoreResult};
