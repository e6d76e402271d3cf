//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

/// Companion service for the galaxy leaderboard snapshot.
#[derive(Parser, Debug, Clone)]
#[command(name = "galaxy-server", version)]
#[command(about = "Issues login keys and the latest snapshot retrieval id")]
pub struct ServerConfig {
    /// Listen address
    #[arg(long, default_value = "0.0.0.0:8080", env = "GALAXY_LISTEN")]
    pub listen: SocketAddr,

    /// Lifetime of an issued login key in seconds
    #[arg(
        long,
        default_value_t = 1800,
        env = "GALAXY_LOGIN_KEY_TTL_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub login_key_ttl_secs: u64,

    /// Interval between retrieval id refreshes in seconds
    #[arg(
        long,
        default_value_t = 300,
        env = "GALAXY_RANK_REFRESH_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub rank_refresh_secs: u64,
}

impl ServerConfig {
    pub const fn login_key_ttl(&self) -> Duration {
        Duration::from_secs(self.login_key_ttl_secs)
    }

    pub const fn rank_refresh_period(&self) -> Duration {
        Duration::from_secs(self.rank_refresh_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_service() {
        let config = ServerConfig::try_parse_from(["galaxy-server"]).unwrap();
        assert_eq!(config.listen, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.login_key_ttl(), Duration::from_secs(1800));
        assert_eq!(config.rank_refresh_period(), Duration::from_secs(300));
    }

    #[test]
    fn zero_refresh_period_is_rejected() {
        let result = ServerConfig::try_parse_from(["galaxy-server", "--rank-refresh-secs", "0"]);
        assert!(result.is_err());
    }
}
