//! Snapshot acquisition from the publishing server.
//!
//! The server hands out the latest retrieval id through its login header
//! endpoint; the snapshot itself is a gzip body under `download/`. Bodies
//! are fully decompressed in memory before anything touches the cache.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, ensure, Context, Result};
use flate2::read::GzDecoder;
use rand::Rng;
use tracing::{debug, info};

/// Default publishing server.
pub const DEFAULT_SERVER: &str = "http://8.140.162.132/";

const LOGIN_HEADER_PATH: &str = "login/header";
const DOWNLOAD_PATH: &str = "download/";

/// Generates a random account id in the Steam individual-account range.
pub fn generate_steam_user_id<R: Rng>(rng: &mut R) -> u64 {
    let account = u64::from(rng.gen::<u32>() >> 1);
    1 | (1 << 32) | (1 << 52) | (1 << 56) | (account << 1)
}

/// Response of the login header endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginHeader {
    /// Short-lived key issued for this request.
    pub key: String,
    /// Identifier of the latest published snapshot.
    pub retrieval_id: String,
}

/// Parses a `"{key},{retrievalId}"` response body.
pub fn parse_login_header(body: &str) -> Result<LoginHeader> {
    let parts: Vec<&str> = body.trim().split(',').collect();
    let [key, retrieval_id] = parts.as_slice() else {
        bail!("invalid login header response: {body:?}");
    };
    validate_retrieval_id(retrieval_id)?;
    Ok(LoginHeader {
        key: (*key).to_string(),
        retrieval_id: (*retrieval_id).to_string(),
    })
}

/// Accepts only non-empty ASCII alphanumeric ids, since they become file names.
pub fn validate_retrieval_id(id: &str) -> Result<()> {
    ensure!(
        !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric()),
        "invalid retrieval id {id:?}"
    );
    Ok(())
}

/// Decompresses a complete gzip body.
pub fn gunzip(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .context("decompress snapshot body")?;
    Ok(out)
}

/// A snapshot file in the local cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSnapshot {
    pub path: PathBuf,
    /// `false` when the file was already present.
    pub downloaded: bool,
}

/// Blocking client for the publishing server.
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl SnapshotClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("build http client")?;
        Ok(Self { base_url, http })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests a login header and returns the latest retrieval id with it.
    pub fn login_header(&self, user_id: u64) -> Result<LoginHeader> {
        let url = format!("{}{LOGIN_HEADER_PATH}", self.base_url);
        debug!(%url, user_id, "requesting login header");
        let body = self
            .http
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("GET {url}"))?
            .text()
            .context("read login header body")?;
        parse_login_header(&body)
    }

    /// Downloads and decompresses the snapshot for `retrieval_id`.
    pub fn download(&self, retrieval_id: &str) -> Result<Vec<u8>> {
        validate_retrieval_id(retrieval_id)?;
        let url = format!("{}{DOWNLOAD_PATH}{retrieval_id}", self.base_url);
        info!(%url, "downloading snapshot");
        let compressed = self
            .http
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("GET {url}"))?
            .bytes()
            .context("read snapshot body")?;
        let bytes = gunzip(&compressed)?;
        debug!(
            compressed = compressed.len(),
            decompressed = bytes.len(),
            "snapshot decompressed"
        );
        Ok(bytes)
    }

    /// Ensures `{cache_dir}/{retrieval_id}` exists, downloading it if needed.
    pub fn ensure_cached(&self, retrieval_id: &str, cache_dir: &Path) -> Result<CachedSnapshot> {
        validate_retrieval_id(retrieval_id)?;
        let path = cache_dir.join(retrieval_id);
        if path.is_file() {
            info!(path = %path.display(), "snapshot is up to date");
            return Ok(CachedSnapshot {
                path,
                downloaded: false,
            });
        }

        let bytes = self.download(retrieval_id)?;
        fs::create_dir_all(cache_dir)
            .with_context(|| format!("create cache dir {}", cache_dir.display()))?;
        fs::write(&path, &bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(CachedSnapshot {
            path,
            downloaded: true,
        })
    }
}
