use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use futures_util::StreamExt;
use mews_logging::mews_debug;
use reqwest::header::CONTENT_TYPE;

use crate::{FailureKind, FetchError};

/// Number of listings requested from the remote proxy.
pub const DEFAULT_MAX_RESULTS: u32 = 200;

const SHELTER_ACTION: &str = "shelter.getPets";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 16 * 1024 * 1024,
            // The PHP proxy answers with whatever its host defaults to.
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
                "text/javascript".to_string(),
                "text/plain".to_string(),
                "text/html".to_string(),
            ],
        }
    }
}

/// Where the raw listing payload comes from.
#[async_trait::async_trait]
pub trait CatSource: Send + Sync {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    async fn query(&self) -> Result<Vec<u8>, FetchError>;
}

/// A JSON snapshot on local disk.
#[derive(Debug, Clone)]
pub struct LocalSnapshotSource {
    path: PathBuf,
}

impl LocalSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatSource for LocalSnapshotSource {
    fn describe(&self) -> String {
        format!("snapshot {}", self.path.display())
    }

    async fn query(&self) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(&self.path).await.map_err(|err| {
            FetchError::new(
                FailureKind::Io,
                format!("{}: {err}", self.path.display()),
            )
        })
    }
}

/// The shelter listing proxy, asked for up to `max_results` pets.
#[derive(Debug, Clone)]
pub struct RemoteProxySource {
    base_url: String,
    max_results: u32,
    settings: FetchSettings,
}

impl RemoteProxySource {
    pub fn new(base_url: impl Into<String>, max_results: u32, settings: FetchSettings) -> Self {
        Self {
            base_url: base_url.into(),
            max_results,
            settings,
        }
    }

    /// Full request URL including the listing query.
    pub fn request_url(&self) -> Result<url::Url, FetchError> {
        let count = self.max_results.to_string();
        url::Url::parse_with_params(
            &self.base_url,
            &[
                ("action", SHELTER_ACTION),
                ("count", count.as_str()),
                ("offset", "0"),
            ],
        )
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(
        &self,
        redirect_counter: Arc<AtomicUsize>,
    ) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl CatSource for RemoteProxySource {
    fn describe(&self) -> String {
        format!("proxy {} (count {})", self.base_url, self.max_results)
    }

    async fn query(&self) -> Result<Vec<u8>, FetchError> {
        let url = self.request_url()?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;

        let response = client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        mews_debug!(
            "Fetched {} bytes from {} after {} redirects (content type {:?})",
            bytes.len(),
            url,
            redirect_counter.load(Ordering::Relaxed),
            content_type
        );
        Ok(bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{FetchSettings, RemoteProxySource};

    #[test]
    fn request_url_carries_listing_query() {
        let source = RemoteProxySource::new(
            "http://localhost/jsCats/ngCats/proxy.php",
            200,
            FetchSettings::default(),
        );
        let url = source.request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost/jsCats/ngCats/proxy.php?action=shelter.getPets&count=200&offset=0"
        );
    }

    #[test]
    fn relative_base_url_is_invalid() {
        let source = RemoteProxySource::new("/proxy.php", 10, FetchSettings::default());
        let err = source.request_url().unwrap_err();
        assert_eq!(err.kind, super::FailureKind::InvalidUrl);
    }

    #[test]
    fn content_type_check_ignores_parameters_and_case() {
        let source = RemoteProxySource::new("http://localhost/", 1, FetchSettings::default());
        assert!(source.is_content_type_allowed("Application/JSON; charset=utf-8"));
        assert!(!source.is_content_type_allowed("image/png"));
    }
}
