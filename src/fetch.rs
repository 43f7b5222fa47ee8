//! Remote text retrieval behind a trait so tests can run without a network.
use anyhow::{Context as _, Result};

/// Fetches remote documents as text.
///
/// The production implementation is [`HttpFetcher`]; tests substitute an
/// in-memory fake.
pub trait Fetch {
    /// Fetch the body at `url` as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid text.
    fn get_text(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by `ureq`. Blocking, no retries.
#[derive(Debug, Default)]
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        let mut response = ureq::get(url)
            .call()
            .with_context(|| format!("fetching {url}"))?;
        let body = response
            .body_mut()
            .read_to_string()
            .with_context(|| format!("reading response body from {url}"))?;
        Ok(body)
    }
}

/// Map-backed fake fetcher for unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FakeFetch {
    pub responses: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl FakeFetch {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            responses: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl Fetch for FakeFetch {
    fn get_text(&self, url: &str) -> Result<String> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no response configured for {url}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fake_fetch_returns_configured_body() {
        let fetch = FakeFetch::with(&[("https://example.test/a", "body")]);
        assert_eq!(fetch.get_text("https://example.test/a").unwrap(), "body");
    }

    #[test]
    fn fake_fetch_errors_on_unknown_url() {
        let fetch = FakeFetch::default();
        let err = fetch.get_text("https://example.test/missing").unwrap_err();
        assert!(err.to_string().contains("no response configured"));
    }
}
