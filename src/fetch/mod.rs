use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

pub mod persona;

pub use persona::{Persona, PersonaHeaders};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid header value: {0:?}")]
    InvalidHeader(String),
}

/// Retrieves the body of a page. The extractor only talks to the network
/// through this trait so tests can serve canned pages.
pub trait PageFetcher {
    async fn fetch(&self, url: &str, persona: Persona) -> Result<String, FetchError>;
}

/// `PageFetcher` over reqwest, one GET per call with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    personas: PersonaHeaders,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(personas: PersonaHeaders, timeout: Duration) -> Self {
        HttpFetcher {
            client: Client::new(),
            personas,
            timeout,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        HttpFetcher::new(PersonaHeaders::default(), DEFAULT_TIMEOUT)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, persona: Persona) -> Result<String, FetchError> {
        let headers = self.personas.create_headers(persona)?;

        let response = self
            .client
            .get(url)
            .headers(headers)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}
