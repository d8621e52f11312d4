use crate::error::CatalogueError;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

pub const OAUTH_DOCS_URL: &str = "https://www.reddit.com/dev/api/oauth";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads documentation pages with a browser-like User-Agent.
pub struct DocsFetcher {
    client: reqwest::Client,
}

impl DocsFetcher {
    pub fn new(timeout: Duration) -> Result<Self, CatalogueError> {
        let client = client_builder(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` once. Anything but `200 OK` is an error; there is no retry.
    pub async fn fetch(&self, url: &str) -> Result<String, CatalogueError> {
        info!(url, "fetching documentation page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogueError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "fetched documentation page");
        Ok(body)
    }

    // Local test servers must not be routed through a proxy from the environment.
    #[cfg(test)]
    pub(crate) fn without_proxy(timeout: Duration) -> Self {
        Self {
            client: client_builder(timeout).no_proxy().build().unwrap(),
        }
    }
}

fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
}
