use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::{DumpError, Result};

/// Where dump payloads come from.
///
/// `Ok(None)` means the source answered with no content; errors are
/// transport failures or non-success statuses.
pub trait Source {
    fn fetch_text(&self, url: &str) -> Result<Option<String>>;

    fn fetch_json(&self, url: &str) -> Result<Option<Value>> {
        match self.fetch_text(url)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}

/// Blocking HTTP source
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("trick-surf-data-dump/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| DumpError::Fetch {
                url: String::new(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl Source for HttpSource {
    fn fetch_text(&self, url: &str) -> Result<Option<String>> {
        let fetch_err = |source| DumpError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;

        debug!(url, status = %response.status(), "fetched");
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        response.text().map(Some).map_err(fetch_err)
    }
}
