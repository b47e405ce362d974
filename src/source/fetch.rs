//! Article download

use super::article::extract_article;
use crate::config::Config;
use crate::{Result, VocalizeError};
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Downloads a web page and returns its readable article text
pub trait ArticleFetcher: Send + Sync {
    fn fetch_article(&self, url: &str) -> Result<String>;
}

/// Article fetcher over HTTP(S)
pub struct HttpArticleFetcher {
    client: Client,
}

impl HttpArticleFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent())
    }

    /// Only absolute http and https URLs are accepted
    pub fn parse_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw.trim())?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(VocalizeError::Fetch(format!(
                "unsupported URL scheme '{}'",
                scheme
            ))),
        }
    }
}

impl ArticleFetcher for HttpArticleFetcher {
    fn fetch_article(&self, raw: &str) -> Result<String> {
        let url = Self::parse_url(raw)?;
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let html = response.text()?;
        debug!("Downloaded {} bytes from {}", html.len(), url);

        let text = extract_article(&html).ok_or_else(|| {
            VocalizeError::Extraction(format!("no readable text found at {}", url))
        })?;
        info!("Extracted {} chars of article text", text.chars().count());
        Ok(text)
    }
}
