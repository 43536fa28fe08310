use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{DataSourceError, FoodBankSource, Result};
use crate::graphql::types::{FoodBank, NearbyOutlet, Organisation};

pub const DEFAULT_BASE_URL: &str = "https://www.givefood.org.uk/api/1/";
pub const DEFAULT_USER_AGENT: &str = concat!("givefood-graphql/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Give Food public API.
#[derive(Clone, Debug)]
pub struct GiveFoodClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GiveFoodClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with a slash
        let normalised = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalised)
            .map_err(|e| DataSourceError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|source| DataSourceError::Http {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DataSourceError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    fn food_bank_url(&self, slug: &str) -> Result<Url> {
        let mut url = self.endpoint("foodbank/")?;
        url.path_segments_mut()
            .map_err(|_| DataSourceError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(slug)
            .push("");
        Ok(url)
    }

    fn search_url(&self, lat: f64, lng: f64) -> Result<Url> {
        let mut url = self.endpoint("foodbanks/search/")?;
        url.query_pairs_mut()
            .append_pair("lat_lng", &format!("{},{}", lat, lng));
        Ok(url)
    }

    /// GET a JSON document; a 404 is reported as `None`.
    async fn fetch_optional<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        debug!("Fetching {}", url);

        let response = self.http.get(url.clone()).send().await.map_err(|source| {
            warn!("Request to {} failed: {}", url, source);
            DataSourceError::Http {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{} not found", url);
            return Ok(None);
        }
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(DataSourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| DataSourceError::Http {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|source| {
                warn!("Could not decode response from {}: {}", url, source);
                DataSourceError::Decode {
                    url: url.to_string(),
                    source,
                }
            })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let url_text = url.to_string();
        self.fetch_optional(url)
            .await?
            .ok_or(DataSourceError::Status {
                url: url_text,
                status: StatusCode::NOT_FOUND.as_u16(),
            })
    }
}

#[async_trait]
impl FoodBankSource for GiveFoodClient {
    async fn get_all(&self) -> Result<Vec<Organisation>> {
        let url = self.endpoint("foodbanks/")?;
        self.fetch(url).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<FoodBank>> {
        let url = self.food_bank_url(slug)?;
        self.fetch_optional(url).await
    }

    async fn get_by_lat_lng(&self, lat: f64, lng: f64) -> Result<Vec<NearbyOutlet>> {
        let url = self.search_url(lat, lng)?;
        self.fetch(url).await
    }
}
